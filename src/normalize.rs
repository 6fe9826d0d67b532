//! Hostname canonicalization and homoglyph folding.

use unicode_normalization::UnicodeNormalization;

const WWW_PREFIX: &str = "www.";

/// Lowercase a hostname and drop a single leading `www.` label.
///
/// Total over all inputs: an empty string maps to an empty string, which the
/// classifier reads as "no domain".
pub fn normalize_hostname(hostname: &str) -> String {
    let lowered = hostname.to_lowercase();
    match lowered.strip_prefix(WWW_PREFIX) {
        Some(rest) => rest.to_string(),
        None => lowered,
    }
}

/// Combining diacritical marks block (U+0300..=U+036F).
#[inline]
fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036f}')
}

/// Reduce a string to its "visually bare" ASCII skeleton.
///
/// NFKD splits decorated letters into base + mark, the marks are dropped, and
/// every remaining non-ASCII code point is discarded. Letters without a
/// compatibility decomposition (most Cyrillic look-alikes) vanish instead of
/// mapping to their Latin twin, so the fold only catches accent-style spoofs.
pub fn fold_homoglyphs(value: &str) -> String {
    value
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .filter(char::is_ascii)
        .collect()
}

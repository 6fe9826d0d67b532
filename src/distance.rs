//! Edit-distance matching of a candidate hostname against trusted domains.

use crate::normalize::fold_homoglyphs;
use crate::trusted_domains::TrustedDomainSet;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Longest DNS name; longer inputs are truncated before comparison.
pub const MAX_COMPARE_CHARS: usize = 253;

/// Distance thresholds for the matcher and scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Distances at or below this flag the candidate as suspicious.
    pub suspicious_distance: usize,
    /// Best-match distances above this are not reported.
    pub max_reported_distance: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            suspicious_distance: 2,
            max_reported_distance: 6,
        }
    }
}

/// Outcome of comparing one candidate against the trusted set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarityResult {
    pub is_suspicious: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl SimilarityResult {
    fn suspicious(distance: usize, domain: &str, reason: String) -> Self {
        Self {
            is_suspicious: true,
            distance: Some(distance),
            matched_domain: Some(domain.to_string()),
            reason: Some(reason),
        }
    }
}

/// Levenshtein distance over Unicode scalar values with unit costs.
///
/// Evaluates the `(|a|+1) x (|b|+1)` recurrence row by row, keeping only the
/// previous row. Inputs are capped at [`MAX_COMPARE_CHARS`].
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().take(MAX_COMPARE_CHARS).collect();
    let b: Vec<char> = b.chars().take(MAX_COMPARE_CHARS).collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // row[j] holds the distance between a[..i] and b[..j].
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1)
                .min(curr[j] + 1)
                .min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Scans a trusted set for the first domain the candidate imitates.
#[derive(Debug, Clone, Copy)]
pub struct DistanceMatcher<'a> {
    trusted: &'a TrustedDomainSet,
    thresholds: Thresholds,
}

impl<'a> DistanceMatcher<'a> {
    pub fn new(trusted: &'a TrustedDomainSet, thresholds: Thresholds) -> Self {
        Self {
            trusted,
            thresholds,
        }
    }

    /// Compare a normalized hostname against the trusted set.
    ///
    /// Domains are visited in declaration order and the scan stops at the
    /// first one within `suspicious_distance`, or the first one whose
    /// homoglyph fold equals the candidate's. Otherwise the closest domain
    /// seen is returned as a non-suspicious best match; ties keep the earlier
    /// domain.
    pub fn find_similarity(&self, candidate: &str) -> SimilarityResult {
        let folded_candidate = fold_homoglyphs(candidate);
        let mut best: Option<(usize, &str)> = None;

        for domain in self.trusted.iter() {
            let distance = levenshtein(candidate, domain);
            trace!(candidate, domain, distance, "Compared against trusted domain");

            if best.is_none_or(|(d, _)| distance < d) {
                best = Some((distance, domain));
            }

            if distance <= self.thresholds.suspicious_distance {
                return SimilarityResult::suspicious(
                    distance,
                    domain,
                    format!("Suspiciously similar to {domain} (distance {distance})."),
                );
            }

            if folded_candidate == fold_homoglyphs(domain) {
                return SimilarityResult::suspicious(
                    distance,
                    domain,
                    format!("Possible homoglyph: looks like {domain}."),
                );
            }
        }

        match best {
            None => SimilarityResult::default(),
            Some((distance, domain)) => SimilarityResult {
                is_suspicious: false,
                distance: (distance <= self.thresholds.max_reported_distance).then_some(distance),
                matched_domain: Some(domain.to_string()),
                reason: None,
            },
        }
    }
}

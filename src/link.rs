//! Link inspection helpers: hostname extraction and the link-scope filter.

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Which links are worth inspecting.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum LinkScope {
    /// Only http(s) links leaving the current page's host
    #[default]
    Links,
    /// Every http(s) link
    AllLinks,
}

impl LinkScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkScope::Links => "links",
            LinkScope::AllLinks => "all-links",
        }
    }
}

impl fmt::Display for LinkScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Schemes that may appear without `//`. Anything else in front of a colon
/// is read as a bare `host:port`.
const OPAQUE_SCHEMES: &[&str] = &[
    "http", "https", "mailto", "tel", "sms", "javascript", "data", "file", "ftp", "about", "blob",
    "urn", "magnet", "news",
];

/// A link reduced to what the scope filter and the analyzer need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    pub scheme: String,
    /// Hostname without a leading `www.`; empty when the link has none
    pub host: String,
}

impl LinkTarget {
    /// Parse a link or bare hostname.
    ///
    /// Inputs with `://` or a known opaque scheme go through URL parsing, so
    /// internationalized hosts come back in punycode. Anything else is taken
    /// as a bare `https` host, keeping non-ASCII spellings as typed and
    /// dropping any userinfo, port, path, query or fragment.
    pub fn parse(href: &str) -> Option<Self> {
        let href = href.trim();
        if href.is_empty() {
            return None;
        }

        if !href.contains("://") {
            let scheme = href.split_once(':').map(|(scheme, _)| scheme.to_ascii_lowercase());
            if !scheme.is_some_and(|s| OPAQUE_SCHEMES.contains(&s.as_str())) {
                return Self::bare(href);
            }
        }

        let url = Url::parse(href).ok()?;
        Some(Self {
            scheme: url.scheme().to_string(),
            host: strip_www(url.host_str().unwrap_or_default()).to_string(),
        })
    }

    fn bare(href: &str) -> Option<Self> {
        let authority = href.split(['/', '?', '#']).next().unwrap_or_default();
        let authority = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
        let host = match authority.rsplit_once(':') {
            Some((host, port)) if port.chars().all(|c| c.is_ascii_digit()) => host,
            _ => authority,
        };
        if host.is_empty() {
            return None;
        }
        Some(Self {
            scheme: "https".to_string(),
            host: strip_www(host).to_string(),
        })
    }

    pub fn is_http(&self) -> bool {
        matches!(self.scheme.as_str(), "http" | "https")
    }

    /// Decide whether this link should be analyzed at all.
    ///
    /// Requires an http(s) scheme. With [`LinkScope::Links`] the link must
    /// also point away from `page_host`.
    pub fn should_inspect(&self, page_host: Option<&str>, scope: LinkScope) -> bool {
        if !self.is_http() {
            return false;
        }
        match scope {
            LinkScope::AllLinks => true,
            LinkScope::Links => page_host
                .is_none_or(|page| !strip_www(page.trim()).eq_ignore_ascii_case(&self.host)),
        }
    }
}

fn strip_www(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}

/// Extract the hostname of a link, without a leading `www.`.
///
/// Anything unparsable or host-less yields an empty string, which analyzes
/// as `unknown`.
pub fn extract_hostname(href: &str) -> String {
    LinkTarget::parse(href).map(|link| link.host).unwrap_or_default()
}

/// Parse `href` and apply [`LinkTarget::should_inspect`]. Unparsable links
/// are never inspected.
pub fn should_inspect(href: &str, page_host: Option<&str>, scope: LinkScope) -> bool {
    LinkTarget::parse(href).is_some_and(|link| link.should_inspect(page_host, scope))
}

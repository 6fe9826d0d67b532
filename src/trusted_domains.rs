//! Trusted domain set used as the reference for impersonation checks.
//!
//! The set is immutable once built and is handed to the analyzer by the
//! caller. Iteration follows declaration order, which decides the reported
//! match when two trusted domains are equally close to a candidate.

use crate::normalize::normalize_hostname;
use std::collections::HashSet;

/// Default trusted domains: widely impersonated consumer sites.
pub const DEFAULT_TRUSTED_DOMAINS: &[&str] = &[
    "google.com",
    "facebook.com",
    "youtube.com",
    "twitter.com",
    "instagram.com",
    "linkedin.com",
    "microsoft.com",
    "apple.com",
    "amazon.com",
    "netflix.com",
    "github.com",
];

/// Ordered, de-duplicated set of normalized trusted domains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrustedDomainSet {
    /// Domains in declaration order
    ordered: Vec<String>,
    /// Membership index
    members: HashSet<String>,
}

impl TrustedDomainSet {
    /// Build a set from any list of domains.
    ///
    /// Each entry is normalized (lowercased, leading `www.` removed). Empty
    /// entries and repeats are dropped; the first occurrence keeps its slot.
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        for domain in domains {
            set.insert(domain.as_ref());
        }
        set
    }

    /// The built-in default set.
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_TRUSTED_DOMAINS)
    }

    /// An empty set. Every non-empty hostname classifies as `warning`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Return a copy with extra domains appended after the existing ones.
    pub fn extended<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for domain in domains {
            self.insert(domain.as_ref());
        }
        self
    }

    fn insert(&mut self, domain: &str) {
        let normalized = normalize_hostname(domain.trim());
        if normalized.is_empty() || self.members.contains(&normalized) {
            return;
        }
        self.members.insert(normalized.clone());
        self.ordered.push(normalized);
    }

    /// Exact membership check against an already-normalized hostname.
    pub fn contains(&self, normalized: &str) -> bool {
        self.members.contains(normalized)
    }

    /// Iterate in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for TrustedDomainSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

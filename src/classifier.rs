//! Risk status derivation from membership and similarity signals.

use crate::distance::SimilarityResult;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const REASON_UNKNOWN: &str = "Could not determine the domain.";
pub const REASON_TRUSTED: &str = "Domain is on the trusted list.";
pub const REASON_UNTRUSTED: &str = "Domain is not on the trusted list. Proceed with caution.";

/// Overall verdict status for a hostname.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskStatus {
    Safe,
    Warning,
    Danger,
    Unknown,
}

impl RiskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskStatus::Safe => "safe",
            RiskStatus::Warning => "warning",
            RiskStatus::Danger => "danger",
            RiskStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for RiskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status plus the human-readable reason shown with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub status: RiskStatus,
    pub reason: String,
}

/// Pick the status by precedence: unknown, safe, danger, warning.
///
/// `is_empty` and `in_whitelist` describe the normalized hostname. A
/// whitelisted domain is safe whatever the matcher reported.
pub fn classify(is_empty: bool, in_whitelist: bool, similarity: &SimilarityResult) -> Classification {
    let (status, reason) = if is_empty {
        (RiskStatus::Unknown, REASON_UNKNOWN.to_string())
    } else if in_whitelist {
        (RiskStatus::Safe, REASON_TRUSTED.to_string())
    } else if similarity.is_suspicious {
        let reason = similarity
            .reason
            .clone()
            .unwrap_or_else(|| REASON_UNTRUSTED.to_string());
        (RiskStatus::Danger, reason)
    } else {
        (RiskStatus::Warning, REASON_UNTRUSTED.to_string())
    };

    Classification { status, reason }
}

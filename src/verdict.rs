//! Verdict assembly: typo score, typo severity and the audit checklist.

use crate::classifier::RiskStatus;
use crate::distance::{SimilarityResult, Thresholds};
use serde::{Deserialize, Serialize};

const MAX_SCORE: u32 = 100;
/// Scores at or above this read as a warning in the typo widget.
const WARNING_SCORE: u32 = 50;

pub const LABEL_WHITELIST: &str = "Whitelist check";
pub const LABEL_THREAT: &str = "Threat analysis";
pub const LABEL_TYPO: &str = "Typosquatting risk";

/// Display severity of a single check line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckSeverity {
    Success,
    Warning,
    Danger,
    Muted,
}

impl CheckSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckSeverity::Success => "success",
            CheckSeverity::Warning => "warning",
            CheckSeverity::Danger => "danger",
            CheckSeverity::Muted => "muted",
        }
    }
}

/// Severity of the typosquatting score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypoSeverity {
    Safe,
    Warning,
    Danger,
}

impl TypoSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypoSeverity::Safe => "safe",
            TypoSeverity::Warning => "warning",
            TypoSeverity::Danger => "danger",
        }
    }
}

/// One display-agnostic audit line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckItem {
    pub label: String,
    pub value: String,
    pub severity: CheckSeverity,
}

impl CheckItem {
    fn new(label: &str, value: impl Into<String>, severity: CheckSeverity) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
            severity,
        }
    }
}

/// Typosquatting summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypoAssessment {
    /// 0-100
    pub score: u32,
    pub severity: TypoSeverity,
    /// Trusted domain the candidate resembles, or empty
    pub matched: String,
}

/// Complete classification of one hostname.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub status: RiskStatus,
    pub reason: String,
    pub domain: String,
    /// Whitelist, threat and typosquatting checks, in that order
    pub checks: Vec<CheckItem>,
    pub typo: TypoAssessment,
}

impl Verdict {
    pub fn is_danger(&self) -> bool {
        self.status == RiskStatus::Danger
    }
}

/// Map a best-match distance to a 0-100 score.
///
/// The distance is clamped to `max_distance`, inverted, and scaled, so a
/// distance of 0 scores 100 and anything at or past the ceiling scores 0.
pub fn compute_typo_score(distance: usize, max_distance: usize) -> u32 {
    if max_distance == 0 {
        return if distance == 0 { MAX_SCORE } else { 0 };
    }
    let clamped = distance.min(max_distance) as f64;
    let normalized = 1.0 - clamped / max_distance as f64;
    (normalized * f64::from(MAX_SCORE)).round().max(0.0) as u32
}

/// Inputs to [`build_verdict`].
#[derive(Debug, Clone, Copy)]
pub struct VerdictInput<'a> {
    pub status: RiskStatus,
    pub reason: &'a str,
    pub domain: &'a str,
    pub in_whitelist: bool,
    pub similarity: &'a SimilarityResult,
}

/// Assemble the final verdict. Whitelisted domains suppress every similarity
/// signal.
pub fn build_verdict(input: VerdictInput<'_>, thresholds: &Thresholds) -> Verdict {
    let whitelisted = input.in_whitelist;
    let suspicious = !whitelisted && input.similarity.is_suspicious;
    let distance = if whitelisted {
        None
    } else {
        input.similarity.distance
    };

    let score = if suspicious {
        MAX_SCORE
    } else {
        distance.map_or(0, |d| {
            compute_typo_score(d, thresholds.max_reported_distance)
        })
    };

    let severity = if suspicious {
        TypoSeverity::Danger
    } else if score >= WARNING_SCORE {
        TypoSeverity::Warning
    } else {
        TypoSeverity::Safe
    };

    let matched = if whitelisted {
        String::new()
    } else {
        input.similarity.matched_domain.clone().unwrap_or_default()
    };

    let checks = vec![
        whitelist_check(whitelisted),
        threat_check(input.status),
        typo_check(whitelisted, suspicious, distance, thresholds),
    ];

    Verdict {
        status: input.status,
        reason: input.reason.to_string(),
        domain: input.domain.to_string(),
        checks,
        typo: TypoAssessment {
            score,
            severity,
            matched,
        },
    }
}

fn whitelist_check(whitelisted: bool) -> CheckItem {
    if whitelisted {
        CheckItem::new(LABEL_WHITELIST, "Trusted", CheckSeverity::Success)
    } else {
        CheckItem::new(LABEL_WHITELIST, "Not found", CheckSeverity::Warning)
    }
}

fn threat_check(status: RiskStatus) -> CheckItem {
    if status == RiskStatus::Danger {
        CheckItem::new(LABEL_THREAT, "Risk detected", CheckSeverity::Danger)
    } else {
        CheckItem::new(LABEL_THREAT, "No threats found", CheckSeverity::Success)
    }
}

fn typo_check(
    whitelisted: bool,
    suspicious: bool,
    distance: Option<usize>,
    thresholds: &Thresholds,
) -> CheckItem {
    let value = if whitelisted {
        "No risk".to_string()
    } else {
        match distance {
            Some(d) => format!("Distance {d}"),
            None => "No matches".to_string(),
        }
    };

    let severity = if suspicious {
        CheckSeverity::Danger
    } else if distance.is_some_and(|d| d <= thresholds.suspicious_distance) {
        CheckSeverity::Warning
    } else {
        CheckSeverity::Muted
    };

    CheckItem::new(LABEL_TYPO, value, severity)
}

//! Configuration type definitions.

use crate::analyzer::DomainAnalyzer;
use crate::distance::Thresholds;
use crate::link::LinkScope;
use crate::trusted_domains::TrustedDomainSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Main configuration structure for linkguard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Trusted domain list.
    pub trusted: TrustedConfig,
    /// Distance thresholds used by the matcher and the typo score.
    pub thresholds: Thresholds,
    /// User preferences consumed by the link filter and the renderer.
    pub preferences: Preferences,
}

impl Config {
    /// Build an analyzer from this configuration.
    pub fn analyzer(&self) -> DomainAnalyzer {
        DomainAnalyzer::new(self.trusted.domain_set(), self.thresholds)
    }
}

/// Trusted domain configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustedConfig {
    /// Start from the built-in trusted list.
    pub use_defaults: bool,
    /// Extra domains, appended after the defaults in the order given.
    pub domains: Vec<String>,
}

impl Default for TrustedConfig {
    fn default() -> Self {
        Self {
            use_defaults: true,
            domains: Vec::new(),
        }
    }
}

impl TrustedConfig {
    pub fn domain_set(&self) -> TrustedDomainSet {
        let base = if self.use_defaults {
            TrustedDomainSet::with_defaults()
        } else {
            TrustedDomainSet::empty()
        };
        base.extended(&self.domains)
    }
}

/// Tooltip density preset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum UiPreset {
    /// Status, domain and reason only
    Minimal,
    /// Adds the checklist and a one-line typo note
    Balanced,
    /// Adds the typo meter
    #[default]
    Full,
}

impl UiPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            UiPreset::Minimal => "minimal",
            UiPreset::Balanced => "balanced",
            UiPreset::Full => "full",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UiPreset::Minimal => "Minimal view",
            UiPreset::Balanced => "Standard view",
            UiPreset::Full => "Full panel",
        }
    }
}

impl fmt::Display for UiPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Persisted user preferences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Link scope filter.
    pub sensitivity: LinkScope,
    /// Presentation density.
    pub ui_preset: UiPreset,
}

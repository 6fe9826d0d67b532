//! linkguard: flags link hostnames that impersonate trusted sites.
//!
//! The core is [`DomainAnalyzer::analyze`], a pure function of a hostname and
//! a caller-supplied [`TrustedDomainSet`] that always returns a [`Verdict`].
//! Everything else in the crate (config, link filtering, reporters, the
//! message protocol and the CLI) sits around it.

pub mod analyzer;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod distance;
pub mod error;
pub mod handlers;
pub mod link;
pub mod normalize;
pub mod protocol;
pub mod reporter;
pub mod trusted_domains;
pub mod verdict;

#[cfg(test)]
pub mod test_utils;

pub use analyzer::DomainAnalyzer;
pub use classifier::RiskStatus;
pub use cli::{Cli, OutputFormat};
pub use config::{Config, ConfigError, Preferences, UiPreset};
pub use distance::{SimilarityResult, Thresholds};
pub use error::{LinkGuardError, Result};
pub use link::LinkScope;
pub use reporter::{Reporter, json::JsonReporter, terminal::TerminalReporter};
pub use trusted_domains::TrustedDomainSet;
pub use verdict::{CheckItem, CheckSeverity, TypoAssessment, TypoSeverity, Verdict};

//! Configuration layer for linkguard.
//!
//! The analyzer itself takes its trusted set and thresholds as plain values;
//! this module is where those values come from when running as a tool.
//!
//! ## Layers
//! - `types`: Configuration type definitions
//! - `loading`: File loading, discovery and saving

mod error;
mod loading;
mod types;

pub use error::ConfigError;
pub use loading::PROJECT_CONFIG_FILES;
pub use types::{Config, Preferences, TrustedConfig, UiPreset};

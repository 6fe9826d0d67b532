//! CLI command handlers.
//!
//! This module contains the handler functions for each CLI mode,
//! separated from main.rs to enable unit testing.

mod analyze;
mod config;
mod stdin;

use std::process::ExitCode;

pub use analyze::{resolve_target, run_analyze_mode};
pub use config::{effective_config, handle_save_preferences, load_config};
pub use stdin::handle_stdin_mode;

/// Result type for handler functions that can be tested.
#[derive(Debug, Clone, PartialEq)]
pub enum HandlerResult {
    Success,
    Error(u8),
}

impl From<HandlerResult> for ExitCode {
    fn from(result: HandlerResult) -> Self {
        match result {
            HandlerResult::Success => ExitCode::SUCCESS,
            HandlerResult::Error(code) => ExitCode::from(code),
        }
    }
}

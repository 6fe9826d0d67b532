//! Configuration and preference handlers.

use super::HandlerResult;
use crate::{Cli, Config, ConfigError};
use std::path::PathBuf;
use tracing::{debug, info};

/// Load the configuration named by `--config`, or discover one from the
/// working directory.
pub fn load_config(cli: &Cli) -> Result<Config, ConfigError> {
    match cli.config {
        Some(ref path) => Config::from_file(path),
        None => {
            let cwd = std::env::current_dir().ok();
            Ok(Config::load(cwd.as_deref()))
        }
    }
}

/// Apply CLI overrides on top of a loaded configuration.
pub fn effective_config(cli: &Cli, mut config: Config) -> Config {
    if cli.no_default_trusted {
        config.trusted.use_defaults = false;
    }
    config.trusted.domains.extend(cli.trusted.iter().cloned());
    if let Some(preset) = cli.ui_preset {
        config.preferences.ui_preset = preset;
    }
    if let Some(scope) = cli.scope {
        config.preferences.sensitivity = scope;
    }
    config
}

fn preferences_path(cli: &Cli) -> Option<PathBuf> {
    if let Some(ref path) = cli.config {
        return Some(path.clone());
    }
    let cwd = std::env::current_dir().ok();
    Config::discover(cwd.as_deref()).or_else(Config::global_config_path)
}

/// Handle --save-preferences: write `--ui`/`--scope` into the config file,
/// keeping everything else in it untouched.
pub fn handle_save_preferences(cli: &Cli) -> HandlerResult {
    let Some(path) = preferences_path(cli) else {
        eprintln!("Error: No location available for the configuration file.");
        return HandlerResult::Error(2);
    };

    let mut config = if path.exists() {
        match Config::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                return HandlerResult::Error(2);
            }
        }
    } else {
        debug!(path = %path.display(), "Creating new config file");
        Config::default()
    };

    if let Some(preset) = cli.ui_preset {
        config.preferences.ui_preset = preset;
    }
    if let Some(scope) = cli.scope {
        config.preferences.sensitivity = scope;
    }

    match config.save_to_file(&path) {
        Ok(()) => {
            info!(path = %path.display(), "Saved preferences");
            eprintln!(
                "Preferences saved to {}: {} ({}), scope {}",
                path.display(),
                config.preferences.ui_preset.label(),
                config.preferences.ui_preset,
                config.preferences.sensitivity
            );
            HandlerResult::Success
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            HandlerResult::Error(2)
        }
    }
}

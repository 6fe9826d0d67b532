//! Configuration loading and saving.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::error::ConfigError;
use super::types::Config;

/// Project-level config file names, in search order.
pub const PROJECT_CONFIG_FILES: &[&str] = &[
    ".linkguard.yaml",
    ".linkguard.yml",
    ".linkguard.json",
    ".linkguard.toml",
];

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

impl Config {
    /// Load configuration from a file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.display().to_string(),
            source: e,
        })?;

        let ext = extension_of(path);
        match ext.as_str() {
            "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseYaml {
                path: path.display().to_string(),
                source: e,
            }),
            "json" => serde_json::from_str(&content).map_err(|e| ConfigError::ParseJson {
                path: path.display().to_string(),
                source: e,
            }),
            "toml" => toml::from_str(&content).map_err(|e| ConfigError::ParseToml {
                path: path.display().to_string(),
                source: e,
            }),
            _ => Err(ConfigError::UnsupportedFormat(
                path.display().to_string(),
                ext,
            )),
        }
    }

    /// Write configuration to a file, picking the format from the extension.
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let serialize_err = |message: String| ConfigError::Serialize {
            path: path.display().to_string(),
            message,
        };

        let ext = extension_of(path);
        let content = match ext.as_str() {
            "yaml" | "yml" => serde_yaml::to_string(self).map_err(|e| serialize_err(e.to_string()))?,
            "json" => {
                serde_json::to_string_pretty(self).map_err(|e| serialize_err(e.to_string()))?
            }
            "toml" => toml::to_string_pretty(self).map_err(|e| serialize_err(e.to_string()))?,
            _ => {
                return Err(ConfigError::UnsupportedFormat(
                    path.display().to_string(),
                    ext,
                ));
            }
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteFile {
                path: path.display().to_string(),
                source: e,
            })?;
        }

        fs::write(path, content).map_err(|e| ConfigError::WriteFile {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Path of the per-user config file.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("linkguard").join("config.yaml"))
    }

    /// Find the config file that [`Config::load`] would read.
    pub fn discover(project_root: Option<&Path>) -> Option<PathBuf> {
        if let Some(root) = project_root {
            for filename in PROJECT_CONFIG_FILES {
                let path = root.join(filename);
                if path.exists() {
                    return Some(path);
                }
            }
        }

        Self::global_config_path().filter(|path| path.exists())
    }

    /// Load configuration from the project directory or global config.
    ///
    /// Search order:
    /// 1. `.linkguard.{yaml,yml,json,toml}` in the project root
    /// 2. `<config dir>/linkguard/config.yaml`
    /// 3. Default configuration
    ///
    /// A file that fails to parse is skipped with a warning.
    pub fn load(project_root: Option<&Path>) -> Self {
        if let Some(root) = project_root {
            for filename in PROJECT_CONFIG_FILES {
                let path = root.join(filename);
                if !path.exists() {
                    continue;
                }
                match Self::from_file(&path) {
                    Ok(config) => {
                        debug!(path = %path.display(), "Loaded project config");
                        return config;
                    }
                    Err(e) => warn!(error = %e, "Ignoring unreadable config"),
                }
            }
        }

        if let Some(global_config) = Self::global_config_path()
            && global_config.exists()
        {
            match Self::from_file(&global_config) {
                Ok(config) => {
                    debug!(path = %global_config.display(), "Loaded global config");
                    return config;
                }
                Err(e) => warn!(error = %e, "Ignoring unreadable config"),
            }
        }

        Self::default()
    }
}

use crate::config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinkGuardError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LinkGuardError>;

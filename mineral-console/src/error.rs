//! Error types for the console host.

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to initialise logging: {0}")]
    Logging(String),
    #[error("Failed to encode session snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

//! Tracing setup for the console.
//!
//! The terminal belongs to the UI, so events go to the configured log file.
//! `RUST_LOG` overrides the configured filter when set.

use crate::config::ConsoleConfig;
use crate::error::ConsoleError;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

pub fn init_logging(config: &ConsoleConfig) -> Result<(), ConsoleError> {
    if let Some(parent) = config.log_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_path)?;

    let filter = build_filter(&config.log_filter)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .map_err(|e| ConsoleError::Logging(e.to_string()))
}

pub fn build_filter(configured: &str) -> Result<EnvFilter, ConsoleError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(configured).map_err(|e| ConsoleError::Logging(e.to_string())),
    }
}

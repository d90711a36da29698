//! Configuration loading for the admin console.
//!
//! All fields are required unless explicitly marked optional. No defaults.

use mineral_nav::{ViewId, ViewKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConsoleConfig {
    pub tick_rate_ms: u64,
    pub log_path: PathBuf,
    pub log_filter: String,
    pub theme: ThemeConfig,
    pub admin: AdminConfig,
    /// View shown right after sign-in. Dashboard when absent.
    #[serde(default)]
    pub start_view: Option<ViewId>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    pub name: String,
}

/// Identity used when the sign-in screen is confirmed.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdminConfig {
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing configuration file path (use --config or MINERAL_CONSOLE_CONFIG)")]
    MissingConfigPath,
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl ConsoleConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path_from_args().or_else(config_path_from_env);
        let path = path.ok_or(ConfigError::MissingConfigPath)?;
        let config = Self::from_path(&path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: ConsoleConfig = toml::from_str(contents)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "tick_rate_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.log_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "log_path",
                reason: "must not be empty".to_string(),
            });
        }
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "log_filter",
                reason: "must not be empty".to_string(),
            });
        }
        if self.theme.name.to_ascii_lowercase() != "synthbrute" {
            return Err(ConfigError::InvalidValue {
                field: "theme.name",
                reason: "only 'synthbrute' is supported".to_string(),
            });
        }
        if self.admin.name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "admin.name",
                reason: "must not be empty".to_string(),
            });
        }
        if !self.admin.email.contains('@') {
            return Err(ConfigError::InvalidValue {
                field: "admin.email",
                reason: "must be an email address".to_string(),
            });
        }
        if self.admin.role.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "admin.role",
                reason: "must not be empty".to_string(),
            });
        }
        if let Some(view) = self.start_view {
            if view.kind() != ViewKind::Simple {
                return Err(ConfigError::InvalidValue {
                    field: "start_view",
                    reason: format!("'{}' needs a selection and cannot open first", view),
                });
            }
        }
        Ok(())
    }
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var("MINERAL_CONSOLE_CONFIG").ok().map(PathBuf::from)
}

fn config_path_from_args() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::pagination::{DEFAULT_LIMIT, DEFAULT_LIMIT_OPTIONS, MAX_WINDOW, MIN_WINDOW};
use crate::query::ArrayStyle;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaginationConfig {
    /// Page size used when the request asks for none or for a disallowed one.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
    /// Page sizes a request may select, in display order.
    #[serde(default = "default_limit_options")]
    pub limit_options: Vec<u32>,
    /// Number of consecutive page links around the current page (3 to 100).
    #[serde(default = "default_window")]
    pub window: u64,
    #[serde(default)]
    pub array_style: ArrayStyle,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            limit_options: default_limit_options(),
            window: default_window(),
            array_style: ArrayStyle::default(),
        }
    }
}

impl PaginationConfig {
    /// Defaults with a caller-supplied allow-list.
    pub fn with_limit_options(limit_options: &[u32]) -> Self {
        Self {
            limit_options: limit_options.to_vec(),
            ..Self::default()
        }
    }

    /// Window width actually used for link generation.
    pub fn effective_window(&self) -> u64 {
        self.window.clamp(MIN_WINDOW, MAX_WINDOW)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_limit == 0 {
            return Err(ConfigError::Invalid(
                "pagination.default_limit must be positive".to_string(),
            ));
        }
        if self.limit_options.contains(&0) {
            return Err(ConfigError::Invalid(
                "pagination.limit_options must not contain 0".to_string(),
            ));
        }
        if self.window > MAX_WINDOW {
            return Err(ConfigError::Invalid(format!(
                "pagination.window must not exceed {MAX_WINDOW}"
            )));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pagination.validate()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

// Default value functions

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

fn default_limit_options() -> Vec<u32> {
    DEFAULT_LIMIT_OPTIONS.to_vec()
}

fn default_window() -> u64 {
    MIN_WINDOW
}

fn default_log_level() -> String {
    "info".to_string()
}

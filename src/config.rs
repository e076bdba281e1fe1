//! driftview configuration
//!
//! JSON file, every key optional:
//!
//! ```json
//! {
//!   "default_per_page": 50,
//!   "max_per_page": 500,
//!   "log_level": "info",
//!   "enforce_fetch_generation": true
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::observability::Severity;
use crate::view::DEFAULT_PER_PAGE;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Page size of a fresh view (default 50)
    #[serde(default = "default_per_page")]
    pub default_per_page: usize,

    /// Largest page size a pagination action may request (default 500)
    #[serde(default = "default_max_per_page")]
    pub max_per_page: usize,

    /// Lowest logged severity: trace, info, warn, error (default info)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Drop fetch results answering a superseded fetch (default true)
    #[serde(default = "default_enforce_fetch_generation")]
    pub enforce_fetch_generation: bool,
}

fn default_per_page() -> usize {
    DEFAULT_PER_PAGE
}
fn default_max_per_page() -> usize {
    500
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_enforce_fetch_generation() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_per_page: default_per_page(),
            max_per_page: default_max_per_page(),
            log_level: default_log_level(),
            enforce_fetch_generation: default_enforce_fetch_generation(),
        }
    }
}

impl Config {
    /// Load and validate configuration from a file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json(content: &str) -> ConfigResult<Self> {
        let config: Config = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate value ranges
    pub fn validate(&self) -> ConfigResult<()> {
        if self.default_per_page == 0 {
            return Err(ConfigError::Invalid("default_per_page must be > 0".into()));
        }

        if self.max_per_page < self.default_per_page {
            return Err(ConfigError::Invalid(format!(
                "max_per_page ({}) must be >= default_per_page ({})",
                self.max_per_page, self.default_per_page
            )));
        }

        self.severity()?;
        Ok(())
    }

    /// Configured log threshold
    pub fn severity(&self) -> ConfigResult<Severity> {
        Severity::parse(&self.log_level).ok_or_else(|| {
            ConfigError::Invalid(format!(
                "Invalid log_level: '{}'. Must be trace, info, warn or error.",
                self.log_level
            ))
        })
    }
}

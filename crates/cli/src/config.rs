//! Shell configuration via `flashdb.toml`
//!
//! The file is optional. When `--config` is not given and no `flashdb.toml`
//! exists in the working directory, defaults apply. Command-line flags
//! override file values.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::level_filters::LevelFilter;

use crate::format::OutputMode;

/// Config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "flashdb.toml";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Shell configuration loaded from `flashdb.toml`.
///
/// # Example
///
/// ```toml
/// output = "human"
/// log_level = "warn"
/// initial_capacity = 0
/// # seed = "records.json"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlashConfig {
    /// Output mode: `"human"`, `"json"` or `"raw"`.
    #[serde(default = "default_output")]
    pub output: String,
    /// Tracing level used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Capacity the record map is created with.
    #[serde(default)]
    pub initial_capacity: usize,
    /// JSON file of `id -> record` pairs loaded at startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<PathBuf>,
}

fn default_output() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for FlashConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            log_level: default_log_level(),
            initial_capacity: 0,
            seed: None,
        }
    }
}

impl FlashConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `./flashdb.toml` is used if
    /// present, otherwise defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(CONFIG_FILE_NAME);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Read, parse and validate config from a file path.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        // Relative seed paths are relative to the config file
        let config = match (config.seed.clone(), path.parent()) {
            (Some(seed), Some(dir)) if seed.is_relative() => Self {
                seed: Some(dir.join(seed)),
                ..config
            },
            _ => config,
        };
        Ok(config)
    }

    /// Parse and validate config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: FlashConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check the string-typed settings eagerly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.output_mode()?;
        self.level_filter()?;
        Ok(())
    }

    /// Parse the output string into an `OutputMode`.
    pub fn output_mode(&self) -> Result<OutputMode, ConfigError> {
        self.output.parse().map_err(ConfigError::Invalid)
    }

    /// Parse the log level string into a `LevelFilter`.
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level.parse().map_err(|_| {
            ConfigError::Invalid(format!(
                "unknown log level '{}', expected off, error, warn, info, debug or trace",
                self.log_level
            ))
        })
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# FlashDB shell configuration
#
# Output mode: "human" (default), "json" or "raw"
output = "human"

# Log level when RUST_LOG is unset: off, error, warn (default), info, debug, trace
log_level = "warn"

# Initial capacity of the record map (default: 0)
initial_capacity = 0

# JSON object of id -> record pairs to preload, relative to this file
# seed = "records.json"
"#
    }
}

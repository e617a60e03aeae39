//! # Configuration Management for sqlscribe
//!
//! This crate provides the configuration structures for statement building:
//! parameter naming, statement logging and inline literal formatting.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::{AppConfig, BuilderConfig, LiteralConfig};
//!
//! let config = AppConfig {
//!     builder: BuilderConfig::new("@".to_string(), true),
//!     literal: LiteralConfig::new("%Y-%m-%dT%H:%M:%S".to_string(), 126),
//! };
//! assert_eq!(config.builder.parameter_prefix, "@");
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [builder]
//! parameter_prefix = "@"
//! log_statements = false
//!
//! [literal]
//! datetime_format = "%d/%m/%Y %H:%M:%S"
//! datetime_style = 103
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::AppConfig;
//!
//! // Load from SQLSCRIBE_CONFIG, ./sqlscribe.toml, or defaults
//! let config = AppConfig::load()?;
//!
//! // Or load from custom path
//! let config = AppConfig::from_file("config/production.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./sqlscribe.toml";
const CONFIG_PATH_VAR: &str = "SQLSCRIBE_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Environment variable error: {0}")]
    Env(#[from] env::VarError),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub builder: BuilderConfig,
    #[serde(default)]
    pub literal: LiteralConfig,
}

/// Statement builder configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Tag placed in front of parameter names, stripped again on export
    pub parameter_prefix: String,
    /// Log every rendered statement at debug level
    pub log_statements: bool,
}

/// Inline literal configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiteralConfig {
    /// chrono format string for timestamp literals
    pub datetime_format: String,
    /// Style code passed to CONVERT for timestamp literals
    pub datetime_style: u16,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self::new("@".to_string(), false)
    }
}

impl Default for LiteralConfig {
    fn default() -> Self {
        Self::new("%d/%m/%Y %H:%M:%S".to_string(), 103)
    }
}

impl AppConfig {
    /// Load configuration from the TOML file named in the environment (or `.env`),
    /// then `./sqlscribe.toml`, falling back to defaults when neither exists
    pub fn load() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(err) if err.not_found() => {}
            Err(err) => return Err(err.into()),
        }

        let config = if let Some(config_path) = config_path_from(env::var(CONFIG_PATH_VAR))? {
            Self::from_file(&config_path)?
        } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::from_file(DEFAULT_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.builder.parameter_prefix.is_empty() {
            return Err(ConfigError::Invalid(
                "Builder parameter_prefix cannot be empty".to_string(),
            ));
        }
        if self.builder.parameter_prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::Invalid(
                "Builder parameter_prefix cannot contain whitespace".to_string(),
            ));
        }
        if self.literal.datetime_format.is_empty() {
            return Err(ConfigError::Invalid(
                "Literal datetime_format cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl BuilderConfig {
    /// Create a new builder configuration
    pub fn new(parameter_prefix: String, log_statements: bool) -> Self {
        Self {
            parameter_prefix,
            log_statements,
        }
    }
}

impl LiteralConfig {
    /// Create a new literal configuration
    pub fn new(datetime_format: String, datetime_style: u16) -> Self {
        Self {
            datetime_format,
            datetime_style,
        }
    }
}

/// An unset path variable falls through to the default file. A value that is
/// not valid unicode is an error rather than silently ignored.
fn config_path_from(var: Result<String, env::VarError>) -> Result<Option<String>, ConfigError> {
    match var {
        Ok(path) => Ok(Some(path)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

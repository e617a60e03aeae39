//! Core SqlScribe functionality
//!
//! This module contains the main SqlScribe struct, which turns loaded
//! configuration into builder settings and hands out configured builders.

use serde_json::Value;
use statement_builder::{combined_query, BuilderSettings, StatementBuilder};
use type_mapping::LiteralFormatter;

use crate::errors::SqlScribeError;
use config::AppConfig;

/// Main SqlScribe coordinator that shares one configuration across builders
#[derive(Debug, Clone)]
pub struct SqlScribe {
    config: AppConfig,
    settings: BuilderSettings,
}

impl SqlScribe {
    /// Create a coordinator from validated configuration
    pub fn new(config: AppConfig) -> Result<Self, SqlScribeError> {
        config.validate()?;

        let settings = BuilderSettings::default()
            .with_parameter_prefix(config.builder.parameter_prefix.clone())
            .with_log_statements(config.builder.log_statements)
            .with_literals(LiteralFormatter::new(
                config.literal.datetime_format.clone(),
                config.literal.datetime_style,
            ));

        debug_log!(
            "[SQLSCRIBE] Prefix: {}, log statements: {}",
            settings.parameter_prefix,
            settings.log_statements
        );

        Ok(Self { config, settings })
    }

    /// Create a coordinator from `.env`, `SQLSCRIBE_CONFIG` or `./sqlscribe.toml`
    pub fn from_env() -> Result<Self, SqlScribeError> {
        Self::new(AppConfig::load()?)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn settings(&self) -> &BuilderSettings {
        &self.settings
    }

    /// New empty builder carrying the configured settings
    pub fn builder(&self) -> StatementBuilder {
        StatementBuilder::with_settings(self.settings.clone())
    }

    /// Render several builders into one batch separated by `; `
    pub fn combined_query(&self, builders: &[&StatementBuilder]) -> String {
        trace_log!("[SQLSCRIBE] Combining {} statements", builders.len());
        combined_query(builders)
    }

    /// Inline text for a dynamic value using the configured literal format
    pub fn format_value(&self, value: &Value) -> Result<String, SqlScribeError> {
        Ok(self.settings.literals.format_value(value)?)
    }
}

impl Default for SqlScribe {
    fn default() -> Self {
        let config = AppConfig::default();
        let settings = BuilderSettings::default();
        Self { config, settings }
    }
}

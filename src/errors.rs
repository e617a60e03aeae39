//! Error types for the SqlScribe crate
//!
//! This module contains all error types that can be returned by SqlScribe operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SqlScribeError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Literal error: {0}")]
    Literal(#[from] type_mapping::LiteralError),

    #[error("Builder error: {0}")]
    Builder(#[from] statement_builder::BuilderError),
}

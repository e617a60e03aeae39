//! Convenience re-exports for common SqlScribe usage
//!
//! This prelude module re-exports the most commonly used items from the SqlScribe crates,
//! making it easier to import everything you need with a single use statement.
//!
//! # Example
//!
//! ```rust
//! use sqlscribe::prelude::*;
//!
//! let sql = StatementBuilder::new().add_column("C.Name").from("Cat C").render();
//! assert_eq!(sql, "SELECT C.Name FROM Cat C ");
//! ```

// Core SqlScribe components
pub use crate::core::SqlScribe;
pub use crate::errors::SqlScribeError;

// Re-export centralized config
pub use config::{AppConfig, BuilderConfig, ConfigError, LiteralConfig};

// Statement building
pub use statement_builder::prelude::*;

// Literal formatting
pub use type_mapping::{LiteralError, LiteralFormatter};

// Common external dependencies
pub use serde::{Deserialize, Serialize};
pub use uuid::Uuid;

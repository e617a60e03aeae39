//! # SqlScribe
//!
//! Assembles SQL statement text and bound parameters from chainable clause calls:
//! columns, sources, joins, nested filter trees, grouping, ordering, unions and
//! INSERT / UPDATE / DELETE targets, plus a sibling "total" statement for paging counts.
//!
//! ## Quick Start
//!
//! ```rust
//! use sqlscribe::prelude::*;
//!
//! let scribe = SqlScribe::default();
//!
//! let cats = scribe
//!     .builder()
//!     .add_field_column("C", "Name", "", false)
//!     .add_total_column("COUNT(C.ID)")
//!     .from_table("Cat", "C")
//!     .where_param("C.Owner", "@Owner", "Jon", Comparison::Equal, Combinator::And)
//!     .order_by_field("C", "Name", false)
//!     .offset_fetch(0, Some(20));
//!
//! let statement = cats.build();
//! assert!(statement.sql.starts_with("SELECT C.Name FROM Cat C"));
//! assert_eq!(cats.parameters_map().len(), 1);
//!
//! let total = cats.render_total();
//! assert!(total.starts_with("SELECT COUNT(C.ID) FROM Cat C"));
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod errors;
pub mod prelude;

// Re-export the main public types for convenience
pub use core::SqlScribe;
pub use errors::SqlScribeError;

// Re-export centralized config
pub use config::{AppConfig, BuilderConfig, LiteralConfig};

// Re-export member crates
pub use config;
pub use statement_builder;
pub use type_mapping;

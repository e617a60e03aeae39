//! Convenience re-exports for common statement-builder usage

// Builder and rendering
pub use crate::query_builder::{combined_query, BuilderSettings, Statement, StatementBuilder, StatementKind};

// Clause building blocks
pub use crate::query_builder::format;
pub use crate::query_builder::{FilterTree, JoinClause};

// Error types
pub use crate::errors::BuilderError;

// Keywords and literals from type-mapping
pub use type_mapping::{Combinator, Comparison, Function, JoinKind, SqlKeyword, SqlLiteral, UnionKind};

// Common external dependencies that are frequently used
pub use serde_json::{json, Value};

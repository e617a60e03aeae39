//! Unified mapping between Rust values and inline SQL text
//! This crate provides the keyword tables and literal formatting used across the sqlscribe ecosystem

pub mod errors;
pub mod keywords;
pub mod serialize;
pub mod sql;
pub mod types;

pub use errors::LiteralError;
pub use keywords::{title_case_fallback, Combinator, Comparison, Function, JoinKind, SqlKeyword, UnionKind};
pub use serialize::serialize_to_parameters;
pub use sql::{escape_char, escape_text, format_value, format_values, LiteralFormatter};
pub use types::SqlLiteral;

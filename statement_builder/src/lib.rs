//! Statement Builder - statement assembly engine for SqlScribe
//!
//! This crate accumulates SQL clauses through chainable calls and renders them
//! into statement text plus a parallel parameter list.

pub mod errors;
pub mod prelude;
pub mod query_builder;

pub use errors::BuilderError;
pub use query_builder::{
    combined_query, BuilderSettings, FilterTree, JoinClause, Statement, StatementBuilder, StatementKind,
};

//! Statement assembly
//!
//! Clause model, filter trees, joins and the renderers that turn an
//! accumulated [`StatementBuilder`] into statement text.

pub mod builder;
pub mod filter;
pub mod filtering;
pub mod format;
pub mod grouping;
pub mod join;
pub mod ordering;
pub mod pagination;
pub mod parameters;
pub mod settings;
pub mod sql_generation;
pub mod statement_kind;
pub mod update;

#[cfg(test)]
mod tests;


pub use builder::{StatementBuilder, UnionEntry};
pub use filter::{render_filters, FilterTree};
pub use grouping::HavingEntry;
pub use join::JoinClause;
pub use ordering::OrderBy;
pub use pagination::OffsetFetch;
pub use settings::BuilderSettings;
pub use sql_generation::{combined_query, SqlGenerator, Statement};
pub use statement_kind::StatementKind;
pub use update::{DeleteTarget, InsertTarget, UpdateAssignment, UpdateTarget};

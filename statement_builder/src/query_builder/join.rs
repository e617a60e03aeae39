use crate::query_builder::filter::{render_filters, FilterTree};
use crate::query_builder::format;
use type_mapping::{Combinator, Comparison, JoinKind, SqlKeyword};

/// Represents a complete JOIN clause
#[derive(Debug, Clone, PartialEq)]
pub struct JoinClause {
    /// Type of join (INNER, LEFT, etc.)
    pub(crate) kind: JoinKind,
    /// Table being joined, already formatted as `table alias`
    pub(crate) target_table: String,
    /// ON conditions
    pub(crate) on_filters: Vec<FilterTree>,
    /// Join text used verbatim instead of the fields above
    pub(crate) override_text: Option<String>,
}

impl JoinClause {
    /// Create a JOIN with a list of ON filters
    pub fn new(kind: JoinKind, target_table: impl Into<String>, on_filters: Vec<FilterTree>) -> Self {
        Self {
            kind,
            target_table: target_table.into(),
            on_filters,
            override_text: None,
        }
    }

    /// Create a JOIN with a single ON filter
    pub fn on(kind: JoinKind, target_table: impl Into<String>, filter: FilterTree) -> Self {
        Self::new(kind, target_table, vec![filter])
    }

    /// Create a JOIN comparing a field of the joined table to a field of a related table,
    /// e.g. `INNER JOIN Dog D ON D.CatID = C.ID`
    pub fn between_tables(
        kind: JoinKind,
        table: &str,
        table_alias: &str,
        join_field: &str,
        related_alias: &str,
        related_field: &str,
        comparison: Comparison,
    ) -> Self {
        let condition = format::filter_format(
            &format::field_format(table_alias, join_field, ""),
            &format::field_format(related_alias, related_field, ""),
            comparison,
            false,
        );

        Self::on(
            kind,
            format::table_format(table, table_alias),
            FilterTree::predicate(condition, Combinator::And),
        )
    }

    /// Join written out in full by the caller
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            kind: JoinKind::Inner,
            target_table: String::new(),
            on_filters: Vec::new(),
            override_text: Some(text.into()),
        }
    }

    /// Add another ON filter
    pub fn with_filter(mut self, filter: FilterTree) -> Self {
        self.on_filters.push(filter);
        self
    }

    pub fn kind(&self) -> JoinKind {
        self.kind
    }

    pub fn target_table(&self) -> &str {
        &self.target_table
    }

    pub fn is_override(&self) -> bool {
        self.override_text.is_some()
    }

    /// Render the ON condition list
    pub fn render_on(&self) -> String {
        render_filters(&self.on_filters, true)
    }

    /// Render the join. An override is returned verbatim.
    pub fn render(&self) -> String {
        match &self.override_text {
            Some(text) => text.clone(),
            None => format!("{} {} ON {}", self.kind.keyword(), self.target_table, self.render_on()),
        }
    }
}

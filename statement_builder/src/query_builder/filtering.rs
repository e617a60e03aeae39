//! WHERE, pagination and HAVING accumulation

use crate::errors::BuilderError;
use crate::query_builder::builder::StatementBuilder;
use crate::query_builder::filter::FilterTree;
use crate::query_builder::format;
use crate::query_builder::grouping::HavingEntry;
use serde_json::Value;
use type_mapping::{Combinator, Comparison, SqlLiteral};

impl StatementBuilder {
    /// Add a WHERE filter node. Empty nodes are ignored.
    pub fn where_filter(mut self, filter: FilterTree) -> Self {
        if !filter.is_empty() {
            self.filters.push(filter);
        }
        self
    }

    /// Add a literal WHERE predicate
    pub fn where_text(self, predicate: &str, combinator: Combinator) -> Self {
        self.where_filter(FilterTree::predicate(predicate, combinator))
    }

    /// Add `alias_field OP condition`
    pub fn where_compare(
        self,
        alias_field: &str,
        condition: &str,
        comparison: Comparison,
        combinator: Combinator,
        quoted: bool,
    ) -> Self {
        self.where_text(
            &format::filter_format(alias_field, condition, comparison, quoted),
            combinator,
        )
    }

    /// Add `alias.field OP condition`
    pub fn where_field(
        self,
        alias: &str,
        field: &str,
        condition: &str,
        comparison: Comparison,
        combinator: Combinator,
        quoted: bool,
    ) -> Self {
        self.where_filter(FilterTree::compare(alias, field, condition, comparison, combinator, quoted))
    }

    /// Add `alias_field OP <literal>` with the literal formatted inline
    pub fn where_literal(
        self,
        alias_field: &str,
        literal: impl Into<SqlLiteral>,
        comparison: Comparison,
        combinator: Combinator,
    ) -> Self {
        let condition = self.settings.literals.format(&literal.into());
        self.where_compare(alias_field, &condition, comparison, combinator, false)
    }

    /// Add `alias_field OP <value>` for a dynamic value. Arrays and objects
    /// cannot be written inline and fail with `UnsupportedType`.
    pub fn where_value(
        self,
        alias_field: &str,
        value: &Value,
        comparison: Comparison,
        combinator: Combinator,
    ) -> Result<Self, BuilderError> {
        let condition = self.settings.literals.format_value(value)?;
        Ok(self.where_compare(alias_field, &condition, comparison, combinator, false))
    }

    /// Add `alias_field OP @name` and record the parameter value
    pub fn where_param(
        self,
        alias_field: &str,
        name: &str,
        value: impl Into<Value>,
        comparison: Comparison,
        combinator: Combinator,
    ) -> Self {
        if alias_field.is_empty() || name.is_empty() {
            return self;
        }
        self.add_parameter(name, value)
            .where_compare(alias_field, name, comparison, combinator, false)
    }

    /// Add `alias.field [NOT] IN (...)` over individual items
    pub fn where_in(
        self,
        alias: &str,
        field: &str,
        items: &[&str],
        not_in: bool,
        combinator: Combinator,
        quoted: bool,
    ) -> Self {
        if items.is_empty() {
            return self;
        }
        self.where_text(
            &format::filter_in_list_format(alias, field, items, not_in, quoted),
            combinator,
        )
    }

    /// Add `alias.field [NOT] IN (list)` with a pre-joined list
    pub fn where_in_list(self, alias: &str, field: &str, list: &str, not_in: bool, combinator: Combinator) -> Self {
        if list.is_empty() {
            return self;
        }
        self.where_text(&format::filter_in_format(alias, field, list, not_in), combinator)
    }

    /// Add `alias.field [NOT] IN (subquery)`
    pub fn where_in_query(
        self,
        alias: &str,
        field: &str,
        subquery: &StatementBuilder,
        not_in: bool,
        combinator: Combinator,
    ) -> Self {
        self.where_in_list(alias, field, &subquery.render(), not_in, combinator)
    }

    /// Add a BETWEEN-style range filter on `alias.field`
    #[allow(clippy::too_many_arguments)]
    pub fn where_between(
        self,
        alias: &str,
        field: &str,
        lower: &str,
        upper: &str,
        not_between: bool,
        combinator: Combinator,
        quoted: bool,
    ) -> Self {
        self.where_text(
            &format::filter_between_format(
                &format::field_format(alias, field, ""),
                lower,
                upper,
                not_between,
                quoted,
            ),
            combinator,
        )
    }

    /// Add `alias.field IS [NOT] NULL`
    pub fn where_null(self, alias: &str, field: &str, not_null: bool, combinator: Combinator) -> Self {
        self.where_text(&format::filter_is_null_format(alias, field, not_null), combinator)
    }

    /// Add `EXISTS(query)`
    pub fn where_exists(self, query: &str, combinator: Combinator) -> Self {
        if query.is_empty() {
            return self;
        }
        self.where_text(&format!("EXISTS({})", query), combinator)
    }

    pub fn where_exists_query(self, subquery: &StatementBuilder, combinator: Combinator) -> Self {
        self.where_exists(&subquery.render(), combinator)
    }

    /// Add a parenthesised group, e.g. `OR (C.Name = 'Fluffy' AND C.Nice = 1)`
    pub fn where_group(self, filters: Vec<FilterTree>, combinator: Combinator) -> Self {
        if filters.is_empty() {
            return self;
        }
        self.where_filter(FilterTree::group(filters, combinator))
    }

    /// Add a filter used by the main statement only, never by the total statement
    pub fn where_pagination(mut self, predicate: &str, combinator: Combinator) -> Self {
        if !predicate.is_empty() {
            self.pagination_filters.push(FilterTree::predicate(predicate, combinator));
        }
        self
    }

    /// Drop every WHERE filter so the builder can be reused for a batch
    pub fn clear_filters(mut self) -> Self {
        self.filters.clear();
        self
    }

    /// Add a literal HAVING predicate
    pub fn having(mut self, predicate: &str, combinator: Combinator) -> Self {
        if !predicate.is_empty() {
            self.havings.push(HavingEntry::new(predicate, combinator));
        }
        self
    }

    pub fn having_compare(
        self,
        alias_field: &str,
        condition: &str,
        comparison: Comparison,
        combinator: Combinator,
        quoted: bool,
    ) -> Self {
        self.having(
            &format::filter_format(alias_field, condition, comparison, quoted),
            combinator,
        )
    }

    pub fn having_between(
        self,
        alias_field: &str,
        lower: &str,
        upper: &str,
        not_between: bool,
        combinator: Combinator,
        quoted: bool,
    ) -> Self {
        self.having(
            &format::filter_between_format(alias_field, lower, upper, not_between, quoted),
            combinator,
        )
    }
}

//! Statement builder
//!
//! Accumulates every clause of a statement through chainable calls. Calls with
//! empty required input are accepted and contribute nothing.

use crate::query_builder::filter::FilterTree;
use crate::query_builder::format;
use crate::query_builder::grouping::HavingEntry;
use crate::query_builder::join::JoinClause;
use crate::query_builder::ordering::OrderBy;
use crate::query_builder::pagination::OffsetFetch;
use crate::query_builder::settings::BuilderSettings;
use crate::query_builder::update::{DeleteTarget, InsertTarget, UpdateAssignment, UpdateTarget};
use serde_json::Value;
use type_mapping::{escape_text, Comparison, Function, JoinKind, SqlLiteral, UnionKind};

/// A UNION member, stored as rendered text
#[derive(Debug, Clone, PartialEq)]
pub struct UnionEntry {
    pub text: String,
    pub kind: UnionKind,
}

/// Builder for a single SQL statement and its parameters
///
/// Cloning copies every collection, nested WITH builders included, so the
/// clone and the original can be mutated independently.
#[derive(Debug, Clone, Default)]
pub struct StatementBuilder {
    pub(crate) settings: BuilderSettings,
    pub(crate) start_query: String,
    pub(crate) declarations: Vec<String>,
    pub(crate) withs: Vec<(String, StatementBuilder)>,
    pub(crate) sets: Vec<String>,
    pub(crate) distinct: bool,
    pub(crate) top: u32,
    pub(crate) columns: Vec<String>,
    pub(crate) total_columns: Vec<String>,
    pub(crate) froms: Vec<String>,
    pub(crate) joins: Vec<JoinClause>,
    pub(crate) filters: Vec<FilterTree>,
    pub(crate) pagination_filters: Vec<FilterTree>,
    pub(crate) fors: Vec<String>,
    pub(crate) group_by: Vec<String>,
    pub(crate) total_group_by: Vec<String>,
    pub(crate) havings: Vec<HavingEntry>,
    pub(crate) order_by: Vec<OrderBy>,
    pub(crate) total_order_by: Vec<OrderBy>,
    pub(crate) offset_fetch: Option<OffsetFetch>,
    pub(crate) unions: Vec<UnionEntry>,
    pub(crate) parameters: Vec<(String, Value)>,
    pub(crate) insert: InsertTarget,
    pub(crate) update: UpdateTarget,
    pub(crate) delete: Option<DeleteTarget>,
}

impl StatementBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: BuilderSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> &BuilderSettings {
        &self.settings
    }

    // ========================================
    // Columns
    // ========================================

    /// Add a column expression verbatim
    pub fn add_column(mut self, column: &str) -> Self {
        if !column.is_empty() {
            self.columns.push(column.to_string());
        }
        self
    }

    /// Add `column AS name`
    pub fn add_column_as(self, column: &str, as_name: &str) -> Self {
        if column.is_empty() || as_name.is_empty() {
            return self.add_column(column);
        }
        self.add_column(&format!("{} AS {}", column, as_name))
    }

    /// Add `alias.field [as name]`, optionally grouping by the field too
    pub fn add_field_column(self, alias: &str, field: &str, as_name: &str, add_group_by: bool) -> Self {
        let builder = self.add_column(&format::field_format(alias, field, as_name));
        if add_group_by {
            builder.group_by_field(alias, field)
        } else {
            builder
        }
    }

    /// Add several fields of one table as a single column entry
    pub fn add_columns(self, alias: &str, fields: &[&str], add_group_by: bool) -> Self {
        let formatted = format::fields_format(alias, fields);
        let builder = self.add_column(&formatted);
        if add_group_by {
            builder.group_by(&formatted)
        } else {
            builder
        }
    }

    /// Add `FUNC(args) [AS name]`. Nothing is added without arguments.
    pub fn add_function_column(self, function: Function, as_name: &str, args: &[&str]) -> Self {
        if args.is_empty() {
            return self;
        }
        self.add_column_as(&format::function_format(function, args), as_name)
    }

    /// Add `ISNULL(a.first, '') + ISNULL(' ' + b.last, '') [AS name]`, a first and
    /// last name joined by a space when both are present
    pub fn add_full_name_column(
        self,
        first_alias: &str,
        first_field: &str,
        last_alias: &str,
        last_field: &str,
        as_name: &str,
    ) -> Self {
        if first_field.is_empty() || last_field.is_empty() {
            return self;
        }

        let first = format::is_null_function_format(first_alias, first_field, "''");
        let last = format::function_format(
            Function::IsNull,
            &[&format!("' ' + {}", format::field_format(last_alias, last_field, "")), "''"],
        );
        self.add_column_as(&format!("{} + {}", first, last), as_name)
    }

    /// Add `NULL [AS name]`
    pub fn add_null_column(self, as_name: &str) -> Self {
        self.add_column_as("NULL", as_name)
    }

    /// Add a column to the total statement only
    pub fn add_total_column(mut self, column: &str) -> Self {
        if !column.is_empty() {
            self.total_columns.push(column.to_string());
        }
        self
    }

    pub fn add_total_field_column(self, alias: &str, field: &str, as_name: &str, add_group_by: bool) -> Self {
        let builder = self.add_total_column(&format::field_format(alias, field, as_name));
        if add_group_by {
            builder.total_group_by(&format::field_format(alias, field, ""))
        } else {
            builder
        }
    }

    pub fn add_total_columns(self, alias: &str, fields: &[&str], add_group_by: bool) -> Self {
        let formatted = format::fields_format(alias, fields);
        let builder = self.add_total_column(&formatted);
        if add_group_by {
            builder.total_group_by(&formatted)
        } else {
            builder
        }
    }

    pub fn set_distinct(mut self, distinct: bool) -> Self {
        self.distinct = distinct;
        self
    }

    /// `TOP n`; zero leaves the row limit unset
    pub fn set_top(mut self, top: u32) -> Self {
        self.top = top;
        self
    }

    // ========================================
    // Sources and joins
    // ========================================

    /// Add a FROM source verbatim
    pub fn from(mut self, source: &str) -> Self {
        if !source.is_empty() {
            self.froms.push(source.to_string());
        }
        self
    }

    /// Add `table alias` as a FROM source
    pub fn from_table(self, table: &str, alias: &str) -> Self {
        self.from(&format::table_format(table, alias))
    }

    /// Add `(subquery) alias` as a FROM source
    pub fn from_subquery(self, subquery: &StatementBuilder, alias: &str) -> Self {
        self.from(&format::table_format(&format!("({})", subquery.render()), alias))
    }

    pub fn join(mut self, join: JoinClause) -> Self {
        self.joins.push(join);
        self
    }

    /// Join `table alias ON alias.join_field = related_alias.related_field`,
    /// followed by any extra ON filters
    #[allow(clippy::too_many_arguments)]
    pub fn join_on(
        self,
        kind: JoinKind,
        table: &str,
        alias: &str,
        join_field: &str,
        related_alias: &str,
        related_field: &str,
        comparison: Comparison,
        extra_filters: Vec<FilterTree>,
    ) -> Self {
        if table.is_empty() || join_field.is_empty() || related_field.is_empty() {
            return self;
        }

        let join = extra_filters.into_iter().fold(
            JoinClause::between_tables(kind, table, alias, join_field, related_alias, related_field, comparison),
            JoinClause::with_filter,
        );
        self.join(join)
    }

    /// Join an already formatted `table alias` on a list of filters
    pub fn join_filters(self, kind: JoinKind, table_join: &str, filters: Vec<FilterTree>) -> Self {
        if table_join.is_empty() || filters.is_empty() {
            return self;
        }
        self.join(JoinClause::new(kind, table_join, filters))
    }

    /// Add a join written out in full
    pub fn join_raw(self, text: &str) -> Self {
        if text.is_empty() {
            return self;
        }
        self.join(JoinClause::raw(text))
    }

    // ========================================
    // Grouping, ordering, FOR
    // ========================================

    pub fn group_by(mut self, group_by: &str) -> Self {
        if !group_by.is_empty() {
            self.group_by.push(group_by.to_string());
        }
        self
    }

    pub fn group_by_field(self, alias: &str, field: &str) -> Self {
        self.group_by(&format::field_format(alias, field, ""))
    }

    pub fn total_group_by(mut self, group_by: &str) -> Self {
        if !group_by.is_empty() {
            self.total_group_by.push(group_by.to_string());
        }
        self
    }

    pub fn total_group_by_field(self, alias: &str, field: &str) -> Self {
        self.total_group_by(&format::field_format(alias, field, ""))
    }

    pub fn order_by(mut self, field: &str, descending: bool) -> Self {
        if !field.is_empty() {
            self.order_by.push(OrderBy::new(field, descending));
        }
        self
    }

    pub fn order_by_field(self, alias: &str, field: &str, descending: bool) -> Self {
        self.order_by(&format::field_format(alias, field, ""), descending)
    }

    pub fn total_order_by(mut self, field: &str, descending: bool) -> Self {
        if !field.is_empty() {
            self.total_order_by.push(OrderBy::new(field, descending));
        }
        self
    }

    pub fn total_order_by_field(self, alias: &str, field: &str, descending: bool) -> Self {
        self.total_order_by(&format::field_format(alias, field, ""), descending)
    }

    /// `OFFSET n ROWS [FETCH NEXT m ROWS ONLY]`, written after ORDER BY
    pub fn offset_fetch(mut self, offset: i64, fetch: Option<i64>) -> Self {
        self.offset_fetch = Some(OffsetFetch::new(offset, fetch));
        self
    }

    /// Add a FOR option, e.g. `XML PATH('')`
    pub fn for_clause(mut self, option: &str) -> Self {
        if !option.is_empty() {
            self.fors.push(option.to_string());
        }
        self
    }

    // ========================================
    // Unions, WITH, declarations, prelude
    // ========================================

    /// Add a union member verbatim
    pub fn union(mut self, text: &str, kind: UnionKind) -> Self {
        if !text.is_empty() {
            self.unions.push(UnionEntry {
                text: text.to_string(),
                kind,
            });
        }
        self
    }

    /// Add another builder as a union member, only when it is a valid SELECT
    pub fn union_query(self, other: &StatementBuilder, kind: UnionKind) -> Self {
        if !other.is_valid() {
            return self;
        }
        self.union(&other.render(), kind)
    }

    /// Add `WITH name AS (subquery)`. Reusing a name replaces that entry in place.
    pub fn add_with(mut self, name: &str, subquery: StatementBuilder) -> Self {
        if name.is_empty() {
            return self;
        }

        match self.withs.iter_mut().find(|(existing, _)| existing == name) {
            Some((_, entry)) => *entry = subquery,
            None => self.withs.push((name.to_string(), subquery)),
        }
        self
    }

    /// Add a statement written before the main one, e.g. `DECLARE @Count int`
    pub fn add_declaration(mut self, declaration: &str) -> Self {
        if !declaration.is_empty() {
            self.declarations.push(declaration.to_string());
        }
        self
    }

    /// Add a SET option, e.g. `NOCOUNT ON`
    pub fn add_set(mut self, option: &str) -> Self {
        if !option.is_empty() {
            self.sets.push(option.to_string());
        }
        self
    }

    /// Text placed verbatim at the very start of a SELECT
    pub fn start_query(mut self, text: &str) -> Self {
        self.start_query = text.to_string();
        self
    }

    // ========================================
    // INSERT / UPDATE / DELETE targets
    // ========================================

    pub fn insert_into_table(mut self, table: &str) -> Self {
        if !table.is_empty() {
            self.insert.table = Some(table.to_string());
        }
        self
    }

    /// Add insert columns. With `add_as_value` the columns also become one
    /// VALUES group of tagged parameters, e.g. `(@Name, @Lives)`.
    pub fn insert_into(mut self, columns: &[&str], add_as_value: bool) -> Self {
        let columns: Vec<&str> = columns.iter().copied().filter(|c| !c.is_empty()).collect();
        if columns.is_empty() {
            return self;
        }

        self.insert.columns.extend(columns.iter().map(|c| c.to_string()));

        if add_as_value {
            let prefix = self.settings.parameter_prefix.clone();
            let tagged: Vec<String> = columns.iter().map(|c| format!("{}{}", prefix, c)).collect();
            let tagged: Vec<&str> = tagged.iter().map(String::as_str).collect();
            self = self.insert_values(&tagged);
        }
        self
    }

    /// Add one VALUES group built from the given value expressions
    pub fn insert_values(mut self, values: &[&str]) -> Self {
        if !values.is_empty() {
            self.insert.value_groups.push(values.join(", "));
        }
        self
    }

    /// Add one VALUES group of formatted literals
    pub fn insert_literals(self, values: &[SqlLiteral]) -> Self {
        if values.is_empty() {
            return self;
        }
        let group = self.settings.literals.format_list(values);
        self.insert_values(&[group.as_str()])
    }

    pub fn delete_from_table(mut self, table: &str, alias: &str) -> Self {
        if !table.is_empty() {
            self.delete = Some(DeleteTarget::new(table, alias));
        }
        self
    }

    pub fn update_table(mut self, table: &str) -> Self {
        if !table.is_empty() {
            self.update.table = Some(table.to_string());
        }
        self
    }

    /// UPDATE the table, and INSERT into it when no row was updated
    pub fn update_else_insert_table(self, table: &str) -> Self {
        self.insert_into_table(table).update_table(table)
    }

    /// Add `column = value`. Quoted values have their quotes escaped.
    pub fn update_column(mut self, column: &str, value: &str, quoted: bool) -> Self {
        if column.is_empty() || value.is_empty() {
            return self;
        }

        let value = if quoted {
            format!("'{}'", escape_text(value))
        } else {
            value.to_string()
        };
        self.update.assignments.push(UpdateAssignment::new(column, value));
        self
    }

    /// Add `column = <literal>`
    pub fn update_column_literal(mut self, column: &str, value: impl Into<SqlLiteral>) -> Self {
        if column.is_empty() {
            return self;
        }

        let value = self.settings.literals.format(&value.into());
        self.update.assignments.push(UpdateAssignment::new(column, value));
        self
    }

    /// Add `column = @column` for every column
    pub fn update_column_with_param(self, columns: &[&str]) -> Self {
        self.update_column_alias_with_param("", columns)
    }

    /// Add `alias.column = @column` for every column
    pub fn update_column_alias_with_param(mut self, alias: &str, columns: &[&str]) -> Self {
        for column in columns.iter().filter(|c| !c.is_empty()) {
            let value = format!("{}{}", self.settings.parameter_prefix, column);
            self.update
                .assignments
                .push(UpdateAssignment::new(format::field_format(alias, column, ""), value));
        }
        self
    }
}

//! Statement rendering
//!
//! `SqlGenerator` turns the accumulated clause collections into text, one
//! clause at a time. Every clause it writes ends in a space, which is part of
//! the output format. Rendering never mutates the builder.

use crate::query_builder::builder::{StatementBuilder, UnionEntry};
use crate::query_builder::filter::{render_filters, FilterTree};
use crate::query_builder::grouping::render_having;
use crate::query_builder::join::JoinClause;
use crate::query_builder::ordering::OrderBy;
use crate::query_builder::pagination::OffsetFetch;
use crate::query_builder::statement_kind::StatementKind;
use crate::query_builder::update::UpdateTarget;
use serde_json::Value;
use std::fmt;
use type_mapping::UnionKind;

pub struct SqlGenerator;

impl SqlGenerator {
    /// Each declaration followed by `; `
    pub fn build_declarations(declarations: &[String]) -> String {
        declarations.iter().map(|d| format!("{}; ", d)).collect()
    }

    /// `WITH a AS (...), b AS (...) `
    pub fn build_with(withs: &[(String, StatementBuilder)]) -> String {
        if withs.is_empty() {
            return String::new();
        }

        let entries = withs
            .iter()
            .map(|(name, subquery)| format!("{} AS ({})", name, subquery.render()))
            .collect::<Vec<_>>()
            .join(", ");

        format!("WITH {} ", entries)
    }

    /// `SET option ` for every option
    pub fn build_sets(sets: &[String]) -> String {
        sets.iter().map(|set| format!("SET {} ", set)).collect()
    }

    /// `SELECT [DISTINCT ][TOP n ]`
    pub fn build_select_head(distinct: bool, top: u32) -> String {
        let mut head = String::from("SELECT ");
        if distinct {
            head.push_str("DISTINCT ");
        }
        if top != 0 {
            head.push_str(&format!("TOP {} ", top));
        }
        head
    }

    pub fn build_columns(columns: &[String]) -> String {
        if columns.is_empty() {
            return String::new();
        }
        format!("{} ", columns.join(", "))
    }

    pub fn build_from(froms: &[String]) -> String {
        if froms.is_empty() {
            return String::new();
        }
        format!("FROM {} ", froms.join(", "))
    }

    /// Joins concatenated behind a single leading space. Override joins are padded.
    pub fn build_joins(joins: &[JoinClause]) -> String {
        if joins.is_empty() {
            return String::new();
        }

        let rendered: String = joins
            .iter()
            .map(|join| {
                if join.is_override() {
                    format!(" {} ", join.render())
                } else {
                    join.render()
                }
            })
            .collect();

        format!(" {}", rendered)
    }

    /// WHERE over the main filters, with pagination filters appended under the
    /// same keyword. Pagination filters lead without a combinator only when no
    /// main filter was written.
    pub fn build_where(filters: &[FilterTree], pagination: Option<&[FilterTree]>) -> String {
        let mut clause = String::new();
        let mut where_added = false;

        if !filters.is_empty() {
            clause.push_str("WHERE ");
            clause.push(' ');
            clause.push_str(&render_filters(filters, true));
            where_added = true;
        }

        if let Some(pagination) = pagination.filter(|p| !p.is_empty()) {
            if !where_added {
                clause.push_str("WHERE ");
            }
            clause.push(' ');
            clause.push_str(&render_filters(pagination, !where_added));
        }

        clause
    }

    pub fn build_for(fors: &[String]) -> String {
        if fors.is_empty() {
            return String::new();
        }
        format!("FOR {} ", fors.join(", "))
    }

    pub fn build_group_by(group_by: &[String]) -> String {
        if group_by.is_empty() {
            return String::new();
        }
        format!("GROUP BY {} ", group_by.join(", "))
    }

    /// ORDER BY, followed by OFFSET/FETCH when paging is given. Paging is
    /// only written after an ORDER BY.
    pub fn build_order_by(order_by: &[OrderBy], paging: Option<OffsetFetch>) -> String {
        if order_by.is_empty() {
            return String::new();
        }

        let items = order_by.iter().map(OrderBy::to_sql).collect::<Vec<_>>().join(", ");
        let mut clause = format!("ORDER BY {} ", items);

        if let Some(paging) = paging {
            clause.push_str(&paging.to_sql());
        }

        clause
    }

    fn union_keyword(kind: UnionKind) -> &'static str {
        match kind {
            UnionKind::All => "UNION ALL ",
            UnionKind::Distinct => "UNION ",
        }
    }

    /// `UNION [ALL ]text ` for every member
    pub fn build_unions(unions: &[UnionEntry]) -> String {
        unions
            .iter()
            .map(|union| format!("{}{} ", Self::union_keyword(union.kind), union.text))
            .collect()
    }

    /// Unions standing in for an invalid SELECT: the first member verbatim,
    /// then ` UNION [ALL ]text ` for the rest
    pub fn build_union_only(unions: &[UnionEntry]) -> String {
        let mut sql = String::new();
        let mut members = unions.iter();

        if let Some(first) = members.next() {
            sql.push_str(&first.text);
        }

        for union in members {
            sql.push_str(&format!(" {}{} ", Self::union_keyword(union.kind), union.text));
        }

        sql
    }
}

/// Rendered statement text with the parameters it binds
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub parameters: Vec<(String, Value)>,
}

/// Render several builders into one batch separated by `; `
pub fn combined_query(builders: &[&StatementBuilder]) -> String {
    builders
        .iter()
        .map(|builder| builder.render())
        .collect::<Vec<_>>()
        .join("; ")
}

impl StatementBuilder {
    /// At least one column and one FROM source
    pub fn is_valid(&self) -> bool {
        !self.columns.is_empty() && !self.froms.is_empty()
    }

    /// At least one total column and one FROM source
    pub fn is_valid_total(&self) -> bool {
        !self.total_columns.is_empty() && !self.froms.is_empty()
    }

    /// The statement form the accumulated targets select
    pub fn statement_kind(&self) -> StatementKind<'_> {
        StatementKind::resolve(&self.insert, &self.update, self.delete.as_ref())
    }

    /// Render the main statement
    pub fn render(&self) -> String {
        let kind = self.statement_kind();

        let sql = match kind {
            StatementKind::Select => self.render_select(false),
            StatementKind::Delete(target) => {
                let mut sql = target.to_sql();
                sql.push_str(&self.render_joins_and_where());
                sql
            }
            StatementKind::Insert { table, target } => {
                let mut sql = SqlGenerator::build_sets(&self.sets);
                sql.push_str(&target.to_sql(table, &self.columns));
                sql
            }
            StatementKind::Update { table, target } => {
                let mut sql = SqlGenerator::build_sets(&self.sets);
                sql.push_str(&self.render_update_body(table, target));
                sql
            }
            StatementKind::UpdateElseInsert {
                update_table,
                update,
                insert_table,
                insert,
            } => {
                let mut sql = SqlGenerator::build_sets(&self.sets);
                sql.push_str(&self.render_update_body(update_table, update));
                sql.push_str(" IF @@ROWCOUNT=0 ");
                sql.push_str(&insert.to_sql(insert_table, &self.columns));
                sql
            }
        };

        if self.settings.log_statements {
            tracing::debug!("[RENDER] Kind: {}", kind.name());
            tracing::debug!("[RENDER] SQL: {}", sql);
        }

        sql
    }

    /// Render the count/paging sibling statement. Always a full SELECT; it uses
    /// the total columns, grouping and ordering, leaves out pagination filters
    /// and OFFSET/FETCH, and never collapses to its union members.
    pub fn render_total(&self) -> String {
        let sql = self.render_select(true);

        if self.settings.log_statements {
            tracing::debug!("[RENDER_TOTAL] SQL: {}", sql);
        }

        sql
    }

    /// Render together with the bound parameters
    pub fn build(&self) -> Statement {
        Statement {
            sql: self.render(),
            parameters: self.parameters.clone(),
        }
    }

    /// Render the total statement together with the bound parameters
    pub fn build_total(&self) -> Statement {
        Statement {
            sql: self.render_total(),
            parameters: self.parameters.clone(),
        }
    }

    fn render_select(&self, total: bool) -> String {
        let (columns, group_by, order_by) = if total {
            (&self.total_columns, &self.total_group_by, &self.total_order_by)
        } else {
            (&self.columns, &self.group_by, &self.order_by)
        };

        if !total && !self.is_valid() && !self.unions.is_empty() {
            tracing::trace!("[UNION] Rendering {} union members without a SELECT", self.unions.len());
            return SqlGenerator::build_union_only(&self.unions);
        }

        let pagination = (!total).then_some(self.pagination_filters.as_slice());
        let paging = if total { None } else { self.offset_fetch };

        let mut sql = self.start_query.clone();
        sql.push_str(&SqlGenerator::build_declarations(&self.declarations));
        sql.push_str(&SqlGenerator::build_with(&self.withs));
        sql.push_str(&SqlGenerator::build_sets(&self.sets));
        sql.push_str(&SqlGenerator::build_select_head(self.distinct, self.top));
        sql.push_str(&SqlGenerator::build_columns(columns));
        sql.push_str(&SqlGenerator::build_from(&self.froms));
        sql.push_str(&SqlGenerator::build_joins(&self.joins));
        sql.push_str(&SqlGenerator::build_where(&self.filters, pagination));
        sql.push_str(&SqlGenerator::build_for(&self.fors));
        sql.push_str(&SqlGenerator::build_group_by(group_by));
        sql.push_str(&render_having(&self.havings));
        sql.push_str(&SqlGenerator::build_order_by(order_by, paging));
        sql.push_str(&SqlGenerator::build_unions(&self.unions));
        sql
    }

    fn render_joins_and_where(&self) -> String {
        let mut sql = SqlGenerator::build_joins(&self.joins);
        sql.push_str(&SqlGenerator::build_where(
            &self.filters,
            Some(self.pagination_filters.as_slice()),
        ));
        sql
    }

    fn render_update_body(&self, table: &str, target: &UpdateTarget) -> String {
        let mut sql = target.to_sql(table);

        if !self.froms.is_empty() {
            sql.push_str(&format!(" FROM {} ", self.froms.join(", ")));
            sql.push_str(&SqlGenerator::build_joins(&self.joins));
        }

        sql.push_str(&SqlGenerator::build_where(
            &self.filters,
            Some(self.pagination_filters.as_slice()),
        ));
        sql
    }
}

impl fmt::Display for StatementBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

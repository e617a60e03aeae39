//! Write targets for INSERT, UPDATE and DELETE statements

/// One `column = value` pair of an UPDATE
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateAssignment {
    pub column: String,
    pub value: String,
}

impl UpdateAssignment {
    pub fn new(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }

    pub fn to_sql(&self) -> String {
        format!("{} = {}", self.column, self.value)
    }
}

/// Target table and values of an INSERT
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsertTarget {
    pub table: Option<String>,
    pub columns: Vec<String>,
    /// Each group is one already-joined `VALUES (...)` tuple
    pub value_groups: Vec<String>,
}

impl InsertTarget {
    /// `INSERT INTO t (c1, c2)[ VALUES (g1), (g2)]`, followed by a SELECT
    /// projection when `select_columns` is non-empty
    pub fn to_sql(&self, table: &str, select_columns: &[String]) -> String {
        let mut sql = format!("INSERT INTO {} ({})", table, self.columns.join(", "));

        if !self.value_groups.is_empty() {
            let groups = self
                .value_groups
                .iter()
                .map(|group| format!("({})", group))
                .collect::<Vec<_>>()
                .join(", ");
            sql.push_str(&format!(" VALUES {}", groups));
        }

        if !select_columns.is_empty() {
            sql.push_str(&format!("\n SELECT {} ", select_columns.join(", ")));
        }

        sql
    }
}

/// Target table and assignments of an UPDATE
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTarget {
    pub table: Option<String>,
    pub assignments: Vec<UpdateAssignment>,
}

impl UpdateTarget {
    /// `UPDATE t SET a = 1, b = 2 `
    pub fn to_sql(&self, table: &str) -> String {
        let assignments = self
            .assignments
            .iter()
            .map(UpdateAssignment::to_sql)
            .collect::<Vec<_>>()
            .join(", ");

        format!("UPDATE {} SET {} ", table, assignments)
    }
}

/// Target table and optional alias of a DELETE
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTarget {
    pub table: String,
    pub alias: String,
}

impl DeleteTarget {
    pub fn new(table: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            alias: alias.into(),
        }
    }

    /// `DELETE a FROM t a `, or `DELETE FROM t ` without an alias
    pub fn to_sql(&self) -> String {
        if self.alias.is_empty() {
            format!("DELETE FROM {} ", self.table)
        } else {
            format!("DELETE {alias} FROM {} {alias} ", self.table, alias = self.alias)
        }
    }
}

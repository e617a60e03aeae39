//! Statement kind resolution
//!
//! Insert, update and delete targets live side by side on the builder. The
//! kind actually rendered is chosen here by one exhaustive match.

use crate::query_builder::update::{DeleteTarget, InsertTarget, UpdateTarget};

/// The statement form a builder renders as, borrowing the targets it needs
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatementKind<'a> {
    Select,
    Insert {
        table: &'a str,
        target: &'a InsertTarget,
    },
    Update {
        table: &'a str,
        target: &'a UpdateTarget,
    },
    Delete(&'a DeleteTarget),
    /// UPDATE, then INSERT when no rows were affected
    UpdateElseInsert {
        update_table: &'a str,
        update: &'a UpdateTarget,
        insert_table: &'a str,
        insert: &'a InsertTarget,
    },
}

impl<'a> StatementKind<'a> {
    /// Precedence: update+insert, then delete, then insert, then update, then select
    pub fn resolve(
        insert: &'a InsertTarget,
        update: &'a UpdateTarget,
        delete: Option<&'a DeleteTarget>,
    ) -> Self {
        match (insert.table.as_deref(), update.table.as_deref(), delete) {
            (Some(insert_table), Some(update_table), _) => StatementKind::UpdateElseInsert {
                update_table,
                update,
                insert_table,
                insert,
            },
            (_, _, Some(delete)) => StatementKind::Delete(delete),
            (Some(table), None, None) => StatementKind::Insert {
                table,
                target: insert,
            },
            (None, Some(table), None) => StatementKind::Update {
                table,
                target: update,
            },
            (None, None, None) => StatementKind::Select,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StatementKind::Select => "SELECT",
            StatementKind::Insert { .. } => "INSERT",
            StatementKind::Update { .. } => "UPDATE",
            StatementKind::Delete(_) => "DELETE",
            StatementKind::UpdateElseInsert { .. } => "UPDATE_ELSE_INSERT",
        }
    }

    pub fn is_select(&self) -> bool {
        matches!(self, StatementKind::Select)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insert(table: Option<&str>) -> InsertTarget {
        InsertTarget {
            table: table.map(str::to_string),
            ..Default::default()
        }
    }

    fn update(table: Option<&str>) -> UpdateTarget {
        UpdateTarget {
            table: table.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_nothing_set_is_select() {
        let (i, u) = (insert(None), update(None));
        assert!(StatementKind::resolve(&i, &u, None).is_select());
    }

    #[test]
    fn test_insert_and_update_wins_over_delete() {
        let (i, u) = (insert(Some("Cat")), update(Some("Cat")));
        let delete = DeleteTarget::new("Cat", "C");
        let kind = StatementKind::resolve(&i, &u, Some(&delete));
        assert_eq!(kind.name(), "UPDATE_ELSE_INSERT");
    }

    #[test]
    fn test_delete_wins_over_single_insert_or_update() {
        let delete = DeleteTarget::new("Cat", "");

        let (i, u) = (insert(Some("Cat")), update(None));
        assert_eq!(StatementKind::resolve(&i, &u, Some(&delete)).name(), "DELETE");

        let (i, u) = (insert(None), update(Some("Cat")));
        assert_eq!(StatementKind::resolve(&i, &u, Some(&delete)).name(), "DELETE");
    }

    #[test]
    fn test_single_targets() {
        let (i, u) = (insert(Some("Cat")), update(None));
        assert_eq!(StatementKind::resolve(&i, &u, None).name(), "INSERT");

        let (i, u) = (insert(None), update(Some("Cat")));
        match StatementKind::resolve(&i, &u, None) {
            StatementKind::Update { table, .. } => assert_eq!(table, "Cat"),
            other => panic!("expected update, got {:?}", other),
        }
    }
}

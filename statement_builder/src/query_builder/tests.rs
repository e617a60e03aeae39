//! Accumulation tests for the statement builder

use crate::errors::BuilderError;
use crate::query_builder::{BuilderSettings, FilterTree, JoinClause, StatementBuilder};
use chrono::NaiveDate;
use serde_json::json;
use type_mapping::{Combinator, Comparison, Function, JoinKind, LiteralError, SqlLiteral, UnionKind};
use uuid::Uuid;

fn squash(sql: &str) -> String {
    sql.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn cats() -> StatementBuilder {
    StatementBuilder::new().add_column("C.Name").from_table("Cat", "C")
}

// ========================================
// Columns and sources
// ========================================

#[test]
fn test_empty_inputs_are_ignored() {
    let builder = StatementBuilder::new()
        .add_column("")
        .add_field_column("C", "", "Name", true)
        .from("")
        .from_table("", "C")
        .group_by("")
        .order_by("", true)
        .add_set("")
        .add_declaration("")
        .for_clause("")
        .union("", UnionKind::All)
        .having("", Combinator::And);

    assert!(builder.columns.is_empty());
    assert!(builder.froms.is_empty());
    assert!(builder.group_by.is_empty());
    assert!(builder.order_by.is_empty());
    assert!(builder.sets.is_empty());
    assert!(builder.declarations.is_empty());
    assert!(builder.fors.is_empty());
    assert!(builder.unions.is_empty());
    assert!(builder.havings.is_empty());
}

#[test]
fn test_field_column_with_group_by() {
    let builder = StatementBuilder::new().add_field_column("C", "Type", "CatType", true);

    assert_eq!(builder.columns, vec!["C.Type as CatType"]);
    assert_eq!(builder.group_by, vec!["C.Type"]);
}

#[test]
fn test_add_columns_is_one_entry() {
    let builder = StatementBuilder::new().add_columns("C", &["ID", "Name"], true);

    assert_eq!(builder.columns, vec!["C.ID, C.Name"]);
    assert_eq!(builder.group_by, vec!["C.ID, C.Name"]);
}

#[test]
fn test_function_and_null_columns() {
    let builder = StatementBuilder::new()
        .add_function_column(Function::Count, "Total", &["C.ID"])
        .add_function_column(Function::Max, "Ignored", &[])
        .add_function_column(Function::Coalesce, "", &["C.Nick", "C.Name"])
        .add_null_column("Missing")
        .add_null_column("");

    assert_eq!(
        builder.columns,
        vec!["COUNT(C.ID) AS Total", "COALESCE(C.Nick, C.Name)", "NULL AS Missing", "NULL"]
    );
}

#[test]
fn test_full_name_column() {
    let builder = StatementBuilder::new()
        .add_full_name_column("C", "First", "O", "Last", "FullName")
        .add_full_name_column("C", "First", "O", "", "Ignored");

    assert_eq!(
        builder.columns,
        vec!["ISNULL(C.First, '') + ISNULL(' ' + O.Last, '') AS FullName"]
    );
}

#[test]
fn test_total_columns_are_separate() {
    let builder = cats()
        .add_total_field_column("C", "ID", "", true)
        .add_total_columns("C", &["Type"], false)
        .total_order_by_field("C", "ID", true);

    assert_eq!(builder.columns, vec!["C.Name"]);
    assert_eq!(builder.total_columns, vec!["C.ID", "C.Type"]);
    assert_eq!(builder.total_group_by, vec!["C.ID"]);
    assert!(builder.group_by.is_empty());
    assert_eq!(builder.total_order_by.len(), 1);
    assert!(builder.total_order_by[0].descending);
}

#[test]
fn test_from_table_without_alias() {
    let builder = StatementBuilder::new().add_column("ID").from_table("Cat", "");
    assert_eq!(builder.render(), "SELECT ID FROM Cat ");
}

#[test]
fn test_from_subquery() {
    let inner = StatementBuilder::new().add_column("C.ID").from("Cat C");
    let builder = StatementBuilder::new().add_column("S.ID").from_subquery(&inner, "S");

    assert_eq!(builder.froms, vec!["(SELECT C.ID FROM Cat C ) S"]);
}

// ========================================
// Joins
// ========================================

#[test]
fn test_join_on_with_extra_filters() {
    let builder = cats().join_on(
        JoinKind::Left,
        "Owner",
        "O",
        "ID",
        "C",
        "OwnerID",
        Comparison::Equal,
        vec![FilterTree::and("O.Active = 1")],
    );

    assert_eq!(builder.joins.len(), 1);
    assert_eq!(
        squash(&builder.joins[0].render()),
        "LEFT JOIN Owner O ON O.ID = C.OwnerID AND O.Active = 1"
    );
}

#[test]
fn test_join_helpers_ignore_missing_parts() {
    let builder = cats()
        .join_on(JoinKind::Inner, "", "O", "ID", "C", "OwnerID", Comparison::Equal, vec![])
        .join_on(JoinKind::Inner, "Owner", "O", "", "C", "OwnerID", Comparison::Equal, vec![])
        .join_filters(JoinKind::Inner, "Owner O", vec![])
        .join_raw("");

    assert!(builder.joins.is_empty());
}

#[test]
fn test_join_filters_and_raw() {
    let builder = cats()
        .join_filters(JoinKind::Outer, "Toy T", vec![FilterTree::and("T.CatID = C.ID")])
        .join_raw("CROSS APPLY fn_Owners(C.ID) F")
        .join(JoinClause::on(JoinKind::Inner, "Bowl B", FilterTree::and("B.CatID = C.ID")));

    assert_eq!(builder.joins.len(), 3);
    assert!(builder.joins[1].is_override());
}

// ========================================
// Filters
// ========================================

#[test]
fn test_where_field_with_empty_field_is_noop() {
    let builder = cats()
        .where_field("C", "", "1", Comparison::Equal, Combinator::And, false)
        .where_compare("", "1", Comparison::Equal, Combinator::And, false)
        .where_null("C", "", false, Combinator::And)
        .where_exists("", Combinator::And)
        .where_group(vec![], Combinator::Or)
        .where_filter(FilterTree::default())
        .where_pagination("", Combinator::And);

    assert!(builder.filters.is_empty());
    assert!(builder.pagination_filters.is_empty());
    assert_eq!(builder.render(), "SELECT C.Name FROM Cat C ");
}

#[test]
fn test_where_literal_formats_inline() {
    let born = NaiveDate::from_ymd_opt(2024, 1, 31)
        .unwrap()
        .and_hms_opt(13, 5, 0)
        .unwrap();

    let builder = cats()
        .where_literal("C.ID", Uuid::nil(), Comparison::Equal, Combinator::And)
        .where_literal("C.Born", born, Comparison::GreaterEqual, Combinator::And)
        .where_literal("C.Alive", true, Comparison::Equal, Combinator::And)
        .where_literal("C.Initial", 'O', Comparison::Equal, Combinator::And);

    assert_eq!(
        squash(&builder.render()),
        "SELECT C.Name FROM Cat C WHERE C.ID = '00000000-0000-0000-0000-000000000000' \
         AND C.Born >= CONVERT(datetime, '31/01/2024 13:05:00', 103) \
         AND C.Alive = 1 AND C.Initial = 'O'"
    );
}

#[test]
fn test_where_value_accepts_scalars() {
    let builder = cats()
        .where_value("C.Name", &json!("O'Neil"), Comparison::Equal, Combinator::And)
        .unwrap()
        .where_value("C.Lives", &json!(9), Comparison::Lesser, Combinator::Or)
        .unwrap();

    assert_eq!(
        squash(&builder.render()),
        "SELECT C.Name FROM Cat C WHERE C.Name = 'O''Neil' OR C.Lives < 9"
    );
}

#[test]
fn test_where_value_rejects_arrays_and_objects() {
    let result = cats().where_value("C.Tags", &json!(["a", "b"]), Comparison::Equal, Combinator::And);
    assert!(matches!(
        result,
        Err(BuilderError::Literal(LiteralError::UnsupportedType { .. }))
    ));

    let result = cats().where_value("C.Meta", &json!({"k": 1}), Comparison::Equal, Combinator::And);
    assert!(result.is_err());
}

#[test]
fn test_where_param_records_parameter() {
    let builder = cats().where_param("C.Name", "@Name", "Tom", Comparison::Equal, Combinator::And);

    assert_eq!(squash(&builder.render()), "SELECT C.Name FROM Cat C WHERE C.Name = @Name");
    assert_eq!(builder.parameters(), &[("@Name".to_string(), json!("Tom"))]);
}

#[test]
fn test_where_param_without_field_records_nothing() {
    let builder = cats().where_param("", "@Name", "Tom", Comparison::Equal, Combinator::And);
    assert!(builder.filters.is_empty());
    assert!(builder.parameters().is_empty());
}

#[test]
fn test_where_in_variants() {
    let owners = StatementBuilder::new().add_column("O.CatID").from("Owner O");

    let builder = cats()
        .where_in("C", "Name", &["Tom", "O'Neil"], false, Combinator::And, true)
        .where_in("C", "Name", &[], false, Combinator::And, true)
        .where_in_list("C", "Lives", "7, 9", true, Combinator::And)
        .where_in_query("C", "ID", &owners, true, Combinator::Or);

    assert_eq!(
        squash(&builder.render()),
        "SELECT C.Name FROM Cat C WHERE C.Name IN ('Tom', 'O''Neil') \
         AND C.Lives NOT IN (7, 9) \
         OR C.ID NOT IN (SELECT O.CatID FROM Owner O )"
    );
}

#[test]
fn test_where_null_and_exists() {
    let toys = StatementBuilder::new()
        .add_column("1")
        .from("Toy T")
        .where_text("T.CatID = C.ID", Combinator::And);

    let builder = cats()
        .where_null("C", "Owner", true, Combinator::And)
        .where_exists_query(&toys, Combinator::And);

    assert_eq!(
        squash(&builder.render()),
        "SELECT C.Name FROM Cat C WHERE C.Owner IS NOT NULL \
         AND EXISTS(SELECT 1 FROM Toy T WHERE T.CatID = C.ID )"
    );
}

#[test]
fn test_clear_filters_keeps_pagination_filters() {
    let builder = cats()
        .where_text("C.ID = 1", Combinator::And)
        .where_pagination("C.ID > 10", Combinator::And)
        .clear_filters();

    assert!(builder.filters.is_empty());
    assert_eq!(builder.pagination_filters.len(), 1);
}

#[test]
fn test_having_helpers() {
    let builder = cats()
        .having_compare("COUNT(C.ID)", "1", Comparison::Greater, Combinator::And, false)
        .having_between("SUM(C.Lives)", "10", "20", true, Combinator::Or, false);

    assert_eq!(builder.havings.len(), 2);
    assert_eq!(builder.havings[0].predicate, "COUNT(C.ID) > 1");
    assert_eq!(builder.havings[1].predicate, "(SUM(C.Lives) < 10 OR SUM(C.Lives) > 20)");
}

// ========================================
// WITH, unions, write targets
// ========================================

#[test]
fn test_add_with_replaces_in_place() {
    let first = StatementBuilder::new().add_column("1").from("A");
    let second = StatementBuilder::new().add_column("2").from("B");
    let replacement = StatementBuilder::new().add_column("3").from("C");

    let builder = StatementBuilder::new()
        .add_with("First", first)
        .add_with("Second", second)
        .add_with("First", replacement)
        .add_with("", StatementBuilder::new());

    let names: Vec<&str> = builder.withs.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second"]);
    assert_eq!(builder.withs[0].1.render(), "SELECT 3 FROM C ");
}

#[test]
fn test_union_query_requires_valid_builder() {
    let invalid = StatementBuilder::new().add_column("D.Name");
    let valid = StatementBuilder::new().add_column("D.Name").from("Dog D");

    let builder = cats()
        .union_query(&invalid, UnionKind::All)
        .union_query(&valid, UnionKind::Distinct);

    assert_eq!(builder.unions.len(), 1);
    assert_eq!(builder.unions[0].text, "SELECT D.Name FROM Dog D ");
    assert_eq!(builder.unions[0].kind, UnionKind::Distinct);
}

#[test]
fn test_insert_into_tags_values_with_prefix() {
    let builder = StatementBuilder::new()
        .insert_into_table("Cat")
        .insert_into(&["Name", "", "Lives"], true)
        .insert_into(&[], true);

    assert_eq!(builder.insert.columns, vec!["Name", "Lives"]);
    assert_eq!(builder.insert.value_groups, vec!["@Name, @Lives"]);
}

#[test]
fn test_update_assignments() {
    let builder = StatementBuilder::new()
        .update_table("Cat")
        .update_column("Name", "O'Malley", true)
        .update_column("Lives", "", false)
        .update_column_literal("Alive", false)
        .update_column_with_param(&["Owner", ""])
        .update_column_alias_with_param("C", &["Age"]);

    let assignments: Vec<String> = builder.update.assignments.iter().map(|a| a.to_sql()).collect();
    assert_eq!(
        assignments,
        vec!["Name = 'O''Malley'", "Alive = 0", "Owner = @Owner", "C.Age = @Age"]
    );
}

#[test]
fn test_update_else_insert_sets_both_tables() {
    let builder = StatementBuilder::new().update_else_insert_table("Cat");

    assert_eq!(builder.insert.table.as_deref(), Some("Cat"));
    assert_eq!(builder.update.table.as_deref(), Some("Cat"));
    assert_eq!(builder.statement_kind().name(), "UPDATE_ELSE_INSERT");
}

#[test]
fn test_custom_parameter_prefix() {
    let settings = BuilderSettings::default().with_parameter_prefix(":");
    let builder = StatementBuilder::with_settings(settings)
        .insert_into_table("Cat")
        .insert_into(&["Name"], true)
        .add_tagged_parameter("Name", "Tom");

    assert_eq!(builder.render(), "INSERT INTO Cat (Name) VALUES (:Name)");
    assert_eq!(builder.parameters_map().get("Name"), Some(&Some(json!("Tom"))));
}

#[test]
fn test_insert_literals_group() {
    let builder = StatementBuilder::new()
        .insert_into_table("Cat")
        .insert_into(&["Name", "Lives"], false)
        .insert_literals(&[SqlLiteral::from("O'Malley"), SqlLiteral::from(9)])
        .insert_literals(&[]);

    assert_eq!(builder.insert.value_groups, vec!["'O''Malley', 9"]);
}

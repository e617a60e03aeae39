// Quick tour of statement building
use chrono::NaiveDate;
use sqlscribe::prelude::*;

fn main() -> Result<(), SqlScribeError> {
    println!("SqlScribe demo\n");

    let scribe = SqlScribe::from_env().unwrap_or_default();

    // Paged listing with a total statement for the page count
    let since = NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default();

    let listing = scribe
        .builder()
        .add_field_column("C", "ID", "", false)
        .add_field_column("C", "Name", "", false)
        .add_total_column("COUNT(C.ID)")
        .from_table("Cat", "C")
        .join_on(
            JoinKind::Left,
            "Owner",
            "O",
            "ID",
            "C",
            "OwnerID",
            Comparison::Equal,
            vec![],
        )
        .where_literal("C.Born", since, Comparison::GreaterEqual, Combinator::And)
        .where_group(
            vec![
                FilterTree::and("O.Name = @Owner"),
                FilterTree::or("O.ID IS NULL"),
            ],
            Combinator::And,
        )
        .add_tagged_parameter("Owner", "Jon")
        .order_by_field("C", "Name", false)
        .offset_fetch(0, Some(20));

    println!("Listing:\n  {}\n", listing.render());
    println!("Total:\n  {}\n", listing.render_total());
    println!("Parameters: {:?}\n", listing.parameters_map());

    // Update the row, insert it when nothing matched
    let upsert = scribe
        .builder()
        .add_set("NOCOUNT ON")
        .update_else_insert_table("Cat")
        .update_column_with_param(&["Name", "Lives"])
        .where_compare("ID", "@ID", Comparison::Equal, Combinator::And, false)
        .insert_into(&["ID", "Name", "Lives"], true)
        .add_parameters_from(&json!({"ID": 7, "Name": "Tom", "Lives": 9}));

    println!("Upsert:\n  {}\n", upsert.render());

    // Values that cannot be written inline are reported, not dropped
    match scribe
        .builder()
        .add_column("C.ID")
        .from("Cat C")
        .where_value("C.Tags", &json!(["a", "b"]), Comparison::Equal, Combinator::And)
    {
        Ok(_) => println!("Unexpectedly accepted an array literal"),
        Err(e) => println!("Rejected array literal: {}", e),
    }

    Ok(())
}

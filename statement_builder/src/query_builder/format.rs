//! Text formatters for tables, fields and filter predicates
//!
//! Every formatter returns an empty string when a required part is missing,
//! which turns the accumulation call consuming it into a no-op.

use type_mapping::{escape_text, Comparison, Function, SqlKeyword};

/// `table alias`, or just `table` without an alias
pub fn table_format(table: &str, alias: &str) -> String {
    match (table.is_empty(), alias.is_empty()) {
        (true, _) => String::new(),
        (false, true) => table.to_string(),
        (false, false) => format!("{} {}", table, alias),
    }
}

/// `alias.field [as name]`
pub fn field_format(alias: &str, field: &str, as_name: &str) -> String {
    if field.is_empty() {
        return String::new();
    }

    let qualified = if alias.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", alias, field)
    };

    if as_name.is_empty() {
        qualified
    } else {
        format!("{} as {}", qualified, as_name)
    }
}

/// `alias.f1, alias.f2` with each field trimmed
pub fn fields_format(alias: &str, fields: &[&str]) -> String {
    fields
        .iter()
        .map(|field| field_format(alias, field.trim(), ""))
        .filter(|field| !field.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// `KEYWORD(arg1, arg2)`
pub fn function_format(function: Function, args: &[&str]) -> String {
    format!("{}({})", function.keyword(), args.join(", "))
}

/// `ISNULL(alias.field, then)`
pub fn is_null_function_format(alias: &str, field: &str, then: &str) -> String {
    function_format(Function::IsNull, &[&field_format(alias, field, ""), then])
}

fn quote(condition: &str) -> String {
    format!("'{}'", escape_text(condition))
}

/// `field OP condition`. Quoted conditions have their quotes escaped.
pub fn filter_format(alias_field: &str, condition: &str, comparison: Comparison, quoted: bool) -> String {
    if alias_field.is_empty() {
        return String::new();
    }

    let condition = if quoted {
        quote(condition)
    } else {
        condition.to_string()
    };

    format!("{} {} {}", alias_field, comparison.keyword(), condition)
}

/// `alias.field IS [NOT] NULL`
pub fn filter_is_null_format(alias: &str, field: &str, not_null: bool) -> String {
    if field.is_empty() {
        return String::new();
    }

    format!(
        "{} IS {}NULL",
        field_format(alias, field, ""),
        if not_null { "NOT " } else { "" }
    )
}

/// `alias.field [NOT] IN (list)` with the list used verbatim
pub fn filter_in_format(alias: &str, field: &str, list: &str, not_in: bool) -> String {
    if field.is_empty() {
        return String::new();
    }

    format!(
        "{}{} IN ({})",
        field_format(alias, field, ""),
        if not_in { " NOT" } else { "" },
        list
    )
}

/// `alias.field [NOT] IN (a, b)` with every item escaped and optionally quoted
pub fn filter_in_list_format(alias: &str, field: &str, items: &[&str], not_in: bool, quoted: bool) -> String {
    let list = items
        .iter()
        .map(|item| {
            if quoted {
                quote(item)
            } else {
                escape_text(item)
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    filter_in_format(alias, field, &list, not_in)
}

/// `f >= lo AND f <= hi`, or `(f < lo OR f > hi)` when `not_between` is set
pub fn filter_between_format(alias_field: &str, lower: &str, upper: &str, not_between: bool, quoted: bool) -> String {
    if alias_field.is_empty() {
        return String::new();
    }

    let (lower, upper) = if quoted {
        (quote(lower), quote(upper))
    } else {
        (lower.to_string(), upper.to_string())
    };

    if not_between {
        format!("({f} < {lower} OR {f} > {upper})", f = alias_field)
    } else {
        format!("{f} >= {lower} AND {f} <= {upper}", f = alias_field)
    }
}

/// `CASE WHEN c1 THEN o1 ... ELSE e END`
pub fn case_when_format(else_case: &str, cases: &[(&str, &str)]) -> String {
    if cases.is_empty() || else_case.is_empty() {
        return String::new();
    }

    let mut case_when = String::from("CASE");
    for (condition, output) in cases {
        case_when.push_str(&format!(" WHEN {} THEN {}", condition, output));
    }
    case_when.push_str(&format!(" ELSE {} END", else_case));
    case_when
}

/// `CAST( field AS type )`
pub fn cast_format(field: &str, sql_type: &str) -> String {
    if field.is_empty() || sql_type.is_empty() {
        return String::new();
    }

    format!("CAST( {} AS {} )", field, sql_type)
}

//! Keyword tables
//!
//! Every enum that ends up in statement text maps its variants to a fixed SQL
//! keyword through an explicit `match`. Variants without a registered keyword
//! fall back to a title-cased rendering of their name.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Lookup of the SQL keyword for an enum variant
pub trait SqlKeyword {
    /// Registered keyword for this variant, if any
    fn registered_keyword(&self) -> Option<&'static str>;

    /// Variant name used by the title-case fallback
    fn variant_name(&self) -> &'static str;

    /// Keyword text, falling back to the title-cased variant name
    fn keyword(&self) -> Cow<'static, str> {
        match self.registered_keyword() {
            Some(keyword) => Cow::Borrowed(keyword),
            None => Cow::Owned(title_case_fallback(self.variant_name())),
        }
    }
}

/// Title-case a variant name: underscores become spaces, every word is
/// lower-cased and then capitalised. `LEFT_OUTER` -> `Left Outer`.
pub fn title_case_fallback(name: &str) -> String {
    name.replace('_', " ")
        .split(' ')
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Boolean keyword joining a filter to its left sibling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Combinator {
    Empty,
    #[default]
    And,
    Or,
}

impl SqlKeyword for Combinator {
    fn registered_keyword(&self) -> Option<&'static str> {
        Some(match self {
            Combinator::Empty => "",
            Combinator::And => "AND",
            Combinator::Or => "OR",
        })
    }

    fn variant_name(&self) -> &'static str {
        match self {
            Combinator::Empty => "Empty",
            Combinator::And => "And",
            Combinator::Or => "Or",
        }
    }
}

/// Join type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JoinKind {
    /// INNER JOIN - rows with a match on both sides
    Inner,
    /// OUTER JOIN
    Outer,
    /// LEFT JOIN - every row of the left side, matched rows of the right side
    Left,
    /// LEFT OUTER JOIN
    LeftOuter,
}

impl SqlKeyword for JoinKind {
    fn registered_keyword(&self) -> Option<&'static str> {
        Some(match self {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Outer => "OUTER JOIN",
            JoinKind::Left => "LEFT JOIN",
            JoinKind::LeftOuter => "LEFT OUTER JOIN",
        })
    }

    fn variant_name(&self) -> &'static str {
        match self {
            JoinKind::Inner => "Inner",
            JoinKind::Outer => "Outer",
            JoinKind::Left => "Left",
            JoinKind::LeftOuter => "LeftOuter",
        }
    }
}

/// Comparison operator between a field and a condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Comparison {
    #[default]
    Equal,        // =
    NotEqual,     // !=
    Greater,      // >
    GreaterEqual, // >=
    Lesser,       // <
    LesserEqual,  // <=
    Except,       // <>
    Like,         // LIKE
}

impl SqlKeyword for Comparison {
    fn registered_keyword(&self) -> Option<&'static str> {
        Some(match self {
            Comparison::Equal => "=",
            Comparison::NotEqual => "!=",
            Comparison::Greater => ">",
            Comparison::GreaterEqual => ">=",
            Comparison::Lesser => "<",
            Comparison::LesserEqual => "<=",
            Comparison::Except => "<>",
            Comparison::Like => "LIKE",
        })
    }

    fn variant_name(&self) -> &'static str {
        match self {
            Comparison::Equal => "Equal",
            Comparison::NotEqual => "NotEqual",
            Comparison::Greater => "Greater",
            Comparison::GreaterEqual => "GreaterEqual",
            Comparison::Lesser => "Lesser",
            Comparison::LesserEqual => "LesserEqual",
            Comparison::Except => "Except",
            Comparison::Like => "Like",
        }
    }
}

/// UNION flavour. `Distinct` is the plain `UNION`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UnionKind {
    #[default]
    Distinct,
    All,
}

impl SqlKeyword for UnionKind {
    fn registered_keyword(&self) -> Option<&'static str> {
        Some(match self {
            UnionKind::Distinct => "",
            UnionKind::All => "ALL",
        })
    }

    fn variant_name(&self) -> &'static str {
        match self {
            UnionKind::Distinct => "Distinct",
            UnionKind::All => "All",
        }
    }
}

/// SQL functions usable in columns and as inline literals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Function {
    /// Count the number of rows for this field
    Count,
    /// Add all values found of this field
    Sum,
    /// Average of field
    Average,
    /// Removes white space from a string
    Trim,
    /// Removes white space from the left of a string
    LeftTrim,
    /// Removes white space from the right of a string
    RightTrim,
    Lower,
    Upper,
    /// Character for an ASCII code
    Char,
    /// Position of a character in a string
    CharIndex,
    /// Number of bytes used by an expression
    DataLength,
    Length,
    Concat,
    Reverse,
    Day,
    Month,
    Year,
    /// Use the second value when the first is null
    IsNull,
    /// First non-null value from left to right
    Coalesce,
    Max,
    Min,
    /// Place a string into another string at a given position
    Stuff,
    /// Current date
    GetDate,
}

impl SqlKeyword for Function {
    fn registered_keyword(&self) -> Option<&'static str> {
        Some(match self {
            Function::Count => "COUNT",
            Function::Sum => "SUM",
            Function::Average => "AVG",
            Function::Trim => "TRIM",
            Function::LeftTrim => "LTRIM",
            Function::RightTrim => "RTRIM",
            Function::Lower => "LOWER",
            Function::Upper => "UPPER",
            Function::Char => "CHAR",
            Function::CharIndex => "CHARINDEX",
            Function::DataLength => "DATALENGTH",
            Function::Length => "LEN",
            Function::Concat => "CONCAT",
            Function::Reverse => "REVERSE",
            Function::Day => "DAY",
            Function::Month => "MONTH",
            Function::Year => "YEAR",
            Function::IsNull => "ISNULL",
            Function::Coalesce => "COALESCE",
            Function::Max => "MAX",
            Function::Min => "MIN",
            Function::Stuff => "STUFF",
            Function::GetDate => "GETDATE",
        })
    }

    fn variant_name(&self) -> &'static str {
        match self {
            Function::Count => "Count",
            Function::Sum => "Sum",
            Function::Average => "Average",
            Function::Trim => "Trim",
            Function::LeftTrim => "LeftTrim",
            Function::RightTrim => "RightTrim",
            Function::Lower => "Lower",
            Function::Upper => "Upper",
            Function::Char => "Char",
            Function::CharIndex => "CharIndex",
            Function::DataLength => "DataLength",
            Function::Length => "Length",
            Function::Concat => "Concat",
            Function::Reverse => "Reverse",
            Function::Day => "Day",
            Function::Month => "Month",
            Function::Year => "Year",
            Function::IsNull => "IsNull",
            Function::Coalesce => "Coalesce",
            Function::Max => "Max",
            Function::Min => "Min",
            Function::Stuff => "Stuff",
            Function::GetDate => "GetDate",
        }
    }
}

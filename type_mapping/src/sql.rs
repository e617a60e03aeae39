//! SQL literal formatting
//!
//! This module renders [`SqlLiteral`] values as inline statement text.
//! Quotes inside text and character values are escaped by doubling them.

use crate::errors::LiteralError;
use crate::keywords::SqlKeyword;
use crate::types::SqlLiteral;
use serde_json::Value;

pub const DEFAULT_DATETIME_FORMAT: &str = "%d/%m/%Y %H:%M:%S";
pub const DEFAULT_DATETIME_STYLE: u16 = 103;

/// Escape a string for use inside single quotes
pub fn escape_text(s: &str) -> String {
    s.replace('\'', "''")
}

/// Escape a single character for use inside single quotes
pub fn escape_char(c: char) -> String {
    if c == '\'' {
        "''".to_string()
    } else {
        c.to_string()
    }
}

/// Renders literals inline. Timestamps are written through `CONVERT`
/// using the configured format and style code.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralFormatter {
    datetime_format: String,
    datetime_style: u16,
}

impl Default for LiteralFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_DATETIME_FORMAT, DEFAULT_DATETIME_STYLE)
    }
}

impl LiteralFormatter {
    pub fn new(datetime_format: impl Into<String>, datetime_style: u16) -> Self {
        Self {
            datetime_format: datetime_format.into(),
            datetime_style,
        }
    }

    pub fn datetime_format(&self) -> &str {
        &self.datetime_format
    }

    pub fn datetime_style(&self) -> u16 {
        self.datetime_style
    }

    /// Inline text for a single literal
    pub fn format(&self, literal: &SqlLiteral) -> String {
        match literal {
            SqlLiteral::Null => "NULL".to_string(),
            SqlLiteral::Identifier(id) => format!("'{}'", id),
            SqlLiteral::Text(s) => format!("'{}'", escape_text(s)),
            SqlLiteral::Boolean(b) => (if *b { "1" } else { "0" }).to_string(),
            SqlLiteral::Integer(i) => i.to_string(),
            SqlLiteral::Float(f) => f.to_string(),
            SqlLiteral::Timestamp(ts) => format!(
                "CONVERT(datetime, '{}', {})",
                ts.format(&self.datetime_format),
                self.datetime_style
            ),
            SqlLiteral::Character(c) => format!("'{}'", escape_char(*c)),
            SqlLiteral::Function(function) => format!("{}()", function.keyword()),
        }
    }

    /// Comma-joined inline text for a list of literals
    pub fn format_list<'a, I>(&self, literals: I) -> String
    where
        I: IntoIterator<Item = &'a SqlLiteral>,
    {
        literals
            .into_iter()
            .map(|literal| self.format(literal))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Inline text for a dynamic value. Arrays and objects are rejected.
    pub fn format_value(&self, value: &Value) -> Result<String, LiteralError> {
        let literal = SqlLiteral::try_from(value)?;
        Ok(self.format(&literal))
    }

    /// Comma-joined inline text for dynamic values, failing on the first unsupported one
    pub fn format_values(&self, values: &[Value]) -> Result<String, LiteralError> {
        let parts = values
            .iter()
            .map(|value| self.format_value(value))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(parts.join(", "))
    }
}

/// Format a dynamic value with the default formatter
pub fn format_value(value: &Value) -> Result<String, LiteralError> {
    LiteralFormatter::default().format_value(value)
}

/// Format dynamic values with the default formatter
pub fn format_values(values: &[Value]) -> Result<String, LiteralError> {
    LiteralFormatter::default().format_values(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::Function;
    use chrono::NaiveDate;
    use serde_json::json;
    use uuid::Uuid;

    #[test]
    fn test_escape_text_doubles_quotes() {
        assert_eq!(escape_text("O'Brien"), "O''Brien");
        assert_eq!(escape_text("'; DROP TABLE cats; --"), "''; DROP TABLE cats; --");
        assert_eq!(escape_char('\''), "''");
        assert_eq!(escape_char('A'), "A");
    }

    #[test]
    fn test_format_scalars() {
        let formatter = LiteralFormatter::default();
        assert_eq!(formatter.format(&SqlLiteral::Null), "NULL");
        assert_eq!(formatter.format(&SqlLiteral::from("it's")), "'it''s'");
        assert_eq!(formatter.format(&SqlLiteral::from(true)), "1");
        assert_eq!(formatter.format(&SqlLiteral::from(false)), "0");
        assert_eq!(formatter.format(&SqlLiteral::from(-12_i64)), "-12");
        assert_eq!(formatter.format(&SqlLiteral::from(2.5_f64)), "2.5");
        assert_eq!(formatter.format(&SqlLiteral::from('\'')), "''''");
        assert_eq!(formatter.format(&SqlLiteral::from(Function::GetDate)), "GETDATE()");
    }

    #[test]
    fn test_format_identifier() {
        let id = Uuid::nil();
        assert_eq!(
            LiteralFormatter::default().format(&SqlLiteral::from(id)),
            "'00000000-0000-0000-0000-000000000000'"
        );
    }

    #[test]
    fn test_format_timestamp() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(14, 5, 7)
            .unwrap();
        assert_eq!(
            LiteralFormatter::default().format(&SqlLiteral::from(ts)),
            "CONVERT(datetime, '09/03/2024 14:05:07', 103)"
        );

        let iso = LiteralFormatter::new("%Y-%m-%dT%H:%M:%S", 126);
        assert_eq!(
            iso.format(&SqlLiteral::from(ts)),
            "CONVERT(datetime, '2024-03-09T14:05:07', 126)"
        );
    }

    #[test]
    fn test_format_list() {
        let literals = vec![SqlLiteral::from(1), SqlLiteral::from("a"), SqlLiteral::Null];
        assert_eq!(LiteralFormatter::default().format_list(&literals), "1, 'a', NULL");
        assert_eq!(LiteralFormatter::default().format_list(&Vec::<SqlLiteral>::new()), "");
    }

    #[test]
    fn test_format_values_unsupported_type() {
        assert_eq!(format_values(&[json!(1), json!("x")]).unwrap(), "1, 'x'");

        let err = format_value(&json!({"nested": true})).unwrap_err();
        assert!(matches!(err, LiteralError::UnsupportedType { .. }));
        assert!(err.to_string().contains("Type not handled"));

        assert!(format_values(&[json!(1), json!([2])]).is_err());
    }
}

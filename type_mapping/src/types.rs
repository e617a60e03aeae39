//! Literal value definitions
//!
//! This module provides the closed set of scalar values that can be
//! written inline into statement text.

use crate::errors::LiteralError;
use crate::keywords::Function;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Scalar value that can be rendered as an inline SQL literal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SqlLiteral {
    Null,
    Identifier(Uuid),
    Text(String),
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Timestamp(NaiveDateTime),
    Character(char),
    Function(Function),
}

impl SqlLiteral {
    /// Name of the variant, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            SqlLiteral::Null => "null",
            SqlLiteral::Identifier(_) => "identifier",
            SqlLiteral::Text(_) => "text",
            SqlLiteral::Boolean(_) => "boolean",
            SqlLiteral::Integer(_) => "integer",
            SqlLiteral::Float(_) => "float",
            SqlLiteral::Timestamp(_) => "timestamp",
            SqlLiteral::Character(_) => "character",
            SqlLiteral::Function(_) => "function",
        }
    }
}

impl From<String> for SqlLiteral {
    fn from(val: String) -> Self {
        SqlLiteral::Text(val)
    }
}

impl From<&str> for SqlLiteral {
    fn from(val: &str) -> Self {
        SqlLiteral::Text(val.to_string())
    }
}

impl From<bool> for SqlLiteral {
    fn from(val: bool) -> Self {
        SqlLiteral::Boolean(val)
    }
}

macro_rules! integer_literal {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for SqlLiteral {
                fn from(val: $ty) -> Self {
                    SqlLiteral::Integer(i64::from(val))
                }
            }
        )*
    };
}

integer_literal!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for SqlLiteral {
    fn from(val: f32) -> Self {
        SqlLiteral::Float(f64::from(val))
    }
}

impl From<f64> for SqlLiteral {
    fn from(val: f64) -> Self {
        SqlLiteral::Float(val)
    }
}

impl From<Uuid> for SqlLiteral {
    fn from(val: Uuid) -> Self {
        SqlLiteral::Identifier(val)
    }
}

impl From<NaiveDateTime> for SqlLiteral {
    fn from(val: NaiveDateTime) -> Self {
        SqlLiteral::Timestamp(val)
    }
}

impl From<DateTime<Utc>> for SqlLiteral {
    fn from(val: DateTime<Utc>) -> Self {
        SqlLiteral::Timestamp(val.naive_utc())
    }
}

impl From<char> for SqlLiteral {
    fn from(val: char) -> Self {
        SqlLiteral::Character(val)
    }
}

impl From<Function> for SqlLiteral {
    fn from(val: Function) -> Self {
        SqlLiteral::Function(val)
    }
}

impl<T> From<Option<T>> for SqlLiteral
where
    T: Into<SqlLiteral>,
{
    fn from(val: Option<T>) -> Self {
        match val {
            Some(v) => v.into(),
            None => SqlLiteral::Null,
        }
    }
}

/// Dynamic values coming from parameters or deserialized payloads.
/// Arrays and objects have no inline literal form.
impl TryFrom<&Value> for SqlLiteral {
    type Error = LiteralError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(SqlLiteral::Null),
            Value::Bool(b) => Ok(SqlLiteral::Boolean(*b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(SqlLiteral::Integer(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(SqlLiteral::Float(f))
                } else {
                    Err(LiteralError::UnsupportedType {
                        value: n.to_string(),
                        type_name: "number",
                    })
                }
            }
            Value::String(s) => Ok(SqlLiteral::Text(s.clone())),
            Value::Array(_) => Err(LiteralError::UnsupportedType {
                value: value.to_string(),
                type_name: "array",
            }),
            Value::Object(_) => Err(LiteralError::UnsupportedType {
                value: value.to_string(),
                type_name: "object",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_conversions() {
        assert_eq!(SqlLiteral::from("Fluffy"), SqlLiteral::Text("Fluffy".to_string()));
        assert_eq!(SqlLiteral::from(42_i32), SqlLiteral::Integer(42));
        assert_eq!(SqlLiteral::from(7_u8), SqlLiteral::Integer(7));
        assert_eq!(SqlLiteral::from(true), SqlLiteral::Boolean(true));
        assert_eq!(SqlLiteral::from('A'), SqlLiteral::Character('A'));
        assert_eq!(SqlLiteral::from(None::<i64>), SqlLiteral::Null);
        assert_eq!(SqlLiteral::from(Some("x")), SqlLiteral::Text("x".to_string()));
        assert_eq!(
            SqlLiteral::from(Function::GetDate),
            SqlLiteral::Function(Function::GetDate)
        );
    }

    #[test]
    fn test_try_from_json_scalars() {
        assert_eq!(SqlLiteral::try_from(&json!(null)), Ok(SqlLiteral::Null));
        assert_eq!(SqlLiteral::try_from(&json!(false)), Ok(SqlLiteral::Boolean(false)));
        assert_eq!(SqlLiteral::try_from(&json!(-3)), Ok(SqlLiteral::Integer(-3)));
        assert_eq!(SqlLiteral::try_from(&json!(1.5)), Ok(SqlLiteral::Float(1.5)));
        assert_eq!(
            SqlLiteral::try_from(&json!("it's")),
            Ok(SqlLiteral::Text("it's".to_string()))
        );
    }

    #[test]
    fn test_try_from_json_rejects_collections() {
        let err = SqlLiteral::try_from(&json!([1, 2])).unwrap_err();
        assert!(matches!(
            err,
            LiteralError::UnsupportedType { type_name: "array", .. }
        ));

        let err = SqlLiteral::try_from(&json!({"a": 1})).unwrap_err();
        assert!(matches!(
            err,
            LiteralError::UnsupportedType { type_name: "object", .. }
        ));
    }
}

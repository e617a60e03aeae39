//! Serialization utilities
//!
//! This module turns serializable records into named parameter lists.

use serde::Serialize;
use serde_json::Value;

/// Convert a serializable record into `(name, value)` parameter pairs.
/// Anything that does not serialize to a JSON object yields no parameters.
pub fn serialize_to_parameters<T: Serialize>(data: &T) -> Vec<(String, Value)> {
    match serde_json::to_value(data) {
        Ok(Value::Object(map)) => map.into_iter().collect(),
        _ => Vec::new(),
    }
}

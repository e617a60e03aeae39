//! Bound parameters
//!
//! Parameters keep insertion order and may repeat a name; nothing is
//! deduplicated.

use crate::query_builder::builder::StatementBuilder;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use type_mapping::serialize_to_parameters;

impl StatementBuilder {
    /// Record a parameter under `name` as given
    pub fn add_parameter(mut self, name: &str, value: impl Into<Value>) -> Self {
        if !name.is_empty() {
            self.parameters.push((name.to_string(), value.into()));
        }
        self
    }

    /// Record a parameter, adding the configured prefix to `name`
    pub fn add_tagged_parameter(self, name: &str, value: impl Into<Value>) -> Self {
        if name.is_empty() {
            return self;
        }
        let tagged = format!("{}{}", self.settings.parameter_prefix, name);
        self.add_parameter(&tagged, value)
    }

    pub fn add_parameters<I, K, V>(self, parameters: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        parameters
            .into_iter()
            .fold(self, |builder, (name, value)| builder.add_parameter(name.as_ref(), value))
    }

    /// Record every field of a serializable record as a tagged parameter
    pub fn add_parameters_from<T: Serialize>(self, record: &T) -> Self {
        serialize_to_parameters(record)
            .into_iter()
            .fold(self, |builder, (name, value)| builder.add_tagged_parameter(&name, value))
    }

    /// Append another builder's parameters after this builder's own
    pub fn combine_parameters(mut self, other: &StatementBuilder) -> Self {
        self.parameters.extend(other.parameters.iter().cloned());
        self
    }

    pub fn parameters(&self) -> &[(String, Value)] {
        &self.parameters
    }

    /// Parameters keyed by name with the prefix stripped, ready for an
    /// execution call. Null values map to `None`; a repeated name keeps its last value.
    pub fn parameters_map(&self) -> HashMap<String, Option<Value>> {
        let prefix = self.settings.parameter_prefix.as_str();

        self.parameters
            .iter()
            .map(|(name, value)| {
                let key = name.strip_prefix(prefix).unwrap_or(name.as_str()).to_string();
                let value = match value {
                    Value::Null => None,
                    other => Some(other.clone()),
                };
                (key, value)
            })
            .collect()
    }
}

//! Adapter configuration values
//!
//! An [`AdapterConfig`] is an opaque string-keyed map handed to every adapter
//! at construction. Required keys vary per adapter type; each adapter
//! validates its own requirements before accepting the configuration.

use crate::error::{AdapterError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Configuration map passed to adapters at construction
///
/// Immutable from the adapter's point of view once handed over: adapters hold
/// it by value and never write back. Built either directly with the
/// `with`-style builder or from any JSON object via [`AdapterConfig::from_value`].
///
/// # Example
///
/// ```rust
/// use crewlink_core::config::AdapterConfig;
/// use serde_json::json;
///
/// let config = AdapterConfig::new()
///     .with("tools", json!([{ "name": "add", "parameters": {} }]))
///     .with("timeout_ms", json!(5000));
///
/// assert!(config.get("tools").is_some());
/// assert_eq!(config.get_u64("timeout_ms"), Some(5000));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdapterConfig(Map<String, Value>);

impl AdapterConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from a JSON value
    ///
    /// Fails with a configuration error unless the value is a JSON object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(AdapterError::configuration(format!(
                "Configuration must be a JSON object, got {}",
                type_name(&other)
            ))),
        }
    }

    /// Add a key, builder style
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    /// Look up a key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Look up a string value
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Look up an unsigned integer value
    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.0.get(key).and_then(Value::as_u64)
    }

    /// Look up an array value
    pub fn get_array(&self, key: &str) -> Option<&Vec<Value>> {
        self.0.get(key).and_then(Value::as_array)
    }

    /// Look up a required key
    ///
    /// Absence of a required key is a construction-time failure.
    pub fn require(&self, key: &str) -> Result<&Value> {
        self.0
            .get(key)
            .ok_or_else(|| AdapterError::configuration(format!("Missing required field: {key}")))
    }

    /// Check whether a key is present
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of configured keys
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the configuration is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for AdapterConfig {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

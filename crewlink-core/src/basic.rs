//! Minimal reference adapter
//!
//! [`BasicAdapter`] is the smallest complete implementation of the
//! [`Adapter`] contract: one required config field, one optional call
//! argument, full metadata on every response. Useful as a wiring check and
//! as the fixture for contract-level tests.

use crate::adapter::Adapter;
use crate::config::AdapterConfig;
use crate::error::Result;
use crate::response::{AdapterMetadata, AdapterResponse};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Instant;

const DEFAULT_MESSAGE: &str = "Hello from BasicAdapter!";

/// Greeting adapter requiring a `"name"` config field
///
/// `execute` reads an optional `"message"` argument and answers
/// `"<name>: <message>"`.
#[derive(Debug, Clone)]
pub struct BasicAdapter {
    name: String,
}

impl BasicAdapter {
    /// Construct from configuration, validating required fields
    pub fn from_config(config: AdapterConfig) -> Result<Self> {
        let name = config
            .require("name")?
            .as_str()
            .ok_or_else(|| crate::error::AdapterError::configuration("name must be a string"))?
            .to_string();
        Ok(Self { name })
    }

    /// Construct from a raw JSON object
    pub fn from_value(value: Value) -> Result<Self> {
        Self::from_config(AdapterConfig::from_value(value)?)
    }
}

#[async_trait]
impl Adapter for BasicAdapter {
    fn source(&self) -> &'static str {
        "BasicAdapter"
    }

    async fn execute(&self, args: Value) -> Result<AdapterResponse> {
        let started = Instant::now();
        let message = args
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_MESSAGE);

        let data = format!("{}: {}", self.name, message);
        let metadata = AdapterMetadata::capture(self.source(), started);
        Ok(AdapterResponse::success(Value::String(data)).with_metadata(metadata))
    }
}

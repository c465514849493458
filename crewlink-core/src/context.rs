//! Model-context windowing adapter
//!
//! [`ContextProtocolAdapter`] prepares a context string and a message list
//! for a model with a bounded context window: both are cut down to the
//! configured `"context_size"`, and the result records whether the context
//! was truncated.

use crate::adapter::Adapter;
use crate::config::AdapterConfig;
use crate::error::{AdapterError, Result};
use crate::response::{AdapterMetadata, AdapterResponse};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Instant;

/// Adapter windowing context data to a fixed model context size
///
/// Requires `"model_name"` (string) and `"context_size"` (integer) in its
/// configuration. `execute` reads an optional `"context"` string and
/// `"messages"` list, truncates both to `context_size`, and returns the
/// windowed payload together with the original length and a truncation flag.
#[derive(Debug, Clone)]
pub struct ContextProtocolAdapter {
    model_name: String,
    context_size: usize,
}

impl ContextProtocolAdapter {
    /// Construct from configuration, validating required fields
    pub fn from_config(config: AdapterConfig) -> Result<Self> {
        let model_name = config
            .require("model_name")?
            .as_str()
            .ok_or_else(|| AdapterError::configuration("model_name must be a string"))?
            .to_string();
        let context_size = config
            .require("context_size")?
            .as_u64()
            .ok_or_else(|| AdapterError::configuration("context_size must be an integer"))?
            as usize;
        Ok(Self {
            model_name,
            context_size,
        })
    }

    /// Construct from a raw JSON object
    pub fn from_value(value: Value) -> Result<Self> {
        Self::from_config(AdapterConfig::from_value(value)?)
    }

    fn window(&self, context: &str, messages: &[Value]) -> Value {
        let original_length = context.chars().count();
        let windowed: String = context.chars().take(self.context_size).collect();
        let kept = &messages[..messages.len().min(self.context_size)];
        json!({
            "model": self.model_name,
            "context": windowed,
            "messages": kept,
            "metadata": {
                "original_context_length": original_length,
                "truncated": original_length > self.context_size
            }
        })
    }
}

#[async_trait]
impl Adapter for ContextProtocolAdapter {
    fn source(&self) -> &'static str {
        "ContextProtocolAdapter"
    }

    async fn execute(&self, args: Value) -> Result<AdapterResponse> {
        let started = Instant::now();
        let context = args.get("context").and_then(Value::as_str).unwrap_or("");
        let messages = args
            .get("messages")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        let data = self.window(context, &messages);
        let metadata = AdapterMetadata::capture(self.source(), started)
            .with_data("model", json!(self.model_name));
        Ok(AdapterResponse::success(data).with_metadata(metadata))
    }
}

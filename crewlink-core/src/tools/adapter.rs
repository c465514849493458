//! Native tool adapter: the core registration and dispatch engine
//!
//! Holds an ordered list of [`ToolSpec`]s built once at construction,
//! converts them to framework-native [`AgentTool`]s, and executes named
//! tools into uniform [`AdapterResponse`] envelopes.

use super::tool::{echo_handler, stringify, AgentTool, ToolFn, ToolSpec};
use crate::adapter::Adapter;
use crate::config::AdapterConfig;
use crate::error::{AdapterError, Result};
use crate::response::{AdapterMetadata, AdapterResponse};
use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Resolve and run one named tool call, folding every expected failure into
/// a failed response with timing metadata
///
/// Shared by the native and MCP adapters; `runner_for` picks the execution
/// path for a resolved spec (local handler, remote proxy, or echo).
pub(crate) async fn dispatch<F>(
    tools: &[ToolSpec],
    args: &Value,
    source: &'static str,
    timeout: Option<Duration>,
    runner_for: F,
) -> AdapterResponse
where
    F: Fn(&ToolSpec) -> Arc<dyn ToolFn>,
{
    let started = Instant::now();

    let tool_name = args
        .get("tool_name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty());
    let Some(tool_name) = tool_name else {
        return AdapterResponse::failure("Tool name is required")
            .with_metadata(AdapterMetadata::capture(source, started));
    };

    let parameters = args
        .get("parameters")
        .cloned()
        .unwrap_or_else(|| Value::Object(Map::new()));

    let Some(spec) = tools.iter().find(|spec| spec.name == tool_name) else {
        return AdapterResponse::failure(format!("Tool {tool_name} not found")).with_metadata(
            AdapterMetadata::capture(source, started).with_data("tool", json!(tool_name)),
        );
    };

    let runner = runner_for(spec);
    let call = runner.call(parameters);
    let outcome = match timeout {
        Some(limit) => match tokio::time::timeout(limit, call).await {
            Ok(result) => result,
            Err(_) => Err(AdapterError::execution(
                tool_name,
                format!("timed out after {}ms", limit.as_millis()),
            )),
        },
        None => call.await,
    };

    match outcome {
        Ok(value) => {
            tracing::debug!(
                tool = tool_name,
                duration_ms = started.elapsed().as_millis() as u64,
                success = true,
                "tool executed"
            );
            AdapterResponse::success(Value::String(stringify(&value))).with_metadata(
                AdapterMetadata::capture(source, started).with_data("tool", json!(tool_name)),
            )
        }
        Err(err) => {
            let message = err.to_string();
            tracing::warn!(tool = tool_name, error = %message, "tool execution failed");
            AdapterResponse::failure(message.clone()).with_metadata(
                AdapterMetadata::capture(source, started)
                    .with_data("tool", json!(tool_name))
                    .with_data("error", json!(message)),
            )
        }
    }
}

/// Validate the raw `"tools"` entry of a configuration
pub(crate) fn tools_entries(config: &AdapterConfig) -> Result<&Vec<Value>> {
    let entries = config
        .require("tools")?
        .as_array()
        .ok_or_else(|| AdapterError::configuration("Tools configuration must be a list"))?;
    if entries.is_empty() {
        return Err(AdapterError::configuration(
            "Tools configuration must not be empty",
        ));
    }
    Ok(entries)
}

/// Parse tool entries with partial-failure semantics
///
/// A malformed entry is logged and skipped; good entries still register.
pub(crate) fn parse_entries(entries: &[Value]) -> Vec<ToolSpec> {
    entries
        .iter()
        .filter_map(|entry| match ToolSpec::from_value(entry) {
            Ok(spec) => Some(spec),
            Err(err) => {
                tracing::warn!(error = %err, "skipping malformed tool entry");
                None
            }
        })
        .collect()
}

/// Adapter over locally-implemented tools
///
/// Built either from a configuration (`"tools"` entry list, handlers default
/// to echo) or from code-built specs carrying real handlers.
pub struct NativeToolsAdapter {
    tools: Vec<ToolSpec>,
    timeout: Option<Duration>,
}

impl std::fmt::Debug for NativeToolsAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeToolsAdapter")
            .field("tools", &self.tools.iter().map(|t| &t.name).collect::<Vec<_>>())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl NativeToolsAdapter {
    /// Construct from configuration, validating the `"tools"` entry
    ///
    /// Honors an optional `"timeout_ms"` key bounding each execution.
    pub fn from_config(config: AdapterConfig) -> Result<Self> {
        let tools = parse_entries(tools_entries(&config)?);
        let timeout = config.get_u64("timeout_ms").map(Duration::from_millis);
        Ok(Self { tools, timeout })
    }

    /// Construct from a raw JSON object
    pub fn from_value(value: Value) -> Result<Self> {
        Self::from_config(AdapterConfig::from_value(value)?)
    }

    /// Construct from code-built specs with handlers attached
    pub fn from_specs(tools: Vec<ToolSpec>) -> Result<Self> {
        if tools.is_empty() {
            return Err(AdapterError::configuration(
                "Tools configuration must not be empty",
            ));
        }
        Ok(Self {
            tools,
            timeout: None,
        })
    }

    /// Bound each execution to a timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Registered tool specs, in registration order
    pub fn tools(&self) -> &[ToolSpec] {
        &self.tools
    }

    /// Convert every registered spec to its framework-native form
    ///
    /// Pure: no side effects beyond object creation, structurally equal
    /// results on repeated calls.
    pub fn get_all_tools(&self) -> Vec<AgentTool> {
        self.tools.iter().map(AgentTool::from_spec).collect()
    }
}

#[async_trait]
impl Adapter for NativeToolsAdapter {
    fn source(&self) -> &'static str {
        "NativeToolsAdapter"
    }

    async fn execute(&self, args: Value) -> Result<AdapterResponse> {
        Ok(dispatch(&self.tools, &args, self.source(), self.timeout, |spec| {
            spec.handler
                .clone()
                .unwrap_or_else(|| echo_handler(&spec.name))
        })
        .await)
    }
}

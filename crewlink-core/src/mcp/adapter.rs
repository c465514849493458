//! MCP-backed tool adapter
//!
//! Remote tools carry no local handler. With a live [`McpSession`] attached,
//! execution is proxied through `call_tool` and the returned content blocks
//! are folded into text; without one, the adapter still registers and
//! executes its catalogue through the default echo path (useful as a dry-run
//! or for schema-only consumers).

use super::session::McpSession;
use crate::adapter::Adapter;
use crate::config::AdapterConfig;
use crate::error::Result;
use crate::response::AdapterResponse;
use crate::tools::{dispatch, echo_handler, parse_entries, tools_entries};
use crate::tools::{AgentTool, ToolFn, ToolSpec};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Proxies one tool's execution through a remote session
struct SessionRunner {
    session: Arc<dyn McpSession>,
    tool: String,
}

#[async_trait]
impl ToolFn for SessionRunner {
    async fn call(&self, args: Value) -> Result<Value> {
        let result = self.session.call_tool(&self.tool, args).await?;
        result.into_text(&self.tool).map(Value::String)
    }
}

/// Adapter over tools served by a remote MCP session
pub struct McpToolsAdapter {
    tools: Vec<ToolSpec>,
    session: Option<Arc<dyn McpSession>>,
    timeout: Option<Duration>,
}

impl std::fmt::Debug for McpToolsAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("McpToolsAdapter")
            .field("tools", &self.tools.iter().map(|t| &t.name).collect::<Vec<_>>())
            .field("connected", &self.session.is_some())
            .finish()
    }
}

impl McpToolsAdapter {
    /// Construct standalone from configuration (no live session)
    ///
    /// Validation matches the native adapter: `"tools"` must be a non-empty
    /// list, malformed entries are skipped. Honors `"timeout_ms"`.
    pub fn from_config(config: AdapterConfig) -> Result<Self> {
        let tools = parse_entries(tools_entries(&config)?);
        let timeout = config.get_u64("timeout_ms").map(Duration::from_millis);
        Ok(Self {
            tools,
            session: None,
            timeout,
        })
    }

    /// Construct from a raw JSON object
    pub fn from_value(value: Value) -> Result<Self> {
        Self::from_config(AdapterConfig::from_value(value)?)
    }

    /// Construct from a live session's tool catalogue
    ///
    /// Pulls `list_tools` once at connection time; execution for every
    /// registered tool is proxied through `call_tool`.
    pub async fn connect(session: Arc<dyn McpSession>) -> Result<Self> {
        let tools = session
            .list_tools()
            .await?
            .into_iter()
            .map(|def| {
                ToolSpec::new(def.name, def.description).with_parameters(def.input_schema)
            })
            .collect();

        Ok(Self {
            tools,
            session: Some(session),
            timeout: None,
        })
    }

    /// Bound each execution to a timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Registered tool specs, in catalogue order
    pub fn tools(&self) -> &[ToolSpec] {
        &self.tools
    }

    /// Execution path for one spec: remote proxy when connected, echo otherwise
    fn runner_for(&self, spec: &ToolSpec) -> Arc<dyn ToolFn> {
        match &self.session {
            Some(session) => Arc::new(SessionRunner {
                session: Arc::clone(session),
                tool: spec.name.clone(),
            }),
            None => echo_handler(&spec.name),
        }
    }

    /// Convert every registered spec to its framework-native form
    pub fn get_all_tools(&self) -> Vec<AgentTool> {
        self.tools
            .iter()
            .map(|spec| AgentTool::from_spec_with_handler(spec, self.runner_for(spec)))
            .collect()
    }
}

#[async_trait]
impl Adapter for McpToolsAdapter {
    fn source(&self) -> &'static str {
        "McpToolsAdapter"
    }

    async fn execute(&self, args: Value) -> Result<AdapterResponse> {
        Ok(
            dispatch(&self.tools, &args, self.source(), self.timeout, |spec| {
                self.runner_for(spec)
            })
            .await,
        )
    }
}

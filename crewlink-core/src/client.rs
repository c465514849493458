//! Client managing named adapters and their tool sets
//!
//! The client is the integration point for the outer agent framework: it
//! registers adapters from configuration, connects MCP sessions, caches each
//! adapter's framework-native tools under its name, and owns the lifecycle
//! of every remote session it opens.

use crate::adapter::Adapter;
use crate::config::AdapterConfig;
use crate::error::Result;
use crate::mcp::{McpSession, McpToolsAdapter};
use crate::tools::{AgentTool, NativeToolsAdapter, ToolSpec};
use std::collections::HashMap;
use std::sync::Arc;

/// Orchestrator for a collection of named adapters and their tools
///
/// Tool-set flattening follows first-registration order across names;
/// re-registering an existing name replaces its tools in place without
/// moving it in the order.
///
/// Remote sessions opened through the client are owned by it and released in
/// reverse acquisition order by [`AdapterClient::close`].
#[derive(Default)]
pub struct AdapterClient {
    adapters: HashMap<String, Arc<dyn Adapter>>,
    tool_sets: HashMap<String, Vec<AgentTool>>,
    order: Vec<String>,
    sessions: Vec<Arc<dyn McpSession>>,
}

impl std::fmt::Debug for AdapterClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdapterClient")
            .field("adapters", &self.order)
            .field("sessions", &self.sessions.len())
            .finish()
    }
}

impl AdapterClient {
    /// Create an empty client
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a native tool adapter from configuration
    ///
    /// Constructs the adapter (validating the config), materializes its tool
    /// list immediately, and caches it under `name`.
    pub fn register_adapter(&mut self, name: impl Into<String>, config: AdapterConfig) -> Result<()> {
        let adapter = NativeToolsAdapter::from_config(config)?;
        let tools = adapter.get_all_tools();
        self.store(name.into(), Arc::new(adapter), tools);
        Ok(())
    }

    /// Register a native tool adapter from code-built specs with handlers
    pub fn register_tools(&mut self, name: impl Into<String>, specs: Vec<ToolSpec>) -> Result<()> {
        let adapter = NativeToolsAdapter::from_specs(specs)?;
        let tools = adapter.get_all_tools();
        self.store(name.into(), Arc::new(adapter), tools);
        Ok(())
    }

    /// Connect an MCP session and register its tool catalogue
    ///
    /// The client takes ownership of the session and will release it on
    /// [`AdapterClient::close`].
    pub async fn connect_to_mcp_server(
        &mut self,
        name: impl Into<String>,
        session: Arc<dyn McpSession>,
    ) -> Result<()> {
        let adapter = McpToolsAdapter::connect(Arc::clone(&session)).await?;
        let tools = adapter.get_all_tools();
        self.sessions.push(session);
        self.store(name.into(), Arc::new(adapter), tools);
        Ok(())
    }

    fn store(&mut self, name: String, adapter: Arc<dyn Adapter>, tools: Vec<AgentTool>) {
        if !self.adapters.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.adapters.insert(name.clone(), adapter);
        self.tool_sets.insert(name, tools);
    }

    /// Look up a registered adapter by name
    pub fn adapter(&self, name: &str) -> Option<&Arc<dyn Adapter>> {
        self.adapters.get(name)
    }

    /// All tools from all registered adapters, in registration order
    pub fn get_tools(&self) -> Vec<AgentTool> {
        self.order
            .iter()
            .filter_map(|name| self.tool_sets.get(name))
            .flatten()
            .cloned()
            .collect()
    }

    /// One adapter's cached tool list, or empty if unknown
    pub fn get_adapter_tools(&self, name: &str) -> Vec<AgentTool> {
        self.tool_sets.get(name).cloned().unwrap_or_default()
    }

    /// Names of registered adapters, in registration order
    pub fn adapter_names(&self) -> &[String] {
        &self.order
    }

    /// Release every owned session, in reverse acquisition order
    ///
    /// Every session's `close` is attempted even if an earlier one fails;
    /// the first failure is reported after all attempts.
    pub async fn close(&mut self) -> Result<()> {
        let mut first_error = None;
        for session in self.sessions.drain(..).rev() {
            if let Err(err) = session.close().await {
                tracing::warn!(error = %err, "session close failed");
                first_error.get_or_insert(err);
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

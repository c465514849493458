//! # Crewlink - Uniform Tool Invocation for Agent Frameworks
//!
//! Crewlink normalizes heterogeneous tool sources — locally-implemented
//! tools and remote Model Context Protocol (MCP) catalogues — into a single
//! invocation interface an agent framework can consume:
//! - A polymorphic [`Adapter`](adapter::Adapter) contract: validate
//!   configuration at construction, execute asynchronously, return a uniform
//!   [`AdapterResponse`](response::AdapterResponse) envelope with timing
//!   metadata
//! - An explicit [`AdapterRegistry`](registry::AdapterRegistry) mapping
//!   names to adapter factories
//! - Schema derivation from JSON-schema-like parameter blocks into typed
//!   argument schemas, interpreted by a generic validator
//! - An [`AdapterClient`](client::AdapterClient) that manages named adapters,
//!   flattens their tool sets, and owns remote-session lifecycles
//!
//! ## Quick Start
//!
//! ```rust
//! use crewlink_core::prelude::*;
//! use serde_json::{json, Value};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let mut client = AdapterClient::new();
//!
//!     client.register_tools(
//!         "math",
//!         vec![ToolSpec::new("add", "Add two numbers")
//!             .with_parameters(json!({
//!                 "a": { "type": "integer" },
//!                 "b": { "type": "integer" }
//!             }))
//!             .with_handler(tool_fn(|args: Value| async move {
//!                 Ok(json!(args["a"].as_i64().unwrap_or(0)
//!                     + args["b"].as_i64().unwrap_or(0)))
//!             }))],
//!     )?;
//!
//!     let tools = client.get_tools();
//!     let answer = tools[0].invoke(json!({"a": 3, "b": 5})).await?;
//!     assert_eq!(answer, "8");
//!     Ok(())
//! }
//! ```
//!
//! ## Error contract
//!
//! Malformed configuration surfaces as
//! [`AdapterError::Configuration`](error::AdapterError::Configuration) at
//! construction. Expected runtime failures of a tool call — unknown name,
//! handler error, remote error flag, timeout — are folded into a failed
//! response and never cross an adapter's `execute` boundary. A failed tool
//! call never crashes the orchestrator.

pub mod adapter;
pub mod basic;
pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod mcp;
pub mod registry;
pub mod response;
pub mod tools;

pub use adapter::Adapter;
pub use client::AdapterClient;
pub use config::AdapterConfig;
pub use error::{AdapterError, Result};
pub use response::{AdapterMetadata, AdapterResponse};

/// Commonly used types, importable in one line
pub mod prelude {
    pub use crate::adapter::Adapter;
    pub use crate::basic::BasicAdapter;
    pub use crate::client::AdapterClient;
    pub use crate::config::AdapterConfig;
    pub use crate::context::ContextProtocolAdapter;
    pub use crate::error::{AdapterError, Result};
    pub use crate::mcp::{McpSession, McpToolsAdapter};
    pub use crate::registry::AdapterRegistry;
    pub use crate::response::{AdapterMetadata, AdapterResponse};
    pub use crate::tools::{tool_fn, AgentTool, NativeToolsAdapter, ToolSpec};
}

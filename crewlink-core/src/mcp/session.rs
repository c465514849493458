//! Remote session collaborator interface
//!
//! The transport and session establishment for the Model Context Protocol
//! are a black box: the core only needs a tool catalogue and a call-by-name
//! operation returning content blocks with an error flag. [`McpSession`] is
//! that seam; production code implements it over a real MCP client, tests
//! implement it in-process.

use crate::error::{AdapterError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One tool as described by the remote catalogue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpToolDef {
    /// Tool name
    pub name: String,

    /// Human-readable description
    #[serde(default)]
    pub description: String,

    /// JSON Schema for input parameters
    #[serde(default)]
    pub input_schema: Value,
}

/// One content block of a remote call result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpContent {
    /// Text payload
    pub text: String,
}

/// Result of a remote tool call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpCallResult {
    /// Whether the remote side reported a failure
    #[serde(default)]
    pub is_error: bool,

    /// Returned content blocks
    #[serde(default)]
    pub content: Vec<McpContent>,
}

impl McpCallResult {
    /// Concatenated text of all content blocks
    pub fn joined_text(&self) -> String {
        self.content
            .iter()
            .map(|block| block.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Fold the result into text, raising on the error flag
    ///
    /// An error-flagged result becomes an
    /// [`AdapterError::Execution`] carrying the joined error texts.
    pub fn into_text(self, tool: &str) -> Result<String> {
        let text = self.joined_text();
        if self.is_error {
            Err(AdapterError::execution(tool, text))
        } else {
            Ok(text)
        }
    }
}

/// Black-box interface to an established MCP session
#[async_trait]
pub trait McpSession: Send + Sync {
    /// List the session's tool catalogue
    async fn list_tools(&self) -> Result<Vec<McpToolDef>>;

    /// Call a tool by name with JSON arguments
    async fn call_tool(&self, name: &str, arguments: Value) -> Result<McpCallResult>;

    /// Release session resources
    ///
    /// Called by the owning client on teardown; default is a no-op for
    /// sessions without external resources.
    async fn close(&self) -> Result<()> {
        Ok(())
    }
}

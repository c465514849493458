//! Model Context Protocol (MCP) backed tool source
//!
//! The wire protocol and transport are out of scope; [`McpSession`] is the
//! black-box seam the core consumes (list the catalogue, call a tool, get
//! back content blocks or an error flag). [`McpToolsAdapter`] folds those
//! results into the same uniform responses the native adapter produces.

mod adapter;
mod session;

pub use adapter::McpToolsAdapter;
pub use session::{McpCallResult, McpContent, McpSession, McpToolDef};

//! Error types for crewlink operations

/// Result type for crewlink operations
pub type Result<T> = std::result::Result<T, AdapterError>;

/// Error types for the adapter layer
///
/// Only caller mistakes surface as errors: malformed configuration at
/// construction time and registry misuse. Expected runtime failures of an
/// individual tool call are folded into a failed
/// [`AdapterResponse`](crate::response::AdapterResponse) and never cross the
/// adapter boundary, with one exception: the framework-facing
/// [`AgentTool::invoke`](crate::tools::AgentTool::invoke) re-raises
/// [`AdapterError::Execution`] to satisfy the calling framework's own error
/// contract.
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    /// Missing or malformed adapter configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A tool's underlying function failed or a remote call reported an error
    #[error("Tool '{tool}' failed: {message}")]
    Execution {
        /// Name of the failing tool
        tool: String,
        /// Underlying error text
        message: String,
    },

    /// An adapter with this name is already registered
    #[error("Adapter '{0}' is already registered")]
    DuplicateAdapter(String),

    /// No adapter registered under this name
    #[error("Adapter '{0}' not found")]
    AdapterNotFound(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AdapterError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        AdapterError::Configuration(message.into())
    }

    /// Create an execution error for a named tool
    pub fn execution(tool: impl Into<String>, message: impl Into<String>) -> Self {
        AdapterError::Execution {
            tool: tool.into(),
            message: message.into(),
        }
    }
}

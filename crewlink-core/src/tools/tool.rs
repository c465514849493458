//! Tool representation and framework-native conversion
//!
//! A [`ToolSpec`] describes one invocable capability independent of its
//! origin: a name, a description, a parameter block, and an optional handler.
//! [`AgentTool`] is the converted, framework-native callable form: typed
//! argument schema plus an `invoke` that validates, runs, times, and
//! stringifies.

use super::schema::ArgsSchema;
use crate::error::{AdapterError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Instant;

/// Handler seam for a tool's underlying function
///
/// Implement this directly for stateful handlers, or wrap an async closure
/// with [`tool_fn`].
#[async_trait]
pub trait ToolFn: Send + Sync {
    /// Run the tool against a JSON object of arguments
    async fn call(&self, args: Value) -> Result<Value>;
}

type BoxToolFuture = Pin<Box<dyn Future<Output = Result<Value>> + Send>>;

struct FnHandler {
    f: Box<dyn Fn(Value) -> BoxToolFuture + Send + Sync>,
}

#[async_trait]
impl ToolFn for FnHandler {
    async fn call(&self, args: Value) -> Result<Value> {
        (self.f)(args).await
    }
}

/// Wrap an async closure as a shareable tool handler
///
/// # Example
///
/// ```rust
/// use crewlink_core::tools::tool_fn;
/// use serde_json::{json, Value};
///
/// let add = tool_fn(|args: Value| async move {
///     let a = args["a"].as_i64().unwrap_or(0);
///     let b = args["b"].as_i64().unwrap_or(0);
///     Ok(json!(a + b))
/// });
/// ```
pub fn tool_fn<F, Fut>(f: F) -> Arc<dyn ToolFn>
where
    F: Fn(Value) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Value>> + Send + 'static,
{
    Arc::new(FnHandler {
        f: Box::new(move |args| Box::pin(f(args))),
    })
}

/// One invocable capability, independent of its origin
///
/// Created during adapter construction from configuration entries and
/// immutable thereafter. Protocol-backed tools carry no handler; their real
/// call is proxied by the owning adapter.
#[derive(Clone)]
pub struct ToolSpec {
    /// Tool name, unique within an adapter instance
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// Raw parameter block (flat map or `"properties"`-wrapped)
    pub parameters: Value,

    /// Local implementation, if any
    pub handler: Option<Arc<dyn ToolFn>>,
}

impl std::fmt::Debug for ToolSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolSpec")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

impl ToolSpec {
    /// Create a spec with empty parameters and no handler
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Value::Object(serde_json::Map::new()),
            handler: None,
        }
    }

    /// Set the parameter block
    pub fn with_parameters(mut self, parameters: Value) -> Self {
        self.parameters = parameters;
        self
    }

    /// Attach a local handler
    pub fn with_handler(mut self, handler: Arc<dyn ToolFn>) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Parse a spec from one `"tools"` configuration entry
    ///
    /// A missing `"name"` key fails the entry; the owning adapter decides
    /// whether that is fatal (it is not — bad entries are skipped).
    pub fn from_value(entry: &Value) -> Result<Self> {
        let name = entry
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| AdapterError::configuration("Tool entry missing name"))?;

        Ok(Self {
            name: name.to_string(),
            description: entry
                .get("description")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            parameters: entry
                .get("parameters")
                .cloned()
                .unwrap_or_else(|| Value::Object(serde_json::Map::new())),
            handler: None,
        })
    }

    /// Derive the typed argument schema from the parameter block
    pub fn args_schema(&self) -> ArgsSchema {
        ArgsSchema::from_parameters(&self.parameters)
    }
}

/// Default execution for tools without a local handler
///
/// Echoes the tool name and received arguments; protocol-backed adapters
/// replace this with a proxied remote call when a live session is attached.
pub(crate) fn echo_handler(tool_name: &str) -> Arc<dyn ToolFn> {
    let name = tool_name.to_string();
    tool_fn(move |args: Value| {
        let name = name.clone();
        async move { Ok(Value::String(format!("Executed {name} with arguments: {args}"))) }
    })
}

/// Canonical stringification of tool results
///
/// Strings pass through unquoted; everything else renders as compact JSON.
pub(crate) fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Framework-native callable tool object
///
/// Produced by an adapter's `get_all_tools`; consumed by the orchestration
/// framework. `invoke` is the only entry point and owns the error contract:
/// argument or handler failures surface as [`AdapterError::Execution`]
/// carrying the tool name.
#[derive(Clone)]
pub struct AgentTool {
    name: String,
    description: String,
    schema: ArgsSchema,
    handler: Arc<dyn ToolFn>,
}

impl std::fmt::Debug for AgentTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentTool")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

impl AgentTool {
    /// Convert a spec into its framework-native form
    ///
    /// Specs without a handler get the default echo execution.
    pub fn from_spec(spec: &ToolSpec) -> Self {
        let handler = spec
            .handler
            .clone()
            .unwrap_or_else(|| echo_handler(&spec.name));
        Self {
            name: spec.name.clone(),
            description: spec.description.clone(),
            schema: spec.args_schema(),
            handler,
        }
    }

    /// Convert a spec, forcing a specific handler
    pub(crate) fn from_spec_with_handler(spec: &ToolSpec, handler: Arc<dyn ToolFn>) -> Self {
        Self {
            name: spec.name.clone(),
            description: spec.description.clone(),
            schema: spec.args_schema(),
            handler,
        }
    }

    /// Tool name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tool description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Framework-facing JSON Schema for the arguments
    pub fn args_schema(&self) -> Value {
        self.schema.to_json_schema()
    }

    /// Invoke the tool with a JSON object of arguments
    ///
    /// Validates against the derived schema, runs the handler, and returns
    /// the stringified result. Any failure comes back as
    /// [`AdapterError::Execution`] with the tool name and underlying message.
    pub async fn invoke(&self, args: Value) -> Result<String> {
        let started = Instant::now();

        if let Err(issues) = self.schema.validate(&args) {
            let message = issues
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            tracing::warn!(tool = %self.name, %message, "argument validation failed");
            return Err(AdapterError::execution(self.name.clone(), message));
        }

        match self.handler.call(args).await {
            Ok(value) => {
                tracing::debug!(
                    tool = %self.name,
                    duration_ms = started.elapsed().as_millis() as u64,
                    "tool invocation completed"
                );
                Ok(stringify(&value))
            }
            Err(err) => {
                tracing::warn!(tool = %self.name, error = %err, "tool invocation failed");
                match err {
                    already @ AdapterError::Execution { .. } => Err(already),
                    other => Err(AdapterError::execution(self.name.clone(), other.to_string())),
                }
            }
        }
    }
}

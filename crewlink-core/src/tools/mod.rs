//! Tool representation, schema derivation, and the native tool adapter
//!
//! The flow: configuration entries become [`ToolSpec`]s at adapter
//! construction; `get_all_tools` converts each spec into a framework-native
//! [`AgentTool`] with a typed argument schema; the tool's wrapped executor
//! calls back into the adapter's `execute`, which resolves, times, and wraps
//! the result into a uniform response.

mod adapter;
mod schema;
mod tool;

pub use adapter::NativeToolsAdapter;
pub use schema::{ArgsSchema, FieldKind, FieldSpec, ValidationIssue};
pub use tool::{tool_fn, AgentTool, ToolFn, ToolSpec};

pub(crate) use adapter::{dispatch, parse_entries, tools_entries};
pub(crate) use tool::echo_handler;

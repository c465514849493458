//! Adapter capability contract
//!
//! Every tool source implements [`Adapter`]: validate configuration at
//! construction, execute asynchronously, report a stable source name for
//! response metadata.

use crate::error::Result;
use crate::response::AdapterResponse;
use async_trait::async_trait;
use serde_json::Value;

/// The polymorphic contract all adapters implement
///
/// Construction is per-type (`from_config(AdapterConfig) -> Result<Self>`)
/// and runs validation immediately; a missing or malformed required field is
/// an [`AdapterError::Configuration`](crate::error::AdapterError::Configuration)
/// at construction time, never later.
///
/// `execute` never fails for expected runtime conditions: an unknown tool
/// name, a handler error, or a remote call reporting failure all come back as
/// `Ok` with a failed [`AdapterResponse`]. Only caller bugs (malformed call
/// arguments that are not a JSON object, for instance) surface as `Err`.
#[async_trait]
pub trait Adapter: Send + Sync {
    /// Stable adapter type name, used as the `source` field in metadata
    fn source(&self) -> &'static str;

    /// Execute an operation described by a JSON object of call arguments
    async fn execute(&self, args: Value) -> Result<AdapterResponse>;
}

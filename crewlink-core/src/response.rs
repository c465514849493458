//! Uniform response envelope and execution metadata
//!
//! Every adapter execution returns an [`AdapterResponse`]: a success flag,
//! optional data, optional error text, and optional structured metadata.
//! Envelopes are created fresh per call and never mutated afterwards.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Instant;

/// Execution metadata attached to a response
///
/// Captured at the moment a response is built: an RFC 3339 timestamp, the
/// elapsed duration in seconds measured from a caller-supplied start instant,
/// the emitting adapter type, and free-form additional data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdapterMetadata {
    /// RFC 3339 timestamp of response creation
    pub timestamp: String,

    /// Elapsed seconds since the supplied start instant
    pub duration: f64,

    /// Emitting adapter type name
    pub source: String,

    /// Free-form additional data
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub additional_data: Map<String, Value>,
}

impl AdapterMetadata {
    /// Capture metadata for a response being built now
    pub fn capture(source: impl Into<String>, started: Instant) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            duration: started.elapsed().as_secs_f64(),
            source: source.into(),
            additional_data: Map::new(),
        }
    }

    /// Attach an additional data entry
    pub fn with_data(mut self, key: impl Into<String>, value: Value) -> Self {
        self.additional_data.insert(key.into(), value);
        self
    }
}

/// Uniform result envelope returned by every adapter execution
///
/// Invariant: `success == true` implies `error` is unset; `success == false`
/// implies `error` is set and `data` is unset. The constructors are the only
/// way to build one, so the invariant holds by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdapterResponse {
    /// Whether the execution succeeded
    pub success: bool,

    /// Result value on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    /// Error text on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Structured execution metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AdapterMetadata>,
}

impl AdapterResponse {
    /// Create a successful response
    pub fn success(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            metadata: None,
        }
    }

    /// Create a failed response
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            metadata: None,
        }
    }

    /// Attach metadata
    pub fn with_metadata(mut self, metadata: AdapterMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Check if this response represents success
    pub fn is_success(&self) -> bool {
        self.success
    }
}

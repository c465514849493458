//! End-to-end scenarios across the adapter layer
//!
//! Exercises the full control flow: register adapters with configurations,
//! materialize framework-native tools, invoke them, and check that results
//! and failures come back through the uniform response envelope.

use async_trait::async_trait;
use crewlink_core::prelude::*;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_test_writer()
        .try_init();
}

fn math_specs() -> Vec<ToolSpec> {
    vec![
        ToolSpec::new("add", "Add two numbers")
            .with_parameters(json!({
                "a": { "type": "integer", "description": "First number" },
                "b": { "type": "integer", "description": "Second number" }
            }))
            .with_handler(tool_fn(|args: Value| async move {
                Ok(json!(args["a"].as_i64().unwrap_or(0) + args["b"].as_i64().unwrap_or(0)))
            })),
        ToolSpec::new("multiply", "Multiply two numbers")
            .with_parameters(json!({
                "a": { "type": "integer", "description": "First number" },
                "b": { "type": "integer", "description": "Second number" }
            }))
            .with_handler(tool_fn(|args: Value| async move {
                Ok(json!(args["a"].as_i64().unwrap_or(0) * args["b"].as_i64().unwrap_or(0)))
            })),
    ]
}

#[tokio::test]
async fn math_round_trip_through_client() {
    init_tracing();

    let mut client = AdapterClient::new();
    client.register_tools("math", math_specs()).unwrap();

    let tools = client.get_tools();
    assert_eq!(tools.len(), 2);

    let add = tools.iter().find(|t| t.name() == "add").unwrap();
    assert_eq!(add.description(), "Add two numbers");
    assert_eq!(add.invoke(json!({"a": 3, "b": 5})).await.unwrap(), "8");

    let multiply = tools.iter().find(|t| t.name() == "multiply").unwrap();
    assert_eq!(multiply.invoke(json!({"a": 4, "b": 6})).await.unwrap(), "24");
}

#[tokio::test]
async fn adapter_execute_contract() {
    init_tracing();

    let adapter = NativeToolsAdapter::from_specs(math_specs()).unwrap();

    // Success path with full metadata
    let response = adapter
        .execute(json!({"tool_name": "add", "parameters": {"a": 1, "b": 2}}))
        .await
        .unwrap();
    assert!(response.is_success());
    assert_eq!(response.data, Some(json!("3")));
    let metadata = response.metadata.expect("metadata present");
    assert!(!metadata.timestamp.is_empty());
    assert!(metadata.duration >= 0.0);
    assert_eq!(metadata.source, "NativeToolsAdapter");

    // Missing tool is a failed response, never an error
    let response = adapter
        .execute(json!({"tool_name": "nonexistent"}))
        .await
        .unwrap();
    assert!(!response.is_success());
    assert_eq!(response.error.as_deref(), Some("Tool nonexistent not found"));

    // Missing tool name takes the same failed-response policy
    let response = adapter.execute(json!({})).await.unwrap();
    assert_eq!(response.error.as_deref(), Some("Tool name is required"));
}

#[tokio::test]
async fn registry_builds_configured_adapters() {
    init_tracing();

    let mut registry = AdapterRegistry::new();
    registry
        .register("tools", |config| {
            Ok(Arc::new(NativeToolsAdapter::from_config(config)?) as Arc<dyn Adapter>)
        })
        .unwrap();
    registry
        .register("basic", |config| {
            Ok(Arc::new(BasicAdapter::from_config(config)?) as Arc<dyn Adapter>)
        })
        .unwrap();

    let adapter = registry
        .build(
            "tools",
            AdapterConfig::from_value(json!({
                "tools": [{
                    "name": "probe",
                    "description": "Data-only tool",
                    "parameters": { "k": { "type": "string" } }
                }]
            }))
            .unwrap(),
        )
        .unwrap();

    let response = adapter
        .execute(json!({"tool_name": "probe", "parameters": {"k": "v"}}))
        .await
        .unwrap();
    assert!(response.is_success());

    // Duplicate names are rejected; unknown lookups fail
    assert!(registry
        .register("basic", |config| {
            Ok(Arc::new(BasicAdapter::from_config(config)?) as Arc<dyn Adapter>)
        })
        .is_err());
    assert!(registry.get("nope").is_err());
}

/// Counts remote calls and closes, standing in for a live MCP session
struct CountingSession {
    calls: AtomicUsize,
    closes: Arc<AtomicUsize>,
}

#[async_trait]
impl McpSession for CountingSession {
    async fn list_tools(&self) -> Result<Vec<crewlink_core::mcp::McpToolDef>> {
        Ok(vec![crewlink_core::mcp::McpToolDef {
            name: "summarize".to_string(),
            description: "Summarize a document".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "text": { "type": "string", "description": "Document body" }
                }
            }),
        }])
    }

    async fn call_tool(
        &self,
        name: &str,
        arguments: Value,
    ) -> Result<crewlink_core::mcp::McpCallResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let text = arguments["text"].as_str().unwrap_or_default();
        Ok(crewlink_core::mcp::McpCallResult {
            is_error: false,
            content: vec![
                crewlink_core::mcp::McpContent {
                    text: format!("{name}:"),
                },
                crewlink_core::mcp::McpContent {
                    text: text.chars().take(10).collect(),
                },
            ],
        })
    }

    async fn close(&self) -> Result<()> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[tokio::test]
async fn mcp_session_end_to_end() {
    init_tracing();

    let closes = Arc::new(AtomicUsize::new(0));
    let session = Arc::new(CountingSession {
        calls: AtomicUsize::new(0),
        closes: Arc::clone(&closes),
    });

    let mut client = AdapterClient::new();
    client.register_tools("math", math_specs()).unwrap();
    client
        .connect_to_mcp_server("docs", Arc::clone(&session) as Arc<dyn McpSession>)
        .await
        .unwrap();

    // Flattening preserves registration order across sources
    let names: Vec<_> = client.get_tools().iter().map(|t| t.name().to_string()).collect();
    assert_eq!(names, vec!["add", "multiply", "summarize"]);

    // Remote invocation proxies through the session and joins content blocks
    let summarize = client
        .get_adapter_tools("docs")
        .into_iter()
        .find(|t| t.name() == "summarize")
        .unwrap();
    let result = summarize
        .invoke(json!({"text": "a very long document body"}))
        .await
        .unwrap();
    assert_eq!(result, "summarize:\na very lon");
    assert_eq!(session.calls.load(Ordering::SeqCst), 1);

    // Closing the client releases the session exactly once
    client.close().await.unwrap();
    assert_eq!(closes.load(Ordering::SeqCst), 1);
    client.close().await.unwrap();
    assert_eq!(closes.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn config_driven_registration_matches_example_shape() {
    init_tracing();

    // The documented configuration input shape, data-only
    let mut client = AdapterClient::new();
    client
        .register_adapter(
            "math",
            AdapterConfig::from_value(json!({
                "tools": [{
                    "name": "add",
                    "description": "Add two numbers",
                    "parameters": {
                        "a": { "type": "integer", "description": "First number" },
                        "b": { "type": "integer", "description": "Second number" }
                    }
                }, {
                    "name": "multiply",
                    "description": "Multiply two numbers",
                    "parameters": {
                        "a": { "type": "integer", "description": "First number" },
                        "b": { "type": "integer", "description": "Second number" }
                    }
                }]
            }))
            .unwrap(),
        )
        .unwrap();

    let tools = client.get_tools();
    assert_eq!(tools.len(), 2);

    // Derived schemas carry types and descriptions through
    let schema = tools[0].args_schema();
    assert_eq!(schema["properties"]["a"]["type"], json!("integer"));
    assert_eq!(
        schema["properties"]["a"]["description"],
        json!("First number")
    );
    assert_eq!(schema["required"], json!(["a", "b"]));
}

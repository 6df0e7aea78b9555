//! Helper functions for MCP tools

use crate::core::error::Result as CoreResult;
use crate::core::services::Services;
use crate::mcp::error::McpError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Deserialize tool arguments, treating a missing object as `{}`
pub fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, McpError> {
    let args = if args.is_null() {
        Value::Object(Default::default())
    } else {
        args
    };
    serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))
}

/// Run a filesystem-bound core operation off the async runtime
pub async fn run_blocking<T, F>(services: &Arc<Services>, operation: F) -> Result<T, McpError>
where
    T: Send + 'static,
    F: FnOnce(&Services) -> CoreResult<T> + Send + 'static,
{
    let services = Arc::clone(services);
    tokio::task::spawn_blocking(move || operation(&services))
        .await
        .map_err(|e| McpError::InternalError(format!("Task failed: {e}")))?
        .map_err(McpError::from)
}

/// JSON schema property for the manual name argument
pub fn manual_name_property() -> Value {
    serde_json::json!({
        "type": "string",
        "description": "Manual name (directory under the manuals root), e.g. '給付金編'"
    })
}

/// JSON schema property for a section id argument
pub fn section_id_property(description: &str) -> Value {
    serde_json::json!({
        "type": "string",
        "description": description
    })
}

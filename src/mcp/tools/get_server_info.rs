//! Get server info tool handler
//!
//! Returns version and protocol information about the running
//! manual-tools-mcp server.

use super::handler::{json_content, McpToolHandler};
use super::helpers::run_blocking;
use super::TOOL_NAMES;
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema, PROTOCOL_VERSION};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;

pub const SERVER_NAME: &str = "manual-tools-mcp";

/// Server identity and the manuals it currently serves
#[derive(Debug, Serialize)]
pub struct ServerInfoReport {
    pub name: String,
    pub version: String,
    pub protocol_version: String,
    pub tools: Vec<String>,
    pub manuals_root: PathBuf,
    pub manual_count: usize,
}

impl ServerInfoReport {
    pub fn collect(services: &Services) -> crate::core::error::Result<Self> {
        Ok(Self {
            name: SERVER_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            protocol_version: PROTOCOL_VERSION.to_string(),
            tools: TOOL_NAMES.iter().map(|t| t.to_string()).collect(),
            manuals_root: services.repository.root().to_path_buf(),
            manual_count: services.repository.list_manuals()?.len(),
        })
    }
}

pub struct GetServerInfoHandler {
    services: Arc<Services>,
}

impl GetServerInfoHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for GetServerInfoHandler {
    fn name(&self) -> &str {
        "get_server_info"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_server_info".to_string(),
            description: "Get version information about the running manual-tools-mcp server: \
                         server version, protocol version, available tools and how many \
                         manuals are being served."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        }
    }

    async fn execute(&self, _args: Value) -> Result<ToolResult, McpError> {
        let report = run_blocking(&self.services, ServerInfoReport::collect).await?;
        json_content(&report)
    }
}

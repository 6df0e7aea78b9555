//! List manuals tool handler

use super::handler::{json_content, McpToolHandler};
use super::helpers::run_blocking;
use crate::core::services::Services;
use crate::core::types::ListManualsResponse;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct ListManualsHandler {
    services: Arc<Services>,
}

impl ListManualsHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for ListManualsHandler {
    fn name(&self) -> &str {
        "list_manuals"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_manuals".to_string(),
            description: "List the manuals available under the manuals root. \
                         A manual is a directory whose TOC descriptor exists. \
                         Returns names sorted alphabetically; use them as manual_name \
                         for every other tool."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        }
    }

    async fn execute(&self, _args: Value) -> Result<ToolResult, McpError> {
        let manuals = run_blocking(&self.services, |s| s.repository.list_manuals()).await?;
        json_content(&ListManualsResponse { manuals })
    }
}

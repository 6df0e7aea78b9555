//! Get TOC tool handler

use super::handler::{json_content, McpToolHandler};
use super::helpers::{manual_name_property, parse_args, run_blocking};
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct GetTocHandler {
    services: Arc<Services>,
}

impl GetTocHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[derive(Deserialize)]
struct GetTocArgs {
    manual_name: String,
    #[serde(default)]
    hierarchical: Option<bool>,
}

#[async_trait]
impl McpToolHandler for GetTocHandler {
    fn name(&self) -> &str {
        "get_toc"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_toc".to_string(),
            description: "Get the table of contents of a manual: every section's id, title and file \
                         in canonical order. With hierarchical=true each entry also carries its \
                         nested outline (anchors, labels, numbered items)."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "manual_name": manual_name_property(),
                    "hierarchical": {
                        "type": "boolean",
                        "description": "Include nested outline children (server default when omitted)"
                    }
                },
                "required": ["manual_name"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let args: GetTocArgs = parse_args(args)?;
        let hierarchical = args
            .hierarchical
            .unwrap_or(self.services.config.manuals.hierarchical_default);

        let toc = run_blocking(&self.services, move |s| {
            s.repository.get_toc(&args.manual_name, hierarchical)
        })
        .await?;
        json_content(&toc)
    }
}

//! Get outline tool handler

use super::handler::{json_content, McpToolHandler};
use super::helpers::{manual_name_property, parse_args, run_blocking, section_id_property};
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct GetOutlineHandler {
    services: Arc<Services>,
}

impl GetOutlineHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[derive(Deserialize)]
struct GetOutlineArgs {
    manual_name: String,
    section_id: String,
}

#[async_trait]
impl McpToolHandler for GetOutlineHandler {
    fn name(&self) -> &str {
        "get_outline"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_outline".to_string(),
            description: "Get the nested outline (anchors, labels, numbered items) of one section \
                         without its body text. Sections without an outline return an empty list."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "manual_name": manual_name_property(),
                    "section_id": section_id_property("Section id from the TOC")
                },
                "required": ["manual_name", "section_id"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let args: GetOutlineArgs = parse_args(args)?;

        let outline = run_blocking(&self.services, move |s| {
            s.repository.get_outline(&args.manual_name, &args.section_id)
        })
        .await?;
        json_content(&outline)
    }
}

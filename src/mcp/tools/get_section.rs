//! Get section tool handler

use super::handler::{json_content, McpToolHandler};
use super::helpers::{manual_name_property, parse_args, run_blocking, section_id_property};
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct GetSectionHandler {
    services: Arc<Services>,
}

impl GetSectionHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[derive(Deserialize)]
struct GetSectionArgs {
    manual_name: String,
    section_id: String,
}

#[async_trait]
impl McpToolHandler for GetSectionHandler {
    fn name(&self) -> &str {
        "get_section"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_section".to_string(),
            description: "Get the full text of one section together with its title and file. \
                         Line endings are normalized to \\n. Use list_sections or get_toc to \
                         discover section ids, or resolve_reference to turn '第3章' style \
                         references into an id."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "manual_name": manual_name_property(),
                    "section_id": section_id_property("Section id from the TOC, e.g. '02-1'")
                },
                "required": ["manual_name", "section_id"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let args: GetSectionArgs = parse_args(args)?;

        let section = run_blocking(&self.services, move |s| {
            s.repository.get_section(&args.manual_name, &args.section_id)
        })
        .await?;
        json_content(&section)
    }
}

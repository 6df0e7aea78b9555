//! List sections tool handler

use super::handler::{json_content, McpToolHandler};
use super::helpers::{manual_name_property, parse_args, run_blocking};
use crate::core::services::Services;
use crate::core::types::ListSectionsResponse;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct ListSectionsHandler {
    services: Arc<Services>,
}

impl ListSectionsHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[derive(Deserialize)]
struct ListSectionsArgs {
    manual_name: String,
}

#[async_trait]
impl McpToolHandler for ListSectionsHandler {
    fn name(&self) -> &str {
        "list_sections"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_sections".to_string(),
            description: "List the section ids of a manual in TOC order. \
                         Cheaper than get_toc when only ids are needed."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "manual_name": manual_name_property()
                },
                "required": ["manual_name"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let args: ListSectionsArgs = parse_args(args)?;
        let manual = args.manual_name;

        let response = run_blocking(&self.services, move |s| {
            let sections = s.repository.list_sections(&manual)?;
            Ok(ListSectionsResponse { manual, sections })
        })
        .await?;
        json_content(&response)
    }
}

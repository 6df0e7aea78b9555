//! Resolve reference tool handler

use super::handler::{json_content, McpToolHandler};
use super::helpers::{manual_name_property, parse_args, run_blocking};
use crate::core::services::Services;
use crate::core::types::ResolveResponse;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct ResolveReferenceHandler {
    services: Arc<Services>,
}

impl ResolveReferenceHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[derive(Deserialize)]
struct ResolveReferenceArgs {
    manual_name: String,
    ref_text: String,
}

#[async_trait]
impl McpToolHandler for ResolveReferenceHandler {
    fn name(&self) -> &str {
        "resolve_reference"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "resolve_reference".to_string(),
            description: "Resolve a chapter reference found in text ('第2章-1を参照', 'see Chapter 3') \
                         to the section id of that chapter. Returns target_section null when the \
                         text holds no reference or the chapter is not in the TOC."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "manual_name": manual_name_property(),
                    "ref_text": {
                        "type": "string",
                        "description": "Text containing a chapter reference, e.g. '第3章を参照'"
                    }
                },
                "required": ["manual_name", "ref_text"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let args: ResolveReferenceArgs = parse_args(args)?;

        let target_section = run_blocking(&self.services, move |s| {
            s.repository
                .resolve_reference(&args.manual_name, &args.ref_text)
        })
        .await?;
        json_content(&ResolveResponse { target_section })
    }
}

//! Find exceptions tool handler

use super::handler::{json_content, McpToolHandler};
use super::helpers::{manual_name_property, parse_args, run_blocking, section_id_property};
use crate::core::services::Services;
use crate::core::types::{ExceptionsRequest, FindExceptionsResponse};
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct FindExceptionsHandler {
    services: Arc<Services>,
}

impl FindExceptionsHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for FindExceptionsHandler {
    fn name(&self) -> &str {
        "find_exceptions"
    }

    fn schema(&self) -> ToolSchema {
        let exceptions = &self.services.config.exceptions;
        ToolSchema {
            name: "find_exceptions".to_string(),
            description: format!(
                "Extract exception and caution passages from a manual: every line containing \
                 one of the configured indicator terms ({}), returned with the previous and \
                 next line as context. Use it to find exclusions and non-payment conditions \
                 before answering coverage questions.",
                exceptions.terms.join(", ")
            ),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "manual_name": manual_name_property(),
                    "section_id": section_id_property(
                        "Restrict extraction to this section (all sections when omitted)"
                    ),
                    "limit": {
                        "type": "integer",
                        "description": "Maximum number of passages across all sections",
                        "default": exceptions.default_limit,
                        "minimum": 1,
                        "maximum": exceptions.max_limit
                    }
                },
                "required": ["manual_name"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let request: ExceptionsRequest = parse_args(args)?;

        let results = run_blocking(&self.services, move |s| {
            s.exceptions.find_exceptions(&request)
        })
        .await?;
        json_content(&FindExceptionsResponse { results })
    }
}

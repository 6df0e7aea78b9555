//! Search text tool handler

use super::handler::{json_content, McpToolHandler};
use super::helpers::{manual_name_property, parse_args, run_blocking, section_id_property};
use crate::core::services::Services;
use crate::core::types::{SearchRequest, SearchTextResponse};
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct SearchTextHandler {
    services: Arc<Services>,
}

impl SearchTextHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for SearchTextHandler {
    fn name(&self) -> &str {
        "search_text"
    }

    fn schema(&self) -> ToolSchema {
        let search = &self.services.config.search;
        ToolSchema {
            name: "search_text".to_string(),
            description: "Search the text of a manual's sections. Returns at most one hit per \
                         section (its first match) as a snippet with surrounding context, in TOC \
                         order. \
                         \
                         MODES: \
                         (1) regex - the query is a regular expression; an invalid pattern is \
                             matched literally instead of failing, \
                         (2) plain - the query is matched literally, \
                         (3) loose - spaces, middle dots, slashes and hyphens may appear between \
                             query characters ('入院給付金' matches '入院・給付金'). \
                         \
                         Matching is case-insensitive unless case_sensitive=true. Text is NFKC \
                         normalized before matching, so full-width and half-width forms agree."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "manual_name": manual_name_property(),
                    "query": {
                        "type": "string",
                        "description": "Search query (interpreted according to mode)",
                        "minLength": 1
                    },
                    "section_id": section_id_property(
                        "Restrict the search to this section (all sections when omitted)"
                    ),
                    "limit": {
                        "type": "integer",
                        "description": "Maximum number of hits",
                        "default": search.default_limit,
                        "minimum": 1,
                        "maximum": search.max_limit
                    },
                    "mode": {
                        "type": "string",
                        "enum": ["regex", "plain", "loose"],
                        "default": search.default_mode.as_str()
                    },
                    "case_sensitive": {
                        "type": "boolean",
                        "default": false
                    }
                },
                "required": ["manual_name", "query"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let request: SearchRequest = parse_args(args)?;

        let results = run_blocking(&self.services, move |s| s.search.search_text(&request)).await?;
        json_content(&SearchTextResponse { results })
    }
}

//! Tool registry for managing MCP tools

use super::handler::McpToolHandler;
use crate::mcp::protocol::ToolSchema;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry for all available MCP tools
///
/// Maintains a collection of tool handlers and provides methods
/// for tool discovery and execution.
pub struct ToolRegistry {
    handlers: HashMap<String, Arc<dyn McpToolHandler>>,
}

impl ToolRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a tool handler
    pub fn register(&mut self, handler: Arc<dyn McpToolHandler>) {
        let name = handler.name().to_string();
        self.handlers.insert(name, handler);
    }

    /// Get a tool handler by name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn McpToolHandler>> {
        self.handlers.get(name)
    }

    /// List all available tool schemas, sorted by name
    pub fn list(&self) -> Vec<ToolSchema> {
        let mut schemas: Vec<ToolSchema> = self
            .handlers
            .values()
            .map(|handler| handler.schema())
            .collect();
        schemas.sort_by(|a, b| a.name.cmp(&b.name));
        schemas
    }

    /// Check if a tool exists
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Get number of registered tools
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

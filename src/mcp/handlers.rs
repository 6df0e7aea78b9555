//! MCP protocol method handlers

use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::*;
use crate::mcp::tools::get_server_info::SERVER_NAME;
use crate::mcp::tools::{
    FindExceptionsHandler, GetOutlineHandler, GetSectionHandler, GetServerInfoHandler,
    GetTocHandler, ListManualsHandler, ListSectionsHandler, ResolveReferenceHandler,
    SearchTextHandler, ToolRegistry,
};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct ProtocolHandlers {
    initialized: AtomicBool,
    tool_registry: ToolRegistry,
}

impl ProtocolHandlers {
    pub fn new(services: Arc<Services>) -> Self {
        let mut registry = ToolRegistry::new();

        // Register all available tools
        registry.register(Arc::new(ListManualsHandler::new(Arc::clone(&services))));
        registry.register(Arc::new(GetTocHandler::new(Arc::clone(&services))));
        registry.register(Arc::new(ListSectionsHandler::new(Arc::clone(&services))));
        registry.register(Arc::new(GetSectionHandler::new(Arc::clone(&services))));
        registry.register(Arc::new(GetOutlineHandler::new(Arc::clone(&services))));
        registry.register(Arc::new(ResolveReferenceHandler::new(Arc::clone(
            &services,
        ))));
        registry.register(Arc::new(SearchTextHandler::new(Arc::clone(&services))));
        registry.register(Arc::new(FindExceptionsHandler::new(Arc::clone(&services))));
        registry.register(Arc::new(GetServerInfoHandler::new(services)));

        Self {
            initialized: AtomicBool::new(false),
            tool_registry: registry,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    pub fn tool_registry(&self) -> &ToolRegistry {
        &self.tool_registry
    }

    /// Handle initialize request
    pub async fn handle_initialize(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let params: InitializeParams = match request.params {
            Some(Value::Null) | None => InitializeParams::default(),
            Some(value) => serde_json::from_value(value)
                .map_err(|e| McpError::InvalidParams(format!("Invalid initialize params: {e}")))?,
        };

        match &params.client_info {
            Some(client) => info!(
                "Client initialized: {} {}",
                client.name,
                client.version.as_deref().unwrap_or("")
            ),
            None => info!("Client initialized"),
        }
        if let Some(requested) = params.protocol_version.as_deref() {
            if requested != PROTOCOL_VERSION {
                warn!(
                    "Client requested protocol {}, answering with {}",
                    requested, PROTOCOL_VERSION
                );
            }
        }

        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        Ok(JsonRpcResponse::success(
            request.id,
            serde_json::to_value(result)?,
        ))
    }

    /// Handle initialized notification
    pub async fn handle_initialized(
        &self,
        _request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        self.initialized.store(true, Ordering::SeqCst);
        info!("Server initialized");

        // Initialized is a notification, no response needed
        Ok(JsonRpcResponse::none())
    }

    /// Handle tools/list request
    pub async fn handle_tools_list(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let tools = self.tool_registry.list();
        Ok(JsonRpcResponse::success(request.id, json!({ "tools": tools })))
    }

    /// Handle tools/call request
    ///
    /// Tool failures become JSON-RPC error responses; only serialization
    /// of a successful result can fail this call itself.
    pub async fn handle_tools_call(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let params_value = match request.params {
            Some(v) => v,
            None => {
                return Ok(JsonRpcResponse::failure(
                    request.id,
                    INVALID_PARAMS,
                    "Missing params".to_string(),
                ));
            }
        };

        let params: ToolCallParams = match serde_json::from_value(params_value) {
            Ok(p) => p,
            Err(e) => {
                return Ok(JsonRpcResponse::failure(
                    request.id,
                    INVALID_PARAMS,
                    format!("Invalid params: {e}"),
                ));
            }
        };

        let handler = match self.tool_registry.get(&params.name) {
            Some(h) => h,
            None => {
                return Ok(JsonRpcResponse::failure(
                    request.id,
                    INVALID_REQUEST,
                    format!("Tool not found: {}", params.name),
                ));
            }
        };

        debug!("Calling tool {}", params.name);
        match handler.execute(params.arguments).await {
            Ok(result) => Ok(JsonRpcResponse::success(
                request.id,
                serde_json::to_value(result)?,
            )),
            Err(e) => {
                let (code, message) = e.code_and_message();
                debug!("Tool {} failed ({}): {}", params.name, code, message);
                Ok(JsonRpcResponse::failure(request.id, code, message))
            }
        }
    }

    /// Handle ping request
    pub async fn handle_ping(&self, request: JsonRpcRequest) -> Result<JsonRpcResponse, McpError> {
        Ok(JsonRpcResponse::success(request.id, json!({})))
    }
}

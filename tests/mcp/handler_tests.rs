//! MCP handler unit tests

#[cfg(test)]
mod tests {
    use crate::common::{create_test_services, TestManuals};
    use manual_tools::mcp::handlers::ProtocolHandlers;
    use manual_tools::mcp::protocol::*;
    use manual_tools::mcp::server::process_message;
    use manual_tools::mcp::tools::TOOL_NAMES;
    use serde_json::json;

    fn create_test_handlers() -> (ProtocolHandlers, TestManuals) {
        let manuals = TestManuals::standard();
        let services = create_test_services(manuals.root());
        (ProtocolHandlers::new(services), manuals)
    }

    fn request(id: i64, method: &str, params: Option<serde_json::Value>) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(id)),
            method: method.to_string(),
            params,
        }
    }

    #[tokio::test]
    async fn test_initialize_handler() {
        let (handlers, _manuals) = create_test_handlers();

        let response = handlers
            .handle_initialize(request(
                1,
                "initialize",
                Some(json!({
                    "protocolVersion": "2024-11-05",
                    "capabilities": {"tools": {}},
                    "clientInfo": {"name": "test", "version": "1.0"}
                })),
            ))
            .await
            .unwrap();

        assert_eq!(response.jsonrpc, "2.0");
        assert!(response.error.is_none());
        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(result["serverInfo"]["name"], "manual-tools-mcp");
        assert_eq!(result["serverInfo"]["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_initialize_without_params() {
        let (handlers, _manuals) = create_test_handlers();

        let response = handlers
            .handle_initialize(request(1, "initialize", None))
            .await
            .unwrap();
        assert!(response.result.is_some());
    }

    #[tokio::test]
    async fn test_initialized_handler() {
        let (handlers, _manuals) = create_test_handlers();
        assert!(!handlers.is_initialized());

        let response = handlers
            .handle_initialized(JsonRpcRequest {
                jsonrpc: "2.0".to_string(),
                id: None,
                method: "initialized".to_string(),
                params: Some(json!({})),
            })
            .await
            .unwrap();

        assert!(response.id.is_none());
        assert!(response.result.is_none());
        assert!(response.error.is_none());
        assert!(handlers.is_initialized());
    }

    #[tokio::test]
    async fn test_tools_list_has_all_tools() {
        let (handlers, _manuals) = create_test_handlers();

        let response = handlers
            .handle_tools_list(request(2, "tools/list", None))
            .await
            .unwrap();

        let result = response.result.unwrap();
        let names: Vec<&str> = result["tools"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, TOOL_NAMES.to_vec());

        for tool in result["tools"].as_array().unwrap() {
            assert!(!tool["description"].as_str().unwrap().is_empty());
            assert_eq!(tool["inputSchema"]["type"], "object");
        }
    }

    #[tokio::test]
    async fn test_tools_call_missing_params() {
        let (handlers, _manuals) = create_test_handlers();

        let response = handlers
            .handle_tools_call(request(3, "tools/call", None))
            .await
            .unwrap();
        assert_eq!(response.error.unwrap().code, INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_tools_call_unknown_tool() {
        let (handlers, _manuals) = create_test_handlers();

        let response = handlers
            .handle_tools_call(request(
                4,
                "tools/call",
                Some(json!({"name": "search_code", "arguments": {}})),
            ))
            .await
            .unwrap();
        let error = response.error.unwrap();
        assert_eq!(error.code, INVALID_REQUEST);
        assert!(error.message.contains("search_code"));
    }

    #[tokio::test]
    async fn test_ping() {
        let (handlers, _manuals) = create_test_handlers();

        let response = handlers.handle_ping(request(5, "ping", None)).await.unwrap();
        assert_eq!(response.id, Some(json!(5)));
        assert_eq!(response.result.unwrap(), json!({}));
    }

    #[tokio::test]
    async fn test_process_message_routes_methods() {
        let (handlers, _manuals) = create_test_handlers();

        let response = process_message(
            &handlers,
            r#"{"jsonrpc":"2.0","id":9,"method":"tools/call","params":{"name":"list_manuals"}}"#,
        )
        .await
        .unwrap();
        assert_eq!(response.id, Some(json!(9)));
        assert_eq!(
            response.result.unwrap()["structuredContent"]["manuals"],
            json!(["給付金編"])
        );

        let err = process_message(&handlers, "not json").await.unwrap_err();
        assert_eq!(err.code_and_message().0, PARSE_ERROR);
    }
}

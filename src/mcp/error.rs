//! MCP-specific error types

use crate::core::error::ManualError;
use crate::mcp::protocol::{
    INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, MANUAL_NOT_FOUND, PARSE_ERROR,
    SECTION_NOT_FOUND, TOC_LOAD_FAILED,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum McpError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Tool error (code {0}): {1}")]
    ToolError(i32, String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl McpError {
    /// JSON-RPC error code and message for this error
    pub fn code_and_message(&self) -> (i32, String) {
        match self {
            McpError::ParseError(msg) => (PARSE_ERROR, msg.clone()),
            McpError::InvalidRequest(msg) => (INVALID_REQUEST, msg.clone()),
            McpError::InvalidParams(msg) => (INVALID_PARAMS, msg.clone()),
            McpError::InternalError(msg) => (INTERNAL_ERROR, msg.clone()),
            McpError::ToolError(code, msg) => (*code, msg.clone()),
            McpError::Io(e) => (INTERNAL_ERROR, format!("I/O error: {e}")),
            McpError::Json(e) => (INTERNAL_ERROR, format!("JSON error: {e}")),
        }
    }
}

impl From<ManualError> for McpError {
    fn from(err: ManualError) -> Self {
        let message = err.to_string();
        match err {
            ManualError::ManualNotFound(_) => McpError::ToolError(MANUAL_NOT_FOUND, message),
            ManualError::SectionNotFound(_) => McpError::ToolError(SECTION_NOT_FOUND, message),
            ManualError::TocLoadError(_) | ManualError::EmptyToc(_) => {
                McpError::ToolError(TOC_LOAD_FAILED, message)
            }
            ManualError::InvalidRequest(_) | ManualError::ConfigError(_) => {
                McpError::InvalidParams(message)
            }
            ManualError::IoError(_) | ManualError::SerdeError(_) | ManualError::TomlError(_) => {
                McpError::InternalError(message)
            }
        }
    }
}

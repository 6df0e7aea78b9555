//! MCP tool implementations
//!
//! This module contains all MCP tool handlers that expose the manual
//! repository, text search and exception extraction to MCP clients.

pub mod find_exceptions;
pub mod get_outline;
pub mod get_section;
pub mod get_server_info;
pub mod get_toc;
pub mod handler;
pub mod helpers;
pub mod list_manuals;
pub mod list_sections;
pub mod registry;
pub mod resolve_reference;
pub mod search_text;

pub use find_exceptions::FindExceptionsHandler;
pub use get_outline::GetOutlineHandler;
pub use get_section::GetSectionHandler;
pub use get_server_info::GetServerInfoHandler;
pub use get_toc::GetTocHandler;
pub use handler::{json_content, text_content, McpToolHandler};
pub use helpers::{parse_args, run_blocking};
pub use list_manuals::ListManualsHandler;
pub use list_sections::ListSectionsHandler;
pub use registry::ToolRegistry;
pub use resolve_reference::ResolveReferenceHandler;
pub use search_text::SearchTextHandler;

/// Names of every tool the server registers, in listing order
pub const TOOL_NAMES: [&str; 9] = [
    "find_exceptions",
    "get_outline",
    "get_section",
    "get_server_info",
    "get_toc",
    "list_manuals",
    "list_sections",
    "resolve_reference",
    "search_text",
];

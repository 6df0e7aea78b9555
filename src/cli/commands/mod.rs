//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.
//! Command names match MCP tool names (underscores become hyphens in CLI).

pub mod completions;
pub mod config;
pub mod exceptions;
pub mod info;
pub mod manuals;
pub mod search;
pub mod validate;

// Re-export argument types for use in mod.rs
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use exceptions::ExceptionsArgs;
pub use info::InfoArgs;
pub use search::SearchArgs;
pub use validate::{ManualInfoArgs, ValidateArgs};

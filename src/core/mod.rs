//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent
//! of transport protocols (CLI, MCP, etc).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: TOC model and request/response structures
//! - **text**: Line-ending and Unicode normalization
//! - **xdg**: XDG directory handling
//! - **repository**: Manual discovery, TOC cache, validation
//! - **search**: Text search and exception extraction
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod repository;
pub mod search;
pub mod services;
pub mod text;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{ManualError, Result};
pub use services::Services;

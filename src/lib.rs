//! Manual Tools - chaptered manual repository and search
//!
//! Serves structured, chaptered text documents ("manuals") stored as a
//! directory tree plus a per-manual table-of-contents descriptor, and
//! provides lookup, outline, chapter-reference resolution and text
//! search over their sections.
//!
//! # Architecture
//!
//! The codebase is organized into three main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types, text, xdg
//!   - repository (TOC loading, validation, cache, chapter index)
//!   - search (plain/regex/loose search, exception extraction)
//!   - services (unified service container)
//!
//! - **cli**: Command-line adapter (depends on core)
//!
//! - **mcp**: MCP adapter (depends on core)
//!   - server, tools, protocol
//!
//! # Key Features
//!
//! - Content-hash + mtime cache invalidation per manual
//! - Relaxed TOC validation (warnings never block a load)
//! - NFKC-normalized search with separator-tolerant "loose" mode
//! - Linear-time regex engine for caller-supplied patterns

// Core domain logic (protocol-agnostic)
pub mod core;

// Command-line adapter
pub mod cli;

// MCP (Model Context Protocol) adapter
pub mod mcp;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{ManualError, Result};
pub use core::repository::ManualRepository;
pub use core::services::Services;
pub use core::types::*;

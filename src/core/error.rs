//! Error types and error handling for the manual tools service.
//!
//! This module defines the error types used throughout the
//! application. Protocol-specific error handling (MCP error codes,
//! CLI exit messages) is handled in the respective adapter modules.

use thiserror::Error;

/// Result type alias for manual operations
pub type Result<T> = std::result::Result<T, ManualError>;

/// Main error type for the manual tools service
#[derive(Error, Debug)]
pub enum ManualError {
    #[error("Manual not found: {0}")]
    ManualNotFound(String),

    #[error("Section not found: {0}")]
    SectionNotFound(String),

    #[error("Failed to load TOC: {0}")]
    TocLoadError(String),

    #[error("TOC must be a non-empty array: {0}")]
    EmptyToc(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl ManualError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ManualError::ManualNotFound(_) | ManualError::SectionNotFound(_)
        )
    }

    /// Check if this is a bad request error (invalid input or descriptor)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            ManualError::TocLoadError(_)
                | ManualError::EmptyToc(_)
                | ManualError::InvalidRequest(_)
                | ManualError::ConfigError(_)
        )
    }
}

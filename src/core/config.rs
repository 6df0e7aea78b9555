//! Configuration management for the manual tools service.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{ManualError, Result};
use crate::core::types::SearchMode;
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Placeholder substituted with the manual name in `toc_path_pattern`
pub const MANUAL_PLACEHOLDER: &str = "{manual}";

/// Upper bound for `search.max_limit`
pub const SEARCH_LIMIT_CEILING: usize = 100;

/// Upper bound for `exceptions.max_limit`
pub const EXCEPTIONS_LIMIT_CEILING: usize = 200;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub manuals: ManualsConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub exceptions: ExceptionsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Manual discovery configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ManualsConfig {
    /// Directory holding one subdirectory per manual
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// TOC descriptor location; relative patterns resolve under `root`
    #[serde(default = "default_toc_path_pattern")]
    pub toc_path_pattern: String,

    /// Whether `get_toc` keeps nested children when the caller does not say
    #[serde(default)]
    pub hierarchical_default: bool,
}

/// How validation issues affect loading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Issues are logged, loading continues
    #[default]
    Relaxed,
    /// Any issue fails the load
    Strict,
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationMode::Relaxed => f.write_str("relaxed"),
            ValidationMode::Strict => f.write_str("strict"),
        }
    }
}

impl FromStr for ValidationMode {
    type Err = ManualError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relaxed" => Ok(ValidationMode::Relaxed),
            "strict" => Ok(ValidationMode::Strict),
            other => Err(ManualError::ConfigError(format!(
                "Unknown validation mode '{other}' (expected relaxed or strict)"
            ))),
        }
    }
}

/// Validation configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ValidationConfig {
    #[serde(default)]
    pub mode: ValidationMode,
}

/// Text search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Hits returned when the request has no limit
    #[serde(default = "default_search_limit")]
    pub default_limit: usize,

    /// Largest accepted limit
    #[serde(default = "default_search_max_limit")]
    pub max_limit: usize,

    /// Characters kept on each side of a match
    #[serde(default = "default_snippet_width")]
    pub snippet_width: usize,

    #[serde(default)]
    pub default_mode: SearchMode,

    /// Compiled regex size cap in bytes
    #[serde(default = "default_regex_size_limit")]
    pub regex_size_limit: usize,
}

/// Exception extraction configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExceptionsConfig {
    #[serde(default = "default_exceptions_limit")]
    pub default_limit: usize,

    #[serde(default = "default_exceptions_max_limit")]
    pub max_limit: usize,

    /// Caution/exception indicator vocabulary
    #[serde(default = "default_exception_terms")]
    pub terms: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Filter directive used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of the compact format
    #[serde(default)]
    pub json: bool,
}

// Default value functions
fn default_root() -> PathBuf {
    PathBuf::from("./manuals")
}

fn default_toc_path_pattern() -> String {
    format!("{MANUAL_PLACEHOLDER}/00_目次.json")
}

fn default_search_limit() -> usize {
    10
}

fn default_search_max_limit() -> usize {
    SEARCH_LIMIT_CEILING
}

fn default_snippet_width() -> usize {
    80
}

fn default_regex_size_limit() -> usize {
    1024 * 1024
}

fn default_exceptions_limit() -> usize {
    50
}

fn default_exceptions_max_limit() -> usize {
    EXCEPTIONS_LIMIT_CEILING
}

fn default_exception_terms() -> Vec<String> {
    [
        "留意",
        "注意",
        "例外",
        "対象外",
        "禁止",
        "適用しない",
        "支払われない",
        "支給されない",
        "不支給",
        "不適用",
        "除外",
        "取り扱わない",
    ]
    .iter()
    .map(|t| t.to_string())
    .collect()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ManualsConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            toc_path_pattern: default_toc_path_pattern(),
            hierarchical_default: false,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: default_search_limit(),
            max_limit: default_search_max_limit(),
            snippet_width: default_snippet_width(),
            default_mode: SearchMode::default(),
            regex_size_limit: default_regex_size_limit(),
        }
    }
}

impl Default for ExceptionsConfig {
    fn default() -> Self {
        Self {
            default_limit: default_exceptions_limit(),
            max_limit: default_exceptions_max_limit(),
            terms: default_exception_terms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    ///
    /// A relative `manuals.root` is resolved against the file's directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| ManualError::ConfigError(format!("Failed to read config file: {e}")))?;

        let mut config: Config = toml::from_str(&contents)?;
        if config.manuals.root.is_relative() {
            if let Some(parent) = path.parent() {
                config.manuals.root = parent.join(&config.manuals.root);
            }
        }
        Ok(config)
    }

    /// Create default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// This method uses XDG Base Directory specification for file locations.
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. MANUAL_TOOLS_CONFIG env var
    /// 2. XDG config file (~/.config/manual-tools/config.toml)
    /// 3. Legacy ./manual-tools.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut from_defaults = false;
        let mut config = if let Ok(config_path) = env::var("MANUAL_TOOLS_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("manual-tools.toml").exists() {
                Self::from_file("manual-tools.toml")?
            } else {
                from_defaults = true;
                Self::default()
            }
        };

        // Fall back to the XDG data directory when nothing points elsewhere
        if from_defaults
            && env::var("MANUALS_ROOT").is_err()
            && config.manuals.root == default_root()
            && !config.manuals.root.exists()
        {
            config.manuals.root = xdg.manuals_dir();
        }

        config.merge_env()?;
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) -> Result<()> {
        if let Ok(root) = env::var("MANUALS_ROOT") {
            if !root.trim().is_empty() {
                self.manuals.root = PathBuf::from(root);
            }
        }
        if let Ok(pattern) = env::var("MANUAL_TOOLS_TOC_PATTERN") {
            self.manuals.toc_path_pattern = pattern;
        }
        if let Ok(mode) = env::var("MANUAL_TOOLS_VALIDATION_MODE") {
            self.validation.mode = mode.parse()?;
        }
        if let Ok(limit) = env::var("MANUAL_TOOLS_DEFAULT_LIMIT") {
            if let Ok(l) = limit.parse() {
                self.search.default_limit = l;
            }
        }
        if let Ok(limit) = env::var("MANUAL_TOOLS_MAX_LIMIT") {
            if let Ok(l) = limit.parse() {
                self.search.max_limit = l;
            }
        }
        if let Ok(level) = env::var("MANUAL_TOOLS_LOG_LEVEL") {
            self.logging.level = level;
        }
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !self.manuals.toc_path_pattern.contains(MANUAL_PLACEHOLDER) {
            return Err(ManualError::ConfigError(format!(
                "TOC path pattern must contain {MANUAL_PLACEHOLDER}"
            )));
        }

        if self.search.default_limit == 0 || self.search.max_limit == 0 {
            return Err(ManualError::ConfigError(
                "Search limits must be non-zero".to_string(),
            ));
        }

        if self.search.max_limit > SEARCH_LIMIT_CEILING {
            return Err(ManualError::ConfigError(format!(
                "Search max limit cannot exceed {SEARCH_LIMIT_CEILING}, got {}",
                self.search.max_limit
            )));
        }

        if self.search.default_limit > self.search.max_limit {
            return Err(ManualError::ConfigError(
                "Search default limit cannot exceed max limit".to_string(),
            ));
        }

        if self.search.snippet_width == 0 {
            return Err(ManualError::ConfigError(
                "Snippet width must be non-zero".to_string(),
            ));
        }

        if self.search.regex_size_limit == 0 {
            return Err(ManualError::ConfigError(
                "Regex size limit must be non-zero".to_string(),
            ));
        }

        if self.exceptions.default_limit == 0 || self.exceptions.max_limit == 0 {
            return Err(ManualError::ConfigError(
                "Exception limits must be non-zero".to_string(),
            ));
        }

        if self.exceptions.max_limit > EXCEPTIONS_LIMIT_CEILING {
            return Err(ManualError::ConfigError(format!(
                "Exception max limit cannot exceed {EXCEPTIONS_LIMIT_CEILING}, got {}",
                self.exceptions.max_limit
            )));
        }

        if self.exceptions.default_limit > self.exceptions.max_limit {
            return Err(ManualError::ConfigError(
                "Exception default limit cannot exceed max limit".to_string(),
            ));
        }

        if self.exceptions.terms.iter().all(|t| t.trim().is_empty()) {
            return Err(ManualError::ConfigError(
                "Exception vocabulary must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Manuals root: {:?}", self.manuals.root);
        tracing::info!("  TOC pattern: {}", self.manuals.toc_path_pattern);
        tracing::info!("  Hierarchical TOC: {}", self.manuals.hierarchical_default);
        tracing::info!("  Validation mode: {}", self.validation.mode);
        tracing::info!(
            "  Search limit: {} (max {})",
            self.search.default_limit,
            self.search.max_limit
        );
        tracing::info!("  Search mode: {}", self.search.default_mode);
        tracing::info!("  Snippet width: {} chars", self.search.snippet_width);
        tracing::info!(
            "  Exception limit: {} (max {})",
            self.exceptions.default_limit,
            self.exceptions.max_limit
        );
        tracing::info!("  Exception terms: {}", self.exceptions.terms.len());
    }
}

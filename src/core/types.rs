//! Core data types for the manual tools service.
//!
//! This module defines the TOC descriptor model as it appears on disk,
//! plus the request and response structures shared by the CLI and MCP
//! adapters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A numbered item inside an outline node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocItem {
    /// Item number (must be >= 1)
    pub n: u32,

    /// Display label
    pub label: String,

    /// Optional location hint such as "2-1-22"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<String>,
}

/// A nested outline node of a TOC entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocChild {
    /// Anchor such as "PRE" or a roman numeral
    pub anchor: String,

    /// Display label
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<TocItem>>,
}

/// One section of a manual as listed in its TOC descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    /// Free-form section id ("02-1", "02-1_入院", ...)
    pub id: String,

    /// Display title, may start with a chapter number pattern
    pub title: String,

    /// File name relative to the manual directory
    pub file: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TocChild>>,
}

/// Parsed TOC descriptor of one manual
///
/// Entry order is the canonical chapter order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocFile {
    pub manual: String,

    /// A missing `toc` key parses as empty and is rejected by validation
    #[serde(default)]
    pub toc: Vec<TocEntry>,
}

impl TocFile {
    /// Section ids in TOC order
    pub fn section_ids(&self) -> Vec<String> {
        self.toc.iter().map(|e| e.id.clone()).collect()
    }

    /// Return this TOC with or without nested outline nodes
    pub fn view(mut self, hierarchical: bool) -> Self {
        if !hierarchical {
            for entry in &mut self.toc {
                entry.children = None;
            }
        }
        self
    }
}

/// Manual names under the manuals root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListManualsResponse {
    pub manuals: Vec<String>,
}

/// Section ids of one manual in TOC order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListSectionsResponse {
    pub manual: String,
    pub sections: Vec<String>,
}

/// Full text of one section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub manual: String,
    pub id: String,
    pub title: String,
    pub file: String,

    /// Section body with unified line endings
    pub text: String,

    pub encoding: String,
}

/// Nested outline of one section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
    pub id: String,
    pub children: Vec<TocChild>,
}

/// Result of a chapter reference lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveResponse {
    pub target_section: Option<String>,
}

/// Pattern interpretation for text search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Query is a regular expression (literal fallback when invalid)
    #[default]
    Regex,
    /// Query is matched literally
    Plain,
    /// Separator characters may appear between query characters
    Loose,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Regex => "regex",
            SearchMode::Plain => "plain",
            SearchMode::Loose => "loose",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "regex" => Ok(SearchMode::Regex),
            "plain" => Ok(SearchMode::Plain),
            "loose" => Ok(SearchMode::Loose),
            other => Err(format!(
                "unknown search mode '{other}' (expected regex, plain or loose)"
            )),
        }
    }
}

/// Request to search section text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub manual_name: String,
    pub query: String,

    /// Restrict the search to one section
    #[serde(default)]
    pub section_id: Option<String>,

    /// Maximum hits (1-100); configured default when absent
    #[serde(default)]
    pub limit: Option<usize>,

    /// Pattern interpretation; configured default when absent
    #[serde(default)]
    pub mode: Option<SearchMode>,

    #[serde(default)]
    pub case_sensitive: bool,
}

/// One search hit (at most one per section)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub section_id: String,
    pub snippet: String,
}

/// Response envelope for text search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTextResponse {
    pub results: Vec<SearchHit>,
}

/// Request to extract exception/caution passages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExceptionsRequest {
    pub manual_name: String,

    #[serde(default)]
    pub section_id: Option<String>,

    /// Maximum hits across all sections (1-200)
    #[serde(default)]
    pub limit: Option<usize>,
}

/// One exception passage with its surrounding lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionHit {
    pub section_id: String,
    pub text: String,
}

/// Response envelope for exception extraction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindExceptionsResponse {
    pub results: Vec<ExceptionHit>,
}

/// Snapshot of a manual's cache entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheInfo {
    pub manual: String,

    /// SHA-256 of the TOC descriptor bytes (hex)
    pub fingerprint: String,

    /// Descriptor modification time captured at load
    pub modified_at: DateTime<Utc>,

    /// When the snapshot was built
    pub loaded_at: DateTime<Utc>,

    pub entries: usize,
    pub chapter_keys: usize,
    pub issues: usize,
}

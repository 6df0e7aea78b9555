//! Query to regex compilation for the three search modes.
//!
//! - `regex`: the query is used as-is; an invalid pattern falls back to
//!   a literal match of the query instead of failing the request
//! - `plain`: every metacharacter is escaped
//! - `loose`: the NFKC-normalized query is split into characters that
//!   may be separated by any run of whitespace, middle dots, slashes or
//!   hyphen variants

use crate::core::error::{ManualError, Result};
use crate::core::text::nfkc;
use crate::core::types::SearchMode;
use regex::{Regex, RegexBuilder};

/// Zero or more separator characters tolerated between loose-mode characters
pub const SEPARATOR_CLASS: &str = r"[\s\u{3000}・/／\-\u{2010}\u{2011}\u{2012}\u{2013}\u{2014}]*";

/// Loose-mode pattern: each query character escaped and joined by [`SEPARATOR_CLASS`]
pub fn build_loose_pattern(query: &str) -> String {
    let normalized = nfkc(query);
    let parts: Vec<String> = normalized
        .chars()
        .map(|c| regex::escape(&c.to_string()))
        .collect();
    parts.join(SEPARATOR_CLASS)
}

/// Regex source for `query` under `mode`
pub fn pattern_source(query: &str, mode: SearchMode) -> String {
    match mode {
        SearchMode::Regex => query.to_string(),
        SearchMode::Plain => regex::escape(query),
        SearchMode::Loose => build_loose_pattern(query),
    }
}

/// Compile `query` for `mode`
///
/// A pattern that does not compile is retried as an escaped literal. Only
/// a literal that still exceeds `size_limit` is reported, as
/// [`ManualError::InvalidRequest`].
pub fn compile_query(
    query: &str,
    mode: SearchMode,
    case_sensitive: bool,
    size_limit: usize,
) -> Result<Regex> {
    let source = pattern_source(query, mode);
    match build(&source, case_sensitive, size_limit) {
        Ok(regex) => Ok(regex),
        Err(e) => {
            tracing::debug!(
                "Pattern {:?} ({}) did not compile, matching literally: {}",
                source,
                mode,
                e
            );
            build(&regex::escape(query), case_sensitive, size_limit).map_err(|e| {
                ManualError::InvalidRequest(format!("query cannot be compiled: {e}"))
            })
        }
    }
}

fn build(
    source: &str,
    case_sensitive: bool,
    size_limit: usize,
) -> std::result::Result<Regex, regex::Error> {
    RegexBuilder::new(source)
        .case_insensitive(!case_sensitive)
        .size_limit(size_limit)
        .build()
}

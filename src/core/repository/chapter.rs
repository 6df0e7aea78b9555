//! Chapter-number parsing.
//!
//! Titles such as `第2章-1 入院` or `Chapter 2-1 Admission` carry a
//! chapter number that reference text can point at. Both are reduced to
//! a chapter key, `"N"` or `"N-M"`, after NFKC normalization so that
//! full-width digits and separators match their ASCII forms.

use crate::core::text::nfkc;
use crate::core::types::TocEntry;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

// Hyphen variants that survive NFKC (U+2010..U+2015, U+2212).
const HYPHEN: &str = r"[-\u{2010}-\u{2015}\u{2212}]";

static TITLE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^(?:第([0-9]+)章|(?i:chapter)\s*([0-9]+))(?:{HYPHEN}([0-9]+))?"
    ))
    .unwrap()
});

static REFERENCE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?:第\s*([0-9]+)\s*章|(?i:chapter)\s*([0-9]+))(?:\s*{HYPHEN}\s*([0-9]+))?"
    ))
    .unwrap()
});

/// Chapter key of a TOC title, if the title starts with a chapter number
pub fn chapter_key_from_title(title: &str) -> Option<String> {
    let normalized = nfkc(title);
    TITLE_PATTERN
        .captures(normalized.trim_start())
        .and_then(|caps| key_from_captures(&caps))
}

/// Chapter key of the first chapter reference found anywhere in `text`
///
/// Whitespace is allowed around the numerals and the sub-chapter separator.
pub fn chapter_key_from_reference(text: &str) -> Option<String> {
    let normalized = nfkc(text);
    REFERENCE_PATTERN
        .captures(&normalized)
        .and_then(|caps| key_from_captures(&caps))
}

/// Build the chapter key -> section id index for a TOC
///
/// Entries whose title has no chapter number are absent. When two titles
/// share a key the last entry in TOC order keeps it.
pub fn build_chapter_index(entries: &[TocEntry]) -> HashMap<String, String> {
    let mut index = HashMap::new();
    for entry in entries {
        if let Some(key) = chapter_key_from_title(&entry.title) {
            index.insert(key, entry.id.clone());
        }
    }
    index
}

fn key_from_captures(caps: &Captures<'_>) -> Option<String> {
    let major = caps.get(1).or_else(|| caps.get(2))?;
    let major = normalize_numeral(major.as_str());
    match caps.get(3) {
        Some(minor) => Some(format!("{}-{}", major, normalize_numeral(minor.as_str()))),
        None => Some(major),
    }
}

fn normalize_numeral(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

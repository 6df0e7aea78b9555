//! Linear text search over manual sections.
//!
//! There is no index: every request walks the candidate sections in TOC
//! order, normalizes their text and matches it with a compiled regex.

mod engine;
mod exceptions;
pub mod pattern;
pub mod snippet;

pub use engine::SearchEngine;
pub use exceptions::ExceptionFinder;

use crate::core::error::{ManualError, Result};
use crate::core::repository::ManualRepository;
use crate::core::text::normalize_for_matching;
use std::ops::ControlFlow;

/// Visit `(section_id, normalized_text)` for each candidate section
///
/// With `section_id` only that section is visited, otherwise every section
/// in TOC order. Sections that are unknown or whose file is missing are
/// skipped. The walk stops when `visit` breaks.
pub(crate) fn scan_sections<F>(
    repository: &ManualRepository,
    manual: &str,
    section_id: Option<&str>,
    mut visit: F,
) -> Result<()>
where
    F: FnMut(&str, &str) -> ControlFlow<()>,
{
    let ids = match section_id {
        Some(id) => vec![id.to_string()],
        None => repository.list_sections(manual)?,
    };

    for id in ids {
        let section = match repository.get_section(manual, &id) {
            Ok(section) => section,
            Err(ManualError::SectionNotFound(reason)) => {
                tracing::debug!("Skipping section '{}' of '{}': {}", id, manual, reason);
                continue;
            }
            Err(e) => return Err(e),
        };

        let text = normalize_for_matching(&section.text);
        if visit(&id, &text).is_break() {
            break;
        }
    }

    Ok(())
}

/// Resolve a requested limit against its configured default and maximum
pub(crate) fn effective_limit(
    requested: Option<usize>,
    default: usize,
    max: usize,
) -> Result<usize> {
    match requested {
        None => Ok(default),
        Some(limit) if (1..=max).contains(&limit) => Ok(limit),
        Some(limit) => Err(ManualError::InvalidRequest(format!(
            "limit must be between 1 and {max}, got {limit}"
        ))),
    }
}

//! Exception and caution passage extraction.

use crate::core::config::ExceptionsConfig;
use crate::core::error::{ManualError, Result};
use crate::core::repository::ManualRepository;
use crate::core::search::{effective_limit, scan_sections};
use crate::core::text::nfkc;
use crate::core::types::{ExceptionHit, ExceptionsRequest};
use regex::{Regex, RegexBuilder};
use std::ops::ControlFlow;
use std::sync::Arc;

/// Line scanner for exception/caution indicator terms
pub struct ExceptionFinder {
    repository: Arc<ManualRepository>,
    settings: ExceptionsConfig,
    pattern: Regex,
}

impl ExceptionFinder {
    /// Build a finder matching any of `settings.terms`
    pub fn new(repository: Arc<ManualRepository>, settings: ExceptionsConfig) -> Result<Self> {
        let pattern = terms_pattern(&settings.terms)?;
        Ok(Self {
            repository,
            settings,
            pattern,
        })
    }

    pub fn settings(&self) -> &ExceptionsConfig {
        &self.settings
    }

    /// Lines containing an indicator term, with one line of context each side
    ///
    /// The limit is global: the scan stops as soon as it is reached.
    pub fn find_exceptions(&self, request: &ExceptionsRequest) -> Result<Vec<ExceptionHit>> {
        let limit = effective_limit(
            request.limit,
            self.settings.default_limit,
            self.settings.max_limit,
        )?;

        let mut hits = Vec::new();
        scan_sections(
            &self.repository,
            &request.manual_name,
            request.section_id.as_deref(),
            |section_id, text| {
                let lines: Vec<&str> = text.split('\n').collect();
                for (i, line) in lines.iter().enumerate() {
                    if !self.pattern.is_match(line) {
                        continue;
                    }
                    let Some(context) = context_for_line(&lines, i) else {
                        continue;
                    };
                    hits.push(ExceptionHit {
                        section_id: section_id.to_string(),
                        text: context,
                    });
                    if hits.len() >= limit {
                        return ControlFlow::Break(());
                    }
                }
                ControlFlow::Continue(())
            },
        )?;

        tracing::debug!(
            "find_exceptions in '{}': {} hits",
            request.manual_name,
            hits.len()
        );
        Ok(hits)
    }
}

/// Previous, current and next line, trimmed and joined by a space
///
/// Empty lines are dropped; `None` when nothing is left.
pub fn context_for_line(lines: &[&str], index: usize) -> Option<String> {
    let first = index.saturating_sub(1);
    let last = (index + 1).min(lines.len().saturating_sub(1));
    let parts: Vec<&str> = lines[first..=last]
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

fn terms_pattern(terms: &[String]) -> Result<Regex> {
    let alternation: Vec<String> = terms
        .iter()
        .map(|t| nfkc(t.trim()))
        .filter(|t| !t.is_empty())
        .map(|t| regex::escape(&t))
        .collect();
    if alternation.is_empty() {
        return Err(ManualError::ConfigError(
            "Exception vocabulary must not be empty".to_string(),
        ));
    }
    RegexBuilder::new(&alternation.join("|"))
        .case_insensitive(true)
        .build()
        .map_err(|e| ManualError::ConfigError(format!("Invalid exception vocabulary: {e}")))
}

//! Text search across the sections of one manual.

use crate::core::config::SearchConfig;
use crate::core::error::{ManualError, Result};
use crate::core::repository::ManualRepository;
use crate::core::search::pattern::compile_query;
use crate::core::search::snippet::make_snippet;
use crate::core::search::{effective_limit, scan_sections};
use crate::core::types::{SearchHit, SearchRequest};
use std::ops::ControlFlow;
use std::sync::Arc;

/// Regex/plain/loose search producing one snippet per matching section
pub struct SearchEngine {
    repository: Arc<ManualRepository>,
    settings: SearchConfig,
}

impl SearchEngine {
    pub fn new(repository: Arc<ManualRepository>, settings: SearchConfig) -> Self {
        Self {
            repository,
            settings,
        }
    }

    pub fn settings(&self) -> &SearchConfig {
        &self.settings
    }

    /// Search `request.query` in the requested section or in every section
    ///
    /// Hits come back in TOC order, at most one per section (its first
    /// match), and the walk stops once `limit` hits are collected.
    pub fn search_text(&self, request: &SearchRequest) -> Result<Vec<SearchHit>> {
        if request.query.is_empty() {
            return Err(ManualError::InvalidRequest(
                "query must not be empty".to_string(),
            ));
        }
        let limit = effective_limit(
            request.limit,
            self.settings.default_limit,
            self.settings.max_limit,
        )?;
        let mode = request.mode.unwrap_or(self.settings.default_mode);
        let regex = compile_query(
            &request.query,
            mode,
            request.case_sensitive,
            self.settings.regex_size_limit,
        )?;

        let mut hits = Vec::new();
        scan_sections(
            &self.repository,
            &request.manual_name,
            request.section_id.as_deref(),
            |section_id, text| {
                if let Some(m) = regex.find(text) {
                    hits.push(SearchHit {
                        section_id: section_id.to_string(),
                        snippet: make_snippet(text, m.start(), m.end(), self.settings.snippet_width),
                    });
                    if hits.len() >= limit {
                        return ControlFlow::Break(());
                    }
                }
                ControlFlow::Continue(())
            },
        )?;

        tracing::debug!(
            "search_text '{}' ({}) in '{}': {} hits",
            request.query,
            mode,
            request.manual_name,
            hits.len()
        );
        Ok(hits)
    }
}

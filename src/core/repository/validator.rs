//! TOC structural validation.
//!
//! The validator never rejects a descriptor except when its entry list
//! is empty. Everything else is reported as an issue which the caller
//! logs (relaxed mode) or turns into a load failure (strict mode).

use crate::core::error::{ManualError, Result};
use crate::core::types::TocFile;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// File extensions a section file may use
pub const ALLOWED_EXTENSIONS: &[&str] = &["txt", "md", "json"];

/// Severity of a validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IssueLevel {
    Warn,
    Error,
}

impl fmt::Display for IssueLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueLevel::Warn => f.write_str("WARN"),
            IssueLevel::Error => f.write_str("ERROR"),
        }
    }
}

/// One non-fatal finding about a TOC descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub level: IssueLevel,
    pub message: String,
}

impl ValidationIssue {
    fn warn(message: impl Into<String>) -> Self {
        Self {
            level: IssueLevel::Warn,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            level: IssueLevel::Error,
            message: message.into(),
        }
    }
}

/// Validation result for one manual
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub manual: String,
    pub entries: usize,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Validator for TOC descriptors under a manuals root
pub struct TocValidator<'a> {
    manuals_root: &'a Path,
}

impl<'a> TocValidator<'a> {
    pub fn new(manuals_root: &'a Path) -> Self {
        Self { manuals_root }
    }

    /// Validate `toc` for the manual stored in directory `manual_dir`
    ///
    /// Fails only with [`ManualError::EmptyToc`]. Issues come back in entry
    /// order.
    pub fn validate(&self, manual_dir: &str, toc: &TocFile) -> Result<Vec<ValidationIssue>> {
        if toc.toc.is_empty() {
            return Err(ManualError::EmptyToc(manual_dir.to_string()));
        }

        let mut issues = Vec::new();

        if toc.manual != manual_dir {
            issues.push(ValidationIssue::warn(format!(
                "manual name '{}' differs from directory '{}'",
                toc.manual, manual_dir
            )));
        }

        let manual_path = self.manuals_root.join(manual_dir);
        let mut seen_ids = HashSet::new();

        for entry in &toc.toc {
            if entry.id.trim().is_empty() {
                issues.push(ValidationIssue::error(format!(
                    "entry '{}' has an empty id",
                    entry.title
                )));
            }

            if entry.file.trim().is_empty() {
                issues.push(ValidationIssue::error(format!(
                    "entry '{}' has an empty file",
                    entry.id
                )));
            } else {
                if is_suspicious_file(&entry.file) {
                    issues.push(ValidationIssue::warn(format!(
                        "file suspicious: {}",
                        entry.file
                    )));
                }

                let section_path = section_path(&manual_path, &entry.file);
                if !section_path.is_file() {
                    issues.push(ValidationIssue::warn(format!(
                        "file missing: {}",
                        section_path.display()
                    )));
                }
            }

            if !seen_ids.insert(entry.id.as_str()) {
                issues.push(ValidationIssue::warn(format!("duplicate id: {}", entry.id)));
            }
        }

        Ok(issues)
    }
}

fn section_path(manual_path: &Path, file: &str) -> PathBuf {
    manual_path.join(file)
}

/// Whether a section file name contains a separator or an unexpected extension
pub fn is_suspicious_file(file: &str) -> bool {
    if file.contains('/') || file.contains('\\') {
        return true;
    }
    let extension = Path::new(file)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match extension {
        Some(ext) => !ALLOWED_EXTENSIONS.contains(&ext.as_str()),
        None => true,
    }
}

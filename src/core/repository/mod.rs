//! Manual storage layer.
//!
//! Discovers manuals under a root directory, loads and validates their
//! TOC descriptors, and keeps one immutable cache snapshot per manual.

pub mod cache;
pub mod chapter;
pub mod manual;
pub mod validator;

pub use cache::{Fingerprint, ManualCache, ReloadReason};
pub use manual::{ManualRepository, SECTION_ENCODING};
pub use validator::{IssueLevel, TocValidator, ValidationIssue, ValidationReport};

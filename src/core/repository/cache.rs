//! Immutable per-manual cache snapshots.
//!
//! A snapshot is built in full from one read of the TOC descriptor and
//! never mutated afterwards. Refreshing a manual means building a new
//! snapshot and swapping the `Arc` held by the repository.

use crate::core::repository::chapter::build_chapter_index;
use crate::core::repository::validator::ValidationIssue;
use crate::core::types::{CacheInfo, TocEntry, TocFile};
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fmt;
use std::time::SystemTime;

/// Identity of a TOC descriptor on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint {
    /// SHA-256 of the descriptor bytes (hex)
    pub sha256: String,

    /// Modification time at the moment the bytes were read
    pub modified: SystemTime,
}

impl Fingerprint {
    pub fn new(bytes: &[u8], modified: SystemTime) -> Self {
        Self {
            sha256: sha256_hex(bytes),
            modified,
        }
    }

    /// Why a snapshot taken with `self` is stale compared to `current`
    pub fn stale_reason(&self, current: &Fingerprint) -> Option<ReloadReason> {
        if self.modified != current.modified {
            Some(ReloadReason::Modified)
        } else if self.sha256 != current.sha256 {
            Some(ReloadReason::ContentChanged)
        } else {
            None
        }
    }
}

/// Why a snapshot was (re)built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadReason {
    /// No snapshot existed
    Cold,
    /// Descriptor mtime changed
    Modified,
    /// Same mtime, different bytes
    ContentChanged,
}

impl fmt::Display for ReloadReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReloadReason::Cold => f.write_str("cold"),
            ReloadReason::Modified => f.write_str("mtime"),
            ReloadReason::ContentChanged => f.write_str("hash"),
        }
    }
}

/// Loaded TOC plus derived lookup indices
#[derive(Debug)]
pub struct ManualCache {
    pub manual: String,
    pub toc: TocFile,
    pub fingerprint: Fingerprint,
    pub issues: Vec<ValidationIssue>,
    pub loaded_at: DateTime<Utc>,
    id_index: HashMap<String, usize>,
    chapter_index: HashMap<String, String>,
}

impl ManualCache {
    pub fn build(
        manual: &str,
        toc: TocFile,
        fingerprint: Fingerprint,
        issues: Vec<ValidationIssue>,
    ) -> Self {
        let mut id_index = HashMap::with_capacity(toc.toc.len());
        for (position, entry) in toc.toc.iter().enumerate() {
            id_index.entry(entry.id.clone()).or_insert(position);
        }
        let chapter_index = build_chapter_index(&toc.toc);

        Self {
            manual: manual.to_string(),
            toc,
            fingerprint,
            issues,
            loaded_at: Utc::now(),
            id_index,
            chapter_index,
        }
    }

    /// Entry for `id` (first occurrence when ids repeat)
    pub fn entry(&self, id: &str) -> Option<&TocEntry> {
        self.id_index.get(id).and_then(|&i| self.toc.toc.get(i))
    }

    /// Section id registered for a chapter key
    pub fn section_for_chapter(&self, key: &str) -> Option<&str> {
        self.chapter_index.get(key).map(String::as_str)
    }

    pub fn chapter_key_count(&self) -> usize {
        self.chapter_index.len()
    }

    /// Copy of the chapter key -> section id index
    pub fn chapter_index(&self) -> HashMap<String, String> {
        self.chapter_index.clone()
    }

    pub fn info(&self) -> CacheInfo {
        CacheInfo {
            manual: self.manual.clone(),
            fingerprint: self.fingerprint.sha256.clone(),
            modified_at: DateTime::<Utc>::from(self.fingerprint.modified),
            loaded_at: self.loaded_at,
            entries: self.toc.toc.len(),
            chapter_keys: self.chapter_index.len(),
            issues: self.issues.len(),
        }
    }
}

/// Lowercase hex SHA-256 of `bytes`
pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

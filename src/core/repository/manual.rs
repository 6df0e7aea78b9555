//! Manual repository: discovery, cached TOC loading and section access.
//!
//! Every call re-reads the TOC descriptor and compares its mtime and
//! SHA-256 against the cached snapshot. A stale or missing snapshot is
//! rebuilt under a per-manual gate and swapped in under a short write
//! lock, so concurrent readers see either the old or the new snapshot.

use crate::core::config::{Config, ValidationMode, MANUAL_PLACEHOLDER};
use crate::core::error::{ManualError, Result};
use crate::core::repository::cache::{Fingerprint, ManualCache, ReloadReason};
use crate::core::repository::chapter::chapter_key_from_reference;
use crate::core::repository::validator::{
    IssueLevel, TocValidator, ValidationIssue, ValidationReport,
};
use crate::core::text::unify_line_endings;
use crate::core::types::{CacheInfo, Outline, Section, TocEntry, TocFile};
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// Encoding reported for section text
pub const SECTION_ENCODING: &str = "utf-8";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Filesystem-backed store of manuals
pub struct ManualRepository {
    root: PathBuf,
    toc_pattern: String,
    validation_mode: ValidationMode,
    cache: RwLock<HashMap<String, Arc<ManualCache>>>,
    rebuild_gates: RwLock<HashMap<String, Arc<Mutex<()>>>>,
}

impl ManualRepository {
    /// Repository over `root` with the default TOC location and relaxed validation
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            toc_pattern: Config::default().manuals.toc_path_pattern,
            validation_mode: ValidationMode::Relaxed,
            cache: RwLock::new(HashMap::new()),
            rebuild_gates: RwLock::new(HashMap::new()),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.manuals.root.clone())
            .with_toc_pattern(config.manuals.toc_path_pattern.clone())
            .with_validation_mode(config.validation.mode)
    }

    pub fn with_toc_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.toc_pattern = pattern.into();
        self
    }

    pub fn with_validation_mode(mut self, mode: ValidationMode) -> Self {
        self.validation_mode = mode;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// TOC descriptor path for `manual`
    pub fn toc_path(&self, manual: &str) -> PathBuf {
        let rendered = PathBuf::from(self.toc_pattern.replace(MANUAL_PLACEHOLDER, manual));
        if rendered.is_absolute() {
            rendered
        } else {
            self.root.join(rendered)
        }
    }

    /// Sorted names of manuals that have a TOC descriptor
    ///
    /// A missing root yields an empty list.
    pub fn list_manuals(&self) -> Result<Vec<String>> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }

        let mut manuals = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.path().is_dir() {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                tracing::debug!("Skipping non UTF-8 directory {:?}", entry.path());
                continue;
            };
            if self.toc_path(&name).is_file() {
                manuals.push(name);
            }
        }

        manuals.sort();
        Ok(manuals)
    }

    /// Fresh cache snapshot for `manual`, rebuilding it when stale
    ///
    /// Rebuilds of one manual are serialized, and each rebuild re-reads the
    /// descriptor once it holds the gate, so a snapshot built from older
    /// bytes can never replace one built from newer bytes.
    pub fn ensure_loaded(&self, manual: &str) -> Result<Arc<ManualCache>> {
        check_manual_name(manual)?;
        let path = self.toc_path(manual);
        if !path.is_file() {
            return Err(not_found(manual, &path));
        }

        let (_, fingerprint) = read_descriptor(manual, &path)?;
        if let Some(cached) = self.fresh_snapshot(manual, &fingerprint) {
            tracing::debug!("TOC cache hit for '{}'", manual);
            return Ok(cached);
        }

        let gate = self.rebuild_gate(manual);
        let _rebuilding = gate.lock();

        let (bytes, fingerprint) = read_descriptor(manual, &path)?;
        let reason = {
            let cache = self.cache.read();
            match cache.get(manual) {
                Some(cached) => match cached.fingerprint.stale_reason(&fingerprint) {
                    // Another caller rebuilt while we waited
                    None => return Ok(Arc::clone(cached)),
                    Some(reason) => reason,
                },
                None => ReloadReason::Cold,
            }
        };

        let snapshot = Arc::new(self.build_snapshot(manual, &path, &bytes, fingerprint)?);
        tracing::info!(
            "Loaded TOC for '{}': {} entries, {} chapter keys (reason: {})",
            manual,
            snapshot.toc.toc.len(),
            snapshot.chapter_key_count(),
            reason
        );

        self.cache
            .write()
            .insert(manual.to_string(), Arc::clone(&snapshot));
        Ok(snapshot)
    }

    fn fresh_snapshot(&self, manual: &str, fingerprint: &Fingerprint) -> Option<Arc<ManualCache>> {
        self.cache
            .read()
            .get(manual)
            .filter(|cached| cached.fingerprint.stale_reason(fingerprint).is_none())
            .map(Arc::clone)
    }

    fn rebuild_gate(&self, manual: &str) -> Arc<Mutex<()>> {
        if let Some(gate) = self.rebuild_gates.read().get(manual) {
            return Arc::clone(gate);
        }
        Arc::clone(
            self.rebuild_gates
                .write()
                .entry(manual.to_string())
                .or_default(),
        )
    }

    fn build_snapshot(
        &self,
        manual: &str,
        path: &Path,
        bytes: &[u8],
        fingerprint: Fingerprint,
    ) -> Result<ManualCache> {
        let toc = parse_toc(path, bytes)?;
        let issues = TocValidator::new(&self.root).validate(manual, &toc)?;
        log_issues(manual, &issues);

        if self.validation_mode == ValidationMode::Strict && !issues.is_empty() {
            return Err(ManualError::TocLoadError(format!(
                "manual '{}' failed strict validation with {} issue(s): {}",
                manual,
                issues.len(),
                issues[0].message
            )));
        }

        Ok(ManualCache::build(manual, toc, fingerprint, issues))
    }

    /// Full TOC, nested children included
    pub fn load_toc(&self, manual: &str) -> Result<TocFile> {
        Ok(self.ensure_loaded(manual)?.toc.clone())
    }

    /// TOC with children kept only when `hierarchical`
    pub fn get_toc(&self, manual: &str, hierarchical: bool) -> Result<TocFile> {
        Ok(self.load_toc(manual)?.view(hierarchical))
    }

    /// Section ids in TOC order
    pub fn list_sections(&self, manual: &str) -> Result<Vec<String>> {
        Ok(self.ensure_loaded(manual)?.toc.section_ids())
    }

    /// Section text decoded lossily as UTF-8 with `\n` line endings
    pub fn get_section(&self, manual: &str, section_id: &str) -> Result<Section> {
        let snapshot = self.ensure_loaded(manual)?;
        let entry = lookup(&snapshot, manual, section_id)?;
        let path = self.existing_section_file(manual, entry)?;

        let bytes = fs::read(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                ManualError::SectionNotFound(format!("file not found: {}", entry.file))
            }
            _ => ManualError::IoError(e),
        })?;

        Ok(Section {
            manual: manual.to_string(),
            id: entry.id.clone(),
            title: entry.title.clone(),
            file: entry.file.clone(),
            text: unify_line_endings(&String::from_utf8_lossy(&bytes)),
            encoding: SECTION_ENCODING.to_string(),
        })
    }

    /// Nested outline of a section (empty when the entry has none)
    pub fn get_outline(&self, manual: &str, section_id: &str) -> Result<Outline> {
        let snapshot = self.ensure_loaded(manual)?;
        let entry = lookup(&snapshot, manual, section_id)?;
        self.existing_section_file(manual, entry)?;

        Ok(Outline {
            id: entry.id.clone(),
            children: entry.children.clone().unwrap_or_default(),
        })
    }

    /// Section id referenced by a chapter number in `text`
    ///
    /// `Ok(None)` when `text` has no chapter reference or the chapter is
    /// not indexed.
    pub fn resolve_reference(&self, manual: &str, text: &str) -> Result<Option<String>> {
        let snapshot = self.ensure_loaded(manual)?;
        Ok(chapter_key_from_reference(text)
            .and_then(|key| snapshot.section_for_chapter(&key).map(str::to_string)))
    }

    /// Copy of the chapter key -> section id index
    pub fn chapter_index(&self, manual: &str) -> Result<HashMap<String, String>> {
        Ok(self.ensure_loaded(manual)?.chapter_index())
    }

    pub fn cache_info(&self, manual: &str) -> Result<CacheInfo> {
        Ok(self.ensure_loaded(manual)?.info())
    }

    /// Load every discovered manual and re-run validation
    ///
    /// Stops at the first fatal load failure.
    pub fn validate_all(&self) -> Result<Vec<ValidationReport>> {
        let manuals = self.list_manuals()?;
        tracing::info!("Found manuals: {:?}", manuals);

        let mut reports = Vec::with_capacity(manuals.len());
        for manual in manuals {
            let snapshot = self.ensure_loaded(&manual).inspect_err(|e| {
                tracing::error!("Failed to load TOC for '{}': {}", manual, e);
            })?;
            let issues = TocValidator::new(&self.root).validate(&manual, &snapshot.toc)?;
            tracing::info!("Validated manual '{}' ({} issues)", manual, issues.len());
            reports.push(ValidationReport {
                manual,
                entries: snapshot.toc.toc.len(),
                issues,
            });
        }
        Ok(reports)
    }

    /// Path of an entry's backing file, which must exist inside the manual directory
    fn existing_section_file(&self, manual: &str, entry: &TocEntry) -> Result<PathBuf> {
        let relative = Path::new(&entry.file);
        let escapes = relative.is_absolute()
            || relative
                .components()
                .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)));
        if escapes {
            return Err(ManualError::SectionNotFound(format!(
                "file outside manual directory: {}",
                entry.file
            )));
        }

        let path = self.root.join(manual).join(relative);
        if !path.is_file() {
            return Err(ManualError::SectionNotFound(format!(
                "file not found: {}",
                entry.file
            )));
        }
        Ok(path)
    }
}

fn lookup<'a>(snapshot: &'a ManualCache, manual: &str, section_id: &str) -> Result<&'a TocEntry> {
    snapshot.entry(section_id).ok_or_else(|| {
        ManualError::SectionNotFound(format!("section '{section_id}' not found in '{manual}'"))
    })
}

fn not_found(manual: &str, path: &Path) -> ManualError {
    ManualError::ManualNotFound(format!(
        "manual '{}' not found (missing {})",
        manual,
        path.display()
    ))
}

/// Manual names are single directory names
fn check_manual_name(manual: &str) -> Result<()> {
    let invalid = manual.trim().is_empty()
        || manual == "."
        || manual == ".."
        || manual.contains('/')
        || manual.contains('\\')
        || manual.contains('\0');
    if invalid {
        return Err(ManualError::ManualNotFound(format!(
            "manual '{manual}' not found"
        )));
    }
    Ok(())
}

fn read_descriptor(manual: &str, path: &Path) -> Result<(Vec<u8>, Fingerprint)> {
    let io_error = |e: std::io::Error| match e.kind() {
        ErrorKind::NotFound => not_found(manual, path),
        _ => ManualError::IoError(e),
    };

    let modified = fs::metadata(path).and_then(|m| m.modified()).map_err(io_error)?;
    let bytes = fs::read(path).map_err(io_error)?;
    let fingerprint = Fingerprint::new(&bytes, modified);
    Ok((bytes, fingerprint))
}

fn parse_toc(path: &Path, bytes: &[u8]) -> Result<TocFile> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let text = std::str::from_utf8(bytes)
        .map_err(|e| ManualError::TocLoadError(format!("{}: {}", path.display(), e)))?;
    let toc: TocFile = serde_json::from_str(text)
        .map_err(|e| ManualError::TocLoadError(format!("{}: {}", path.display(), e)))?;

    for entry in &toc.toc {
        let zero_item = entry
            .children
            .iter()
            .flatten()
            .flat_map(|child| child.items.iter().flatten())
            .any(|item| item.n == 0);
        if zero_item {
            return Err(ManualError::TocLoadError(format!(
                "{}: outline item numbers must be >= 1 (entry '{}')",
                path.display(),
                entry.id
            )));
        }
    }

    Ok(toc)
}

fn log_issues(manual: &str, issues: &[ValidationIssue]) {
    for issue in issues {
        match issue.level {
            IssueLevel::Warn => tracing::warn!("[validate] manual={} {}", manual, issue.message),
            IssueLevel::Error => tracing::error!("[validate] manual={} {}", manual, issue.message),
        }
    }
}

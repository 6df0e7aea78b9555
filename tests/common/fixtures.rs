// Test fixtures: manuals written into a temporary manuals root

use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Name of the standard fixture manual
#[allow(dead_code)]
pub const BENEFITS_MANUAL: &str = "給付金編";

/// Temporary manuals root holding one directory per manual
#[allow(dead_code)]
pub struct TestManuals {
    pub dir: TempDir,
}

#[allow(dead_code)]
impl TestManuals {
    /// Empty manuals root
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Root with the standard benefits manual
    ///
    /// Sections: 01 (CRLF line endings), 02-1 (with outline), 02-2, 03.
    pub fn standard() -> Self {
        let manuals = Self::empty();
        manuals.add_manual(
            BENEFITS_MANUAL,
            json!({
                "manual": BENEFITS_MANUAL,
                "toc": [
                    {"id": "01", "title": "第1章 総則", "file": "01_総則.txt"},
                    {"id": "02-1", "title": "第2章-1 入院給付金", "file": "02-1_入院.txt",
                     "children": [
                        {"anchor": "PRE", "label": "前文"},
                        {"anchor": "I", "label": "支払要件",
                         "items": [{"n": 1, "label": "入院日数", "loc": "2-1-1"},
                                   {"n": 2, "label": "日帰り入院"}]}
                     ]},
                    {"id": "02-2", "title": "第2章-2 通院給付金", "file": "02-2_通院.txt"},
                    {"id": "03", "title": "第３章 手術給付金", "file": "03_手術.txt"}
                ]
            }),
            &[
                (
                    "01_総則.txt",
                    "総則\r\n本書は給付金の取扱いを定める。\r\n\r\n用語の定義は別表による。\r",
                ),
                (
                    "02-1_入院.txt",
                    "入院給付金\n入院日数に応じて支払う。\n日帰り入院は対象外とする。\n詳細は第3章を参照。\n",
                ),
                (
                    "02-2_通院.txt",
                    "通院給付金\n退院後の通院に限り支払う。\n\n注意\n\n",
                ),
                (
                    "03_手術.txt",
                    "手術給付金\n帝王・切開は支払対象とする。\n美容整形は支払われない。\nＡＢＣ検査を含む。\n",
                ),
            ],
        );
        manuals
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn manual_dir(&self, manual: &str) -> PathBuf {
        self.root().join(manual)
    }

    pub fn toc_path(&self, manual: &str) -> PathBuf {
        self.manual_dir(manual).join("00_目次.json")
    }

    /// Write a manual directory with its TOC descriptor and section files
    pub fn add_manual(&self, manual: &str, toc: Value, files: &[(&str, &str)]) {
        let dir = self.manual_dir(manual);
        fs::create_dir_all(&dir).expect("Failed to create manual dir");
        self.write_toc_raw(manual, &serde_json::to_string_pretty(&toc).unwrap());
        for (name, content) in files {
            self.write_section(manual, name, content);
        }
    }

    pub fn write_toc_raw(&self, manual: &str, contents: &str) {
        fs::write(self.toc_path(manual), contents).expect("Failed to write TOC");
    }

    /// Replace the descriptor through a rename so readers never see a partial file
    pub fn replace_toc_atomically(&self, manual: &str, contents: &str) {
        let staging = self.manual_dir(manual).join(".00_目次.json.tmp");
        fs::write(&staging, contents).expect("Failed to write staging TOC");
        fs::rename(&staging, self.toc_path(manual)).expect("Failed to rename TOC");
    }

    pub fn write_section(&self, manual: &str, file: &str, contents: &str) {
        let path = self.manual_dir(manual).join(file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create section dir");
        }
        fs::write(path, contents).expect("Failed to write section");
    }
}

//! Per-document facts produced by the scanner and validator.

use crate::taxonomy::{Pillar, OTHER_PILLAR};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::path::{Component, Path, PathBuf};

/// Numbered pillar directory, e.g. `1-OPS`.
static PILLAR_DIR_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)-([A-Z]+)$").unwrap());

/// Identity parsed from a `<PILLAR><NN>-BP<NN>-<name>.md` filename.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BestPracticeId {
    pub pillar: String,
    pub question: u64,
    pub practice: u64,
    pub name: String,
}

impl BestPracticeId {
    /// Short identifier such as `SEC03-BP05`.
    pub fn id(&self) -> String {
        format!(
            "{}{:02}-BP{:02}",
            self.pillar, self.question, self.practice
        )
    }
}

/// Line classification totals. `blank + code + content == total` always holds
/// for counts produced by the scanner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LineCounts {
    pub total: usize,
    pub blank: usize,
    pub code: usize,
    pub content: usize,
}

/// Facts about one scanned markdown document.
///
/// Records are built once by [`crate::analyzers::analyze_document`] and never
/// patched afterwards; re-analysis produces a fresh record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentRecord {
    pub path: PathBuf,
    pub lines: LineCounts,
    /// Level-2 heading titles in document order, duplicates kept.
    pub sections: Vec<String>,
    pub missing_required: Vec<String>,
    pub missing_recommended: Vec<String>,
    pub checklist_items: usize,
    pub references: usize,
    /// Set when the file could not be read or decoded.
    pub read_error: Option<String>,
    pub errors: Vec<String>,
    pub best_practice: Option<BestPracticeId>,
}

impl DocumentRecord {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lines: LineCounts::default(),
            sections: Vec::new(),
            missing_required: Vec::new(),
            missing_recommended: Vec::new(),
            checklist_items: 0,
            references: 0,
            read_error: None,
            errors: Vec::new(),
            best_practice: None,
        }
    }

    /// Valid iff every required section is present and the file was readable.
    pub fn is_valid(&self) -> bool {
        self.missing_required.is_empty() && self.read_error.is_none()
    }

    pub fn filename(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Parsed best-practice id, or the raw filename when the name did not parse.
    pub fn display_id(&self) -> String {
        self.best_practice
            .as_ref()
            .map(BestPracticeId::id)
            .unwrap_or_else(|| self.filename())
    }

    /// Pillar code taken from the first ancestor directory that is either a
    /// numbered pillar directory (`1-OPS`) or a bare pillar code (`OPS`).
    ///
    /// Every component of the stored path is considered, including those
    /// above the documentation root.
    pub fn pillar(&self) -> String {
        self.path
            .parent()
            .and_then(pillar_from_ancestors)
            .unwrap_or_else(|| OTHER_PILLAR.to_string())
    }

    /// Name of the immediate parent directory, e.g. `OPS01-prepare`.
    pub fn question(&self) -> String {
        self.path
            .parent()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// `<pillar>/<question>/<filename>`, used in error listings.
    pub fn location(&self) -> String {
        format!("{}/{}/{}", self.pillar(), self.question(), self.filename())
    }
}

fn pillar_from_ancestors(dir: &Path) -> Option<String> {
    dir.components().find_map(|component| match component {
        Component::Normal(name) => pillar_from_dir_name(&name.to_string_lossy()),
        _ => None,
    })
}

/// Pillar code named by a directory, if any.
pub fn pillar_from_dir_name(name: &str) -> Option<String> {
    if let Some(caps) = PILLAR_DIR_PATTERN.captures(name) {
        return Some(caps[2].to_string());
    }
    Pillar::from_code(name).map(|p| p.code().to_string())
}

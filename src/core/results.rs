//! Aggregated result of scanning a documentation tree.

use super::types::DocumentRecord;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Documents grouped by pillar code, in scan order within each pillar.
pub type PillarGroups<'a> = BTreeMap<String, Vec<&'a DocumentRecord>>;

/// Documents grouped by pillar, then by question directory.
pub type QuestionGroups<'a> = BTreeMap<String, BTreeMap<String, Vec<&'a DocumentRecord>>>;

/// Owns every record of a scan plus running totals.
///
/// Totals are only updated through [`AnalysisResult::push`], so they always
/// agree with the document list. Groupings are recomputed on every call.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    docs_path: PathBuf,
    documents: Vec<DocumentRecord>,
    total_files: usize,
    total_lines: usize,
    valid_files: usize,
    invalid_files: usize,
}

impl AnalysisResult {
    pub fn new(docs_path: impl Into<PathBuf>) -> Self {
        Self {
            docs_path: docs_path.into(),
            documents: Vec::new(),
            total_files: 0,
            total_lines: 0,
            valid_files: 0,
            invalid_files: 0,
        }
    }

    pub fn push(&mut self, record: DocumentRecord) {
        self.total_files += 1;
        self.total_lines += record.lines.total;
        if record.is_valid() {
            self.valid_files += 1;
        } else {
            self.invalid_files += 1;
        }
        self.documents.push(record);
    }

    pub fn docs_path(&self) -> &Path {
        &self.docs_path
    }

    pub fn documents(&self) -> &[DocumentRecord] {
        &self.documents
    }

    pub fn total_files(&self) -> usize {
        self.total_files
    }

    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    pub fn valid_files(&self) -> usize {
        self.valid_files
    }

    pub fn invalid_files(&self) -> usize {
        self.invalid_files
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn pillars(&self) -> PillarGroups<'_> {
        let mut groups = PillarGroups::new();
        for doc in &self.documents {
            groups.entry(doc.pillar()).or_default().push(doc);
        }
        groups
    }

    pub fn questions(&self) -> QuestionGroups<'_> {
        let mut groups = QuestionGroups::new();
        for doc in &self.documents {
            groups
                .entry(doc.pillar())
                .or_default()
                .entry(doc.question())
                .or_default()
                .push(doc);
        }
        groups
    }

    /// Distinct (pillar, question) pairs.
    pub fn question_count(&self) -> usize {
        self.questions().values().map(BTreeMap::len).sum()
    }

    pub fn invalid_documents(&self) -> impl Iterator<Item = &DocumentRecord> {
        self.documents.iter().filter(|doc| !doc.is_valid())
    }

    pub fn documents_missing_recommended(&self) -> impl Iterator<Item = &DocumentRecord> {
        self.documents
            .iter()
            .filter(|doc| !doc.missing_recommended.is_empty())
    }
}

//! Per-document analysis: filename identity, line scan and section rules.

use crate::core::DocumentRecord;
use std::path::{Path, PathBuf};

pub mod filename;
pub mod scanner;
pub mod validator;

pub use filename::parse_best_practice_filename;
pub use scanner::{scan_document, section_title, DocumentScan};
pub use validator::{check_sections, check_sections_against, SectionCheck};

/// Read and analyze one document.
///
/// Read or decoding failures are recorded on the returned record instead of
/// being propagated, so one bad file never stops a scan.
pub fn analyze_document(path: &Path) -> DocumentRecord {
    match std::fs::read_to_string(path) {
        Ok(content) => analyze_content(path.to_path_buf(), &content),
        Err(e) => {
            log::warn!("Failed to read {}: {}", path.display(), e);
            unreadable_document(path.to_path_buf(), &e.to_string())
        }
    }
}

/// Build a record from already-loaded text.
pub fn analyze_content(path: PathBuf, content: &str) -> DocumentRecord {
    let scan = scan_document(content);
    let check = check_sections(&scan.sections);

    let mut record = with_identity(path);
    record.lines = scan.lines;
    record.sections = scan.sections;
    record.checklist_items = scan.checklist_items;
    record.references = scan.references;
    record.missing_required = check.missing_required;
    record.missing_recommended = check.missing_recommended;
    record.errors = check.errors;
    record
}

/// Record for a file whose text could not be obtained; counts stay at zero.
pub fn unreadable_document(path: PathBuf, reason: &str) -> DocumentRecord {
    let mut record = with_identity(path);
    let message = format!("Error reading file: {reason}");
    record.errors.push(message.clone());
    record.read_error = Some(message);
    record
}

fn with_identity(path: PathBuf) -> DocumentRecord {
    let best_practice = path
        .file_name()
        .and_then(|name| parse_best_practice_filename(&name.to_string_lossy()));
    let mut record = DocumentRecord::new(path);
    record.best_practice = best_practice;
    record
}

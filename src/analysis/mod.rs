//! Directory-level aggregation.
//!
//! Walks a documentation root, analyzes every discovered document in path
//! order and accumulates the totals carried by [`AnalysisResult`].

use crate::analyzers::analyze_document;
use crate::core::AnalysisResult;
use crate::io::walker::DocumentWalker;
use std::path::Path;

/// Analyze every document under `docs_path`.
///
/// A missing root is not an error here: it produces the same empty result as
/// a directory without documents. Callers that must distinguish the two check
/// the root first.
pub fn analyze_directory(docs_path: &Path) -> AnalysisResult {
    let mut result = AnalysisResult::new(docs_path);

    for path in DocumentWalker::new(docs_path.to_path_buf()).walk() {
        let record = analyze_document(&path);
        log::debug!(
            "Analyzed {} ({} lines, valid: {})",
            path.display(),
            record.lines.total,
            record.is_valid()
        );
        result.push(record);
    }

    log::info!(
        "Analyzed {} documents ({} valid, {} invalid)",
        result.total_files(),
        result.valid_files(),
        result.invalid_files()
    );
    result
}

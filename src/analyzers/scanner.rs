//! Line classification for a single markdown document.

use crate::core::LineCounts;
use once_cell::sync::Lazy;
use regex::Regex;

const FENCE: &str = "```";
const SECTION_MARKER: &str = "## ";

/// `- [ ]` or `- [x]` task-list item.
static CHECKLIST_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^- \[[ x]\]").unwrap());

/// `- [text](target)` link list item.
static REFERENCE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^- \[.+\]\(.+\)").unwrap());

/// Structural facts extracted from one document's text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentScan {
    pub lines: LineCounts,
    pub sections: Vec<String>,
    pub checklist_items: usize,
    pub references: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Blank,
    Code,
    Content,
}

/// Scan `content`, split on `\n`. A trailing newline yields a final empty line
/// that is counted as blank.
pub fn scan_document(content: &str) -> DocumentScan {
    let mut scan = DocumentScan::default();
    let mut in_code_block = false;

    for line in content.split('\n') {
        let trimmed = line.trim();
        let kind = if trimmed.starts_with(FENCE) {
            in_code_block = !in_code_block;
            LineKind::Code
        } else if in_code_block {
            LineKind::Code
        } else if trimmed.is_empty() {
            LineKind::Blank
        } else {
            LineKind::Content
        };

        scan.lines.total += 1;
        match kind {
            LineKind::Blank => scan.lines.blank += 1,
            LineKind::Code => scan.lines.code += 1,
            LineKind::Content => {
                scan.lines.content += 1;
                inspect_content_line(trimmed, &mut scan);
            }
        }
    }

    scan
}

fn inspect_content_line(trimmed: &str, scan: &mut DocumentScan) {
    if let Some(title) = section_title(trimmed) {
        scan.sections.push(title);
    }

    // A task item is never also a reference, even when it carries a link.
    if CHECKLIST_PATTERN.is_match(trimmed) {
        scan.checklist_items += 1;
    } else if REFERENCE_PATTERN.is_match(trimmed) {
        scan.references += 1;
    }
}

/// Title of a level-2 heading: emphasis markup removed, cut at the first `(`.
pub fn section_title(trimmed: &str) -> Option<String> {
    let rest = trimmed.strip_prefix(SECTION_MARKER)?;
    let plain = rest.trim().replace(['*', '`'], "");
    let base = plain.split('(').next().unwrap_or_default();
    Some(base.trim().to_string())
}

//! Property-based tests for document scanning and aggregation
//!
//! These tests verify invariants that should hold for all inputs:
//! - Blank, code and content lines partition the total
//! - Validity is decided by missing required sections alone
//! - Pillar and question groupings partition the document list

use docmap::{analyze_content, scan_document, AnalysisResult, DocumentRecord};
use proptest::prelude::*;
use std::collections::HashSet;
use std::path::PathBuf;

/// Lines biased towards the constructs the scanner cares about.
fn markdown_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        Just("```".to_string()),
        Just("  ```python".to_string()),
        Just("## References".to_string()),
        Just("## Date".to_string()),
        Just("## **Checklist** (optional)".to_string()),
        Just("## Tổng quan".to_string()),
        Just("- [ ] task".to_string()),
        Just("- [x] [done](https://example.com)".to_string()),
        Just("- [link](https://example.com)".to_string()),
        "[ -~]{0,40}",
    ]
}

fn markdown_document() -> impl Strategy<Value = String> {
    prop::collection::vec(markdown_line(), 0..40).prop_map(|lines| lines.join("\n"))
}

fn document_path() -> impl Strategy<Value = PathBuf> {
    let pillar_dir = prop_oneof![
        Just("1-OPS"),
        Just("2-REL"),
        Just("SEC"),
        Just("7-XYZ"),
        Just("misc"),
    ];
    let question = prop_oneof![Just("Q01-a"), Just("Q02-b"), Just("Q03-c")];
    let file = "[a-z]{1,8}";
    (pillar_dir, question, file)
        .prop_map(|(p, q, f)| PathBuf::from(format!("docs/{p}/{q}/{f}.md")))
}

fn record(path: PathBuf, content: &str) -> DocumentRecord {
    analyze_content(path, content)
}

proptest! {
    /// Property: every line is exactly one of blank, code or content
    #[test]
    fn prop_line_counts_partition_total(content in markdown_document()) {
        let scan = scan_document(&content);
        prop_assert_eq!(
            scan.lines.blank + scan.lines.code + scan.lines.content,
            scan.lines.total
        );
        prop_assert_eq!(scan.lines.total, content.split('\n').count());
    }

    /// Property: a readable document is valid iff nothing required is missing,
    /// and there is one error per missing required section
    #[test]
    fn prop_validity_tracks_missing_required(content in markdown_document()) {
        let doc = record(PathBuf::from("docs/1-OPS/Q/a.md"), &content);
        prop_assert_eq!(doc.is_valid(), doc.missing_required.is_empty());
        prop_assert_eq!(doc.errors.len(), doc.missing_required.len());
    }

    /// Property: groupings never drop or duplicate a document
    #[test]
    fn prop_groupings_partition_documents(
        docs in prop::collection::vec((document_path(), markdown_document()), 0..20)
    ) {
        let mut result = AnalysisResult::new("docs");
        for (path, content) in &docs {
            result.push(record(path.clone(), content));
        }

        let by_pillar: usize = result.pillars().values().map(Vec::len).sum();
        prop_assert_eq!(by_pillar, result.documents().len());

        let by_question: usize = result
            .questions()
            .values()
            .flat_map(|questions| questions.values())
            .map(Vec::len)
            .sum();
        prop_assert_eq!(by_question, result.documents().len());

        let seen: HashSet<*const DocumentRecord> = result
            .pillars()
            .values()
            .flatten()
            .map(|doc| *doc as *const DocumentRecord)
            .collect();
        prop_assert_eq!(seen.len(), result.documents().len());

        prop_assert_eq!(result.total_files(), result.documents().len());
        prop_assert_eq!(result.valid_files() + result.invalid_files(), result.total_files());
        let lines: usize = result.documents().iter().map(|d| d.lines.total).sum();
        prop_assert_eq!(result.total_lines(), lines);
    }
}

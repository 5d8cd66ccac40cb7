// Export modules for library usage
pub mod analysis;
pub mod analyzers;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod formatting;
pub mod io;
pub mod observability;
pub mod output;
pub mod taxonomy;

// Re-export commonly used types
pub use crate::core::{
    AnalysisResult, BestPracticeId, DocmapError, DocumentRecord, LineCounts, PillarGroups,
    QuestionGroups,
};

pub use crate::analysis::analyze_directory;

pub use crate::analyzers::{
    analyze_content, analyze_document, check_sections, parse_best_practice_filename,
    scan_document, DocumentScan, SectionCheck,
};

pub use crate::io::walker::{find_documents, DocumentWalker};

pub use crate::output::{
    build_report, render_report, write_report, JsonSink, OutputFormat, Report, ReportSink,
    Section, TerminalSink,
};

pub use crate::taxonomy::{Pillar, RECOMMENDED_SECTIONS, REQUIRED_SECTIONS, RESOURCES_INDEX};

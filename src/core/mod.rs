//! Core data model shared by the scanner, aggregator and reporter.

pub mod errors;
pub mod results;
pub mod types;

pub use errors::DocmapError;
pub use results::{AnalysisResult, PillarGroups, QuestionGroups};
pub use types::{pillar_from_dir_name, BestPracticeId, DocumentRecord, LineCounts};

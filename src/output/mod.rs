//! Report rendering.
//!
//! [`report::build_report`] produces backend-independent sections; a
//! [`ReportSink`] turns them into bytes. Adding a backend never touches the
//! walker, scanner or validator.

pub mod json;
pub mod report;
pub mod terminal;
pub mod tree;

pub use json::JsonSink;
pub use report::{build_report, Report, Section};
pub use terminal::TerminalSink;

use crate::core::errors::Result;
use crate::core::AnalysisResult;
use crate::formatting::FormattingConfig;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Styled according to the formatting configuration.
    Terminal,
    /// ASCII only, no escape sequences.
    Plain,
    Json,
}

/// Destination for report sections.
///
/// Write failures surface as [`crate::core::DocmapError::Io`], serialization
/// failures as [`crate::core::DocmapError::Json`].
pub trait ReportSink {
    fn emit(&mut self, section: &Section) -> Result<()>;

    /// Called once after the last section.
    fn finish(&mut self) -> Result<()>;
}

pub fn render_report(report: &Report, sink: &mut dyn ReportSink) -> Result<()> {
    for section in &report.sections {
        sink.emit(section)?;
    }
    sink.finish()
}

/// Build the report for `result` and render it to `writer`.
pub fn write_report<W: Write>(
    result: &AnalysisResult,
    format: OutputFormat,
    formatting: FormattingConfig,
    writer: W,
) -> anyhow::Result<()> {
    let report = build_report(result);
    let mut sink = create_sink(format, formatting, writer);
    render_report(&report, sink.as_mut())?;
    Ok(())
}

pub fn create_sink<'a, W: Write + 'a>(
    format: OutputFormat,
    formatting: FormattingConfig,
    writer: W,
) -> Box<dyn ReportSink + 'a> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalSink::new(writer, formatting)),
        OutputFormat::Plain => Box::new(TerminalSink::plain(writer)),
        OutputFormat::Json => Box::new(JsonSink::new(writer)),
    }
}

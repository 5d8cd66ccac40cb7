use super::report::{Report, Section};
use super::ReportSink;
use crate::core::errors::Result;
use std::io::Write;

/// Collects sections and writes them as one pretty-printed JSON document.
pub struct JsonSink<W: Write> {
    writer: W,
    report: Report,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            report: Report::default(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for JsonSink<W> {
    fn emit(&mut self, section: &Section) -> Result<()> {
        self.report.sections.push(section.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.report)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

//! Backend-independent report model.
//!
//! [`build_report`] turns an [`AnalysisResult`] into an ordered list of
//! [`Section`]s. It formats pre-computed facts only; sinks in the sibling
//! modules decide how those sections look.

use super::tree::build_tree;
use crate::core::{AnalysisResult, DocumentRecord};
use crate::taxonomy::Pillar;
use serde::Serialize;

pub const REPORT_TITLE: &str = "Industry Standard Documentation Analysis";
pub const REPORT_SUBTITLE: &str = "AWS Well-Architected Style Structure";

/// Semantic emphasis; sinks map these to colors or drop them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    Plain,
    Heading,
    Accent,
    Success,
    Error,
    Warning,
    Info,
    Dim,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::Plain)
    }
}

/// A line of styled spans, joined with single spaces when rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Line(pub Vec<Span>);

impl Line {
    pub fn new(spans: Vec<Span>) -> Self {
        Self(spans)
    }

    pub fn single(text: impl Into<String>, style: Style) -> Self {
        Self(vec![Span::new(text, style)])
    }

    pub fn text(&self) -> String {
        self.0
            .iter()
            .map(|span| span.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub label: Line,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn leaf(label: Line) -> Self {
        Self {
            label,
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    Left,
    Right,
    Center,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub header: String,
    pub align: Align,
    pub style: Style,
}

impl Column {
    pub fn new(header: impl Into<String>, align: Align, style: Style) -> Self {
        Self {
            header: header.into(),
            align,
            style,
        }
    }
}

/// Border weight of a rendered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    /// Fully boxed with rounded corners.
    Boxed,
    /// Header rule only.
    Simple,
}

/// Rows hold one span per column; a span's own style overrides the column
/// style unless it is [`Style::Plain`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub kind: TableKind,
    pub show_header: bool,
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Span>>,
}

impl Table {
    pub fn new(kind: TableKind, columns: Vec<Column>) -> Self {
        Self {
            kind,
            show_header: true,
            columns,
            rows: Vec::new(),
        }
    }

    pub fn without_header(mut self) -> Self {
        self.show_header = false;
        self
    }

    pub fn add_row(&mut self, row: Vec<Span>) {
        self.rows.push(row);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    Banner { title: String, subtitle: String },
    Heading { line: Line },
    Tree { root: TreeNode },
    Table { table: Table },
    Text { lines: Vec<Line> },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub sections: Vec<Section>,
}

impl Report {
    fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    fn heading(&mut self, text: &str, style: Style) {
        self.push(Section::Heading {
            line: Line::single(text, style),
        });
    }
}

/// Assemble every report section in display order.
pub fn build_report(result: &AnalysisResult) -> Report {
    let mut report = Report::default();

    report.push(Section::Banner {
        title: REPORT_TITLE.to_string(),
        subtitle: REPORT_SUBTITLE.to_string(),
    });

    report.heading("Directory Structure", Style::Warning);
    report.push(Section::Tree {
        root: build_tree(result),
    });

    report.heading("Summary Statistics", Style::Warning);
    report.push(Section::Table {
        table: summary_table(result),
    });

    report.heading("Pillar Summary", Style::Warning);
    report.push(Section::Table {
        table: pillar_table(result),
    });

    report.heading("Best Practice Analysis", Style::Warning);
    push_pillar_details(&mut report, result);

    let errors = validation_error_lines(result);
    if !errors.is_empty() {
        report.heading("Format Validation Errors", Style::Error);
        report.push(Section::Text { lines: errors });
    }

    let missing = missing_recommended_lines(result);
    if !missing.is_empty() {
        report.heading("Missing Recommended Sections", Style::Warning);
        report.push(Section::Text { lines: missing });
    }

    report
}

fn summary_table(result: &AnalysisResult) -> Table {
    let mut table = Table::new(
        TableKind::Boxed,
        vec![
            Column::new("Metric", Align::Left, Style::Info),
            Column::new("Value", Align::Left, Style::Success),
        ],
    )
    .without_header();

    let rows = [
        ("Total Files", result.total_files()),
        ("Total Lines", result.total_lines()),
        ("Valid Format", result.valid_files()),
        ("Invalid Format", result.invalid_files()),
        ("Pillars", result.pillars().len()),
        ("Questions", result.question_count()),
    ];
    for (metric, value) in rows {
        table.add_row(vec![Span::plain(metric), Span::plain(value.to_string())]);
    }
    table
}

fn pillar_table(result: &AnalysisResult) -> Table {
    let mut table = Table::new(
        TableKind::Boxed,
        vec![
            Column::new("#", Align::Right, Style::Dim),
            Column::new("Pillar", Align::Left, Style::Info),
            Column::new("Name", Align::Left, Style::Plain),
            Column::new("Questions", Align::Right, Style::Accent),
            Column::new("Best Practices", Align::Right, Style::Success),
            Column::new("Lines", Align::Right, Style::Warning),
        ],
    );

    let pillars = result.pillars();
    let questions = result.questions();
    for (idx, pillar) in Pillar::ALL.iter().enumerate() {
        let Some(docs) = pillars.get(pillar.code()) else {
            continue;
        };
        let question_count = questions.get(pillar.code()).map_or(0, |q| q.len());
        let lines: usize = docs.iter().map(|d| d.lines.total).sum();
        table.add_row(vec![
            Span::plain((idx + 1).to_string()),
            Span::plain(pillar.code()),
            Span::plain(pillar.display_name()),
            Span::plain(question_count.to_string()),
            Span::plain(docs.len().to_string()),
            Span::plain(lines.to_string()),
        ]);
    }
    table
}

fn push_pillar_details(report: &mut Report, result: &AnalysisResult) {
    let pillars = result.pillars();
    for (idx, pillar) in Pillar::ALL.iter().enumerate() {
        let Some(docs) = pillars.get(pillar.code()) else {
            continue;
        };

        report.heading(
            &format!("{}. {} - {}", idx + 1, pillar.code(), pillar.display_name()),
            Style::Info,
        );

        let mut docs = docs.clone();
        docs.sort_by_key(|doc| doc.filename());
        report.push(Section::Table {
            table: detail_table(&docs),
        });
    }
}

fn detail_table(docs: &[&DocumentRecord]) -> Table {
    let mut table = Table::new(
        TableKind::Simple,
        vec![
            Column::new("ID", Align::Left, Style::Success),
            Column::new("Question", Align::Left, Style::Plain),
            Column::new("Lines", Align::Right, Style::Accent),
            Column::new("Content", Align::Right, Style::Accent),
            Column::new("Code", Align::Right, Style::Warning),
            Column::new("Refs", Align::Right, Style::Dim),
            Column::new("Checklist", Align::Right, Style::Info),
            Column::new("Valid", Align::Center, Style::Plain),
        ],
    );

    for doc in docs {
        let valid = if doc.is_valid() {
            Span::new("OK", Style::Success)
        } else {
            Span::new("ERR", Style::Error)
        };
        table.add_row(vec![
            Span::plain(doc.display_id()),
            Span::plain(doc.question()),
            Span::plain(doc.lines.total.to_string()),
            Span::plain(doc.lines.content.to_string()),
            Span::plain(doc.lines.code.to_string()),
            Span::plain(doc.references.to_string()),
            Span::plain(doc.checklist_items.to_string()),
            valid,
        ]);
    }
    table
}

fn validation_error_lines(result: &AnalysisResult) -> Vec<Line> {
    let mut lines = Vec::new();
    for doc in result.invalid_documents() {
        lines.push(Line::single(doc.location(), Style::Error));
        for error in &doc.errors {
            lines.push(Line::single(format!("  - {error}"), Style::Plain));
        }
    }
    lines
}

fn missing_recommended_lines(result: &AnalysisResult) -> Vec<Line> {
    let mut lines = Vec::new();
    for doc in result.documents_missing_recommended() {
        lines.push(Line::single(doc.location(), Style::Warning));
        for section in &doc.missing_recommended {
            lines.push(Line::single(format!("  - Missing: {section}"), Style::Plain));
        }
    }
    lines
}

use super::report::{Align, Line, Section, Span, Style, Table, TableKind, TreeNode};
use super::ReportSink;
use crate::formatting::{formatter_for, FormattingConfig, OutputFormatter};
use crate::core::errors::Result;
use comfy_table::{modifiers, presets, Cell, CellAlignment, Color};
use std::io::Write;

struct Guides {
    branch: &'static str,
    last: &'static str,
    pipe: &'static str,
    blank: &'static str,
}

const UNICODE_GUIDES: Guides = Guides {
    branch: "├── ",
    last: "└── ",
    pipe: "│   ",
    blank: "    ",
};

const ASCII_GUIDES: Guides = Guides {
    branch: "|-- ",
    last: "`-- ",
    pipe: "|   ",
    blank: "    ",
};

/// Human-readable report: styled text, box-drawn tables and a guided tree.
///
/// With [`FormattingConfig::plain`] the same layout is produced in ASCII
/// without escape sequences.
pub struct TerminalSink<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
    use_color: bool,
    use_unicode: bool,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(writer: W, config: FormattingConfig) -> Self {
        Self {
            writer,
            formatter: formatter_for(config),
            use_color: config.color.should_use_color(),
            use_unicode: config.unicode.should_use_unicode(),
        }
    }

    pub fn plain(writer: W) -> Self {
        Self::new(writer, FormattingConfig::plain())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn paint(&self, span: &Span) -> String {
        let text = span.text.as_str();
        match span.style {
            Style::Plain => text.to_string(),
            Style::Heading => self.formatter.header(text),
            Style::Accent => self.formatter.bold(text),
            Style::Success => self.formatter.success(text),
            Style::Error => self.formatter.error(text),
            Style::Warning => self.formatter.warning(text),
            Style::Info => self.formatter.info(text),
            Style::Dim => self.formatter.dim(text),
        }
    }

    fn paint_line(&self, line: &Line) -> String {
        line.0
            .iter()
            .map(|span| self.paint(span))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn write_banner(&mut self, title: &str, subtitle: &str) -> Result<()> {
        let width = title.chars().count().max(subtitle.chars().count());
        let (top, bottom, side, rule) = if self.use_unicode {
            (("╭", "╮"), ("╰", "╯"), "│", "─")
        } else {
            (("+", "+"), ("+", "+"), "|", "-")
        };
        let border = rule.repeat(width + 2);
        let side = self.formatter.header(side);

        let mut lines = vec![self
            .formatter
            .header(&format!("{}{border}{}", top.0, top.1))];
        for (text, styled) in [
            (title, self.formatter.bold(title)),
            (subtitle, self.formatter.dim(subtitle)),
        ] {
            let pad = " ".repeat(width - text.chars().count());
            lines.push(format!("{side} {styled}{pad} {side}"));
        }
        lines.push(
            self.formatter
                .header(&format!("{}{border}{}", bottom.0, bottom.1)),
        );

        writeln!(self.writer)?;
        for line in lines {
            writeln!(self.writer, "{line}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_tree(&mut self, root: &TreeNode) -> Result<()> {
        let mut lines = vec![self.paint_line(&root.label)];
        self.collect_tree_lines(&root.children, "", &mut lines);
        for line in lines {
            writeln!(self.writer, "{line}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn collect_tree_lines(&self, nodes: &[TreeNode], prefix: &str, out: &mut Vec<String>) {
        let guides = if self.use_unicode {
            &UNICODE_GUIDES
        } else {
            &ASCII_GUIDES
        };
        for (idx, node) in nodes.iter().enumerate() {
            let is_last = idx + 1 == nodes.len();
            let connector = if is_last { guides.last } else { guides.branch };
            out.push(format!(
                "{}{}",
                self.formatter.dim(&format!("{prefix}{connector}")),
                self.paint_line(&node.label)
            ));
            let child_prefix = format!(
                "{prefix}{}",
                if is_last { guides.blank } else { guides.pipe }
            );
            self.collect_tree_lines(&node.children, &child_prefix, out);
        }
    }

    fn write_table(&mut self, table: &Table) -> Result<()> {
        let rendered = self.build_table(table);
        writeln!(self.writer, "{rendered}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn build_table(&self, table: &Table) -> comfy_table::Table {
        let mut out = comfy_table::Table::new();
        match (table.kind, self.use_unicode) {
            (TableKind::Boxed, true) => {
                out.load_preset(presets::UTF8_FULL)
                    .apply_modifier(modifiers::UTF8_ROUND_CORNERS);
            }
            (TableKind::Boxed, false) => {
                out.load_preset(presets::ASCII_FULL);
            }
            (TableKind::Simple, true) => {
                out.load_preset(presets::UTF8_HORIZONTAL_ONLY);
            }
            (TableKind::Simple, false) => {
                out.load_preset(presets::ASCII_HORIZONTAL_ONLY);
            }
        }
        if self.use_color {
            out.enforce_styling();
        } else {
            out.force_no_tty();
        }

        if table.show_header {
            out.set_header(table.columns.iter().map(|c| Cell::new(&c.header)));
        }
        for row in &table.rows {
            let cells = row.iter().zip(&table.columns).map(|(span, column)| {
                let style = match span.style {
                    Style::Plain => column.style,
                    own => own,
                };
                self.cell(&span.text, style)
            });
            out.add_row(cells);
        }

        for (idx, column) in table.columns.iter().enumerate() {
            if let Some(target) = out.column_mut(idx) {
                target.set_cell_alignment(match column.align {
                    Align::Left => CellAlignment::Left,
                    Align::Right => CellAlignment::Right,
                    Align::Center => CellAlignment::Center,
                });
            }
        }
        out
    }

    fn cell(&self, text: &str, style: Style) -> Cell {
        let cell = Cell::new(text);
        if !self.use_color {
            return cell;
        }
        match style {
            Style::Plain => cell,
            Style::Heading | Style::Accent => cell.fg(Color::Blue),
            Style::Success => cell.fg(Color::Green),
            Style::Error => cell.fg(Color::Red),
            Style::Warning => cell.fg(Color::Yellow),
            Style::Info => cell.fg(Color::Cyan),
            Style::Dim => cell.fg(Color::DarkGrey),
        }
    }
}

impl<W: Write> ReportSink for TerminalSink<W> {
    fn emit(&mut self, section: &Section) -> Result<()> {
        match section {
            Section::Banner { title, subtitle } => self.write_banner(title, subtitle)?,
            Section::Heading { line } => {
                let text = self.formatter.bold(&self.paint_line(line));
                writeln!(self.writer, "{text}")?;
                writeln!(self.writer)?;
            }
            Section::Tree { root } => self.write_tree(root)?,
            Section::Table { table } => self.write_table(table)?,
            Section::Text { lines } => {
                let rendered: Vec<String> = lines.iter().map(|l| self.paint_line(l)).collect();
                for line in rendered {
                    writeln!(self.writer, "{line}")?;
                }
                writeln!(self.writer)?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DocmapError;
    use crate::output::report::Column;
    use std::io;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn render(section: &Section) -> String {
        let mut sink = TerminalSink::plain(Vec::new());
        sink.emit(section).unwrap();
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn plain_banner_is_ascii_boxed() {
        let out = render(&Section::Banner {
            title: "Title".into(),
            subtitle: "Longer subtitle".into(),
        });
        let border = format!("+{}+", "-".repeat(17));
        assert!(out.contains(&border));
        assert!(out.contains(&format!("| Title{} |", " ".repeat(10))));
        assert!(out.contains("| Longer subtitle |"));
        assert!(!out.contains('\u{1b}'));
    }

    #[test]
    fn plain_tree_uses_ascii_guides() {
        let root = TreeNode {
            label: Line::single("docs/", Style::Heading),
            children: vec![
                TreeNode {
                    label: Line::single("1-OPS/", Style::Info),
                    children: vec![TreeNode::leaf(Line::single("a.md", Style::Success))],
                },
                TreeNode::leaf(Line::single("b.md", Style::Success)),
            ],
        };
        let out = render(&Section::Tree { root });
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "docs/");
        assert_eq!(lines[1], "|-- 1-OPS/");
        assert_eq!(lines[2], "|   `-- a.md");
        assert_eq!(lines[3], "`-- b.md");
    }

    #[test]
    fn table_cells_are_rendered() {
        let mut table = Table::new(
            TableKind::Boxed,
            vec![
                Column::new("ID", Align::Left, Style::Success),
                Column::new("Lines", Align::Right, Style::Accent),
            ],
        );
        table.add_row(vec![Span::plain("OPS01-BP01"), Span::plain("42")]);
        let out = render(&Section::Table { table });
        assert!(out.contains("ID"));
        assert!(out.contains("OPS01-BP01"));
        assert!(out.contains("42"));
        assert!(!out.contains('\u{1b}'));
    }

    #[test]
    fn write_failure_is_an_io_error() {
        let mut sink = TerminalSink::plain(ClosedPipe);
        let err = sink
            .emit(&Section::Text {
                lines: vec![Line::single("x", Style::Plain)],
            })
            .unwrap_err();
        match err {
            DocmapError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("unexpected error: {other}"),
        }
    }
}

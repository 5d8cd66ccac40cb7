//! Directory tree view over analyzed documents.

use super::report::{Line, Span, Style, TreeNode};
use crate::core::{pillar_from_dir_name, AnalysisResult, DocumentRecord};
use crate::taxonomy::pillar_display_name;
use std::collections::BTreeMap;
use std::path::{Component, Path};

#[derive(Default)]
struct DirEntry<'a> {
    dirs: BTreeMap<String, DirEntry<'a>>,
    files: Vec<&'a DocumentRecord>,
}

impl<'a> DirEntry<'a> {
    fn insert(&mut self, dirs: &[String], doc: &'a DocumentRecord) {
        match dirs.split_first() {
            Some((first, rest)) => self.dirs.entry(first.clone()).or_default().insert(rest, doc),
            None => self.files.push(doc),
        }
    }

    fn into_children(self) -> Vec<TreeNode> {
        let mut children: Vec<TreeNode> = self
            .dirs
            .into_iter()
            .map(|(name, entry)| TreeNode {
                label: dir_label(&name),
                children: entry.into_children(),
            })
            .collect();

        let mut files = self.files;
        files.sort_by_key(|doc| doc.filename());
        children.extend(files.into_iter().map(|doc| TreeNode::leaf(file_label(doc))));
        children
    }
}

/// Tree mirroring the directory layout of the analyzed documents.
///
/// Directories come before files at every level, each group sorted by name.
/// Documents under a dot-prefixed directory, or dot-prefixed themselves, are
/// left out of the view.
pub fn build_tree(result: &AnalysisResult) -> TreeNode {
    let root = result.docs_path();
    let mut top = DirEntry::default();

    for doc in result.documents() {
        let Some(dirs) = visible_dirs(root, &doc.path) else {
            continue;
        };
        top.insert(&dirs, doc);
    }

    TreeNode {
        label: Line::single(format!("{}/", root_name(root)), Style::Heading),
        children: top.into_children(),
    }
}

fn root_name(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}

/// Directory names between the root and the document, or `None` when any
/// part of the relative path is hidden.
fn visible_dirs(root: &Path, path: &Path) -> Option<Vec<String>> {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let names: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if names.iter().any(|name| name.starts_with('.')) {
        return None;
    }
    let (_, dirs) = names.split_last()?;
    Some(dirs.to_vec())
}

fn dir_label(name: &str) -> Line {
    let mut spans = vec![Span::new(format!("{name}/"), Style::Info)];
    if let Some(code) = pillar_from_dir_name(name) {
        spans.push(Span::new(
            format!("({})", pillar_display_name(&code)),
            Style::Dim,
        ));
    }
    Line::new(spans)
}

fn file_label(doc: &DocumentRecord) -> Line {
    if doc.read_error.is_some() {
        return Line::single(doc.filename(), Style::Success);
    }

    let lines = doc.lines.total;
    match &doc.best_practice {
        Some(bp) => Line::new(vec![
            Span::new(bp.id(), Style::Success),
            Span::new(format!("{} ({lines} lines)", bp.name), Style::Dim),
        ]),
        None => Line::new(vec![
            Span::new(doc.filename(), Style::Success),
            Span::new(format!("({lines} lines)"), Style::Dim),
        ]),
    }
}

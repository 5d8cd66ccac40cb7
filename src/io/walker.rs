use crate::taxonomy::RESOURCES_INDEX;
use ignore::{DirEntry, WalkBuilder};
use std::path::{Path, PathBuf};

const MARKDOWN_EXTENSION: &str = "md";

/// Discovers markdown documents under a root, in lexicographic path order.
pub struct DocumentWalker {
    root: PathBuf,
    excluded_names: Vec<String>,
}

impl DocumentWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            excluded_names: vec![RESOURCES_INDEX.to_string()],
        }
    }

    pub fn with_excluded_names(mut self, names: Vec<String>) -> Self {
        self.excluded_names = names;
        self
    }

    /// Every `.md` file under the root, hidden files included and ignore
    /// files not honored. A missing or unreadable root yields no files.
    ///
    /// Symlinked files are kept, dangling ones included, so the analyzer can
    /// record them. Symlinked directories are not descended into.
    pub fn walk(&self) -> Vec<PathBuf> {
        if !self.root.is_dir() {
            log::debug!("{} is not a directory, nothing to walk", self.root.display());
            return Vec::new();
        }

        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(false)
            .build();

        let mut files: Vec<PathBuf> = walker
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    log::warn!("Skipping unreadable entry: {}", e);
                    None
                }
            })
            .filter(is_file_entry)
            .map(|entry| entry.into_path())
            .filter(|path| self.should_process(path))
            .collect();

        files.sort();
        files
    }

    fn should_process(&self, path: &Path) -> bool {
        let is_markdown = path
            .extension()
            .is_some_and(|ext| ext == MARKDOWN_EXTENSION);
        let is_excluded = path
            .file_name()
            .is_some_and(|name| self.excluded_names.iter().any(|ex| name == ex.as_str()));

        if is_markdown && is_excluded {
            log::debug!("Skipping excluded document {}", path.display());
        }
        is_markdown && !is_excluded
    }
}

fn is_file_entry(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_symlink() => !entry.path().is_dir(),
        Some(ft) => ft.is_file(),
        None => false,
    }
}

pub fn find_documents(root: &Path) -> Vec<PathBuf> {
    DocumentWalker::new(root.to_path_buf()).walk()
}

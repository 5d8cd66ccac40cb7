//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a run.
///
/// Per-document problems (unreadable files, missing sections) never show up
/// here; they are recorded on the document itself.
#[derive(Debug, Error)]
pub enum DocmapError {
    /// The documentation root does not exist
    #[error("Documentation path not found: {}", path.display())]
    RootNotFound { path: PathBuf },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl DocmapError {
    pub fn root_not_found(path: impl Into<PathBuf>) -> Self {
        Self::RootNotFound { path: path.into() }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, DocmapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_not_found_names_the_path() {
        let err = DocmapError::root_not_found("/no/such/docs");
        assert_eq!(
            err.to_string(),
            "Documentation path not found: /no/such/docs"
        );
    }

    #[test]
    fn io_errors_convert_transparently() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let err: DocmapError = io.into();
        assert_eq!(err.to_string(), "disk on fire");
    }
}

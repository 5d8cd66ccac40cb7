//! Filesystem access.

pub mod walker;

pub use walker::{find_documents, DocumentWalker};

//! Catalog-specific error types
//!
//! Both errors describe structural faults in the data supplied to the
//! engine, not operational failures: the snapshot the caller handed in is
//! inconsistent. The engine surfaces them unchanged; the caller decides
//! whether to reset the selection and retry with a fresh snapshot.

use thiserror::Error;

/// Faults detected while building a [`CategoryTree`](super::CategoryTree)
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// Two categories share the same path
    #[error("duplicate category path '{0}'")]
    DuplicatePath(String),

    /// A category references a parent path that does not exist
    #[error("category '{path}' references missing parent '{parent}'")]
    DanglingParent { path: String, parent: String },

    /// Walking parent links from a category revisits it
    #[error("category hierarchy contains a cycle through '{0}'")]
    Cycle(String),
}

/// Errors returned by catalog queries
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The selected category path is not present in the supplied snapshot
    #[error("category not found: '{0}'")]
    CategoryNotFound(String),

    /// The supplied category collection is structurally invalid
    #[error("malformed category tree: {0}")]
    MalformedTree(#[from] TreeError),
}

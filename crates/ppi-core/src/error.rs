//! Error taxonomy shared across the PPI pipeline.
//!
//! Every fallible operation in `ppi-core` and `ppi-analysis` returns one of
//! these variants. There is no retry machinery: this is a batch tool, and an
//! error aborts the current command without partial output.

/// Errors produced by loading, normalization, persistence, and analysis.
#[derive(Debug, thiserror::Error)]
pub enum PpiError {
    /// A referenced file, table, or named graph node does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The source file could not be parsed as a tab-separated record set.
    #[error("parse error: {0}")]
    Parse(String),

    /// A foreign-key or ID lookup failed that the normalization step should
    /// have made impossible.
    #[error("integrity error: {0}")]
    Integrity(String),

    /// A read was attempted against a store that has never been imported.
    #[error("query before import: {0}")]
    Query(String),

    /// Centrality was requested on a graph with zero nodes.
    #[error("graph has no nodes")]
    EmptyGraph,

    /// Underlying SQLite failure (open, prepare, execute).
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// Filesystem failure outside the loader's existence check.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, PpiError>;

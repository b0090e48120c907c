//! # Error Taxonomy
//!
//! Two families live here:
//!
//! * [`CatalogError`]: the only failures that are ever shown to a caller. An unreadable
//!   recon root means no scan can be served at all.
//! * [`IngestError`]: what a single artifact reader can hit. These never leave the
//!   ingestion layer; they are logged and the category degrades to empty.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("recon directory not found: {}", root.display())]
    NotFound { root: PathBuf },

    #[error("failed to read recon directory {}: {source}", root.display())]
    ReadFailure {
        root: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scan id: {0:?}")]
    InvalidScanId(String),

    #[error("no such scan: {0}")]
    UnknownScan(String),
}

impl CatalogError {
    /// Classifies an I/O error raised while listing `root`.
    pub fn from_io(root: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let root = root.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { root },
            _ => Self::ReadFailure { root, source },
        }
    }
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("artifact not present: {}", path.display())]
    Missing { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed XML at byte {position}: {message}")]
    Xml { position: u64, message: String },
}

impl IngestError {
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::Missing { path },
            _ => Self::Io { path, source },
        }
    }

    /// Missing artifacts are expected; everything else deserves a warning.
    pub fn is_absence(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }
}

pub type IngestResult<T> = Result<T, IngestError>;

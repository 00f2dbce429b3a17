//! Error taxonomy for ingestion, storage, and progress updates.
//!
//! # Error Handling Strategy
//!
//! - **Ingestion**: any catalog failure aborts the whole `create` call and names the
//!   failing endpoint. Nothing is written to the store.
//! - **Single-record operations**: `load`, `save`, and `set_have` surface their errors
//!   to the caller with the offending id.
//! - **Search scans**: a [`TrackerError::MalformedRecord`] for one record is logged and
//!   swallowed so one corrupt file cannot hide results from every other set.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// The logical catalog queries the ingestion engine depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogEndpoint {
    /// Set metadata (name, year, declared part count)
    SetInfo,
    /// Direct parts list of a set
    SetParts,
    /// Minifigures (sub-assemblies) contained in a set
    SetMinifigs,
    /// Parts list of one minifigure
    MinifigParts,
    /// Part category name lookup
    Category,
}

impl CatalogEndpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogEndpoint::SetInfo => "set info",
            CatalogEndpoint::SetParts => "set parts",
            CatalogEndpoint::SetMinifigs => "set minifigs",
            CatalogEndpoint::MinifigParts => "minifig parts",
            CatalogEndpoint::Category => "part category",
        }
    }
}

impl fmt::Display for CatalogEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("failed to fetch {endpoint} from catalog: {reason}")]
    CatalogFetch { endpoint: CatalogEndpoint, reason: String },

    #[error("set {id} already exists")]
    DuplicateRecord { id: String },

    #[error("set {id} not found")]
    NotFound { id: String },

    #[error("invalid input: {reason}")]
    Validation { reason: String },

    #[error("set {id} is malformed: {reason}")]
    MalformedRecord { id: String, reason: String },

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize set {id}: {source}")]
    Serialize {
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

impl TrackerError {
    pub fn catalog(endpoint: CatalogEndpoint, reason: impl Into<String>) -> Self {
        TrackerError::CatalogFetch { endpoint, reason: reason.into() }
    }

    pub fn validation(reason: impl Into<String>) -> Self {
        TrackerError::Validation { reason: reason.into() }
    }

    pub fn malformed(id: impl Into<String>, reason: impl Into<String>) -> Self {
        TrackerError::MalformedRecord { id: id.into(), reason: reason.into() }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TrackerError::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;

//! Error types for relayout library.

use std::io;
use thiserror::Error;

/// Result type alias for relayout operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during layout reconstruction.
///
/// Degenerate geometry (empty text, non-finite transforms, empty pages) is
/// never reported here; it is resolved inside the pipeline by omission.
#[derive(Error, Debug)]
pub enum Error {
    /// Token accounting mismatch between two pipeline stages.
    ///
    /// This indicates a defect in the engine, not in the input.
    #[error("Invariant violation on page {page}: {detail}")]
    InvariantViolation {
        /// Zero-based page index
        page: usize,
        /// What went wrong
        detail: String,
    },

    /// Processing of the page was abandoned by the caller.
    #[error("Page {page} was cancelled")]
    Cancelled {
        /// Zero-based page index
        page: usize,
    },

    /// A layout threshold is out of range.
    #[error("Invalid layout configuration: {0}")]
    InvalidConfig(String),

    /// Invalid page range specification.
    #[error("Invalid page range: {0}")]
    InvalidPageRange(String),

    /// The worker pool could not be created.
    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    /// Error during rendering (JSON, text).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Malformed JSON page input.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<rayon::ThreadPoolBuildError> for Error {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Error::ThreadPool(err.to_string())
    }
}

impl Error {
    /// Whether this error reports an engine defect rather than a caller decision.
    pub fn is_defect(&self) -> bool {
        matches!(self, Error::InvariantViolation { .. })
    }

    /// Page index the error is attached to, if any.
    pub fn page(&self) -> Option<usize> {
        match self {
            Error::InvariantViolation { page, .. } | Error::Cancelled { page } => Some(*page),
            _ => None,
        }
    }
}

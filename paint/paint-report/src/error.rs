//! Error types for report shaping.

use thiserror::Error;

/// Result type for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Errors that can occur while building or exporting a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The mesh buffer could not be decoded.
    #[error(transparent)]
    Io(#[from] paint_io::IoError),

    /// Classification rejected the input.
    #[error(transparent)]
    Region(#[from] paint_region::RegionError),

    /// The requested export format is not supported.
    #[error("unsupported export format: {format}")]
    UnsupportedFormat {
        /// The rejected format name.
        format: String,
    },

    /// JSON encoding failed.
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

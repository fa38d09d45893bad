//! Error types for region classification.

use thiserror::Error;

/// Result type for region classification.
pub type RegionResult<T> = Result<T, RegionError>;

/// Errors that can occur during region classification.
///
/// Empty input and zero vertical extent are *not* errors: they are
/// documented degenerate cases with well-defined results.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RegionError {
    /// A point has a NaN or infinite coordinate.
    #[error("point {index} has a non-finite coordinate")]
    NonFinitePoint {
        /// Index of the offending point.
        index: usize,
    },

    /// More points than the u32 index space can identify.
    #[error("too many points: {count} exceeds the u32 index range")]
    TooManyPoints {
        /// Number of points supplied.
        count: usize,
    },
}

//! Error types for shape and index checks on sounding data.

use thiserror::Error;

/// Result type alias using CommonError.
pub type CommonResult<T> = Result<T, CommonError>;

/// Errors raised when arrays disagree with the shapes they claim.
#[derive(Debug, Error)]
pub enum CommonError {
    /// Array length does not match the declared dimensions
    #[error("shape mismatch for {name}: expected {expected} values, got {actual}")]
    ShapeMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// An axis has no points
    #[error("empty axis: {0}")]
    EmptyAxis(String),

    /// Index outside of an axis
    #[error("index {index} out of range for {axis} (len {len})")]
    IndexOutOfRange {
        axis: String,
        index: usize,
        len: usize,
    },
}

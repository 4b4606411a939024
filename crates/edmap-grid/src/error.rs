//! Error types for grid processing.

use thiserror::Error;

/// Result type alias for grid processing.
pub type GridResult<T> = Result<T, GridError>;

/// Errors that can occur while slicing or resampling a sounding.
#[derive(Error, Debug)]
pub enum GridError {
    /// A coordinate axis has no usable (finite) values.
    #[error("empty axis: {0}")]
    EmptyAxis(String),

    /// The resampling step is not a positive finite number.
    #[error("invalid grid step: {0}")]
    InvalidStep(f64),

    /// The regular grid would hold more than `limit` cells.
    #[error("regular grid needs {requested} cells, limit is {limit}")]
    TooManyCells { requested: f64, limit: usize },

    /// Shape or index problem in the underlying arrays.
    #[error(transparent)]
    Shape(#[from] edmap_common::CommonError),
}

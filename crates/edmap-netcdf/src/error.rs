//! Error types for sounding file loading.

use thiserror::Error;

/// Result type for NetCDF loader operations.
pub type NetCdfResult<T> = Result<T, NetCdfError>;

/// Error types for NetCDF loading.
#[derive(Error, Debug)]
pub enum NetCdfError {
    /// The file does not exist or could not be opened as NetCDF
    #[error("Failed to open {path}: {message}")]
    OpenFailed { path: String, message: String },

    /// Missing required variable or attribute
    #[error("Missing required data: {0}")]
    MissingData(String),

    /// Invalid data format
    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    /// Arrays disagree on their shapes
    #[error("Inconsistent sounding shape: {0}")]
    Shape(#[from] edmap_common::CommonError),
}

impl NetCdfError {
    /// True for the open failures callers may choose to skip quietly.
    pub fn is_open_failure(&self) -> bool {
        matches!(self, NetCdfError::OpenFailed { .. })
    }
}

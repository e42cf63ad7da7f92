//! Error types for the fusion engine.

use thiserror::Error;

/// Error type for fusion operations.
#[derive(Error, Debug)]
pub enum FusionError {
    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Input image is too small to build a pyramid from.
    #[error("degenerate image: {width}x{height} (minimum 4x4)")]
    DegenerateImage {
        /// Input width in pixels
        width: usize,
        /// Input height in pixels
        height: usize,
    },

    /// Buffer-level failure from the core types.
    #[error(transparent)]
    Core(#[from] expofuse_core::Error),
}

/// Result type for fusion operations.
pub type FusionResult<T> = Result<T, FusionError>;

//! Error types for expofuse buffer operations.
//!
//! The [`Error`] enum covers the failure modes of buffer construction and
//! element-wise combination:
//!
//! - Constructing an [`Image`](crate::Image) or [`Plane`](crate::Plane) from
//!   a data vector whose length does not match the requested dimensions
//! - Combining two buffers whose dimensions disagree
//! - Combining two buffers whose channel counts disagree
//!
//! # Usage
//!
//! ```rust
//! use expofuse_core::{Error, Result};
//!
//! fn check_same_size(a: (usize, usize), b: (usize, usize)) -> Result<()> {
//!     if a != b {
//!         return Err(Error::dimension_mismatch(a, b));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing or combining pixel buffers.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid buffer dimensions.
    ///
    /// Returned when width or height is zero, or when a data vector's length
    /// does not match `width * height * channels`.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Buffer dimensions don't match for the operation.
    ///
    /// Returned when an operation requires buffers of the same size
    /// (e.g., weighted accumulation, alpha copy).
    #[error("dimension mismatch: {a_width}x{a_height} vs {b_width}x{b_height}")]
    DimensionMismatch {
        /// First buffer width
        a_width: usize,
        /// First buffer height
        a_height: usize,
        /// Second buffer width
        b_width: usize,
        /// Second buffer height
        b_height: usize,
    },

    /// Channel count mismatch between source and destination.
    #[error("channel mismatch: expected {expected}, got {got}")]
    ChannelMismatch {
        /// Expected channel count
        expected: usize,
        /// Actual channel count
        got: usize,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: usize, height: usize, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::DimensionMismatch`] error.
    #[inline]
    pub fn dimension_mismatch(a: (usize, usize), b: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            a_width: a.0,
            a_height: a.1,
            b_width: b.0,
            b_height: b.1,
        }
    }

    /// Creates an [`Error::ChannelMismatch`] error.
    #[inline]
    pub fn channel_mismatch(expected: usize, got: usize) -> Self {
        Self::ChannelMismatch { expected, got }
    }
}

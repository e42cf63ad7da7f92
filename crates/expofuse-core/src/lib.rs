//! # expofuse-core
//!
//! Core buffer and error types for the expofuse exposure-fusion engine.
//!
//! This crate provides the foundational types shared by the rest of the
//! workspace:
//!
//! - [`Image`] - Owned RGBA f32 buffer (interleaved, 4 channels)
//! - [`Plane`] - Owned single-channel f32 buffer (weight maps)
//! - [`Error`] / [`Result`] - Buffer-level error handling
//!
//! ## Crate Structure
//!
//! This crate is the foundation of the workspace and has no internal
//! dependencies. All other expofuse crates depend on `expofuse-core`:
//!
//! ```text
//! expofuse-core (this crate)
//!    ^
//!    |
//!    +-- expofuse-color (grey projectors, blend spaces)
//!    +-- expofuse-pyramid (Gaussian/Laplacian pyramids)
//!    +-- expofuse (the fusion engine)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;

// Re-exports for convenience
pub use error::{Error, Result};
pub use image::{Image, Plane};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use expofuse_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::image::{Image, Plane};
}

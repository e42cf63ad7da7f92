//! # expofuse-pyramid
//!
//! Gaussian and Laplacian image pyramids for multiresolution blending.
//!
//! Exposure fusion blends images per frequency band rather than per pixel:
//! each source image is decomposed into a [`LaplacianPyramid`] of detail
//! bands, each weight map into a [`GaussianPyramid`] of smoothed copies,
//! and the blended bands are collapsed back with
//! [`LaplacianPyramid::reconstruct`].
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`level`] | [`Level`] buffer with a runtime channel count |
//! | [`resample`] | [`reduce`] / [`expand`] with the shared 5-tap kernel |
//! | [`gaussian`] | [`GaussianPyramid`] |
//! | [`laplacian`] | [`LaplacianPyramid`] and reconstruction |
//!
//! # Usage
//!
//! ```rust
//! use expofuse_core::Image;
//! use expofuse_pyramid::{pyramid_depth, LaplacianPyramid};
//!
//! let img = Image::filled(64, 64, [0.5, 0.5, 0.5, 1.0]);
//! let depth = pyramid_depth(img.width(), img.height());
//! let pyr = LaplacianPyramid::build(&img, depth).unwrap();
//! let restored = pyr.reconstruct().unwrap().into_image().unwrap();
//! ```
//!
//! # Dependencies
//!
//! - [`expofuse-core`] - Image and plane types
//!
//! # Used By
//!
//! - `expofuse` - The fusion engine

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod gaussian;
pub mod laplacian;
pub mod level;
pub mod resample;

// Re-export common items
pub use gaussian::GaussianPyramid;
pub use laplacian::LaplacianPyramid;
pub use level::Level;
pub use resample::{expand, pyramid_depth, reduce, KERNEL};

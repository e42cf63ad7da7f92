//! # expofuse
//!
//! Exposure-fusion engine: tone-map a single image by blending virtual
//! exposures of it through Laplacian pyramids.
//!
//! A single raw frame often holds more dynamic range than fits a display.
//! Instead of compressing it with a global curve, exposure fusion
//! re-exposes the frame several times, scores every pixel of every
//! exposure for how well-exposed it is, and blends the exposures
//! per frequency band so each region of the output comes from the
//! exposure that renders it best - shadows from the pushed copies,
//! highlights from the untouched one.
//!
//! # Pipeline
//!
//! ```text
//! input ─┬─ simulate ──> exposures ─┬─ weight maps ──> normalize ──> Gaussian pyramids ─┐
//!        │                          └─ blend space ──> Laplacian pyramids ──────────────┤
//!        │                                                                     blend    │
//!        └───────────────────────────── alpha ──────────────┐                  levels <─┘
//!                                                           │                    │
//!                                            output <── restore <── reconstruct ─┘
//! ```
//!
//! # Modules
//!
//! - [`fuse`](mod@fuse) - The pipeline entry point, [`fuse()`](fuse())
//! - [`config`] - [`FusionConfig`] and validation
//! - [`exposure`] - Virtual exposure simulation
//! - [`weight`] - Well-exposedness scoring and normalization
//! - [`blend`] - Level-by-level pyramid blending
//!
//! # Example
//!
//! ```rust
//! use expofuse::{fuse, FusionConfig, Image};
//!
//! let input = Image::filled(64, 64, [0.1, 0.1, 0.1, 1.0]);
//! let fused = fuse(&input, &FusionConfig::default()).unwrap();
//! assert_eq!(fused.dimensions(), (64, 64));
//! ```
//!
//! # Features
//!
//! - `parallel` (default) - rayon row/chunk dispatch for per-pixel stages;
//!   disabling it compiles plain loops and drops the rayon dependency.
//!
//! # Dependencies
//!
//! - [`expofuse-core`] - Image and plane types
//! - [`expofuse-color`] - Grey projectors and blend spaces
//! - [`expofuse-pyramid`] - Pyramid decomposition and reconstruction

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod parallel;

pub mod blend;
pub mod config;
pub mod exposure;
pub mod fuse;
pub mod weight;

pub use config::{FusionConfig, WeightMode};
pub use error::{FusionError, FusionResult};
pub use fuse::fuse;
pub use weight::{
    build_weight_map, normalize_weights, well_exposedness, WeightParams, WEIGHT_EPSILON,
};

// Re-export the neighbor crates' surface so callers need only one import
pub use expofuse_color::{BlendSpace, GreyProjector};
pub use expofuse_core::{Image, Plane};

/// Convenience re-exports for glob import.
///
/// ```rust
/// use expofuse::prelude::*;
///
/// let input = Image::filled(16, 16, [0.5, 0.5, 0.5, 1.0]);
/// let fused = fuse(&input, &FusionConfig::default()).unwrap();
/// ```
pub mod prelude {
    pub use crate::config::{FusionConfig, WeightMode};
    pub use crate::error::{FusionError, FusionResult};
    pub use crate::fuse::fuse;
    pub use crate::weight::{well_exposedness, WeightParams};
    pub use expofuse_color::{BlendSpace, GreyProjector};
    pub use expofuse_core::{Image, Plane};
}

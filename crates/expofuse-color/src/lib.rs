//! # expofuse-color
//!
//! Color representations and conversions for exposure fusion.
//!
//! Fusion quality depends on what the per-pixel arithmetic actually runs
//! on: grey projections feed the well-exposedness weighting, and the
//! blend space decides the representation the pyramids decompose.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`projector`] | RGB -> grey scalar projections (average, min/max, luminance, L\*) |
//! | [`lab`] | CIE L\*a\*b\* conversions (D65) |
//! | [`logspace`] | Log compression with an exact inverse |
//! | [`blendspace`] | Whole-image adapters into and out of the blend space |
//!
//! # Usage
//!
//! ```rust
//! use expofuse_color::{GreyProjector, BlendSpace, to_blend_space};
//! use expofuse_core::Image;
//!
//! let grey = GreyProjector::RgbLuminance.project([0.5, 0.5, 0.5]);
//! assert!((grey - 0.5).abs() < 1e-6);
//!
//! let img = Image::filled(4, 4, [0.5, 0.5, 0.5, 1.0]);
//! let lab = to_blend_space(&img, BlendSpace::Lab, GreyProjector::Average);
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

pub mod blendspace;
pub mod lab;
pub mod logspace;
pub mod projector;

// Re-export common items
pub use blendspace::{from_blend_space, to_blend_space, BlendSpace};
pub use lab::{lab_to_rgb, rgb_to_lab, Lab};
pub use projector::{luminance_rec709, GreyProjector};

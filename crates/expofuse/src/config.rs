//! Fusion configuration and validation.
//!
//! [`FusionConfig`] is a plain value struct consumed immutably by
//! [`fuse`](crate::fuse). All fields serialize with serde (snake_case enum
//! encodings), so a preset is an ordinary YAML/JSON/TOML mapping and any
//! subset of fields can be given on top of [`FusionConfig::default`].
//!
//! # Example
//!
//! ```rust
//! use expofuse::{FusionConfig, WeightMode};
//! use expofuse_color::BlendSpace;
//!
//! let config = FusionConfig {
//!     num_exposures: 4,
//!     weight_mode: WeightMode::FullSine,
//!     blend_space: BlendSpace::Lab,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use expofuse_color::{BlendSpace, GreyProjector};

use crate::error::{FusionError, FusionResult};

/// Well-exposedness scoring curve.
///
/// All curves peak at the configured optimum and fall off with the
/// configured width; they differ in tail shape. See
/// [`well_exposedness`](crate::weight::well_exposedness) for the formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightMode {
    /// `exp(-v²/2)` - smooth, never quite zero.
    #[default]
    Gaussian,
    /// `1 / (1 + v²/2)` - heavier tails than Gaussian.
    Lorentzian,
    /// `cos(v)` within a half period, zero outside.
    HalfSine,
    /// `(1 + cos(v)) / 2` within a full period, zero outside.
    FullSine,
    /// `1 - v⁴` within [-1, 1], zero outside.
    BiSquare,
}

/// Parameters for one fusion invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionConfig {
    /// Number of virtual exposures to generate and blend, in [2, 5].
    pub num_exposures: usize,
    /// Exposure step between consecutive virtual exposures, in stops
    /// (powers of two). Zero makes every exposure a copy of the input.
    pub exposure_stops: f32,
    /// Luminance considered perfectly exposed, in (0, 1).
    pub exposure_optimum: f32,
    /// Width of the well-exposedness curve around the optimum.
    pub exposure_width: f32,
    /// Scoring curve shape.
    pub weight_mode: WeightMode,
    /// Projector that collapses RGB to the luminance being scored.
    /// `None` scores each channel separately and multiplies the results.
    pub grey_projector: Option<GreyProjector>,
    /// Color representation the pyramids blend in.
    pub blend_space: BlendSpace,
    /// Projector used by [`BlendSpace::RgbGrey`] to collapse the image.
    pub blend_grey_projector: GreyProjector,
    /// Luminance below this gets zero weight (0 disables the cutoff).
    pub exposure_left_cutoff: f32,
    /// Luminance above this gets zero weight (1 disables the cutoff).
    pub exposure_right_cutoff: f32,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            num_exposures: 3,
            exposure_stops: 1.0,
            exposure_optimum: 0.5,
            exposure_width: 0.2,
            weight_mode: WeightMode::Gaussian,
            grey_projector: Some(GreyProjector::Average),
            blend_space: BlendSpace::Rgb,
            blend_grey_projector: GreyProjector::Average,
            exposure_left_cutoff: 0.0,
            exposure_right_cutoff: 1.0,
        }
    }
}

impl FusionConfig {
    /// Checks every field against its documented range.
    ///
    /// NaN fails every range check.
    ///
    /// # Errors
    ///
    /// Returns [`FusionError::Config`] naming the offending field.
    pub fn validate(&self) -> FusionResult<()> {
        if !(2..=5).contains(&self.num_exposures) {
            return Err(FusionError::Config(format!(
                "num_exposures must be in [2, 5], got {}",
                self.num_exposures
            )));
        }
        if self.exposure_stops.is_nan() || self.exposure_stops < 0.0 {
            return Err(FusionError::Config(format!(
                "exposure_stops must be non-negative, got {}",
                self.exposure_stops
            )));
        }
        if self.exposure_optimum.is_nan()
            || self.exposure_optimum <= 0.0
            || self.exposure_optimum >= 1.0
        {
            return Err(FusionError::Config(format!(
                "exposure_optimum must be in (0, 1), got {}",
                self.exposure_optimum
            )));
        }
        if self.exposure_width.is_nan() || self.exposure_width <= 0.0 {
            return Err(FusionError::Config(format!(
                "exposure_width must be positive, got {}",
                self.exposure_width
            )));
        }
        if !(0.0..=1.0).contains(&self.exposure_left_cutoff) {
            return Err(FusionError::Config(format!(
                "exposure_left_cutoff must be in [0, 1], got {}",
                self.exposure_left_cutoff
            )));
        }
        if !(0.0..=1.0).contains(&self.exposure_right_cutoff) {
            return Err(FusionError::Config(format!(
                "exposure_right_cutoff must be in [0, 1], got {}",
                self.exposure_right_cutoff
            )));
        }
        if self.exposure_left_cutoff > self.exposure_right_cutoff {
            return Err(FusionError::Config(format!(
                "exposure_left_cutoff {} exceeds exposure_right_cutoff {}",
                self.exposure_left_cutoff, self.exposure_right_cutoff
            )));
        }
        Ok(())
    }
}

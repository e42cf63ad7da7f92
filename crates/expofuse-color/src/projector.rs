//! Grey projectors: reduce an RGB triplet to one luminance-like scalar.
//!
//! The fusion engine scores pixels by brightness, so it needs a single
//! scalar per pixel. Which scalar is a configurable choice: fast channel
//! statistics for speed, or perceptual lightness for quality.
//!
//! # Projectors
//!
//! - [`GreyProjector::Average`] - mean of R, G, B
//! - [`GreyProjector::Min`] / [`GreyProjector::Max`] - channel extrema
//! - [`GreyProjector::RgbLuminance`] - Rec.709 luma
//! - [`GreyProjector::HslLightness`] - (max + min) / 2
//! - [`GreyProjector::LabLightness`] - CIE L\* / 100
//!
//! # Example
//!
//! ```rust
//! use expofuse_color::GreyProjector;
//!
//! let lum = GreyProjector::Average.project([0.2, 0.4, 0.6]);
//! assert!((lum - 0.4).abs() < 1e-6);
//! ```

use serde::{Deserialize, Serialize};

use crate::lab::rgb_to_lab;

/// Rec.709 luminance coefficient for red channel.
///
/// Used in the standard luminance formula: `Y = 0.2126*R + 0.7152*G + 0.0722*B`
pub const REC709_LUMA_R: f32 = 0.2126;

/// Rec.709 luminance coefficient for green channel.
pub const REC709_LUMA_G: f32 = 0.7152;

/// Rec.709 luminance coefficient for blue channel.
pub const REC709_LUMA_B: f32 = 0.0722;

/// Calculate Rec.709 luminance from RGB values.
///
/// `Y = 0.2126*R + 0.7152*G + 0.0722*B`
///
/// # Example
///
/// ```
/// use expofuse_color::luminance_rec709;
///
/// let luma = luminance_rec709([0.5, 0.3, 0.2]);
/// assert!((luma - 0.3353).abs() < 0.0001);
/// ```
#[inline]
pub fn luminance_rec709(rgb: [f32; 3]) -> f32 {
    rgb[0] * REC709_LUMA_R + rgb[1] * REC709_LUMA_G + rgb[2] * REC709_LUMA_B
}

/// Method for reducing an RGB triplet to one scalar.
///
/// Used in two places by the engine: scoring well-exposedness of each
/// pixel, and collapsing color to grey for the `RgbGrey` blend space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GreyProjector {
    /// Mean of R, G, B.
    #[default]
    Average,
    /// Darkest channel.
    Min,
    /// Brightest channel.
    Max,
    /// Rec.709 luma.
    RgbLuminance,
    /// HSL lightness: (max + min) / 2.
    HslLightness,
    /// CIE L\* lightness, rescaled to [0, 1].
    LabLightness,
}

impl GreyProjector {
    /// Projects an RGB triplet to a single scalar.
    #[inline]
    pub fn project(self, rgb: [f32; 3]) -> f32 {
        match self {
            Self::Average => (rgb[0] + rgb[1] + rgb[2]) / 3.0,
            Self::Min => rgb[0].min(rgb[1]).min(rgb[2]),
            Self::Max => rgb[0].max(rgb[1]).max(rgb[2]),
            Self::RgbLuminance => luminance_rec709(rgb),
            Self::HslLightness => {
                let max = rgb[0].max(rgb[1]).max(rgb[2]);
                let min = rgb[0].min(rgb[1]).min(rgb[2]);
                0.5 * (max + min)
            }
            Self::LabLightness => rgb_to_lab(rgb[0], rgb[1], rgb[2]).l / 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average() {
        let v = GreyProjector::Average.project([0.2, 0.4, 0.6]);
        assert!((v - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_min_max() {
        let rgb = [0.2, 0.4, 0.6];
        assert_eq!(GreyProjector::Min.project(rgb), 0.2);
        assert_eq!(GreyProjector::Max.project(rgb), 0.6);
    }

    #[test]
    fn test_luminance_white() {
        // Coefficients sum to 1, so white projects to 1
        let v = GreyProjector::RgbLuminance.project([1.0, 1.0, 1.0]);
        assert!((v - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_luminance_weights_green() {
        // Green dominates the luma sum
        let g = GreyProjector::RgbLuminance.project([0.0, 1.0, 0.0]);
        let b = GreyProjector::RgbLuminance.project([0.0, 0.0, 1.0]);
        assert!(g > b);
    }

    #[test]
    fn test_hsl_lightness() {
        let v = GreyProjector::HslLightness.project([0.2, 0.4, 0.6]);
        assert!((v - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_lab_lightness_white() {
        let v = GreyProjector::LabLightness.project([1.0, 1.0, 1.0]);
        assert!((v - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_lab_lightness_mid_grey() {
        // L* of 18% grey is the classic 49.5
        let v = GreyProjector::LabLightness.project([0.18, 0.18, 0.18]);
        assert!((v - 0.495).abs() < 0.005);
    }
}

//! Blend-space adapter: the representation pyramid arithmetic runs in.
//!
//! The fusion engine decomposes and recombines images in a configurable
//! color representation. [`to_blend_space`] converts an RGBA image into
//! that representation before pyramid decomposition; [`from_blend_space`]
//! converts the blended result back. Alpha rides along untouched in both
//! directions.
//!
//! # Spaces
//!
//! - [`BlendSpace::Rgb`] - blend directly on linear RGB (identity)
//! - [`BlendSpace::Lab`] - blend on CIE L\*a\*b\* (perceptual)
//! - [`BlendSpace::RgbGrey`] - collapse to a grey scalar first (irreversible)
//! - [`BlendSpace::Log`] - blend on log-compressed values
//!
//! # Example
//!
//! ```rust
//! use expofuse_core::Image;
//! use expofuse_color::{to_blend_space, from_blend_space, BlendSpace, GreyProjector};
//!
//! let img = Image::filled(4, 4, [0.5, 0.3, 0.2, 1.0]);
//! let lab = to_blend_space(&img, BlendSpace::Lab, GreyProjector::Average);
//! let back = from_blend_space(&lab, BlendSpace::Lab, GreyProjector::Average);
//! assert!((back.pixel(0, 0)[0] - 0.5).abs() < 1e-3);
//! ```

use serde::{Deserialize, Serialize};

use expofuse_core::Image;

use crate::lab::{lab_to_rgb, rgb_to_lab, Lab};
use crate::logspace;
use crate::projector::GreyProjector;

/// Color representation in which pyramid blending arithmetic is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendSpace {
    /// Linear RGB, no conversion.
    #[default]
    Rgb,
    /// CIE L\*a\*b\* (D65). L in [0, 100], a/b unscaled.
    Lab,
    /// RGB collapsed to a grey projector scalar replicated into R, G, B.
    ///
    /// The collapse is irreversible; the inverse direction is identity.
    RgbGrey,
    /// Log-compressed values with an exact inverse.
    Log,
}

/// Converts an image into the blend space.
///
/// The `projector` is consulted only by [`BlendSpace::RgbGrey`]. Alpha is
/// copied through unchanged.
pub fn to_blend_space(src: &Image, space: BlendSpace, projector: GreyProjector) -> Image {
    let mut out = src.clone();
    match space {
        BlendSpace::Rgb => {}
        BlendSpace::Lab => {
            for px in out.data_mut().chunks_exact_mut(Image::CHANNELS) {
                let lab = rgb_to_lab(px[0], px[1], px[2]);
                px[0] = lab.l;
                px[1] = lab.a;
                px[2] = lab.b;
                // alpha unchanged
            }
        }
        BlendSpace::RgbGrey => {
            for px in out.data_mut().chunks_exact_mut(Image::CHANNELS) {
                let grey = projector.project([px[0], px[1], px[2]]);
                px[0] = grey;
                px[1] = grey;
                px[2] = grey;
            }
        }
        BlendSpace::Log => {
            for px in out.data_mut().chunks_exact_mut(Image::CHANNELS) {
                px[0] = logspace::encode(px[0]);
                px[1] = logspace::encode(px[1]);
                px[2] = logspace::encode(px[2]);
            }
        }
    }
    out
}

/// Converts a blended image back out of the blend space.
///
/// Identity for [`BlendSpace::Rgb`] and [`BlendSpace::RgbGrey`] (the grey
/// collapse cannot be undone). Alpha is copied through unchanged.
pub fn from_blend_space(src: &Image, space: BlendSpace, _projector: GreyProjector) -> Image {
    let mut out = src.clone();
    match space {
        BlendSpace::Rgb | BlendSpace::RgbGrey => {}
        BlendSpace::Lab => {
            for px in out.data_mut().chunks_exact_mut(Image::CHANNELS) {
                let lab = Lab {
                    l: px[0],
                    a: px[1],
                    b: px[2],
                };
                let (r, g, b) = lab_to_rgb(lab);
                px[0] = r;
                px[1] = g;
                px[2] = b;
            }
        }
        BlendSpace::Log => {
            for px in out.data_mut().chunks_exact_mut(Image::CHANNELS) {
                px[0] = logspace::decode(px[0]);
                px[1] = logspace::decode(px[1]);
                px[2] = logspace::decode(px[2]);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_image() -> Image {
        let mut img = Image::new(4, 2);
        for y in 0..2 {
            for x in 0..4 {
                let t = (y * 4 + x) as f32 / 8.0;
                img.set_pixel(x, y, [t, 1.0 - t, 0.5 * t, 0.25 + t / 2.0]);
            }
        }
        img
    }

    #[test]
    fn test_rgb_identity() {
        let img = sample_image();
        let out = to_blend_space(&img, BlendSpace::Rgb, GreyProjector::Average);
        assert_eq!(out, img);
        let back = from_blend_space(&out, BlendSpace::Rgb, GreyProjector::Average);
        assert_eq!(back, img);
    }

    #[test]
    fn test_lab_roundtrip() {
        let img = sample_image();
        let lab = to_blend_space(&img, BlendSpace::Lab, GreyProjector::Average);
        let back = from_blend_space(&lab, BlendSpace::Lab, GreyProjector::Average);
        for (a, b) in img.data().iter().zip(back.data()) {
            assert!((a - b).abs() < 1e-3, "{} vs {}", a, b);
        }
    }

    #[test]
    fn test_rgb_grey_collapses_channels() {
        let img = sample_image();
        let grey = to_blend_space(&img, BlendSpace::RgbGrey, GreyProjector::Max);
        for (px, orig) in grey
            .data()
            .chunks_exact(Image::CHANNELS)
            .zip(img.data().chunks_exact(Image::CHANNELS))
        {
            let expected = orig[0].max(orig[1]).max(orig[2]);
            assert_eq!(px[0], expected);
            assert_eq!(px[1], expected);
            assert_eq!(px[2], expected);
        }
        // Inverse is identity
        let back = from_blend_space(&grey, BlendSpace::RgbGrey, GreyProjector::Max);
        assert_eq!(back, grey);
    }

    #[test]
    fn test_log_roundtrip() {
        let img = sample_image();
        let log = to_blend_space(&img, BlendSpace::Log, GreyProjector::Average);
        let back = from_blend_space(&log, BlendSpace::Log, GreyProjector::Average);
        for (a, b) in img.data().iter().zip(back.data()) {
            assert!((a - b).abs() < 1e-5, "{} vs {}", a, b);
        }
    }

    #[test]
    fn test_alpha_untouched() {
        let img = sample_image();
        for space in [
            BlendSpace::Rgb,
            BlendSpace::Lab,
            BlendSpace::RgbGrey,
            BlendSpace::Log,
        ] {
            let out = to_blend_space(&img, space, GreyProjector::Average);
            for (o, i) in out
                .data()
                .chunks_exact(Image::CHANNELS)
                .zip(img.data().chunks_exact(Image::CHANNELS))
            {
                assert_eq!(o[3], i[3]);
            }
        }
    }
}

//! Well-exposedness weighting.
//!
//! Every virtual exposure gets a per-pixel weight map scoring how usable
//! each pixel is: near 1 around the configured optimum luminance, falling
//! toward 0 for crushed shadows and clipped highlights. After
//! [`normalize_weights`] the maps sum to one per pixel and drive the
//! pyramid blend.
//!
//! The scoring curve itself, [`well_exposedness`], is a plain scalar
//! function usable without the rest of the pipeline.

use tracing::trace;

use expofuse_color::BlendSpace;
use expofuse_core::{Error, Image, Plane};

use crate::config::{FusionConfig, WeightMode};
use crate::error::FusionResult;
use crate::parallel::for_each_row_mut;

/// Guard added to per-pixel weight sums before division.
///
/// Keeps the normalization finite when every exposure scored zero; such
/// pixels normalize to 0, not 1/n.
pub const WEIGHT_EPSILON: f32 = 1e-12;

/// Scoring curve parameters, shared by all [`WeightMode`] shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightParams {
    /// Luminance scored as perfectly exposed.
    pub optimum: f32,
    /// Curve width around the optimum.
    pub width: f32,
    /// Luminance below this scores zero; 0 disables the cutoff.
    pub left_cutoff: f32,
    /// Luminance above this scores zero; 1 disables the cutoff.
    pub right_cutoff: f32,
}

impl Default for WeightParams {
    fn default() -> Self {
        Self {
            optimum: 0.5,
            width: 0.2,
            left_cutoff: 0.0,
            right_cutoff: 1.0,
        }
    }
}

impl From<&FusionConfig> for WeightParams {
    fn from(config: &FusionConfig) -> Self {
        Self {
            optimum: config.exposure_optimum,
            width: config.exposure_width,
            left_cutoff: config.exposure_left_cutoff,
            right_cutoff: config.exposure_right_cutoff,
        }
    }
}

/// Scores a luminance value in [0, 1].
///
/// Values outside the cutoff interval score exactly zero (a cutoff at its
/// neutral bound, 0 on the left or 1 on the right, is disabled). Inside,
/// with `v = (x - optimum) / width`:
///
/// | Mode | Score |
/// |------|-------|
/// | `Gaussian` | `exp(-v²/2)` |
/// | `Lorentzian` | `1 / (1 + v²/2)` |
/// | `HalfSine` | `cos(v)` for `\|v\| ≤ π/2`, else 0 |
/// | `FullSine` | `(1 + cos(v)) / 2` for `\|v\| ≤ π`, else 0 |
/// | `BiSquare` | `1 - v⁴` for `\|v\| ≤ 1`, else 0 |
///
/// # Example
///
/// ```rust
/// use expofuse::{well_exposedness, WeightMode, WeightParams};
///
/// let params = WeightParams::default();
/// let peak = well_exposedness(0.5, WeightMode::Gaussian, &params);
/// assert!((peak - 1.0).abs() < 1e-6);
/// ```
pub fn well_exposedness(x: f32, mode: WeightMode, params: &WeightParams) -> f32 {
    if params.left_cutoff > 0.0 && x < params.left_cutoff {
        return 0.0;
    }
    if params.right_cutoff < 1.0 && x > params.right_cutoff {
        return 0.0;
    }
    let v = (x - params.optimum) / params.width;
    match mode {
        WeightMode::Gaussian => (-0.5 * v * v).exp(),
        WeightMode::Lorentzian => 1.0 / (1.0 + 0.5 * v * v),
        WeightMode::HalfSine => {
            if v.abs() <= std::f32::consts::FRAC_PI_2 {
                v.cos()
            } else {
                0.0
            }
        }
        WeightMode::FullSine => {
            if v.abs() <= std::f32::consts::PI {
                0.5 * (1.0 + v.cos())
            } else {
                0.0
            }
        }
        WeightMode::BiSquare => {
            let va = v.abs();
            if va <= 1.0 { 1.0 - va.powi(4) } else { 0.0 }
        }
    }
}

/// Builds the well-exposedness weight map for one virtual exposure.
///
/// The score of a pixel is the curve applied to its grey projection, or,
/// with `grey_projector: None`, the product of the three per-channel
/// scores. When blending in [`BlendSpace::Lab`] with a projector active,
/// the projection is remapped as `lum^optimum` before scoring so the
/// scoring scale tracks perceptual lightness.
pub fn build_weight_map(exposure: &Image, config: &FusionConfig) -> Plane {
    trace!(
        width = exposure.width(),
        height = exposure.height(),
        mode = ?config.weight_mode,
        "weight::build_weight_map"
    );
    let (width, height) = exposure.dimensions();
    let params = WeightParams::from(config);
    let mode = config.weight_mode;
    let lab_remap = config.blend_space == BlendSpace::Lab;
    let src = exposure.data();

    let mut map = Plane::new(width, height);
    for_each_row_mut(map.data_mut(), width, |y, row| {
        let src_row = &src[y * width * Image::CHANNELS..(y + 1) * width * Image::CHANNELS];
        for (x, weight) in row.iter_mut().enumerate() {
            let px = &src_row[x * Image::CHANNELS..(x + 1) * Image::CHANNELS];
            *weight = match config.grey_projector {
                Some(projector) => {
                    let mut lum = projector.project([px[0], px[1], px[2]]);
                    if lab_remap {
                        lum = lum.powf(params.optimum);
                    }
                    well_exposedness(lum, mode, &params)
                }
                None => {
                    well_exposedness(px[0], mode, &params)
                        * well_exposedness(px[1], mode, &params)
                        * well_exposedness(px[2], mode, &params)
                }
            };
        }
    });
    map
}

/// Normalizes a set of weight maps so they sum to one per pixel.
///
/// In place: each sample is divided by the per-pixel sum plus
/// [`WEIGHT_EPSILON`]. Pixels where every map is zero stay zero.
///
/// # Errors
///
/// Returns a dimension mismatch if the maps differ in size.
pub fn normalize_weights(maps: &mut [Plane]) -> FusionResult<()> {
    trace!(count = maps.len(), "weight::normalize_weights");
    let Some(first) = maps.first() else {
        return Ok(());
    };
    let dims = first.dimensions();
    let sample_count = first.sample_count();
    for map in maps.iter().skip(1) {
        if map.dimensions() != dims {
            return Err(Error::dimension_mismatch(dims, map.dimensions()).into());
        }
    }

    let mut buffers: Vec<&mut [f32]> = maps.iter_mut().map(|m| m.data_mut()).collect();
    for i in 0..sample_count {
        let mut sum = WEIGHT_EPSILON;
        for buf in buffers.iter() {
            sum += buf[i];
        }
        for buf in buffers.iter_mut() {
            buf[i] /= sum;
        }
    }
    Ok(())
}

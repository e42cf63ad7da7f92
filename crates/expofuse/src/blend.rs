//! Level-by-level pyramid blending.
//!
//! The blend itself is a weighted sum: at every pyramid level, each
//! exposure's band contributes proportionally to its weight pyramid's
//! value at that level and pixel. Because the weights were smoothed
//! through their own Gaussian pyramid, weight transitions are gradual at
//! every frequency band and no seams appear in the collapsed result.

use tracing::trace;

use expofuse_core::Error;
use expofuse_pyramid::{GaussianPyramid, LaplacianPyramid, Level};

use crate::error::FusionResult;
use crate::parallel::for_each_row_mut;

/// Blends exposure pyramids into one, weighted per level and pixel.
///
/// For every exposure `n` and level `k`, accumulates
/// `blended[k] += exposure_n[k] · weight_n[k]`, with the scalar weight
/// replicated across the image channels. The coarsest level is the same
/// weighted sum applied to the stored low-pass residuals.
///
/// # Errors
///
/// Returns a core error if `exposures` is empty, the pyramid counts
/// differ, or any pyramid disagrees on level count, level dimensions, or
/// channel layout.
pub fn blend_pyramids(
    exposures: &[LaplacianPyramid],
    weights: &[GaussianPyramid],
) -> FusionResult<LaplacianPyramid> {
    trace!(count = exposures.len(), "blend::blend_pyramids");
    let Some(first) = exposures.first() else {
        return Err(Error::invalid_dimensions(0, 0, "no pyramids to blend").into());
    };
    if exposures.len() != weights.len() {
        return Err(Error::invalid_dimensions(
            exposures.len(),
            weights.len(),
            "every exposure pyramid needs one weight pyramid",
        )
        .into());
    }

    let num_levels = first.num_levels();
    let channels = first.level(0).channels();
    for lap in exposures {
        if lap.num_levels() != num_levels {
            return Err(Error::invalid_dimensions(
                lap.num_levels(),
                num_levels,
                "pyramid level counts differ",
            )
            .into());
        }
        for (k, level) in lap.levels().iter().enumerate() {
            let expected = first.level(k).dimensions();
            if level.dimensions() != expected {
                return Err(Error::dimension_mismatch(level.dimensions(), expected).into());
            }
            if level.channels() != channels {
                return Err(Error::channel_mismatch(channels, level.channels()).into());
            }
        }
    }
    for gauss in weights {
        if gauss.num_levels() != num_levels {
            return Err(Error::invalid_dimensions(
                gauss.num_levels(),
                num_levels,
                "pyramid level counts differ",
            )
            .into());
        }
        for (k, level) in gauss.levels().iter().enumerate() {
            let expected = first.level(k).dimensions();
            if level.dimensions() != expected {
                return Err(Error::dimension_mismatch(level.dimensions(), expected).into());
            }
            if level.channels() != 1 {
                return Err(Error::channel_mismatch(1, level.channels()).into());
            }
        }
    }

    let mut blended = Vec::with_capacity(num_levels);
    for k in 0..num_levels {
        let (w, h) = first.level(k).dimensions();
        let mut acc = Level::new(w, h, channels);
        for (lap, gauss) in exposures.iter().zip(weights) {
            accumulate_weighted(&mut acc, lap.level(k), gauss.level(k));
        }
        blended.push(acc);
    }
    Ok(LaplacianPyramid::from_levels(blended)?)
}

/// `acc += band · weight`, the weight broadcast over the channels.
fn accumulate_weighted(acc: &mut Level, band: &Level, weight: &Level) {
    let (w, c) = (acc.width(), acc.channels());
    let band_data = band.data();
    let weight_data = weight.data();
    for_each_row_mut(acc.data_mut(), w * c, |y, row| {
        let band_row = &band_data[y * w * c..(y + 1) * w * c];
        let weight_row = &weight_data[y * w..(y + 1) * w];
        for x in 0..w {
            let wt = weight_row[x];
            for ch in 0..c {
                row[x * c + ch] += band_row[x * c + ch] * wt;
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use expofuse_core::{Image, Plane};

    fn pyramids_for(
        values: &[[f32; 4]],
        weights: &[f32],
        levels: usize,
    ) -> (Vec<LaplacianPyramid>, Vec<GaussianPyramid>) {
        let laps = values
            .iter()
            .map(|&px| LaplacianPyramid::build(&Image::filled(8, 8, px), levels).unwrap())
            .collect();
        let gauss = weights
            .iter()
            .map(|&w| GaussianPyramid::build(&Plane::filled(8, 8, w), levels).unwrap())
            .collect();
        (laps, gauss)
    }

    #[test]
    fn test_equal_weights_average() {
        let (laps, gauss) = pyramids_for(
            &[[0.2, 0.2, 0.2, 1.0], [0.6, 0.6, 0.6, 1.0]],
            &[0.5, 0.5],
            3,
        );
        let blended = blend_pyramids(&laps, &gauss).unwrap();
        let out = blended.reconstruct().unwrap().into_image().unwrap();
        for px in out.data().chunks_exact(4) {
            assert!((px[0] - 0.4).abs() < 1e-5, "{}", px[0]);
            assert!((px[3] - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_one_hot_weights_select_one_exposure() {
        let (laps, gauss) = pyramids_for(
            &[[0.3, 0.5, 0.7, 1.0], [0.9, 0.9, 0.9, 1.0]],
            &[1.0, 0.0],
            3,
        );
        let blended = blend_pyramids(&laps, &gauss).unwrap();
        let out = blended.reconstruct().unwrap().into_image().unwrap();
        for px in out.data().chunks_exact(4) {
            assert!((px[0] - 0.3).abs() < 1e-5);
            assert!((px[1] - 0.5).abs() < 1e-5);
            assert!((px[2] - 0.7).abs() < 1e-5);
        }
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(blend_pyramids(&[], &[]).is_err());
    }

    #[test]
    fn test_count_mismatch_rejected() {
        let (laps, mut gauss) = pyramids_for(
            &[[0.2, 0.2, 0.2, 1.0], [0.6, 0.6, 0.6, 1.0]],
            &[0.5, 0.5],
            3,
        );
        gauss.pop();
        assert!(blend_pyramids(&laps, &gauss).is_err());
    }

    #[test]
    fn test_level_count_mismatch_rejected() {
        let lap = LaplacianPyramid::build(&Image::filled(8, 8, [0.5; 4]), 2).unwrap();
        let gauss = GaussianPyramid::build(&Plane::filled(8, 8, 0.5), 3).unwrap();
        assert!(blend_pyramids(&[lap], &[gauss]).is_err());
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let lap = LaplacianPyramid::build(&Image::filled(8, 8, [0.5; 4]), 2).unwrap();
        let gauss = GaussianPyramid::build(&Plane::filled(16, 16, 0.5), 2).unwrap();
        assert!(blend_pyramids(&[lap], &[gauss]).is_err());
    }
}

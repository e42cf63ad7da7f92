//! The fusion pipeline.
//!
//! Stage order is fixed: simulate virtual exposures, score each one,
//! normalize the scores, decompose everything into pyramids, blend level
//! by level, reconstruct, and restore the input alpha. Every stage
//! consumes immutable inputs and produces fresh buffers, so a failure at
//! any point returns without partial effects.

use tracing::debug;

use expofuse_color::to_blend_space;
use expofuse_core::{Image, Plane};
use expofuse_pyramid::{pyramid_depth, GaussianPyramid, LaplacianPyramid};

use crate::config::FusionConfig;
use crate::error::{FusionError, FusionResult};
use crate::{blend, exposure, weight};

/// Fuses virtual exposures of `input` into a single image.
///
/// The output has the input's dimensions, RGB in [0, 1] for inputs in
/// [0, 1], and the input's alpha channel copied float for float.
///
/// # Errors
///
/// - [`FusionError::Config`] if `config` fails validation.
/// - [`FusionError::DegenerateImage`] if either dimension is below 4.
/// - [`FusionError::Core`] if internal buffer shapes disagree (not
///   expected for valid inputs).
///
/// # Example
///
/// ```rust
/// use expofuse::{fuse, FusionConfig};
/// use expofuse_core::Image;
///
/// let input = Image::filled(32, 32, [0.2, 0.2, 0.2, 1.0]);
/// let fused = fuse(&input, &FusionConfig::default()).unwrap();
/// assert_eq!(fused.dimensions(), (32, 32));
/// ```
pub fn fuse(input: &Image, config: &FusionConfig) -> FusionResult<Image> {
    config.validate()?;
    let (width, height) = input.dimensions();
    if width < 4 || height < 4 {
        return Err(FusionError::DegenerateImage { width, height });
    }
    debug!(width, height, num_exposures = config.num_exposures, "Fusing exposures");

    // Weights are scored on the plain RGB exposures; the blend space only
    // affects what the pyramids decompose.
    let exposures: Vec<Image> = (0..config.num_exposures)
        .map(|i| exposure::simulate(input, config.exposure_stops, i))
        .collect();
    let mut weight_maps: Vec<Plane> = exposures
        .iter()
        .map(|exp| weight::build_weight_map(exp, config))
        .collect();
    weight::normalize_weights(&mut weight_maps)?;

    let num_levels = pyramid_depth(width, height);
    debug!(num_levels, "Building pyramids");
    let weight_pyramids: Vec<GaussianPyramid> = weight_maps
        .iter()
        .map(|map| GaussianPyramid::build(map, num_levels))
        .collect::<Result<_, _>>()?;
    let exposure_pyramids: Vec<LaplacianPyramid> = exposures
        .iter()
        .map(|exp| {
            let converted = to_blend_space(exp, config.blend_space, config.blend_grey_projector);
            LaplacianPyramid::build(&converted, num_levels)
        })
        .collect::<Result<_, _>>()?;

    debug!("Blending and reconstructing");
    let blended = blend::blend_pyramids(&exposure_pyramids, &weight_pyramids)?;
    let reconstructed = blended.reconstruct()?.into_image()?;

    let mut output = expofuse_color::from_blend_space(
        &reconstructed,
        config.blend_space,
        config.blend_grey_projector,
    );
    output.copy_alpha_from(input)?;
    debug!("Fusion complete");
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_degenerate_image() {
        let tall = Image::new(3, 100);
        let err = fuse(&tall, &FusionConfig::default()).unwrap_err();
        assert!(matches!(err, FusionError::DegenerateImage { width: 3, height: 100 }));

        let flat = Image::new(100, 2);
        assert!(matches!(
            fuse(&flat, &FusionConfig::default()).unwrap_err(),
            FusionError::DegenerateImage { .. }
        ));
    }

    #[test]
    fn test_rejects_invalid_config() {
        let img = Image::new(16, 16);
        let config = FusionConfig {
            num_exposures: 1,
            ..Default::default()
        };
        assert!(matches!(
            fuse(&img, &config).unwrap_err(),
            FusionError::Config(_)
        ));
    }

    #[test]
    fn test_minimum_size_image_fuses() {
        let img = Image::filled(4, 4, [0.3, 0.3, 0.3, 1.0]);
        let fused = fuse(&img, &FusionConfig::default()).unwrap();
        assert_eq!(fused.dimensions(), (4, 4));
    }

    #[test]
    fn test_output_dimensions_match_input() {
        let img = Image::filled(17, 11, [0.4, 0.4, 0.4, 1.0]);
        let fused = fuse(&img, &FusionConfig::default()).unwrap();
        assert_eq!(fused.dimensions(), (17, 11));
    }
}

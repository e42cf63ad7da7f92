//! Virtual exposure simulation.
//!
//! Fusion inputs are not bracketed photographs but virtual re-exposures of
//! a single image: copy `i` is the input pushed `stops · i` stops brighter.
//! Index 0 is always the untouched input, so the darkest exposure preserves
//! whatever highlight detail the source has.

use tracing::trace;

use expofuse_core::Image;

use crate::parallel::for_each_chunk_mut;

/// Simulates virtual exposure `index` of a bracket.
///
/// Index 0 returns a copy of `base`. For larger indices every RGB sample is
/// multiplied by `2^(stops · index)` and clamped to [0, 1]; alpha rides
/// along unmodified. NaN and infinity in the input propagate - sanitizing
/// is the caller's concern.
///
/// # Example
///
/// ```rust
/// use expofuse_core::Image;
/// use expofuse::exposure::simulate;
///
/// let base = Image::filled(4, 4, [0.25, 0.25, 0.25, 1.0]);
/// let brighter = simulate(&base, 1.0, 1);
/// assert_eq!(brighter.pixel(0, 0), [0.5, 0.5, 0.5, 1.0]);
/// ```
pub fn simulate(base: &Image, stops: f32, index: usize) -> Image {
    trace!(
        width = base.width(),
        height = base.height(),
        stops,
        index,
        "exposure::simulate"
    );
    if index == 0 {
        return base.clone();
    }
    let gain = (stops * index as f32).exp2();
    let mut out = base.clone();
    for_each_chunk_mut(out.data_mut(), Image::CHANNELS, |px| {
        px[0] = (px[0] * gain).clamp(0.0, 1.0);
        px[1] = (px[1] * gain).clamp(0.0, 1.0);
        px[2] = (px[2] * gain).clamp(0.0, 1.0);
        // alpha unchanged
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_zero_is_exact_copy() {
        // Even out-of-range samples pass through untouched at index 0
        let base = Image::filled(4, 4, [1.5, -0.25, 0.5, 0.8]);
        let out = simulate(&base, 2.0, 0);
        assert_eq!(out, base);
    }

    #[test]
    fn test_one_stop_doubles() {
        let base = Image::filled(4, 4, [0.25, 0.1, 0.4, 1.0]);
        let out = simulate(&base, 1.0, 1);
        let px = out.pixel(2, 2);
        assert!((px[0] - 0.5).abs() < 1e-6);
        assert!((px[1] - 0.2).abs() < 1e-6);
        assert!((px[2] - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_gain_compounds_with_index() {
        let base = Image::filled(4, 4, [0.1, 0.1, 0.1, 1.0]);
        // stops = 0.5, index = 2 -> 2^1 = 2x
        let out = simulate(&base, 0.5, 2);
        assert!((out.pixel(0, 0)[0] - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_clamps_to_unit_range() {
        let base = Image::filled(4, 4, [0.75, 0.0, 1.0, 1.0]);
        let out = simulate(&base, 1.0, 2);
        assert_eq!(out.pixel(1, 1), [1.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_alpha_untouched() {
        let base = Image::filled(4, 4, [0.5, 0.5, 0.5, 0.3]);
        let out = simulate(&base, 1.0, 3);
        assert_eq!(out.pixel(3, 3)[3], 0.3);
    }

    #[test]
    fn test_zero_stops_is_identity_for_unit_range() {
        let base = Image::filled(4, 4, [0.6, 0.2, 0.9, 1.0]);
        let out = simulate(&base, 0.0, 4);
        assert_eq!(out, base);
    }
}

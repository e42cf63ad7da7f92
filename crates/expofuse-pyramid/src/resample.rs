//! Pyramid resampling primitives: reduce (downsample) and expand (upsample).
//!
//! Both directions share one separable 5-tap binomial kernel,
//! `[1, 4, 6, 4, 1] / 16`. [`reduce`] blurs and keeps every second sample;
//! [`expand`] zero-stuffs the coarse samples at even positions (scaled ×4 to
//! restore unit DC gain), blurs with the same kernel, and crops to the exact
//! target size.
//!
//! # Alignment
//!
//! Decimation keeps even indices, so coarse sample `i` corresponds to fine
//! position `2i`; expansion places coarse sample `i` back at fine position
//! `2i`. A reduce/expand round trip is therefore spatially aligned, which is
//! what makes Laplacian residuals meaningful.
//!
//! Odd dimensions reduce to `⌈n/2⌉` samples, and [`expand`] accepts any
//! target size whose reduction yields the source size.
//!
//! # Boundaries
//!
//! The blur uses symmetric reflection (`-1 → 0`, `n → n-1`), so constant
//! inputs stay constant through both directions.

use expofuse_core::{Error, Result};

use crate::level::Level;

/// Separable 5-tap binomial smoothing kernel, `[1, 4, 6, 4, 1] / 16`.
pub const KERNEL: [f32; 5] = [0.0625, 0.25, 0.375, 0.25, 0.0625];

/// Kernel radius in samples.
const RADIUS: isize = 2;

/// Folds an out-of-range index back into `[0, n)` by symmetric reflection.
#[inline]
fn mirror(mut i: isize, n: usize) -> usize {
    let n = n as isize;
    loop {
        if i < 0 {
            i = -i - 1;
        } else if i >= n {
            i = 2 * n - i - 1;
        } else {
            return i as usize;
        }
    }
}

/// Separable 5-tap blur with symmetric-reflection boundaries.
///
/// Used by both [`reduce`] (pre-decimation smoothing) and [`expand`]
/// (interpolation of the zero-stuffed grid).
fn blur(src: &Level) -> Level {
    let (w, h) = src.dimensions();
    let c = src.channels();

    // Horizontal pass
    let mut tmp = Level::new(w, h, c);
    for y in 0..h {
        let src_row = src.row(y);
        let dst_row = tmp.row_mut(y);
        for x in 0..w {
            let sx: [usize; 5] =
                std::array::from_fn(|k| mirror(x as isize + k as isize - RADIUS, w));
            for ch in 0..c {
                let mut acc = 0.0;
                for (k, &coeff) in KERNEL.iter().enumerate() {
                    acc += coeff * src_row[sx[k] * c + ch];
                }
                dst_row[x * c + ch] = acc;
            }
        }
    }

    // Vertical pass: neighbors sit in whole rows, so this is element-wise
    // across the interleaved row regardless of channel count.
    let mut out = Level::new(w, h, c);
    for y in 0..h {
        let sy: [usize; 5] = std::array::from_fn(|k| mirror(y as isize + k as isize - RADIUS, h));
        let rows = [
            tmp.row(sy[0]),
            tmp.row(sy[1]),
            tmp.row(sy[2]),
            tmp.row(sy[3]),
            tmp.row(sy[4]),
        ];
        let out_row = out.row_mut(y);
        for (i, sample) in out_row.iter_mut().enumerate() {
            *sample = KERNEL[0] * rows[0][i]
                + KERNEL[1] * rows[1][i]
                + KERNEL[2] * rows[2][i]
                + KERNEL[3] * rows[3][i]
                + KERNEL[4] * rows[4][i];
        }
    }
    out
}

/// Downsamples a level to `⌈w/2⌉ × ⌈h/2⌉` (blur, then keep even samples).
///
/// # Errors
///
/// Returns [`Error::InvalidDimensions`] if the source has zero area.
///
/// # Example
///
/// ```rust
/// use expofuse_core::Plane;
/// use expofuse_pyramid::{reduce, Level};
///
/// let base = Level::from(Plane::filled(9, 7, 0.5));
/// let half = reduce(&base).unwrap();
/// assert_eq!(half.dimensions(), (5, 4));
/// assert!(half.data().iter().all(|&v| (v - 0.5).abs() < 1e-6));
/// ```
pub fn reduce(src: &Level) -> Result<Level> {
    let (w, h) = src.dimensions();
    if w == 0 || h == 0 {
        return Err(Error::invalid_dimensions(w, h, "cannot reduce an empty level"));
    }
    let c = src.channels();
    let blurred = blur(src);

    let (dw, dh) = (w.div_ceil(2), h.div_ceil(2));
    let mut out = Level::new(dw, dh, c);
    for y in 0..dh {
        let src_row = blurred.row(2 * y);
        let dst_row = out.row_mut(y);
        for x in 0..dw {
            dst_row[x * c..(x + 1) * c].copy_from_slice(&src_row[2 * x * c..(2 * x + 1) * c]);
        }
    }
    Ok(out)
}

/// Upsamples a level to an exact target size.
///
/// The coarse grid is padded by one replicated pixel, its samples are
/// placed at even positions of the double-resolution grid scaled by 4
/// (restoring unit gain after the interpolating blur), blurred with
/// [`KERNEL`], and cropped so that coarse sample `i` lands at fine
/// position `2i`.
///
/// # Errors
///
/// Returns [`Error::InvalidDimensions`] if the target has zero area or if
/// the source dimensions are not `⌈dst_w/2⌉ × ⌈dst_h/2⌉`.
///
/// # Example
///
/// ```rust
/// use expofuse_core::Plane;
/// use expofuse_pyramid::{expand, Level};
///
/// let coarse = Level::from(Plane::filled(4, 4, 0.5));
/// let fine = expand(&coarse, 7, 8).unwrap();
/// assert_eq!(fine.dimensions(), (7, 8));
/// assert!(fine.data().iter().all(|&v| (v - 0.5).abs() < 1e-6));
/// ```
pub fn expand(src: &Level, dst_w: usize, dst_h: usize) -> Result<Level> {
    if dst_w == 0 || dst_h == 0 {
        return Err(Error::invalid_dimensions(dst_w, dst_h, "cannot expand to an empty level"));
    }
    let (cw, ch) = src.dimensions();
    if (cw, ch) != (dst_w.div_ceil(2), dst_h.div_ceil(2)) {
        return Err(Error::invalid_dimensions(
            dst_w,
            dst_h,
            format!(
                "expand target requires a {}x{} source, got {}x{}",
                dst_w.div_ceil(2),
                dst_h.div_ceil(2),
                cw,
                ch
            ),
        ));
    }
    let c = src.channels();

    // Replicate-pad the coarse grid by one pixel so the interpolating blur
    // sees valid neighbors at the image border.
    let (pw, ph) = (cw + 2, ch + 2);
    let mut padded = Level::new(pw, ph, c);
    for y in 0..ph {
        let sy = y.saturating_sub(1).min(ch - 1);
        let src_row = src.row(sy);
        let dst_row = padded.row_mut(y);
        for x in 0..pw {
            let sx = x.saturating_sub(1).min(cw - 1);
            dst_row[x * c..(x + 1) * c].copy_from_slice(&src_row[sx * c..(sx + 1) * c]);
        }
    }

    // Zero-stuff at even positions, scaled so the blur's DC gain of 1/4 on
    // a half-empty grid cancels out.
    let (sw, sh) = (2 * pw, 2 * ph);
    let mut stuffed = Level::new(sw, sh, c);
    for y in 0..ph {
        let src_row = padded.row(y);
        let dst_row = stuffed.row_mut(2 * y);
        for x in 0..pw {
            for chn in 0..c {
                dst_row[2 * x * c + chn] = 4.0 * src_row[x * c + chn];
            }
        }
    }

    let blurred = blur(&stuffed);

    // Crop: padded coarse sample i sits at stuffed position 2(i + 1), so an
    // offset of 2 puts unpadded coarse sample i at fine position 2i.
    let mut out = Level::new(dst_w, dst_h, c);
    for y in 0..dst_h {
        let src_row = blurred.row(y + 2);
        out.row_mut(y)
            .copy_from_slice(&src_row[2 * c..(2 + dst_w) * c]);
    }
    Ok(out)
}

/// Returns the pyramid depth for a base image: `⌊log2(min(w, h))⌋`.
///
/// Zero-area inputs yield 0.
///
/// # Example
///
/// ```rust
/// use expofuse_pyramid::pyramid_depth;
///
/// assert_eq!(pyramid_depth(8, 8), 3);
/// assert_eq!(pyramid_depth(1024, 768), 9);
/// ```
#[inline]
pub fn pyramid_depth(width: usize, height: usize) -> usize {
    let m = width.min(height);
    if m == 0 { 0 } else { m.ilog2() as usize }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expofuse_core::Plane;

    #[test]
    fn test_mirror_reflection() {
        assert_eq!(mirror(-1, 4), 0);
        assert_eq!(mirror(-2, 4), 1);
        assert_eq!(mirror(0, 4), 0);
        assert_eq!(mirror(3, 4), 3);
        assert_eq!(mirror(4, 4), 3);
        assert_eq!(mirror(5, 4), 2);
        // Tiny extents keep folding until in range
        assert_eq!(mirror(-2, 1), 0);
        assert_eq!(mirror(2, 1), 0);
    }

    #[test]
    fn test_kernel_sums_to_one() {
        let sum: f32 = KERNEL.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_reduce_dimensions() {
        let even = reduce(&Level::from(Plane::new(8, 8))).unwrap();
        assert_eq!(even.dimensions(), (4, 4));

        let odd = reduce(&Level::from(Plane::new(9, 7))).unwrap();
        assert_eq!(odd.dimensions(), (5, 4));
    }

    #[test]
    fn test_reduce_empty_rejected() {
        assert!(reduce(&Level::from(Plane::new(0, 8))).is_err());
    }

    #[test]
    fn test_reduce_preserves_constant() {
        let base = Level::from(Plane::filled(11, 6, 0.37));
        let half = reduce(&base).unwrap();
        for &v in half.data() {
            assert!((v - 0.37).abs() < 1e-6);
        }
    }

    #[test]
    fn test_expand_preserves_constant() {
        let coarse = Level::from(Plane::filled(5, 4, 0.81));
        // Both parities of target size
        for (w, h) in [(10, 8), (9, 7)] {
            let fine = expand(&coarse, w, h).unwrap();
            assert_eq!(fine.dimensions(), (w, h));
            for &v in fine.data() {
                assert!((v - 0.81).abs() < 1e-6, "{} at {}x{}", v, w, h);
            }
        }
    }

    #[test]
    fn test_expand_size_validation() {
        let coarse = Level::from(Plane::new(3, 3));
        assert!(expand(&coarse, 8, 8).is_err());
        assert!(expand(&coarse, 0, 6).is_err());
        assert!(expand(&coarse, 6, 6).is_ok());
    }

    #[test]
    fn test_expand_impulse_alignment() {
        // A coarse impulse at (2, 2) must land centered on fine (4, 4).
        let mut plane = Plane::new(5, 5);
        plane.set_value(2, 2, 1.0);
        let fine = expand(&Level::from(plane), 10, 10).unwrap();

        let center = fine.row(4)[4];
        assert!((center - 0.5625).abs() < 1e-6, "center = {}", center);
        // Off-center taps carry less weight
        assert!(fine.row(4)[5] < center);
        assert!(fine.row(5)[4] < center);
        assert!(fine.row(4)[3] < center);
        // Beyond the kernel footprint everything is zero
        assert_eq!(fine.row(4)[8], 0.0);
        assert_eq!(fine.row(8)[4], 0.0);
    }

    #[test]
    fn test_expand_multichannel() {
        let mut level = Level::new(4, 4, 3);
        level.data_mut().fill(0.5);
        // Mark one channel differently to verify channels stay independent
        for px in level.data_mut().chunks_exact_mut(3) {
            px[2] = 1.0;
        }
        let fine = expand(&level, 8, 8).unwrap();
        for px in fine.data().chunks_exact(3) {
            assert!((px[0] - 0.5).abs() < 1e-6);
            assert!((px[2] - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_pyramid_depth() {
        assert_eq!(pyramid_depth(8, 8), 3);
        assert_eq!(pyramid_depth(9, 7), 2);
        assert_eq!(pyramid_depth(1024, 768), 9);
        assert_eq!(pyramid_depth(4, 4000), 2);
        assert_eq!(pyramid_depth(1, 1), 0);
        assert_eq!(pyramid_depth(0, 5), 0);
    }
}

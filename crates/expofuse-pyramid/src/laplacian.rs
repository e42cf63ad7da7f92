//! Laplacian pyramid: band-pass decomposition with exact reconstruction.
//!
//! Every level except the last stores the detail lost by one reduce step
//! (`level − expand(reduce(level))`); the last level stores the remaining
//! low-pass residual itself. [`LaplacianPyramid::reconstruct`] inverts the
//! decomposition by expanding and summing from the coarsest level up, exact
//! to f32 rounding.

use expofuse_core::{Error, Image, Result};

use crate::level::Level;
use crate::resample::{expand, reduce};

/// A band-pass image decomposition.
///
/// # Example
///
/// ```rust
/// use expofuse_core::Image;
/// use expofuse_pyramid::LaplacianPyramid;
///
/// let img = Image::filled(8, 8, [0.5, 0.5, 0.5, 1.0]);
/// let pyr = LaplacianPyramid::build(&img, 3).unwrap();
/// let back = pyr.reconstruct().unwrap().into_image().unwrap();
/// assert!((back.pixel(3, 3)[0] - 0.5).abs() < 1e-5);
/// ```
#[derive(Debug, Clone)]
pub struct LaplacianPyramid {
    levels: Vec<Level>,
}

impl LaplacianPyramid {
    /// Decomposes an image into `num_levels` band-pass levels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `num_levels` is zero or the
    /// image has zero area.
    pub fn build(base: &Image, num_levels: usize) -> Result<Self> {
        let (w, h) = base.dimensions();
        if num_levels == 0 {
            return Err(Error::invalid_dimensions(w, h, "pyramid needs at least one level"));
        }
        if base.is_empty() {
            return Err(Error::invalid_dimensions(w, h, "pyramid base has zero area"));
        }
        let mut levels = Vec::with_capacity(num_levels);
        let mut cur = Level::from(base.clone());
        for _ in 1..num_levels {
            let reduced = reduce(&cur)?;
            let up = expand(&reduced, cur.width(), cur.height())?;
            let mut residual = cur;
            for (r, u) in residual.data_mut().iter_mut().zip(up.data()) {
                *r -= u;
            }
            levels.push(residual);
            cur = reduced;
        }
        // Coarsest level keeps the low-pass signal itself
        levels.push(cur);
        Ok(Self { levels })
    }

    /// Assembles a pyramid from pre-built levels (finest first).
    ///
    /// Used by the blender, which produces each level as a weighted sum of
    /// source pyramid levels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `levels` is empty or
    /// consecutive level dimensions are not related by `⌈n/2⌉`, and
    /// [`Error::ChannelMismatch`] if the channel counts differ.
    pub fn from_levels(levels: Vec<Level>) -> Result<Self> {
        let Some(first) = levels.first() else {
            return Err(Error::invalid_dimensions(0, 0, "pyramid needs at least one level"));
        };
        let channels = first.channels();
        for pair in levels.windows(2) {
            let (fine, coarse) = (&pair[0], &pair[1]);
            let expected = (fine.width().div_ceil(2), fine.height().div_ceil(2));
            if coarse.dimensions() != expected {
                return Err(Error::invalid_dimensions(
                    coarse.width(),
                    coarse.height(),
                    format!(
                        "level below {}x{} must be {}x{}",
                        fine.width(),
                        fine.height(),
                        expected.0,
                        expected.1
                    ),
                ));
            }
            if coarse.channels() != channels {
                return Err(Error::channel_mismatch(channels, coarse.channels()));
            }
        }
        Ok(Self { levels })
    }

    /// Returns the number of levels.
    #[inline]
    pub fn num_levels(&self) -> usize {
        self.levels.len()
    }

    /// Returns level `k` (0 = finest detail band).
    ///
    /// # Panics
    ///
    /// Panics if `k` is out of range.
    #[inline]
    pub fn level(&self, k: usize) -> &Level {
        &self.levels[k]
    }

    /// Returns all levels, finest first.
    #[inline]
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Collapses the pyramid back into a full-resolution level.
    ///
    /// Starting from the coarsest level, repeatedly expands the accumulator
    /// to the next finer level's size and adds that level's detail.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if the pyramid is empty.
    pub fn reconstruct(&self) -> Result<Level> {
        let Some(last) = self.levels.last() else {
            return Err(Error::invalid_dimensions(0, 0, "cannot reconstruct an empty pyramid"));
        };
        let mut acc = last.clone();
        for level in self.levels.iter().rev().skip(1) {
            let mut up = expand(&acc, level.width(), level.height())?;
            for (u, l) in up.data_mut().iter_mut().zip(level.data()) {
                *u += l;
            }
            acc = up;
        }
        Ok(acc)
    }
}

//! Gaussian pyramid: progressively smoothed and downsampled copies.
//!
//! Level 0 is the base signal; each following level is the [`reduce`] of
//! the previous one. The fusion engine builds one Gaussian pyramid per
//! weight map so that blend weights vary smoothly at every scale.

use expofuse_core::{Error, Plane, Result};

use crate::level::Level;
use crate::resample::reduce;

/// A stack of progressively downsampled levels.
///
/// # Example
///
/// ```rust
/// use expofuse_core::Plane;
/// use expofuse_pyramid::GaussianPyramid;
///
/// let base = Plane::filled(8, 8, 1.0);
/// let pyr = GaussianPyramid::build(&base, 3).unwrap();
/// assert_eq!(pyr.num_levels(), 3);
/// assert_eq!(pyr.level(2).dimensions(), (2, 2));
/// ```
#[derive(Debug, Clone)]
pub struct GaussianPyramid {
    levels: Vec<Level>,
}

impl GaussianPyramid {
    /// Builds a pyramid of `num_levels` levels from a base plane.
    ///
    /// Level 0 is a copy of `base`; level k+1 is `reduce(level k)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `num_levels` is zero or the
    /// base has zero area.
    pub fn build(base: &Plane, num_levels: usize) -> Result<Self> {
        let (w, h) = base.dimensions();
        if num_levels == 0 {
            return Err(Error::invalid_dimensions(w, h, "pyramid needs at least one level"));
        }
        if w == 0 || h == 0 {
            return Err(Error::invalid_dimensions(w, h, "pyramid base has zero area"));
        }
        let mut levels = Vec::with_capacity(num_levels);
        let mut cur = Level::from(base.clone());
        for _ in 1..num_levels {
            let next = reduce(&cur)?;
            levels.push(cur);
            cur = next;
        }
        levels.push(cur);
        Ok(Self { levels })
    }

    /// Returns the number of levels.
    #[inline]
    pub fn num_levels(&self) -> usize {
        self.levels.len()
    }

    /// Returns level `k` (0 = full resolution).
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_dimensions_halve() {
        let pyr = GaussianPyramid::build(&Plane::new(16, 16), 4).unwrap();
        let dims: Vec<_> = pyr.levels().iter().map(|l| l.dimensions()).collect();
        assert_eq!(dims, [(16, 16), (8, 8), (4, 4), (2, 2)]);
    }

    #[test]
    fn test_odd_dimensions_round_up() {
        let pyr = GaussianPyramid::build(&Plane::new(9, 7), 3).unwrap();
        let dims: Vec<_> = pyr.levels().iter().map(|l| l.dimensions()).collect();
        assert_eq!(dims, [(9, 7), (5, 4), (3, 2)]);
    }

    #[test]
    fn test_constant_stays_constant() {
        let pyr = GaussianPyramid::build(&Plane::filled(8, 8, 0.5), 3).unwrap();
        for level in pyr.levels() {
            for &v in level.data() {
                assert!((v - 0.5).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_zero_levels_rejected() {
        assert!(GaussianPyramid::build(&Plane::new(8, 8), 0).is_err());
    }

    #[test]
    fn test_single_level_is_copy() {
        let base = Plane::filled(5, 5, 0.2);
        let pyr = GaussianPyramid::build(&base, 1).unwrap();
        assert_eq!(pyr.num_levels(), 1);
        assert_eq!(pyr.level(0).data(), base.data());
    }
}

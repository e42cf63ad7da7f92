//! Threshold-dispatched parallel helpers for per-pixel stages.
//!
//! Small images are slower with rayon than without, so every helper falls
//! back to a plain loop below [`PARALLEL_THRESHOLD`] samples. With the
//! `parallel` feature disabled only the sequential bodies are compiled and
//! rayon is not linked at all.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Minimum number of samples before work is fanned out to rayon.
pub(crate) const PARALLEL_THRESHOLD: usize = 30_000;

/// Applies `f` to every `chunk_size`-sample chunk of `data`.
#[cfg(feature = "parallel")]
pub(crate) fn for_each_chunk_mut<T, F>(data: &mut [T], chunk_size: usize, f: F)
where
    T: Send + Sync,
    F: Fn(&mut [T]) + Sync,
{
    if data.len() / chunk_size >= PARALLEL_THRESHOLD {
        data.par_chunks_exact_mut(chunk_size).for_each(&f);
    } else {
        for chunk in data.chunks_exact_mut(chunk_size) {
            f(chunk);
        }
    }
}

/// Applies `f` to every `chunk_size`-sample chunk of `data`.
#[cfg(not(feature = "parallel"))]
pub(crate) fn for_each_chunk_mut<T, F>(data: &mut [T], chunk_size: usize, f: F)
where
    F: Fn(&mut [T]),
{
    for chunk in data.chunks_exact_mut(chunk_size) {
        f(chunk);
    }
}

/// Applies `f(y, row)` to every `stride`-sample row of `data`.
///
/// The row index lets callers read the matching row of a source buffer.
#[cfg(feature = "parallel")]
pub(crate) fn for_each_row_mut<T, F>(data: &mut [T], stride: usize, f: F)
where
    T: Send + Sync,
    F: Fn(usize, &mut [T]) + Sync,
{
    if data.len() >= PARALLEL_THRESHOLD {
        data.par_chunks_mut(stride)
            .enumerate()
            .for_each(|(y, row)| f(y, row));
    } else {
        for (y, row) in data.chunks_mut(stride).enumerate() {
            f(y, row);
        }
    }
}

/// Applies `f(y, row)` to every `stride`-sample row of `data`.
#[cfg(not(feature = "parallel"))]
pub(crate) fn for_each_row_mut<T, F>(data: &mut [T], stride: usize, f: F)
where
    F: Fn(usize, &mut [T]),
{
    for (y, row) in data.chunks_mut(stride).enumerate() {
        f(y, row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_helper_visits_every_chunk() {
        let mut data = vec![1.0f32; 4 * 10];
        for_each_chunk_mut(&mut data, 4, |px| {
            px[0] = 2.0;
        });
        for px in data.chunks_exact(4) {
            assert_eq!(px[0], 2.0);
            assert_eq!(px[1], 1.0);
        }
    }

    #[test]
    fn test_row_helper_passes_indices() {
        let mut data = vec![0.0f32; 8 * 6];
        for_each_row_mut(&mut data, 8, |y, row| {
            for v in row.iter_mut() {
                *v = y as f32;
            }
        });
        assert_eq!(data[0], 0.0);
        assert_eq!(data[8], 1.0);
        assert_eq!(data[8 * 5], 5.0);
    }

    #[test]
    fn test_large_buffer_dispatch() {
        // Above the threshold, so the rayon path runs when enabled
        let mut data = vec![1.0f32; 210 * 200];
        for_each_row_mut(&mut data, 210, |y, row| {
            for v in row.iter_mut() {
                *v += y as f32;
            }
        });
        assert_eq!(data[0], 1.0);
        assert_eq!(data[210 * 199], 200.0);
    }
}

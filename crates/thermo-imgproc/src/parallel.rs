use rayon::prelude::*;

use thermo_image::ImageViewMut;

/// Controls how resampling rows are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecutionStrategy {
    /// Run sequentially on the current thread.
    ///
    /// The right choice for small sensor frames, where the overhead of
    /// parallelization outweighs the work.
    #[default]
    Serial,

    /// Use the global Rayon thread pool to process destination rows in parallel.
    ParallelRows,
}

/// Fill every destination sample with `f(x, y)`, row by row.
///
/// Rows are disjoint chunks of the destination buffer, so the parallel
/// strategy needs no synchronization beyond `F: Sync`.
pub fn iter_rows_resample<F>(dst: &mut ImageViewMut<'_>, strategy: ExecutionStrategy, f: F)
where
    F: Fn(usize, usize) -> f32 + Send + Sync,
{
    let cols = dst.cols();
    let fill_row = |(y, row): (usize, &mut [f32])| {
        row.iter_mut()
            .enumerate()
            .for_each(|(x, out)| *out = f(x, y));
    };

    match strategy {
        ExecutionStrategy::Serial => dst
            .as_slice_mut()
            .chunks_exact_mut(cols)
            .enumerate()
            .for_each(fill_row),
        ExecutionStrategy::ParallelRows => dst
            .as_slice_mut()
            .par_chunks_exact_mut(cols)
            .enumerate()
            .for_each(fill_row),
    }
}

//! Parallel evaluation over a rectangular grid.
//!
//! Noise queries share nothing mutable, so rows are filled independently on the
//! global rayon pool.

use rayon::prelude::*;

/// Evaluates `sample(x, y)` for every cell of a `width × height` grid.
///
/// Returns a row-major `Vec` of length `width * height`; index `y * width + x`
/// holds `sample(x, y)`. An empty grid returns an empty `Vec`.
pub fn sample_grid<F>(width: usize, height: usize, sample: F) -> Vec<f64>
where
    F: Fn(usize, usize) -> f64 + Sync,
{
    let mut values = vec![0.0; width * height];
    if width == 0 {
        return values;
    }
    values
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, value) in row.iter_mut().enumerate() {
                *value = sample(x, y);
            }
        });
    values
}

/// Fallible variant of [`sample_grid`] for the validating entry points.
///
/// Returns the first error any cell produced.
pub fn try_sample_grid<F, E>(width: usize, height: usize, sample: F) -> Result<Vec<f64>, E>
where
    F: Fn(usize, usize) -> Result<f64, E> + Sync,
    E: Send,
{
    (0..width * height)
        .into_par_iter()
        .map(|index| sample(index % width, index / width))
        .collect()
}

//! Deterministic, band-limited noise for procedural textures and terrain.
//!
//! Two families share one [`PermutationTable`]:
//!
//! - Gradient ("improved" Perlin) noise in 1D, 2D and 3D, with an integer `base`
//!   offset and per-axis tiling periods.
//! - Simplex noise in 2D, 3D and 4D; the 2D variant tiles.
//!
//! Both layer into fractal (fBm) sums through [`Octaves`]. Every function here is a
//! pure function of its arguments and the immutable reference table, so callers may
//! evaluate from any number of threads; [`sample_grid`] does exactly that.
//!
//! ```
//! use lattice_noise::{GradientOptions, Octaves, gradient_noise_2d};
//!
//! let options = GradientOptions::default()
//!     .with_octaves(Octaves::new(4))
//!     .with_repeat(Some(8), Some(8), None);
//! let value = gradient_noise_2d(1.25, 3.5, &options)?;
//! assert!((-1.0..=1.0).contains(&value));
//! # Ok::<(), lattice_noise::NoiseError>(())
//! ```

pub mod error;
pub mod grid;
pub mod math;
pub mod noise;
pub mod options;

pub use error::NoiseError;
pub use grid::{sample_grid, try_sample_grid};
pub use noise::{GradientNoise, PermutationTable, SimplexNoise};
pub use options::{Axis, GradientOptions, Octaves, SimplexOptions};

/// 1D gradient noise over the reference table. Reads `repeat_x` only.
pub fn gradient_noise_1d(x: f64, options: &GradientOptions) -> Result<f64, NoiseError> {
    GradientNoise::reference().fractal_1d(x, options)
}

/// 2D gradient noise over the reference table. Reads `repeat_x` and `repeat_y`.
pub fn gradient_noise_2d(x: f64, y: f64, options: &GradientOptions) -> Result<f64, NoiseError> {
    GradientNoise::reference().fractal_2d(x, y, options)
}

/// 3D gradient noise over the reference table.
pub fn gradient_noise_3d(
    x: f64,
    y: f64,
    z: f64,
    options: &GradientOptions,
) -> Result<f64, NoiseError> {
    GradientNoise::reference().fractal_3d(x, y, z, options)
}

/// 2D simplex noise over the reference table, tiled when `options.repeat` is set.
pub fn simplex_noise_2d(x: f64, y: f64, options: &SimplexOptions) -> Result<f64, NoiseError> {
    SimplexNoise::reference().fractal_2d(x, y, options)
}

/// 3D simplex noise over the reference table.
pub fn simplex_noise_3d(x: f64, y: f64, z: f64, octaves: &Octaves) -> Result<f64, NoiseError> {
    SimplexNoise::reference().fractal_3d(x, y, z, octaves)
}

/// 4D simplex noise over the reference table.
pub fn simplex_noise_4d(
    x: f64,
    y: f64,
    z: f64,
    w: f64,
    octaves: &Octaves,
) -> Result<f64, NoiseError> {
    SimplexNoise::reference().fractal_4d(x, y, z, w, octaves)
}

//! Noise evaluation engines.
//!
//! - [`PermutationTable`] - Shared lattice hash
//! - [`GradientNoise`] - Perlin "improved" noise in 1D, 2D and 3D
//! - [`SimplexNoise`] - Simplex noise in 2D, 3D and 4D
//! - [`fractal`] - Octave summation over either engine

pub mod fractal;
mod gradient_noise;
mod permutation;
mod simplex_noise;

pub use gradient_noise::GradientNoise;
pub use permutation::{PERLIN_PERMUTATION, PermutationTable};
pub use simplex_noise::SimplexNoise;

/// Gradient vectors shared between gradient and simplex noise.
///
/// The twelve cube-edge midpoints, padded to sixteen with Perlin's four repeats
/// so `hash & 15` selects an entry without a modulo. 2D lookups use the x and y
/// components.
pub(crate) const GRADIENT: [[i8; 3]; 16] = [
    [1, 1, 0],
    [-1, 1, 0],
    [1, -1, 0],
    [-1, -1, 0],
    [1, 0, 1],
    [-1, 0, 1],
    [1, 0, -1],
    [-1, 0, -1],
    [0, 1, 1],
    [0, -1, 1],
    [0, 1, -1],
    [0, -1, -1],
    [1, 1, 0],
    [-1, 1, 0],
    [0, -1, 1],
    [0, -1, -1],
];

/// 4D simplex gradients: the midpoints of the 32 edges of a tesseract.
pub(crate) const GRADIENT_4D: [[i8; 4]; 32] = [
    [0, 1, 1, 1],
    [0, 1, 1, -1],
    [0, 1, -1, 1],
    [0, 1, -1, -1],
    [0, -1, 1, 1],
    [0, -1, 1, -1],
    [0, -1, -1, 1],
    [0, -1, -1, -1],
    [1, 0, 1, 1],
    [1, 0, 1, -1],
    [1, 0, -1, 1],
    [1, 0, -1, -1],
    [-1, 0, 1, 1],
    [-1, 0, 1, -1],
    [-1, 0, -1, 1],
    [-1, 0, -1, -1],
    [1, 1, 0, 1],
    [1, 1, 0, -1],
    [1, -1, 0, 1],
    [1, -1, 0, -1],
    [-1, 1, 0, 1],
    [-1, 1, 0, -1],
    [-1, -1, 0, 1],
    [-1, -1, 0, -1],
    [1, 1, 1, 0],
    [1, 1, -1, 0],
    [1, -1, 1, 0],
    [1, -1, -1, 0],
    [-1, 1, 1, 0],
    [-1, 1, -1, 0],
    [-1, -1, 1, 0],
    [-1, -1, -1, 0],
];

/// Dot product of a 3D gradient with an offset vector.
#[inline]
pub(crate) fn dot3(g: [i8; 3], x: f64, y: f64, z: f64) -> f64 {
    f64::from(g[0]) * x + f64::from(g[1]) * y + f64::from(g[2]) * z
}

/// Dot product of a 4D gradient with an offset vector.
#[inline]
pub(crate) fn dot4(g: [i8; 4], x: f64, y: f64, z: f64, w: f64) -> f64 {
    f64::from(g[0]) * x + f64::from(g[1]) * y + f64::from(g[2]) * z + f64::from(g[3]) * w
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_padding_repeats_cube_edges() {
        assert_eq!(
            GRADIENT[12..],
            [GRADIENT[0], GRADIENT[1], GRADIENT[9], GRADIENT[11]]
        );
        for g in GRADIENT {
            assert_eq!(g.iter().filter(|&&c| c == 0).count(), 1, "{g:?}");
        }
    }
}

//! Simplex noise in 2D, 3D and 4D.
//!
//! The input point is skewed onto a lattice of simplices, the simplex containing it
//! is found by ranking the skewed offsets, and each of its `d + 1` corners adds a
//! `t⁴ · (gradient · offset)` kernel with `t = r² - |offset|²` clipped at zero.
//!
//! Shares the [`PermutationTable`] and the 3D gradient set with
//! [`GradientNoise`](super::GradientNoise); 4D uses its own 32 tesseract-edge gradients.

use std::f64::consts::TAU;

use crate::math::{floor, low_byte};
use crate::noise::{GRADIENT, GRADIENT_4D, PermutationTable, dot3, dot4};

const SQRT_3: f64 = 1.732_050_807_568_877_2;
const SQRT_5: f64 = 2.236_067_977_499_79;

/// Skewing factor for 2D simplex: `0.5 * (sqrt(3) - 1)`
const F2: f64 = 0.5 * (SQRT_3 - 1.0);
/// Unskewing factor for 2D simplex: `(3 - sqrt(3)) / 6`
const G2: f64 = (3.0 - SQRT_3) / 6.0;
/// Skewing factor for 3D simplex: `1/3`
const F3: f64 = 1.0 / 3.0;
/// Unskewing factor for 3D simplex: `1/6`
const G3: f64 = 1.0 / 6.0;
/// Skewing factor for 4D simplex: `(sqrt(5) - 1) / 4`
const F4: f64 = (SQRT_5 - 1.0) / 4.0;
/// Unskewing factor for 4D simplex: `(5 - sqrt(5)) / 20`
const G4: f64 = (5.0 - SQRT_5) / 20.0;

const SCALE_2D: f64 = 70.0;
const SCALE_3D: f64 = 32.0;
const SCALE_4D: f64 = 27.0;

/// Squared kernel radius in 2D.
const RADIUS_2D: f64 = 0.5;
/// Squared kernel radius in 3D and 4D.
const RADIUS_3D: f64 = 0.6;

/// Contribution of one corner; zero outside the kernel radius.
#[inline]
fn corner_noise_3d(index: usize, x: f64, y: f64, z: f64, radius: f64) -> f64 {
    let t = radius - x * x - y * y - z * z;
    if t < 0.0 {
        0.0
    } else {
        let t = t * t;
        t * t * dot3(GRADIENT[index], x, y, z)
    }
}

#[inline]
fn corner_noise_4d(index: usize, d: [f64; 4]) -> f64 {
    let t = RADIUS_3D - d.iter().map(|v| v * v).sum::<f64>();
    if t < 0.0 {
        0.0
    } else {
        let t = t * t;
        t * t * dot4(GRADIENT_4D[index], d[0], d[1], d[2], d[3])
    }
}

/// Single-octave simplex noise evaluator.
#[derive(Debug, Clone, Copy)]
pub struct SimplexNoise<'t> {
    perm: &'t PermutationTable,
}

impl SimplexNoise<'static> {
    /// An evaluator over [`PermutationTable::reference`].
    #[must_use]
    pub fn reference() -> Self {
        Self::new(PermutationTable::reference())
    }
}

impl<'t> SimplexNoise<'t> {
    /// Creates an evaluator over `perm`.
    #[must_use]
    pub const fn new(perm: &'t PermutationTable) -> Self {
        Self { perm }
    }

    #[inline]
    const fn p(&self, index: usize) -> usize {
        self.perm.get(index)
    }

    /// Sample 2D simplex noise at the given coordinates.
    ///
    /// Returns a value in `[-1, 1]`.
    #[must_use]
    pub fn sample_2d(&self, xin: f64, yin: f64) -> f64 {
        let s = (xin + yin) * F2;
        let i = floor(xin + s);
        let j = floor(yin + s);
        let t = (i as f64 + j as f64) * G2;
        let x0 = xin - (i as f64 - t);
        let y0 = yin - (j as f64 - t);

        // Lower or upper triangle of the skewed cell
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - i1 as f64 + G2;
        let y1 = y0 - j1 as f64 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = low_byte(i);
        let jj = low_byte(j);
        let gi0 = self.p(ii + self.p(jj)) % 12;
        let gi1 = self.p(ii + i1 + self.p(jj + j1)) % 12;
        let gi2 = self.p(ii + 1 + self.p(jj + 1)) % 12;

        let n0 = corner_noise_3d(gi0, x0, y0, 0.0, RADIUS_2D);
        let n1 = corner_noise_3d(gi1, x1, y1, 0.0, RADIUS_2D);
        let n2 = corner_noise_3d(gi2, x2, y2, 0.0, RADIUS_2D);

        (SCALE_2D * (n0 + n1 + n2)).clamp(-1.0, 1.0)
    }

    /// Sample 2D simplex noise that repeats every `period` units along both axes.
    ///
    /// Each axis is wrapped onto a circle of circumference `period` and the
    /// resulting torus is sampled with [`sample_4d`](Self::sample_4d), so the
    /// field is smooth across the seam and `f(x, y) == f(x + period, y)` up to
    /// rounding. `period` must be positive.
    #[must_use]
    pub fn sample_2d_tiled(&self, x: f64, y: f64, period: u32) -> f64 {
        let period = f64::from(period);
        let radius = period / TAU;
        let (sin_x, cos_x) = (x / period * TAU).sin_cos();
        let (sin_y, cos_y) = (y / period * TAU).sin_cos();
        self.sample_4d(
            cos_x * radius,
            sin_x * radius,
            cos_y * radius,
            sin_y * radius,
        )
    }

    /// Sample 3D simplex noise at the given coordinates.
    ///
    /// Returns a value in `[-1, 1]`.
    #[must_use]
    pub fn sample_3d(&self, xin: f64, yin: f64, zin: f64) -> f64 {
        let s = (xin + yin + zin) * F3;
        let i = floor(xin + s);
        let j = floor(yin + s);
        let k = floor(zin + s);
        let t = (i as f64 + j as f64 + k as f64) * G3;
        let x0 = xin - (i as f64 - t);
        let y0 = yin - (j as f64 - t);
        let z0 = zin - (k as f64 - t);

        // Determine which simplex tetrahedron we're in
        let (i1, j1, k1, i2, j2, k2) = if x0 >= y0 {
            if y0 >= z0 {
                (1, 0, 0, 1, 1, 0)
            } else if x0 >= z0 {
                (1, 0, 0, 1, 0, 1)
            } else {
                (0, 0, 1, 1, 0, 1)
            }
        } else if y0 < z0 {
            (0, 0, 1, 0, 1, 1)
        } else if x0 < z0 {
            (0, 1, 0, 0, 1, 1)
        } else {
            (0, 1, 0, 1, 1, 0)
        };

        let x1 = x0 - i1 as f64 + G3;
        let y1 = y0 - j1 as f64 + G3;
        let z1 = z0 - k1 as f64 + G3;
        let x2 = x0 - i2 as f64 + 2.0 * G3;
        let y2 = y0 - j2 as f64 + 2.0 * G3;
        let z2 = z0 - k2 as f64 + 2.0 * G3;
        let x3 = x0 - 1.0 + 3.0 * G3;
        let y3 = y0 - 1.0 + 3.0 * G3;
        let z3 = z0 - 1.0 + 3.0 * G3;

        let ii = low_byte(i);
        let jj = low_byte(j);
        let kk = low_byte(k);
        let gi0 = self.p(ii + self.p(jj + self.p(kk))) % 12;
        let gi1 = self.p(ii + i1 + self.p(jj + j1 + self.p(kk + k1))) % 12;
        let gi2 = self.p(ii + i2 + self.p(jj + j2 + self.p(kk + k2))) % 12;
        let gi3 = self.p(ii + 1 + self.p(jj + 1 + self.p(kk + 1))) % 12;

        let n0 = corner_noise_3d(gi0, x0, y0, z0, RADIUS_3D);
        let n1 = corner_noise_3d(gi1, x1, y1, z1, RADIUS_3D);
        let n2 = corner_noise_3d(gi2, x2, y2, z2, RADIUS_3D);
        let n3 = corner_noise_3d(gi3, x3, y3, z3, RADIUS_3D);

        (SCALE_3D * (n0 + n1 + n2 + n3)).clamp(-1.0, 1.0)
    }

    /// Sample 4D simplex noise at the given coordinates.
    ///
    /// Returns a value in `[-1, 1]`.
    #[must_use]
    pub fn sample_4d(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        let s = (x + y + z + w) * F4;
        let cell = [x, y, z, w].map(|v| floor(v + s));
        let t = cell.iter().map(|&c| c as f64).sum::<f64>() * G4;
        let origin = [
            x - (cell[0] as f64 - t),
            y - (cell[1] as f64 - t),
            z - (cell[2] as f64 - t),
            w - (cell[3] as f64 - t),
        ];

        // Rank of each axis among the skewed offsets; the corner
        // `c` steps along every axis whose rank is at least `4 - c`.
        let mut rank = [0usize; 4];
        for a in 0..4 {
            for b in a + 1..4 {
                if origin[a] > origin[b] {
                    rank[a] += 1;
                } else {
                    rank[b] += 1;
                }
            }
        }

        let hashed = cell.map(low_byte);
        let mut total = 0.0;
        for corner in 0..5 {
            let step = rank.map(|r| usize::from(r + corner >= 4));
            let unskew = corner as f64 * G4;
            let offset = [0usize, 1, 2, 3].map(|a| origin[a] - step[a] as f64 + unskew);
            let gi = self.p(
                hashed[0]
                    + step[0]
                    + self.p(
                        hashed[1]
                            + step[1]
                            + self.p(hashed[2] + step[2] + self.p(hashed[3] + step[3])),
                    ),
            ) % 32;
            total += corner_noise_4d(gi, offset);
        }

        (SCALE_4D * total).clamp(-1.0, 1.0)
    }
}

impl Default for SimplexNoise<'static> {
    fn default() -> Self {
        Self::reference()
    }
}

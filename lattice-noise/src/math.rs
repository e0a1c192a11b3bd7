//! Scalar helpers shared by the noise engines.
//!
//! Lattice indices are `i64` so that `floor` stays exact for every coordinate whose
//! fractional part an `f64` can still represent. Past roughly `2^52` the fractional
//! offset inside a cell is lost and tiling periodicity is no longer guaranteed.
//! Past `2^63` the index saturates at `i64::MIN`/`i64::MAX` (NaN floors to zero), so
//! index arithmetic downstream wraps instead of overflowing. Such inputs still
//! produce a value, just not a meaningful one.

/// Floors a coordinate to its integer lattice index, saturating outside the `i64` range.
#[inline]
#[must_use]
pub fn floor(value: f64) -> i64 {
    value.floor() as i64
}

/// Perlin's quintic fade curve `6t⁵ - 15t⁴ + 10t³`.
///
/// First and second derivatives are zero at `t = 0` and `t = 1`.
#[inline]
#[must_use]
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation between `a` and `b`.
#[inline]
#[must_use]
pub fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

/// Folds a lattice index into `[0, period)`.
///
/// `None` leaves the index untouched.
#[inline]
#[must_use]
pub const fn wrap(index: i64, period: Option<u32>) -> i64 {
    match period {
        Some(period) => index.rem_euclid(period as i64),
        None => index,
    }
}

/// Low eight bits of a lattice index, as a permutation table offset.
#[inline]
#[must_use]
pub const fn low_byte(index: i64) -> usize {
    (index & 0xFF) as usize
}

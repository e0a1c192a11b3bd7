//! Parameter validation errors.

use thiserror::Error;

use crate::options::Axis;

/// An error raised when a noise query carries an invalid parameter.
///
/// Numeric precision loss at very large coordinates is not an error; see
/// [`crate::math`] for the practical coordinate limits.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum NoiseError {
    /// The octave count must be at least 1.
    #[error("Expected octaves value > 0, got {0}")]
    InvalidOctaves(u32),
    /// A tiling period must be a positive number of lattice cells.
    #[error("Repeat period along {axis} must be > 0, got {period}")]
    InvalidRepeat {
        /// Axis the period was requested for.
        axis: Axis,
        /// The rejected period.
        period: u32,
    },
    /// Persistence and lacunarity must be finite.
    #[error("Parameter {name} must be finite, got {value}")]
    NonFiniteParameter {
        /// Parameter name as it appears in the options.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A custom permutation listed the same value twice.
    #[error("Permutation repeats value {value}")]
    NotAPermutation {
        /// First value found more than once.
        value: u8,
    },
}

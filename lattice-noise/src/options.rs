//! Query configuration for the noise entry points.
//!
//! Every struct here deserializes from a partial document: missing fields take
//! the documented defaults, so `{"octaves": 4}` is a complete [`GradientOptions`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::NoiseError;

/// Default per-octave amplitude multiplier.
pub const DEFAULT_PERSISTENCE: f64 = 0.5;
/// Default per-octave frequency multiplier.
pub const DEFAULT_LACUNARITY: f64 = 2.0;

/// A coordinate axis, used to report which tiling period was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// First coordinate.
    X,
    /// Second coordinate.
    Y,
    /// Third coordinate.
    Z,
    /// A period shared by every axis (simplex tiling).
    All,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
            Self::All => "all axes",
        })
    }
}

/// Fractal (fBm) layering parameters shared by both noise families.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Octaves {
    /// Number of octaves to sum. `1` evaluates the single-octave engine directly.
    #[serde(rename = "octaves")]
    pub count: u32,
    /// Amplitude of each octave relative to the one below it.
    pub persistence: f64,
    /// Frequency of each octave relative to the one below it.
    pub lacunarity: f64,
}

impl Default for Octaves {
    fn default() -> Self {
        Self {
            count: 1,
            persistence: DEFAULT_PERSISTENCE,
            lacunarity: DEFAULT_LACUNARITY,
        }
    }
}

impl Octaves {
    /// `count` octaves with default persistence and lacunarity.
    #[must_use]
    pub const fn new(count: u32) -> Self {
        Self {
            count,
            persistence: DEFAULT_PERSISTENCE,
            lacunarity: DEFAULT_LACUNARITY,
        }
    }

    /// Replaces the persistence.
    #[must_use]
    pub const fn with_persistence(mut self, persistence: f64) -> Self {
        self.persistence = persistence;
        self
    }

    /// Replaces the lacunarity.
    #[must_use]
    pub const fn with_lacunarity(mut self, lacunarity: f64) -> Self {
        self.lacunarity = lacunarity;
        self
    }

    /// Rejects a zero octave count and non-finite multipliers.
    pub fn validate(&self) -> Result<(), NoiseError> {
        if self.count == 0 {
            tracing::debug!(octaves = self.count, "rejected octave count");
            return Err(NoiseError::InvalidOctaves(self.count));
        }
        for (name, value) in [
            ("persistence", self.persistence),
            ("lacunarity", self.lacunarity),
        ] {
            if !value.is_finite() {
                tracing::debug!(name, value, "rejected non-finite parameter");
                return Err(NoiseError::NonFiniteParameter { name, value });
            }
        }
        Ok(())
    }
}

fn validate_period(axis: Axis, period: Option<u32>) -> Result<(), NoiseError> {
    match period {
        Some(0) => {
            tracing::debug!(%axis, "rejected zero repeat period");
            Err(NoiseError::InvalidRepeat { axis, period: 0 })
        }
        _ => Ok(()),
    }
}

/// Options for the gradient ("improved") noise entry points.
///
/// The 1D function reads only `repeat_x`; the 2D function reads `repeat_x` and
/// `repeat_y`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientOptions {
    /// Fractal layering.
    #[serde(flatten)]
    pub octaves: Octaves,
    /// Offset into the permutation hash; distinct values give decorrelated fields.
    pub base: u8,
    /// Tiling period along x, in lattice cells. `None` never repeats.
    #[serde(rename = "repeatx")]
    pub repeat_x: Option<u32>,
    /// Tiling period along y, in lattice cells.
    #[serde(rename = "repeaty")]
    pub repeat_y: Option<u32>,
    /// Tiling period along z, in lattice cells.
    #[serde(rename = "repeatz")]
    pub repeat_z: Option<u32>,
}

impl GradientOptions {
    /// Replaces the fractal layering.
    #[must_use]
    pub const fn with_octaves(mut self, octaves: Octaves) -> Self {
        self.octaves = octaves;
        self
    }

    /// Replaces the hash offset.
    #[must_use]
    pub const fn with_base(mut self, base: u8) -> Self {
        self.base = base;
        self
    }

    /// Sets the tiling periods for up to three axes.
    #[must_use]
    pub const fn with_repeat(
        mut self,
        repeat_x: Option<u32>,
        repeat_y: Option<u32>,
        repeat_z: Option<u32>,
    ) -> Self {
        self.repeat_x = repeat_x;
        self.repeat_y = repeat_y;
        self.repeat_z = repeat_z;
        self
    }

    /// Periods in axis order.
    #[must_use]
    pub const fn periods(&self) -> [Option<u32>; 3] {
        [self.repeat_x, self.repeat_y, self.repeat_z]
    }

    /// Validates the layering and every requested period.
    pub fn validate(&self) -> Result<(), NoiseError> {
        self.octaves.validate()?;
        validate_period(Axis::X, self.repeat_x)?;
        validate_period(Axis::Y, self.repeat_y)?;
        validate_period(Axis::Z, self.repeat_z)
    }
}

/// Options for 2D simplex noise, the only simplex variant that tiles.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimplexOptions {
    /// Fractal layering.
    #[serde(flatten)]
    pub octaves: Octaves,
    /// Tiling period shared by both axes. `None` never repeats.
    pub repeat: Option<u32>,
}

impl SimplexOptions {
    /// Replaces the fractal layering.
    #[must_use]
    pub const fn with_octaves(mut self, octaves: Octaves) -> Self {
        self.octaves = octaves;
        self
    }

    /// Sets the tiling period.
    #[must_use]
    pub const fn with_repeat(mut self, repeat: u32) -> Self {
        self.repeat = Some(repeat);
        self
    }

    /// Validates the layering and the requested period.
    pub fn validate(&self) -> Result<(), NoiseError> {
        self.octaves.validate()?;
        validate_period(Axis::All, self.repeat)
    }
}

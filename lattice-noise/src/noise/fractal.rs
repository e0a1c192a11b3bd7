//! Octave summation (fBm) over the single-octave engines.
//!
//! Octave `k` samples at `coord * lacunarity^k` with amplitude `persistence^k`; the
//! weighted sum is divided by the sum of absolute amplitudes, so the composite stays
//! in `[-1, 1]` whenever every octave does.
//!
//! Tiling periods scale with the octave frequency and are rounded to whole lattice
//! cells. A period that rounds below one cell leaves that octave untiled.

use crate::error::NoiseError;
use crate::noise::{GradientNoise, SimplexNoise};
use crate::options::{GradientOptions, Octaves, SimplexOptions};

/// Sums octaves of `sample`, which receives the octave frequency.
///
/// A single octave calls `sample(1.0)` and returns it unchanged.
pub fn accumulate(octaves: &Octaves, mut sample: impl FnMut(f64) -> f64) -> f64 {
    if octaves.count == 1 {
        return sample(1.0);
    }

    let mut frequency = 1.0;
    let mut amplitude = 1.0_f64;
    let mut total = 0.0;
    let mut max = 0.0;

    for _ in 0..octaves.count {
        total += sample(frequency) * amplitude;
        max += amplitude.abs();
        frequency *= octaves.lacunarity;
        amplitude *= octaves.persistence;
    }

    total / max
}

/// Tiling period for an octave sampled at `frequency`.
#[must_use]
pub fn octave_period(period: Option<u32>, frequency: f64) -> Option<u32> {
    let period = period?;
    let scaled = (f64::from(period) * frequency).round();
    if (1.0..=f64::from(u32::MAX)).contains(&scaled) {
        Some(scaled as u32)
    } else {
        tracing::trace!(period, frequency, "octave period degraded to untiled");
        None
    }
}

impl GradientNoise<'_> {
    /// Multi-octave 1D gradient noise. Reads `repeat_x` only.
    pub fn fractal_1d(&self, x: f64, options: &GradientOptions) -> Result<f64, NoiseError> {
        options.validate()?;
        Ok(accumulate(&options.octaves, |freq| {
            self.sample_1d(
                x * freq,
                octave_period(options.repeat_x, freq),
                options.base,
            )
        }))
    }

    /// Multi-octave 2D gradient noise. Reads `repeat_x` and `repeat_y`.
    pub fn fractal_2d(&self, x: f64, y: f64, options: &GradientOptions) -> Result<f64, NoiseError> {
        options.validate()?;
        Ok(accumulate(&options.octaves, |freq| {
            self.sample_2d(
                x * freq,
                y * freq,
                [
                    octave_period(options.repeat_x, freq),
                    octave_period(options.repeat_y, freq),
                ],
                options.base,
            )
        }))
    }

    /// Multi-octave 3D gradient noise.
    pub fn fractal_3d(
        &self,
        x: f64,
        y: f64,
        z: f64,
        options: &GradientOptions,
    ) -> Result<f64, NoiseError> {
        options.validate()?;
        let periods = options.periods();
        Ok(accumulate(&options.octaves, |freq| {
            self.sample_3d(
                x * freq,
                y * freq,
                z * freq,
                periods.map(|period| octave_period(period, freq)),
                options.base,
            )
        }))
    }
}

impl SimplexNoise<'_> {
    /// Multi-octave 2D simplex noise, tiled when `options.repeat` is set.
    pub fn fractal_2d(&self, x: f64, y: f64, options: &SimplexOptions) -> Result<f64, NoiseError> {
        options.validate()?;
        Ok(accumulate(&options.octaves, |freq| {
            match octave_period(options.repeat, freq) {
                Some(period) => self.sample_2d_tiled(x * freq, y * freq, period),
                None => self.sample_2d(x * freq, y * freq),
            }
        }))
    }

    /// Multi-octave 3D simplex noise.
    pub fn fractal_3d(&self, x: f64, y: f64, z: f64, octaves: &Octaves) -> Result<f64, NoiseError> {
        octaves.validate()?;
        Ok(accumulate(octaves, |freq| {
            self.sample_3d(x * freq, y * freq, z * freq)
        }))
    }

    /// Multi-octave 4D simplex noise.
    pub fn fractal_4d(
        &self,
        x: f64,
        y: f64,
        z: f64,
        w: f64,
        octaves: &Octaves,
    ) -> Result<f64, NoiseError> {
        octaves.validate()?;
        Ok(accumulate(octaves, |freq| {
            self.sample_4d(x * freq, y * freq, z * freq, w * freq)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_octave_is_passthrough() {
        let mut calls = Vec::new();
        let value = accumulate(&Octaves::new(1), |freq| {
            calls.push(freq);
            0.3
        });
        assert!((value - 0.3).abs() < f64::EPSILON);
        assert_eq!(calls, vec![1.0]);
    }

    #[test]
    fn frequencies_follow_lacunarity() {
        let mut calls = Vec::new();
        accumulate(&Octaves::new(4).with_lacunarity(3.0), |freq| {
            calls.push(freq);
            0.0
        });
        assert_eq!(calls, vec![1.0, 3.0, 9.0, 27.0]);
    }

    #[test]
    fn normalized_by_amplitude_sum() {
        // Every octave at its maximum yields exactly 1.
        let value = accumulate(&Octaves::new(6).with_persistence(0.7), |_| 1.0);
        assert!((value - 1.0).abs() < 1e-12);

        // 1 + 0.5 weights: (1 * 1 + (-1) * 0.5) / 1.5
        let mut sign = 1.0;
        let value = accumulate(&Octaves::new(2), |_| {
            let v = sign;
            sign = -sign;
            v
        });
        assert!((value - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn negative_persistence_stays_bounded() {
        let value = accumulate(&Octaves::new(2).with_persistence(-1.0), |_| 1.0);
        assert!(value.abs() <= 1.0);
        assert!(value.is_finite());
    }

    #[test]
    fn octave_period_scales_and_degrades() {
        assert_eq!(octave_period(None, 2.0), None);
        assert_eq!(octave_period(Some(8), 1.0), Some(8));
        assert_eq!(octave_period(Some(8), 4.0), Some(32));
        assert_eq!(octave_period(Some(3), 1.5), Some(5));
        assert_eq!(octave_period(Some(1), 0.25), None);
        assert_eq!(octave_period(Some(4), 0.25), Some(1));
        assert_eq!(octave_period(Some(4), f64::NAN), None);
    }

    #[test]
    fn zero_octaves_reported() {
        let noise = GradientNoise::reference();
        let options = GradientOptions::default().with_octaves(Octaves::new(0));
        assert_eq!(
            noise.fractal_1d(0.5, &options),
            Err(NoiseError::InvalidOctaves(0))
        );
        assert_eq!(
            SimplexNoise::reference().fractal_4d(0.1, 0.2, 0.3, 0.4, &Octaves::new(0)),
            Err(NoiseError::InvalidOctaves(0))
        );
    }

    #[test]
    fn tiled_octaves_keep_period() {
        let noise = GradientNoise::reference();
        let options = GradientOptions::default()
            .with_octaves(Octaves::new(5))
            .with_repeat(Some(4), Some(4), None);
        for i in 0..10 {
            let y = f64::from(i) * 0.29;
            let a = noise.fractal_2d(0.3, y, &options).expect("valid options");
            let b = noise.fractal_2d(4.3, y, &options).expect("valid options");
            assert!((a - b).abs() < 1e-9, "{a} vs {b}");
        }
    }
}

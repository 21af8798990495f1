//! The shared elevation skeleton every biome runs.

use crate::island::IslandShape;
use crate::noise_field::{NoiseField, Octave};

/// A world sample together with its chunk-normalized coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplePoint {
    /// World X.
    pub x: f64,
    /// World Z.
    pub z: f64,
    /// X offset from the owning chunk's center, in `[-1, 1]`.
    pub nx: f64,
    /// Z offset from the owning chunk's center, in `[-1, 1]`.
    pub nz: f64,
}

/// Noise tuning applied uniformly to every biome.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseTuning {
    /// Scale applied to world coordinates before octave multipliers.
    pub base_frequency: f64,
    /// Exponent for ridge octaves.
    pub ridge_sharpness: f64,
}

/// Per-biome elevation formula parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElevationProfile {
    /// Weighted octave terms, summed and normalized by total weight.
    pub octaves: &'static [Octave],
    /// Optional sign-preserving shaping exponent.
    pub exponent: Option<f64>,
    /// Island edge shaping.
    pub shape: IslandShape,
}

impl ElevationProfile {
    /// Raw, unnormalized elevation (roughly `[-1.5, 1.5]` in the interior,
    /// lower near chunk edges).
    pub fn elevation(&self, noise: &NoiseField, p: &SamplePoint, tuning: &NoiseTuning) -> f64 {
        let f = tuning.base_frequency;
        let mut e = noise.fbm(self.octaves, p.x * f, p.z * f, tuning.ridge_sharpness);
        if let Some(exp) = self.exponent {
            e = e.signum() * libm::pow(e.abs(), exp);
        }
        self.shape.apply(e, p.nx, p.nz)
    }
}

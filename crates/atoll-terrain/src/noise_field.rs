//! Deterministic multi-channel simplex noise over the world's XZ plane.
//!
//! Each [`NoiseChannel`] owns its own simplex permutation seeded from a distinct
//! sub-seed, so channels are uncorrelated at the same coordinate. Composite
//! octave sums and ridged variants are built on top of the raw channels.

use noise::{NoiseFn, Simplex};

use crate::seed::Seed;

/// Sample coordinates at or beyond this magnitude are folded back toward the
/// origin so simplex lattice indices stay within `isize`.
const SAMPLE_LIMIT: f64 = 1_099_511_627_776.0;

fn fold(v: f64) -> f64 {
    if v.abs() < SAMPLE_LIMIT {
        v
    } else {
        v % SAMPLE_LIMIT
    }
}

/// Independent noise channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoiseChannel {
    /// Primary landmass shape.
    Elevation,
    /// Secondary detail (hills, dunes).
    Detail,
    /// Moisture field.
    Moisture,
    /// Extra channel used for ridges and domain-warped features.
    Warp,
}

impl NoiseChannel {
    /// All channels, in index order.
    pub const ALL: [NoiseChannel; 4] = [
        NoiseChannel::Elevation,
        NoiseChannel::Detail,
        NoiseChannel::Moisture,
        NoiseChannel::Warp,
    ];

    fn index(self) -> usize {
        match self {
            NoiseChannel::Elevation => 0,
            NoiseChannel::Detail => 1,
            NoiseChannel::Moisture => 2,
            NoiseChannel::Warp => 3,
        }
    }

    fn salt(self) -> u64 {
        0x6e6f_6973_6500_0000 | self.index() as u64
    }
}

/// One weighted term of an octave sum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Octave {
    /// Channel sampled by this term.
    pub channel: NoiseChannel,
    /// Multiplier applied to the (already base-scaled) coordinate.
    pub frequency: f64,
    /// Contribution weight.
    pub weight: f64,
    /// Sample ridge noise instead of plain noise.
    pub ridged: bool,
}

impl Octave {
    /// Plain noise term.
    pub const fn plain(channel: NoiseChannel, frequency: f64, weight: f64) -> Self {
        Self {
            channel,
            frequency,
            weight,
            ridged: false,
        }
    }

    /// Ridge noise term.
    pub const fn ridge(channel: NoiseChannel, frequency: f64, weight: f64) -> Self {
        Self {
            channel,
            frequency,
            weight,
            ridged: true,
        }
    }
}

/// Seeded multi-channel noise field. Pure: no sampling call mutates state.
pub struct NoiseField {
    channels: [Simplex; 4],
}

impl NoiseField {
    /// Build every channel from the world seed.
    pub fn new(seed: Seed) -> Self {
        let channels =
            NoiseChannel::ALL.map(|ch| Simplex::new(seed.derive(ch.salt()).value() as u32));
        Self { channels }
    }

    /// Raw noise in approximately `[-1, 1]`.
    pub fn noise(&self, channel: NoiseChannel, x: f64, z: f64) -> f64 {
        self.channels[channel.index()].get([fold(x), fold(z)])
    }

    /// Ridge noise in `[0, 1]`: `(1 - |noise|)^sharpness`.
    ///
    /// The base is clamped to zero first so fractional exponents never see a
    /// negative operand.
    pub fn ridge_noise(&self, channel: NoiseChannel, x: f64, z: f64, sharpness: f64) -> f64 {
        let base = (1.0 - self.noise(channel, x, z).abs()).max(0.0);
        libm::pow(base, sharpness)
    }

    /// Weighted average of the given octaves at `(x, z)`.
    ///
    /// Ridge terms are remapped from `[0, 1]` to `[-1, 1]` so every term shares
    /// the plain-noise range. Dividing by the weight sum keeps the output range
    /// independent of how many octaves a caller uses. Returns 0 when the
    /// weights sum to zero.
    pub fn fbm(&self, octaves: &[Octave], x: f64, z: f64, ridge_sharpness: f64) -> f64 {
        let mut total = 0.0;
        let mut weight_sum = 0.0;

        for octave in octaves {
            let fx = x * octave.frequency;
            let fz = z * octave.frequency;
            let sample = if octave.ridged {
                self.ridge_noise(octave.channel, fx, fz, ridge_sharpness) * 2.0 - 1.0
            } else {
                self.noise(octave.channel, fx, fz)
            };
            total += sample * octave.weight;
            weight_sum += octave.weight;
        }

        if weight_sum == 0.0 {
            0.0
        } else {
            total / weight_sum
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_same_seed_same_value() {
        let a = NoiseField::new(Seed::from_phrase("abc"));
        let b = NoiseField::new(Seed::from_phrase("abc"));
        for ch in NoiseChannel::ALL {
            let va = a.noise(ch, 12.3, -45.6);
            let vb = b.noise(ch, 12.3, -45.6);
            assert!((va - vb).abs() < EPSILON);
        }
    }

    #[test]
    fn test_channels_are_independent() {
        let field = NoiseField::new(Seed::from_u64(5));
        let mut identical = 0;
        for i in 0..50 {
            let x = i as f64 * 0.37 + 0.1;
            let e = field.noise(NoiseChannel::Elevation, x, x * 0.5);
            let m = field.noise(NoiseChannel::Moisture, x, x * 0.5);
            if (e - m).abs() < EPSILON {
                identical += 1;
            }
        }
        assert!(identical < 5, "channels look correlated ({identical} equal samples)");
    }

    #[test]
    fn test_far_coordinates_are_finite() {
        let field = NoiseField::new(Seed::from_u64(11));
        for x in [1e13, -1e13, 1e300, -1e300, f64::MAX] {
            let v = field.noise(NoiseChannel::Elevation, x, 0.5);
            assert!(v.is_finite() && v.abs() <= 1.05, "noise {v} at {x}");
        }
        assert_eq!(fold(-1234.5), -1234.5);
    }

    #[test]
    fn test_noise_range() {
        let field = NoiseField::new(Seed::from_u64(11));
        for i in 0..400 {
            let x = i as f64 * 0.173;
            let v = field.noise(NoiseChannel::Detail, x, -x * 1.3);
            assert!(v.abs() <= 1.05, "noise {v} out of range");
        }
    }

    #[test]
    fn test_ridge_range() {
        let field = NoiseField::new(Seed::from_u64(11));
        for sharpness in [0.5, 1.0, 2.0, 3.7] {
            for i in 0..200 {
                let x = i as f64 * 0.21;
                let r = field.ridge_noise(NoiseChannel::Warp, x, x * 0.7, sharpness);
                assert!(r.is_finite());
                assert!((0.0..=1.0).contains(&r), "ridge {r} out of range");
            }
        }
    }

    #[test]
    fn test_ridge_matches_definition() {
        let field = NoiseField::new(Seed::from_u64(3));
        let n = field.noise(NoiseChannel::Elevation, 1.5, 2.5);
        let expected = (1.0 - n.abs()).max(0.0).powf(2.0);
        let r = field.ridge_noise(NoiseChannel::Elevation, 1.5, 2.5, 2.0);
        assert!((r - expected).abs() < 1e-9);
    }

    #[test]
    fn test_fbm_is_weighted_average() {
        let field = NoiseField::new(Seed::from_u64(8));
        let octaves = [
            Octave::plain(NoiseChannel::Elevation, 1.0, 3.0),
            Octave::plain(NoiseChannel::Detail, 4.0, 1.0),
        ];
        let x = 0.4;
        let z = -1.2;
        let expected = (3.0 * field.noise(NoiseChannel::Elevation, x, z)
            + field.noise(NoiseChannel::Detail, x * 4.0, z * 4.0))
            / 4.0;
        assert!((field.fbm(&octaves, x, z, 2.0) - expected).abs() < EPSILON);
    }

    #[test]
    fn test_fbm_range_independent_of_octave_count() {
        let field = NoiseField::new(Seed::from_u64(8));
        let many = [
            Octave::plain(NoiseChannel::Elevation, 1.0, 1.0),
            Octave::plain(NoiseChannel::Elevation, 4.0, 0.5),
            Octave::plain(NoiseChannel::Detail, 8.0, 0.25),
            Octave::ridge(NoiseChannel::Warp, 32.0, 0.125),
        ];
        for i in 0..300 {
            let x = i as f64 * 0.11;
            let v = field.fbm(&many, x, x * 0.3, 2.0);
            assert!(v.abs() <= 1.05);
        }
    }

    #[test]
    fn test_fbm_zero_weight() {
        let field = NoiseField::new(Seed::from_u64(8));
        assert_eq!(field.fbm(&[], 1.0, 1.0, 2.0), 0.0);
        let zero = [Octave::plain(NoiseChannel::Elevation, 1.0, 0.0)];
        assert_eq!(field.fbm(&zero, 1.0, 1.0, 2.0), 0.0);
    }
}

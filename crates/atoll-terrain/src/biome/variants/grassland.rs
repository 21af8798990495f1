//! Grassland: rolling round islands of meadow and woodland.

use crate::biome::profile::ElevationProfile;
use crate::biome::sub_biome::{ClassifyContext, Organism, SubBiome, common_bands};
use crate::color::Color;
use crate::island::{DistanceMetric, IslandShape};
use crate::noise_field::NoiseChannel::{Detail, Elevation};
use crate::noise_field::Octave;

pub(crate) static PROFILE: ElevationProfile = ElevationProfile {
    octaves: &[
        Octave::plain(Elevation, 1.0, 1.0),
        Octave::plain(Elevation, 4.0, 0.5),
        Octave::plain(Detail, 8.0, 0.25),
        Octave::plain(Detail, 32.0, 0.06),
    ],
    exponent: Some(1.2),
    shape: IslandShape {
        a: 1.1,
        b: 2.5,
        c: 2.2,
        metric: DistanceMetric::Euclidean,
    },
};

static MEADOW: SubBiome = SubBiome {
    name: "grassland.meadow",
    color: Color::from_hex(0x7cb342),
    organisms: &[
        Organism::new("rabbit", 4.0),
        Organism::new("deer", 2.0),
        Organism::new("butterfly", 3.0),
    ],
};

static WOODLAND: SubBiome = SubBiome {
    name: "grassland.woodland",
    color: Color::from_hex(0x33691e),
    organisms: &[
        Organism::new("oak", 5.0),
        Organism::new("fox", 1.0),
        Organism::new("owl", 1.0),
    ],
};

static HIGHLAND: SubBiome = SubBiome {
    name: "grassland.highland",
    color: Color::from_hex(0x8d8d6a),
    organisms: &[Organism::new("goat", 2.0), Organism::new("heather", 3.0)],
};

pub(crate) fn classify(ctx: &ClassifyContext, e: f64, m: f64, jitter: f64) -> &'static SubBiome {
    if let Some(band) = common_bands(ctx, e, 2.0) {
        return band;
    }
    if ctx.relative(e) + jitter > 0.6 {
        &HIGHLAND
    } else if m + jitter > 0.55 {
        &WOODLAND
    } else {
        &MEADOW
    }
}

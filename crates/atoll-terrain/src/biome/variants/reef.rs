//! Reef: a small central cay ringed by wide shallow coral.
//!
//! The linear knee (`b = 1`) starts sinking right away, so most of the tile sits
//! just under the surface. Shallow water is classified as coral before the
//! shared bands get a say.

use crate::biome::profile::ElevationProfile;
use crate::biome::sub_biome::{ClassifyContext, Organism, SubBiome, common_bands};
use crate::color::Color;
use crate::island::{DistanceMetric, IslandShape};
use crate::noise_field::NoiseChannel::{Detail, Elevation};
use crate::noise_field::Octave;

pub(crate) static PROFILE: ElevationProfile = ElevationProfile {
    octaves: &[
        Octave::plain(Elevation, 1.0, 1.0),
        Octave::plain(Detail, 8.0, 0.3),
    ],
    exponent: None,
    shape: IslandShape {
        a: 0.6,
        b: 1.0,
        c: 2.5,
        metric: DistanceMetric::Euclidean,
    },
};

static CORAL_GARDEN: SubBiome = SubBiome {
    name: "reef.coral_garden",
    color: Color::from_hex(0xf08a7e),
    organisms: &[
        Organism::new("clownfish", 4.0),
        Organism::new("sea_turtle", 1.0),
        Organism::new("brain_coral", 3.0),
        Organism::new("reef_shark", 0.3),
    ],
};

static SANDBAR: SubBiome = SubBiome {
    name: "reef.sandbar",
    color: Color::from_hex(0xeadbb0),
    organisms: &[Organism::new("tern", 2.0), Organism::new("ghost_crab", 2.0)],
};

static PALM_CAY: SubBiome = SubBiome {
    name: "reef.palm_cay",
    color: Color::from_hex(0x7fbf5a),
    organisms: &[Organism::new("coconut_palm", 3.0), Organism::new("iguana", 1.0)],
};

/// Depth (below sea level, world units) down to which coral grows.
const CORAL_DEPTH: f64 = 8.0;

pub(crate) fn classify(ctx: &ClassifyContext, e: f64, m: f64, jitter: f64) -> &'static SubBiome {
    if ctx.submerged(e) && e > ctx.sea_level - CORAL_DEPTH * (1.0 + jitter) {
        return &CORAL_GARDEN;
    }
    if let Some(band) = common_bands(ctx, e, 0.5) {
        return band;
    }
    if m + jitter > 0.5 {
        &PALM_CAY
    } else {
        &SANDBAR
    }
}

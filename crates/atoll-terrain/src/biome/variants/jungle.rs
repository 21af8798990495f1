//! Jungle: tall, round islands with a sharp coastal knee.

use crate::biome::profile::ElevationProfile;
use crate::biome::sub_biome::{ClassifyContext, Organism, SubBiome, common_bands};
use crate::color::Color;
use crate::island::{DistanceMetric, IslandShape};
use crate::noise_field::NoiseChannel::{Detail, Elevation, Warp};
use crate::noise_field::Octave;

pub(crate) static PROFILE: ElevationProfile = ElevationProfile {
    octaves: &[
        Octave::plain(Elevation, 1.0, 1.0),
        Octave::plain(Detail, 4.0, 0.6),
        Octave::ridge(Warp, 8.0, 0.3),
        Octave::plain(Detail, 32.0, 0.08),
    ],
    exponent: None,
    shape: IslandShape {
        a: 1.2,
        b: 3.5,
        c: 2.4,
        metric: DistanceMetric::Euclidean,
    },
};

static CANOPY: SubBiome = SubBiome {
    name: "jungle.canopy",
    color: Color::from_hex(0x1b5e20),
    organisms: &[
        Organism::new("kapok", 4.0),
        Organism::new("toucan", 2.0),
        Organism::new("jaguar", 0.5),
        Organism::new("tree_frog", 2.0),
    ],
};

static BAMBOO_GROVE: SubBiome = SubBiome {
    name: "jungle.bamboo_grove",
    color: Color::from_hex(0x689f38),
    organisms: &[Organism::new("bamboo", 5.0), Organism::new("panda", 0.5)],
};

static MISTY_RIDGE: SubBiome = SubBiome {
    name: "jungle.misty_ridge",
    color: Color::from_hex(0x5d7d6a),
    organisms: &[Organism::new("orchid", 2.0), Organism::new("gibbon", 1.0)],
};

pub(crate) fn classify(ctx: &ClassifyContext, e: f64, m: f64, jitter: f64) -> &'static SubBiome {
    if let Some(band) = common_bands(ctx, e, 1.5) {
        return band;
    }
    if ctx.relative(e) + jitter > 0.55 {
        &MISTY_RIDGE
    } else if m + jitter > 0.4 {
        &CANOPY
    } else {
        &BAMBOO_GROVE
    }
}

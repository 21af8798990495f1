//! Tundra: angular, low-relief islands under permafrost.

use crate::biome::profile::ElevationProfile;
use crate::biome::sub_biome::{ClassifyContext, Organism, SubBiome, common_bands};
use crate::color::Color;
use crate::island::{DistanceMetric, IslandShape};
use crate::noise_field::NoiseChannel::{Detail, Elevation, Warp};
use crate::noise_field::Octave;

pub(crate) static PROFILE: ElevationProfile = ElevationProfile {
    octaves: &[
        Octave::plain(Elevation, 1.0, 1.0),
        Octave::plain(Warp, 4.0, 0.35),
        Octave::plain(Detail, 32.0, 0.1),
    ],
    exponent: Some(1.5),
    shape: IslandShape {
        a: 1.0,
        b: 2.0,
        c: 2.0,
        metric: DistanceMetric::Manhattan,
    },
};

static PERMAFROST: SubBiome = SubBiome {
    name: "tundra.permafrost",
    color: Color::from_hex(0xb9c3b0),
    organisms: &[
        Organism::new("lichen", 5.0),
        Organism::new("caribou", 1.5),
        Organism::new("arctic_fox", 1.0),
    ],
};

static FROZEN_BOG: SubBiome = SubBiome {
    name: "tundra.frozen_bog",
    color: Color::from_hex(0x8ea39a),
    organisms: &[Organism::new("cotton_grass", 4.0), Organism::new("ptarmigan", 1.0)],
};

static GLACIER: SubBiome = SubBiome {
    name: "tundra.glacier",
    color: Color::from_hex(0xe8f1f5),
    organisms: &[Organism::new("snow_owl", 1.0)],
};

pub(crate) fn classify(ctx: &ClassifyContext, e: f64, m: f64, jitter: f64) -> &'static SubBiome {
    if let Some(band) = common_bands(ctx, e, 1.5) {
        return band;
    }
    if ctx.relative(e) + jitter > 0.45 {
        &GLACIER
    } else if m + jitter > 0.6 {
        &FROZEN_BOG
    } else {
        &PERMAFROST
    }
}

//! Desert: ridged dunes on broad, gently falling islands.

use crate::biome::profile::ElevationProfile;
use crate::biome::sub_biome::{ClassifyContext, Organism, SubBiome, common_bands};
use crate::color::Color;
use crate::island::{DistanceMetric, IslandShape};
use crate::noise_field::NoiseChannel::{Detail, Elevation};
use crate::noise_field::Octave;

pub(crate) static PROFILE: ElevationProfile = ElevationProfile {
    octaves: &[
        Octave::plain(Elevation, 1.0, 1.0),
        Octave::ridge(Detail, 4.0, 0.45),
        Octave::ridge(Detail, 8.0, 0.2),
    ],
    exponent: None,
    shape: IslandShape {
        a: 0.9,
        b: 3.0,
        c: 1.8,
        metric: DistanceMetric::Euclidean,
    },
};

static DUNES: SubBiome = SubBiome {
    name: "desert.dunes",
    color: Color::from_hex(0xe6c27a),
    organisms: &[Organism::new("scorpion", 2.0), Organism::new("beetle", 3.0)],
};

static OASIS: SubBiome = SubBiome {
    name: "desert.oasis",
    color: Color::from_hex(0x6b9e4a),
    organisms: &[
        Organism::new("date_palm", 4.0),
        Organism::new("camel", 1.0),
        Organism::new("dragonfly", 2.0),
    ],
};

static ROCKY_FLATS: SubBiome = SubBiome {
    name: "desert.rocky_flats",
    color: Color::from_hex(0xa0785a),
    organisms: &[Organism::new("lizard", 3.0), Organism::new("vulture", 1.0)],
};

pub(crate) fn classify(ctx: &ClassifyContext, e: f64, m: f64, jitter: f64) -> &'static SubBiome {
    if let Some(band) = common_bands(ctx, e, 3.0) {
        return band;
    }
    if m + jitter > 0.7 {
        &OASIS
    } else if ctx.relative(e) + jitter > 0.5 {
        &ROCKY_FLATS
    } else {
        &DUNES
    }
}

//! Savanna: flat, angular grassland islands with scattered rock outcrops.

use crate::biome::profile::ElevationProfile;
use crate::biome::sub_biome::{ClassifyContext, Organism, SubBiome, common_bands};
use crate::color::Color;
use crate::island::{DistanceMetric, IslandShape};
use crate::noise_field::NoiseChannel::{Detail, Elevation};
use crate::noise_field::Octave;

pub(crate) static PROFILE: ElevationProfile = ElevationProfile {
    octaves: &[
        Octave::plain(Elevation, 1.0, 1.0),
        Octave::plain(Elevation, 4.0, 0.25),
        Octave::ridge(Detail, 32.0, 0.08),
    ],
    exponent: Some(1.3),
    shape: IslandShape {
        a: 1.0,
        b: 3.0,
        c: 2.0,
        metric: DistanceMetric::Manhattan,
    },
};

static GRASS_PLAIN: SubBiome = SubBiome {
    name: "savanna.grass_plain",
    color: Color::from_hex(0xc9b458),
    organisms: &[
        Organism::new("zebra", 3.0),
        Organism::new("gazelle", 3.0),
        Organism::new("lion", 0.5),
    ],
};

static ACACIA_SCRUB: SubBiome = SubBiome {
    name: "savanna.acacia_scrub",
    color: Color::from_hex(0x9a9a3c),
    organisms: &[Organism::new("acacia", 4.0), Organism::new("giraffe", 1.0)],
};

static KOPJE: SubBiome = SubBiome {
    name: "savanna.kopje",
    color: Color::from_hex(0x9c8a74),
    organisms: &[Organism::new("hyrax", 2.0), Organism::new("leopard", 0.3)],
};

pub(crate) fn classify(ctx: &ClassifyContext, e: f64, m: f64, jitter: f64) -> &'static SubBiome {
    if let Some(band) = common_bands(ctx, e, 2.0) {
        return band;
    }
    if ctx.relative(e) + jitter > 0.5 {
        &KOPJE
    } else if m + jitter > 0.45 {
        &ACACIA_SCRUB
    } else {
        &GRASS_PLAIN
    }
}

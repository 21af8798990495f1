//! Swamp: low, squashed islands barely above the waterline.

use crate::biome::profile::ElevationProfile;
use crate::biome::sub_biome::{ClassifyContext, Organism, SubBiome, common_bands};
use crate::color::Color;
use crate::island::{DistanceMetric, IslandShape};
use crate::noise_field::NoiseChannel::{Detail, Elevation};
use crate::noise_field::Octave;

pub(crate) static PROFILE: ElevationProfile = ElevationProfile {
    octaves: &[
        Octave::plain(Elevation, 1.0, 1.0),
        Octave::plain(Detail, 8.0, 0.4),
    ],
    exponent: Some(2.0),
    shape: IslandShape {
        a: 0.7,
        b: 2.5,
        c: 1.6,
        metric: DistanceMetric::Euclidean,
    },
};

static MARSH: SubBiome = SubBiome {
    name: "swamp.marsh",
    color: Color::from_hex(0x55723f),
    organisms: &[
        Organism::new("reed", 5.0),
        Organism::new("frog", 3.0),
        Organism::new("alligator", 0.5),
    ],
};

static MANGROVE: SubBiome = SubBiome {
    name: "swamp.mangrove",
    color: Color::from_hex(0x3e5a34),
    organisms: &[Organism::new("mangrove", 4.0), Organism::new("mudskipper", 2.0)],
};

static BOG: SubBiome = SubBiome {
    name: "swamp.bog",
    color: Color::from_hex(0x6d6247),
    organisms: &[Organism::new("sphagnum", 4.0), Organism::new("heron", 1.0)],
};

pub(crate) fn classify(ctx: &ClassifyContext, e: f64, m: f64, jitter: f64) -> &'static SubBiome {
    if let Some(band) = common_bands(ctx, e, 0.5) {
        return band;
    }
    if ctx.relative(e) + jitter < 0.1 {
        &MANGROVE
    } else if m + jitter > 0.5 {
        &MARSH
    } else {
        &BOG
    }
}

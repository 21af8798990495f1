//! Volcanic: a dominant ridged cone that dives steeply into the sea.

use crate::biome::profile::ElevationProfile;
use crate::biome::sub_biome::{ClassifyContext, Organism, SubBiome, common_bands};
use crate::color::Color;
use crate::island::{DistanceMetric, IslandShape};
use crate::noise_field::NoiseChannel::{Detail, Elevation, Warp};
use crate::noise_field::Octave;

pub(crate) static PROFILE: ElevationProfile = ElevationProfile {
    octaves: &[
        Octave::ridge(Warp, 1.0, 1.0),
        Octave::plain(Elevation, 4.0, 0.4),
        Octave::ridge(Detail, 8.0, 0.25),
        Octave::plain(Detail, 32.0, 0.05),
    ],
    exponent: None,
    shape: IslandShape {
        a: 1.5,
        b: 2.0,
        c: 2.8,
        metric: DistanceMetric::Euclidean,
    },
};

static ASH_PLAIN: SubBiome = SubBiome {
    name: "volcanic.ash_plain",
    color: Color::from_hex(0x5a5a5a),
    organisms: &[Organism::new("fern", 2.0), Organism::new("salamander", 1.0)],
};

static LAVA_FIELD: SubBiome = SubBiome {
    name: "volcanic.lava_field",
    color: Color::from_hex(0x3b2a26),
    organisms: &[],
};

static CALDERA: SubBiome = SubBiome {
    name: "volcanic.caldera",
    color: Color::from_hex(0x8a3324),
    organisms: &[Organism::new("sulfur_bacteria", 1.0)],
};

pub(crate) fn classify(ctx: &ClassifyContext, e: f64, m: f64, jitter: f64) -> &'static SubBiome {
    if let Some(band) = common_bands(ctx, e, 1.0) {
        return band;
    }
    if ctx.relative(e) + jitter > 0.7 {
        &CALDERA
    } else if m + jitter < 0.3 {
        &LAVA_FIELD
    } else {
        &ASH_PLAIN
    }
}

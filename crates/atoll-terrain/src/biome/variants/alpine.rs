//! Alpine: ridged mountain islands that pierce the cloud layer.

use crate::biome::profile::ElevationProfile;
use crate::biome::sub_biome::{ClassifyContext, Organism, SubBiome, common_bands};
use crate::color::Color;
use crate::island::{DistanceMetric, IslandShape};
use crate::noise_field::NoiseChannel::{Detail, Elevation, Warp};
use crate::noise_field::Octave;

pub(crate) static PROFILE: ElevationProfile = ElevationProfile {
    octaves: &[
        Octave::plain(Elevation, 1.0, 0.8),
        Octave::ridge(Warp, 4.0, 1.0),
        Octave::ridge(Warp, 8.0, 0.4),
        Octave::plain(Detail, 32.0, 0.06),
    ],
    exponent: None,
    shape: IslandShape {
        a: 1.6,
        b: 3.0,
        c: 3.0,
        metric: DistanceMetric::Euclidean,
    },
};

static PINE_FOREST: SubBiome = SubBiome {
    name: "alpine.pine_forest",
    color: Color::from_hex(0x2e5339),
    organisms: &[
        Organism::new("pine", 5.0),
        Organism::new("elk", 1.0),
        Organism::new("squirrel", 2.0),
    ],
};

static ALPINE_MEADOW: SubBiome = SubBiome {
    name: "alpine.meadow",
    color: Color::from_hex(0x8fae5d),
    organisms: &[Organism::new("edelweiss", 2.0), Organism::new("marmot", 2.0)],
};

static SCREE: SubBiome = SubBiome {
    name: "alpine.scree",
    color: Color::from_hex(0x8a8780),
    organisms: &[Organism::new("ibex", 1.0)],
};

pub(crate) fn classify(ctx: &ClassifyContext, e: f64, m: f64, jitter: f64) -> &'static SubBiome {
    if let Some(band) = common_bands(ctx, e, 1.0) {
        return band;
    }
    if ctx.relative(e) + jitter > 0.6 {
        &SCREE
    } else if m + jitter > 0.5 {
        &ALPINE_MEADOW
    } else {
        &PINE_FOREST
    }
}

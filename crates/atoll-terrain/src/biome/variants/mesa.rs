//! Mesa: plateaus with abrupt cliffs and squared-off coasts.
//!
//! An exponent below one pushes mid values outward, flattening tops into
//! plateaus; the steep knee produces cliff-like island edges.

use crate::biome::profile::ElevationProfile;
use crate::biome::sub_biome::{ClassifyContext, Organism, SubBiome, common_bands};
use crate::color::Color;
use crate::island::{DistanceMetric, IslandShape};
use crate::noise_field::NoiseChannel::{Detail, Elevation};
use crate::noise_field::Octave;

pub(crate) static PROFILE: ElevationProfile = ElevationProfile {
    octaves: &[
        Octave::plain(Elevation, 1.0, 1.0),
        Octave::plain(Elevation, 4.0, 0.3),
        Octave::plain(Detail, 32.0, 0.05),
    ],
    exponent: Some(0.6),
    shape: IslandShape {
        a: 1.3,
        b: 4.0,
        c: 2.6,
        metric: DistanceMetric::Manhattan,
    },
};

static BADLANDS: SubBiome = SubBiome {
    name: "mesa.badlands",
    color: Color::from_hex(0xc1664a),
    organisms: &[Organism::new("sagebrush", 3.0), Organism::new("coyote", 1.0)],
};

static CANYON_FLOOR: SubBiome = SubBiome {
    name: "mesa.canyon_floor",
    color: Color::from_hex(0x9e5b40),
    organisms: &[Organism::new("cottonwood", 2.0), Organism::new("rattlesnake", 1.0)],
};

static BUTTE_TOP: SubBiome = SubBiome {
    name: "mesa.butte_top",
    color: Color::from_hex(0xd99a6c),
    organisms: &[Organism::new("condor", 1.0), Organism::new("juniper", 2.0)],
};

pub(crate) fn classify(ctx: &ClassifyContext, e: f64, m: f64, jitter: f64) -> &'static SubBiome {
    if let Some(band) = common_bands(ctx, e, 1.0) {
        return band;
    }
    let h = ctx.relative(e) + jitter;
    if h > 0.5 {
        &BUTTE_TOP
    } else if h < 0.2 && m + jitter > 0.3 {
        &CANYON_FLOOR
    } else {
        &BADLANDS
    }
}

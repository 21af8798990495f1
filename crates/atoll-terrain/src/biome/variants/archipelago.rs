//! Archipelago: bumpy diamond-shaped tiles that break into islets.

use crate::biome::profile::ElevationProfile;
use crate::biome::sub_biome::{ClassifyContext, Organism, SubBiome, common_bands};
use crate::color::Color;
use crate::island::{DistanceMetric, IslandShape};
use crate::noise_field::NoiseChannel::{Detail, Elevation};
use crate::noise_field::Octave;

pub(crate) static PROFILE: ElevationProfile = ElevationProfile {
    octaves: &[
        Octave::plain(Elevation, 1.0, 0.6),
        Octave::plain(Detail, 4.0, 1.0),
        Octave::plain(Detail, 8.0, 0.5),
    ],
    exponent: None,
    shape: IslandShape {
        a: 1.0,
        b: 1.4,
        c: 1.9,
        metric: DistanceMetric::Manhattan,
    },
};

static PALM_ISLET: SubBiome = SubBiome {
    name: "archipelago.palm_islet",
    color: Color::from_hex(0x9ccc65),
    organisms: &[
        Organism::new("coconut_palm", 4.0),
        Organism::new("hermit_crab", 2.0),
        Organism::new("parrot", 1.0),
    ],
};

static LAGOON_FLATS: SubBiome = SubBiome {
    name: "archipelago.lagoon_flats",
    color: Color::from_hex(0xc5d89d),
    organisms: &[Organism::new("heron", 2.0), Organism::new("mangrove", 3.0)],
};

static CORAL_RISE: SubBiome = SubBiome {
    name: "archipelago.coral_rise",
    color: Color::from_hex(0xbfa58a),
    organisms: &[Organism::new("frigatebird", 1.0)],
};

pub(crate) fn classify(ctx: &ClassifyContext, e: f64, m: f64, jitter: f64) -> &'static SubBiome {
    if let Some(band) = common_bands(ctx, e, 2.5) {
        return band;
    }
    if ctx.relative(e) + jitter > 0.5 {
        &CORAL_RISE
    } else if m + jitter > 0.6 {
        &LAGOON_FLATS
    } else {
        &PALM_ISLET
    }
}

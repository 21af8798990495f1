//! Tagged biome variants and their dispatch.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::profile::{ElevationProfile, NoiseTuning, SamplePoint};
use super::sub_biome::{ClassifyContext, SubBiome};
use super::variants::{
    alpine, archipelago, desert, grassland, jungle, mesa, reef, savanna, swamp, tundra, volcanic,
};
use crate::noise_field::NoiseField;

/// Identifier of one of the eleven biome variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiomeKind {
    Grassland,
    Desert,
    Tundra,
    Jungle,
    Archipelago,
    Mesa,
    Volcanic,
    Swamp,
    Alpine,
    Savanna,
    Reef,
}

impl BiomeKind {
    /// Every variant.
    pub const ALL: [BiomeKind; 11] = [
        BiomeKind::Grassland,
        BiomeKind::Desert,
        BiomeKind::Tundra,
        BiomeKind::Jungle,
        BiomeKind::Archipelago,
        BiomeKind::Mesa,
        BiomeKind::Volcanic,
        BiomeKind::Swamp,
        BiomeKind::Alpine,
        BiomeKind::Savanna,
        BiomeKind::Reef,
    ];

    /// Stable lowercase name used by configuration tables.
    pub const fn name(self) -> &'static str {
        match self {
            BiomeKind::Grassland => "grassland",
            BiomeKind::Desert => "desert",
            BiomeKind::Tundra => "tundra",
            BiomeKind::Jungle => "jungle",
            BiomeKind::Archipelago => "archipelago",
            BiomeKind::Mesa => "mesa",
            BiomeKind::Volcanic => "volcanic",
            BiomeKind::Swamp => "swamp",
            BiomeKind::Alpine => "alpine",
            BiomeKind::Savanna => "savanna",
            BiomeKind::Reef => "reef",
        }
    }

    /// Look a variant up by its [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Elevation personality of this variant.
    pub fn profile(self) -> &'static ElevationProfile {
        match self {
            BiomeKind::Grassland => &grassland::PROFILE,
            BiomeKind::Desert => &desert::PROFILE,
            BiomeKind::Tundra => &tundra::PROFILE,
            BiomeKind::Jungle => &jungle::PROFILE,
            BiomeKind::Archipelago => &archipelago::PROFILE,
            BiomeKind::Mesa => &mesa::PROFILE,
            BiomeKind::Volcanic => &volcanic::PROFILE,
            BiomeKind::Swamp => &swamp::PROFILE,
            BiomeKind::Alpine => &alpine::PROFILE,
            BiomeKind::Savanna => &savanna::PROFILE,
            BiomeKind::Reef => &reef::PROFILE,
        }
    }

    /// Raw elevation at a sample point.
    pub fn compute_elevation_at(
        self,
        noise: &NoiseField,
        point: &SamplePoint,
        tuning: &NoiseTuning,
    ) -> f64 {
        self.profile().elevation(noise, point, tuning)
    }

    /// Sub-biome for world height `e` and moisture `m`, with thresholds
    /// shifted by `jitter`.
    pub fn parameters_at(
        self,
        ctx: &ClassifyContext,
        e: f64,
        m: f64,
        jitter: f64,
    ) -> &'static SubBiome {
        match self {
            BiomeKind::Grassland => grassland::classify(ctx, e, m, jitter),
            BiomeKind::Desert => desert::classify(ctx, e, m, jitter),
            BiomeKind::Tundra => tundra::classify(ctx, e, m, jitter),
            BiomeKind::Jungle => jungle::classify(ctx, e, m, jitter),
            BiomeKind::Archipelago => archipelago::classify(ctx, e, m, jitter),
            BiomeKind::Mesa => mesa::classify(ctx, e, m, jitter),
            BiomeKind::Volcanic => volcanic::classify(ctx, e, m, jitter),
            BiomeKind::Swamp => swamp::classify(ctx, e, m, jitter),
            BiomeKind::Alpine => alpine::classify(ctx, e, m, jitter),
            BiomeKind::Savanna => savanna::classify(ctx, e, m, jitter),
            BiomeKind::Reef => reef::classify(ctx, e, m, jitter),
        }
    }
}

impl fmt::Display for BiomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::Seed;

    const CTX: ClassifyContext = ClassifyContext {
        sea_level: 0.0,
        cloud_elevation: 80.0,
    };

    const TUNING: NoiseTuning = NoiseTuning {
        base_frequency: 0.008,
        ridge_sharpness: 2.0,
    };

    #[test]
    fn test_names_round_trip() {
        for kind in BiomeKind::ALL {
            assert_eq!(BiomeKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(BiomeKind::from_name("ocean"), None);
    }

    #[test]
    fn test_every_variant_has_octaves_and_sinking_edges() {
        for kind in BiomeKind::ALL {
            let p = kind.profile();
            assert!(!p.octaves.is_empty(), "{kind} has no octaves");
            assert!(p.shape.c > 0.0, "{kind} edges never sink");
        }
    }

    #[test]
    fn test_elevation_deterministic() {
        let a = NoiseField::new(Seed::from_phrase("abc"));
        let b = NoiseField::new(Seed::from_phrase("abc"));
        let point = SamplePoint {
            x: 123.0,
            z: -77.5,
            nx: 0.2,
            nz: -0.4,
        };
        for kind in BiomeKind::ALL {
            assert_eq!(
                kind.compute_elevation_at(&a, &point, &TUNING),
                kind.compute_elevation_at(&b, &point, &TUNING)
            );
        }
    }

    #[test]
    fn test_corner_below_sea_for_every_variant() {
        // Raw -0.5 is sea level with the stock height range.
        let noise = NoiseField::new(Seed::from_u64(99));
        for kind in BiomeKind::ALL {
            for i in 0..20 {
                let point = SamplePoint {
                    x: i as f64 * 31.0,
                    z: i as f64 * 17.0,
                    nx: 1.0,
                    nz: 1.0,
                };
                let e = kind.compute_elevation_at(&noise, &point, &TUNING);
                assert!(e < -0.5, "{kind} corner at {e} is above sea level");
            }
        }
    }

    #[test]
    fn test_deep_water_is_shared() {
        for kind in BiomeKind::ALL {
            let sub = kind.parameters_at(&CTX, -60.0, 0.5, 0.0);
            assert_eq!(sub.name, "common.deep_water", "{kind}");
        }
    }

    #[test]
    fn test_reef_shallows_are_coral() {
        let sub = BiomeKind::Reef.parameters_at(&CTX, -2.0, 0.5, 0.0);
        assert_eq!(sub.name, "reef.coral_garden");
    }

    #[test]
    fn test_grassland_thresholds() {
        let g = BiomeKind::Grassland;
        assert_eq!(g.parameters_at(&CTX, 20.0, 0.2, 0.0).name, "grassland.meadow");
        assert_eq!(g.parameters_at(&CTX, 20.0, 0.8, 0.0).name, "grassland.woodland");
        assert_eq!(g.parameters_at(&CTX, 60.0, 0.8, 0.0).name, "grassland.highland");
        assert_eq!(g.parameters_at(&CTX, 90.0, 0.8, 0.0).name, "common.cloud_peak");
    }

    #[test]
    fn test_jitter_moves_boundary() {
        let g = BiomeKind::Grassland;
        // Just under the woodland moisture threshold.
        assert_eq!(g.parameters_at(&CTX, 20.0, 0.54, 0.0).name, "grassland.meadow");
        assert_eq!(g.parameters_at(&CTX, 20.0, 0.54, 0.02).name, "grassland.woodland");
    }

    #[test]
    fn test_classification_is_pure() {
        for kind in BiomeKind::ALL {
            for &e in &[-50.0, -1.0, 1.0, 25.0, 55.0, 100.0] {
                for &m in &[0.0, 0.3, 0.6, 1.0] {
                    let a = kind.parameters_at(&CTX, e, m, 0.01);
                    let b = kind.parameters_at(&CTX, e, m, 0.01);
                    assert!(std::ptr::eq(a, b));
                }
            }
        }
    }
}

//! Sub-biome descriptors chosen by biome classification.

use crate::color::Color;

/// An organism that may spawn in a sub-biome, with its relative weight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Organism {
    pub name: &'static str,
    pub weight: f64,
}

impl Organism {
    pub const fn new(name: &'static str, weight: f64) -> Self {
        Self { name, weight }
    }
}

/// Display color plus weighted organism list for one classified region.
#[derive(Debug, PartialEq)]
pub struct SubBiome {
    /// Stable identifier (e.g. `"grassland.meadow"`).
    pub name: &'static str,
    /// Tint blended into the surface color.
    pub color: Color,
    /// Organisms that spawn here; may be empty.
    pub organisms: &'static [Organism],
}

impl SubBiome {
    /// Pick an organism using a uniform draw in `[0, 1)`.
    ///
    /// Returns `None` when the sub-biome has no organisms.
    pub fn pick_organism(&self, draw: f64) -> Option<&'static str> {
        let total: f64 = self.organisms.iter().map(|o| o.weight).sum();
        if self.organisms.is_empty() || total <= 0.0 {
            return None;
        }
        let target = draw.clamp(0.0, 1.0) * total;
        let mut cumulative = 0.0;
        for organism in self.organisms {
            cumulative += organism.weight;
            if target < cumulative {
                return Some(organism.name);
            }
        }
        self.organisms.last().map(|o| o.name)
    }
}

/// World constants that classification thresholds are expressed against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassifyContext {
    /// Water surface height.
    pub sea_level: f64,
    /// Cloud layer height.
    pub cloud_elevation: f64,
}

impl ClassifyContext {
    /// Position of `e` between sea level (0) and the cloud layer (1).
    pub fn relative(&self, e: f64) -> f64 {
        let span = self.cloud_elevation - self.sea_level;
        if span <= 0.0 {
            return 0.0;
        }
        (e - self.sea_level) / span
    }

    /// `true` when `e` is under water.
    pub fn submerged(&self, e: f64) -> bool {
        e < self.sea_level
    }
}

// Sub-biomes shared by several variants.

pub static DEEP_WATER: SubBiome = SubBiome {
    name: "common.deep_water",
    color: Color::from_hex(0x1d3b5c),
    organisms: &[
        Organism::new("tuna", 3.0),
        Organism::new("jellyfish", 2.0),
        Organism::new("whale", 0.2),
    ],
};

pub static SHALLOWS: SubBiome = SubBiome {
    name: "common.shallows",
    color: Color::from_hex(0x4f8fa6),
    organisms: &[
        Organism::new("sardine", 5.0),
        Organism::new("crab", 2.0),
        Organism::new("seaweed", 3.0),
    ],
};

pub static BEACH: SubBiome = SubBiome {
    name: "common.beach",
    color: Color::from_hex(0xd8c690),
    organisms: &[Organism::new("crab", 3.0), Organism::new("gull", 2.0)],
};

pub static CLOUD_PEAK: SubBiome = SubBiome {
    name: "common.cloud_peak",
    color: Color::from_hex(0xf2f4f7),
    organisms: &[Organism::new("eagle", 1.0)],
};

/// Shared water/shore/peak bands; returns `None` for the biome-specific middle.
///
/// `shore` is the beach band height above sea level, in world units.
pub(crate) fn common_bands(
    ctx: &ClassifyContext,
    e: f64,
    shore: f64,
) -> Option<&'static SubBiome> {
    if e < ctx.sea_level - shore * 4.0 {
        Some(&DEEP_WATER)
    } else if ctx.submerged(e) {
        Some(&SHALLOWS)
    } else if e < ctx.sea_level + shore {
        Some(&BEACH)
    } else if e >= ctx.cloud_elevation {
        Some(&CLOUD_PEAK)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CTX: ClassifyContext = ClassifyContext {
        sea_level: 0.0,
        cloud_elevation: 80.0,
    };

    #[test]
    fn test_pick_organism_by_weight() {
        // crab 3/5, gull 2/5
        assert_eq!(BEACH.pick_organism(0.0), Some("crab"));
        assert_eq!(BEACH.pick_organism(0.59), Some("crab"));
        assert_eq!(BEACH.pick_organism(0.61), Some("gull"));
        assert_eq!(BEACH.pick_organism(0.999), Some("gull"));
    }

    #[test]
    fn test_pick_organism_empty() {
        static BARE: SubBiome = SubBiome {
            name: "test.bare",
            color: Color::rgb(0.0, 0.0, 0.0),
            organisms: &[],
        };
        assert_eq!(BARE.pick_organism(0.5), None);
    }

    #[test]
    fn test_relative_height() {
        assert_eq!(CTX.relative(0.0), 0.0);
        assert_eq!(CTX.relative(40.0), 0.5);
        assert_eq!(CTX.relative(80.0), 1.0);
    }

    #[test]
    fn test_common_bands() {
        assert_eq!(common_bands(&CTX, -30.0, 2.0).map(|s| s.name), Some("common.deep_water"));
        assert_eq!(common_bands(&CTX, -1.0, 2.0).map(|s| s.name), Some("common.shallows"));
        assert_eq!(common_bands(&CTX, 1.0, 2.0).map(|s| s.name), Some("common.beach"));
        assert_eq!(common_bands(&CTX, 85.0, 2.0).map(|s| s.name), Some("common.cloud_peak"));
        assert!(common_bands(&CTX, 30.0, 2.0).is_none());
    }
}

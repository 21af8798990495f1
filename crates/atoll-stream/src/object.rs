//! Objects placed on the terrain and their placement rules.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where an object is allowed to sit relative to the water surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementRule {
    /// Rests on dry land: the ground must be above sea level.
    Ground,
    /// Floats on the water: the ground must be at or below sea level.
    Floating,
    /// Fully submerged: the ground plus the object's radius must be at or
    /// below sea level.
    Underwater,
}

impl PlacementRule {
    /// Whether an object of `radius` may sit on ground height `ground`.
    pub fn admits(self, ground: f64, radius: f64, sea_level: f64) -> bool {
        match self {
            PlacementRule::Ground => ground > sea_level,
            PlacementRule::Floating => ground <= sea_level,
            PlacementRule::Underwater => ground + radius <= sea_level,
        }
    }
}

/// A circular footprint placed at a world position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedObject {
    /// Free-form kind tag (e.g. `"hut"`, `"buoy"`).
    pub kind: String,
    /// World X.
    pub x: f64,
    /// World Z.
    pub z: f64,
    /// Footprint radius.
    pub radius: f64,
    pub rule: PlacementRule,
}

impl PlacedObject {
    pub fn new(kind: impl Into<String>, x: f64, z: f64, radius: f64, rule: PlacementRule) -> Self {
        Self {
            kind: kind.into(),
            x,
            z,
            radius,
            rule,
        }
    }

    /// Footprints intersect. Touching circles do not overlap.
    pub fn overlaps(&self, other: &PlacedObject) -> bool {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        let reach = self.radius + other.radius;
        dx * dx + dz * dz < reach * reach
    }
}

/// Options for [`Terrain::place_object`](crate::Terrain::place_object).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaceOptions {
    /// Keep the placement across eviction and in snapshots.
    pub persist: bool,
}

impl PlaceOptions {
    /// Options for a placement that survives eviction.
    pub fn persistent() -> Self {
        Self { persist: true }
    }
}

/// Why a placement was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementRejection {
    /// The target chunk is missing or not generated.
    NotReady,
    /// The position is outside the chunk.
    OutOfBounds,
    /// Radius is negative or not finite.
    InvalidRadius,
    /// Another object already occupies the footprint.
    Overlap,
    /// The ground height violates the object's [`PlacementRule`].
    RuleViolated,
}

impl fmt::Display for PlacementRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            PlacementRejection::NotReady => "chunk not ready",
            PlacementRejection::OutOfBounds => "outside chunk",
            PlacementRejection::InvalidRadius => "invalid radius",
            PlacementRejection::Overlap => "overlaps existing object",
            PlacementRejection::RuleViolated => "placement rule violated",
        };
        f.write_str(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_against_sea_level() {
        assert!(PlacementRule::Ground.admits(0.1, 1.0, 0.0));
        assert!(!PlacementRule::Ground.admits(0.0, 1.0, 0.0));
        assert!(PlacementRule::Floating.admits(0.0, 1.0, 0.0));
        assert!(!PlacementRule::Floating.admits(0.5, 1.0, 0.0));
        assert!(PlacementRule::Underwater.admits(-2.0, 1.5, 0.0));
        assert!(!PlacementRule::Underwater.admits(-1.0, 1.5, 0.0));
    }

    #[test]
    fn test_overlap() {
        let a = PlacedObject::new("hut", 0.0, 0.0, 1.0, PlacementRule::Ground);
        let b = PlacedObject::new("hut", 1.5, 0.0, 1.0, PlacementRule::Ground);
        let c = PlacedObject::new("hut", 2.0, 0.0, 1.0, PlacementRule::Ground);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }
}

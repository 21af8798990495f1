//! World snapshots: seed, session draw count, biome assignments, and
//! persisted placements. Geometry is never stored; it regenerates from these.

use std::path::Path;

use atoll_terrain::{BiomeKind, RandomStream, Seed};
use serde::{Deserialize, Serialize};

use crate::coord::ChunkCoord;
use crate::error::SnapshotError;
use crate::object::PlacedObject;
use crate::terrain::Terrain;

/// Biome bound to one chunk coordinate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BiomeAssignment {
    pub row: i64,
    pub col: i64,
    pub biome: BiomeKind,
}

/// A persisted placement and the chunk that owns it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedPlacement {
    pub row: i64,
    pub col: i64,
    pub object: PlacedObject,
}

/// Everything needed to regenerate a world exactly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub seed: Seed,
    /// Values drawn from the session stream so far.
    pub draws: u64,
    pub assignments: Vec<BiomeAssignment>,
    pub placements: Vec<PersistedPlacement>,
}

impl WorldSnapshot {
    /// Serialize to pretty RON.
    pub fn to_ron(&self) -> Result<String, SnapshotError> {
        let pretty = ron::ser::PrettyConfig::new().depth_limit(3);
        ron::ser::to_string_pretty(self, pretty).map_err(SnapshotError::Serialize)
    }

    /// Parse from RON.
    pub fn from_ron(text: &str) -> Result<Self, SnapshotError> {
        ron::from_str(text).map_err(SnapshotError::Parse)
    }

    /// Write to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), SnapshotError> {
        let write_err = |source| SnapshotError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(path, self.to_ron()?).map_err(write_err)
    }

    /// Read from `path`.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let text = std::fs::read_to_string(path).map_err(|source| SnapshotError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(&text)
    }
}

impl Terrain {
    /// Capture assignments and persisted placements. `stream` is the session
    /// stream passed to [`Terrain::update`].
    pub fn snapshot(&self, stream: &RandomStream) -> WorldSnapshot {
        WorldSnapshot {
            seed: self.generator().seed(),
            draws: stream.draws(),
            assignments: self
                .assignments_sorted()
                .into_iter()
                .map(|(c, biome)| BiomeAssignment {
                    row: c.row,
                    col: c.col,
                    biome,
                })
                .collect(),
            placements: self
                .placements_sorted()
                .into_iter()
                .map(|(c, object)| PersistedPlacement {
                    row: c.row,
                    col: c.col,
                    object,
                })
                .collect(),
        }
    }

    /// Replace this world's state with `snapshot` and return the session
    /// stream positioned where the snapshot left it.
    ///
    /// All chunks are dropped; they regenerate on the following updates with
    /// the restored biomes and placements.
    ///
    /// # Errors
    ///
    /// [`SnapshotError::SeedMismatch`] if the snapshot was taken from a world
    /// with a different seed.
    pub fn restore(&mut self, snapshot: &WorldSnapshot) -> Result<RandomStream, SnapshotError> {
        let seed = self.generator().seed();
        if snapshot.seed != seed {
            return Err(SnapshotError::SeedMismatch {
                expected: seed.value(),
                found: snapshot.seed.value(),
            });
        }
        self.reset_world(
            snapshot
                .assignments
                .iter()
                .map(|a| (ChunkCoord::new(a.row, a.col), a.biome)),
            snapshot
                .placements
                .iter()
                .map(|p| (ChunkCoord::new(p.row, p.col), p.object.clone())),
        );
        tracing::info!(
            assignments = snapshot.assignments.len(),
            placements = snapshot.placements.len(),
            draws = snapshot.draws,
            "world snapshot restored"
        );
        Ok(RandomStream::resume(seed, snapshot.draws))
    }
}

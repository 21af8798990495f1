//! Chunk streaming for island terrain.
//!
//! [`Terrain`] owns a sparse map of [`Chunk`]s keyed by [`ChunkCoord`]. Each
//! tick it selects the visible window around the observer, assigns biomes to
//! newly seen coordinates, generates a bounded number of pending chunks
//! nearest-first, and evicts the farthest chunks once the resident budget is
//! exceeded. Evicted chunks keep their biome so re-entry regenerates the same
//! surface.

mod chunk;
mod coord;
mod error;
mod mesh;
mod object;
mod snapshot;
mod state;
mod terrain;

pub use chunk::{
    Chunk, ChunkBounds, ChunkSummary, cloud_threshold, need_generate_cloud, need_generate_water,
};
pub use coord::ChunkCoord;
pub use error::{ChunkStateError, SnapshotError, TerrainError};
pub use mesh::{CloudMesh, SurfaceMesh, WaterMesh};
pub use object::{PlaceOptions, PlacedObject, PlacementRejection, PlacementRule};
pub use snapshot::{BiomeAssignment, PersistedPlacement, WorldSnapshot};
pub use state::ChunkState;
pub use terrain::{Terrain, TickReport};

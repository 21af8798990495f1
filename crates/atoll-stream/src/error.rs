//! Streaming error types.

use std::path::PathBuf;

use atoll_terrain::{BiomeError, GeneratorError};

use crate::coord::ChunkCoord;
use crate::state::ChunkState;

/// A chunk was asked to make a lifecycle transition it does not allow.
#[derive(Debug, thiserror::Error)]
pub enum ChunkStateError {
    #[error("chunk {coord}: illegal transition {from} -> {to}")]
    InvalidTransition {
        coord: ChunkCoord,
        from: ChunkState,
        to: ChunkState,
    },
}

/// Errors raised while updating the terrain cache.
#[derive(Debug, thiserror::Error)]
pub enum TerrainError {
    /// The generator could not be built from the configuration.
    #[error(transparent)]
    Generator(#[from] GeneratorError),

    /// The biome table could not produce an assignment.
    #[error(transparent)]
    Biome(#[from] BiomeError),

    /// A chunk lifecycle invariant was violated.
    #[error(transparent)]
    State(#[from] ChunkStateError),
}

/// Errors raised while saving or restoring a world snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write snapshot {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse snapshot: {0}")]
    Parse(#[source] ron::error::SpannedError),

    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[source] ron::Error),

    /// The snapshot belongs to a different world.
    #[error("snapshot seed {found:#018x} does not match world seed {expected:#018x}")]
    SeedMismatch { expected: u64, found: u64 },
}

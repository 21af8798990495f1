//! The eleven biome variants.
//!
//! Each module exports a `PROFILE` (elevation personality) and a `classify`
//! function (sub-biome threshold table). Dispatch lives in [`super::BiomeKind`].

pub(crate) mod alpine;
pub(crate) mod archipelago;
pub(crate) mod desert;
pub(crate) mod grassland;
pub(crate) mod jungle;
pub(crate) mod mesa;
pub(crate) mod reef;
pub(crate) mod savanna;
pub(crate) mod swamp;
pub(crate) mod tundra;
pub(crate) mod volcanic;

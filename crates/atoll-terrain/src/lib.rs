//! Procedural island terrain: seeded noise, island shaping, biome variants,
//! and the world-level height/moisture/color generator.
//!
//! Everything here is pure with respect to the [`Seed`]: sampling the same
//! coordinate twice returns the same value, and the only randomness flows
//! through an explicit [`RandomStream`].

mod color;
mod generator;
mod island;
mod noise_field;
mod seed;

pub mod biome;

pub use biome::{BiomeError, BiomeKind, BiomeRegistry, SubBiome};
pub use color::{Color, ColorRamp};
pub use generator::{BiomeGenerator, GeneratorError, GridSpec};
pub use island::{DistanceMetric, IslandShape, island_add_method, normalized_offset};
pub use noise_field::{NoiseChannel, NoiseField, Octave};
pub use seed::{RandomStream, Seed};

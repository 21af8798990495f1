//! World configuration for the atoll terrain engine.
//!
//! Provides the static world description (chunk grid, height range, streaming
//! budgets, biome weights, palette) that persists to disk as a RON file.
//! Supports CLI overrides via clap, hot-reload detection, and validation.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    BiomeWeight, CONFIG_FILE, ChunkConfig, ColorStop, DebugConfig, NoiseConfig, PaletteConfig,
    StreamingConfig, WorldConfig, WorldConstants, default_biome_weights, default_config_dir,
};
pub use error::ConfigError;

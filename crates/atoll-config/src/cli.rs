//! Command-line argument parsing for the atoll demo.

use std::path::PathBuf;

use clap::Parser;

use crate::WorldConfig;

/// Atoll command-line arguments.
///
/// CLI values override settings loaded from `world.ron`.
#[derive(Parser, Debug)]
#[command(name = "atoll", about = "Deterministic island terrain streaming")]
pub struct CliArgs {
    /// World seed phrase.
    #[arg(long, default_value = "abc")]
    pub seed: String,

    /// Number of simulation ticks to run.
    #[arg(long, default_value_t = 120)]
    pub ticks: u32,

    /// Observer speed in world units per tick.
    #[arg(long, default_value_t = 6.0)]
    pub speed: f64,

    /// Maximum number of visible chunks.
    #[arg(long)]
    pub max_visible: Option<usize>,

    /// Maximum number of resident chunks.
    #[arg(long)]
    pub max_renderable: Option<usize>,

    /// Chunk generations per tick.
    #[arg(long)]
    pub generations_per_tick: Option<usize>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write a world snapshot to this file when the run ends.
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Restore a world snapshot from this file before the run starts.
    #[arg(long)]
    pub load: Option<PathBuf>,
}

impl WorldConfig {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(v) = args.max_visible {
            self.streaming.max_visible_chunks = v;
        }
        if let Some(r) = args.max_renderable {
            self.streaming.max_renderable_chunks = r;
        }
        if let Some(g) = args.generations_per_tick {
            self.streaming.generations_per_tick = g;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

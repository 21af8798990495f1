//! Headless demo that streams island terrain around a walking observer.
//!
//! Configuration is loaded from `world.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p atoll-demo -- --seed abc --ticks 200`.

use std::path::PathBuf;
use std::process::ExitCode;

use atoll_config::{CliArgs, WorldConfig, default_config_dir};
use atoll_stream::{PlaceOptions, PlacedObject, PlacementRule, Terrain, TickReport, WorldSnapshot};
use atoll_terrain::{RandomStream, Seed};
use clap::Parser;
use tracing::{debug, info, warn};

/// Salt for the stream that drives demo-only choices (spawns), kept apart
/// from the session stream so it never shifts biome assignment.
const SPAWN_SALT: u64 = 0x5ba3_0000;
/// Try a buoy placement every this many ticks.
const PLACEMENT_INTERVAL: u32 = 25;

#[derive(Default)]
struct RunStats {
    generated: usize,
    evicted: usize,
    placed: usize,
    rejected: usize,
    clouds: usize,
    peak_resident: usize,
}

impl RunStats {
    fn record(&mut self, terrain: &Terrain, report: &TickReport) {
        self.generated += report.generated.len();
        self.evicted += report.evicted.len();
        self.peak_resident = self.peak_resident.max(report.resident);
        self.clouds += report
            .generated
            .iter()
            .filter_map(|c| terrain.chunk(*c))
            .filter(|c| c.cloud().is_some())
            .count();
    }
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args
        .config
        .clone()
        .or_else(default_config_dir)
        .unwrap_or_else(|| PathBuf::from(".atoll"));

    let mut config = WorldConfig::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using the standard world");
        WorldConfig::standard()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    atoll_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs, config: &WorldConfig) -> Result<(), Box<dyn std::error::Error>> {
    config.validate()?;

    let seed = Seed::from_phrase(&args.seed);
    let mut terrain = Terrain::from_config(seed, config)?;
    let mut stream = match &args.load {
        Some(path) => {
            let snapshot = WorldSnapshot::load(path)?;
            info!("Loaded snapshot from {}", path.display());
            terrain.restore(&snapshot)?
        }
        None => RandomStream::new(seed),
    };
    let mut spawns = RandomStream::new(seed.derive(SPAWN_SALT));

    info!(
        "World '{}' (seed {:#018x}): {} biomes, chunk {}x{} cells, budgets {}/{}",
        args.seed,
        seed.value(),
        terrain.generator().registry().len(),
        config.chunk.rows,
        config.chunk.cols,
        config.streaming.max_visible_chunks,
        config.streaming.max_renderable_chunks,
    );

    let (chunk_width, chunk_depth) = terrain.generator().chunk_extent();
    let (mut x, z) = (chunk_width * 0.5, chunk_depth * 0.5);
    let mut stats = RunStats::default();

    for tick in 0..args.ticks {
        let report = terrain.update(x, z, &mut stream)?;
        stats.record(&terrain, &report);
        debug!(
            tick,
            observer = %report.observer,
            generated = report.generated.len(),
            evicted = report.evicted.len(),
            pending = report.pending,
            resident = report.resident,
            rendered = report.rendered,
            "tick"
        );

        if tick % PLACEMENT_INTERVAL == 0 {
            let buoy = PlacedObject::new("buoy", x, z, 1.0, PlacementRule::Floating);
            if terrain.place_object(buoy, PlaceOptions::persistent()) {
                stats.placed += 1;
            } else {
                stats.rejected += 1;
            }
        }

        if let Some(chunk) = terrain.chunk_at(x, z)
            && let Some(organism) = chunk.organism_at(x, z, spawns.next_f64())
        {
            debug!(tick, organism, biome = %chunk.biome(), "spawn");
        }

        x += args.speed;
    }

    info!(
        "Ran {} ticks: {} generated, {} evicted, {} clouds, peak resident {}, {} placed, {} rejected",
        args.ticks,
        stats.generated,
        stats.evicted,
        stats.clouds,
        stats.peak_resident,
        stats.placed,
        stats.rejected,
    );
    if let Some(biome) = terrain.biome_at(x, z) {
        let height = terrain
            .height_at(x, z)
            .or_else(|| terrain.compute_height(x, z))
            .unwrap_or(f64::NAN);
        info!(
            "Observer ends at ({x:.1}, {z:.1}) in {biome}, height {height:.2}, moisture {:.2}",
            terrain.compute_moisture(x, z)
        );
    }

    if let Some(path) = &args.save {
        let snapshot = terrain.snapshot(&stream);
        snapshot.save(path)?;
        info!(
            "Saved snapshot ({} assignments, {} placements) to {}",
            snapshot.assignments.len(),
            snapshot.placements.len(),
            path.display()
        );
    } else if stats.placed > 0 {
        warn!("{} persistent placements were not saved (use --save)", stats.placed);
    }

    Ok(())
}

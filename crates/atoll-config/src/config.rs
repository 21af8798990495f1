//! World configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name used inside the configuration directory.
pub const CONFIG_FILE: &str = "world.ron";

/// Top-level world configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    /// Chunk grid resolution and height range.
    pub chunk: ChunkConfig,
    /// World-wide elevation constants.
    pub world: WorldConstants,
    /// Streaming budgets.
    pub streaming: StreamingConfig,
    /// Noise tuning.
    pub noise: NoiseConfig,
    /// Weighted biome table. Order is significant for the weighted draw.
    /// Omitted in RON, it is the stock table; an explicit `[]` stays empty and
    /// fails validation.
    #[serde(default = "default_biome_weights")]
    pub biomes: Vec<BiomeWeight>,
    /// Surface and water colors.
    pub palette: PaletteConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Chunk grid configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChunkConfig {
    /// Number of cell rows (along Z) per chunk.
    pub rows: u32,
    /// Number of cell columns (along X) per chunk.
    pub cols: u32,
    /// Width of a single cell along X, in world units.
    pub cell_width: f64,
    /// Depth of a single cell along Z, in world units.
    pub cell_depth: f64,
    /// World height that a raw elevation of -1 maps to.
    pub min_height: f64,
    /// World height that a raw elevation of +1 maps to.
    pub max_height: f64,
}

/// Elevation constants shared by every biome.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorldConstants {
    /// Water surface height in world units.
    pub sea_level: f64,
    /// Height of the cloud layer in world units.
    pub cloud_elevation: f64,
    /// How strongly the sub-biome color tints the height ramp (0.0 - 1.0).
    pub biome_tint: f32,
}

/// Streaming cache budgets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StreamingConfig {
    /// Half-extent of the square window (in chunks) scanned around the observer.
    pub visible_radius: u32,
    /// Maximum number of chunks marked visible at once.
    pub max_visible_chunks: usize,
    /// Maximum number of resident (non-evicted) chunks.
    pub max_renderable_chunks: usize,
    /// Maximum number of chunk generations per tick.
    pub generations_per_tick: usize,
}

/// Noise tuning shared by all biomes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NoiseConfig {
    /// Frequency applied to world coordinates before the per-octave multipliers.
    pub base_frequency: f64,
    /// Exponent used by ridge noise.
    pub ridge_sharpness: f64,
    /// Maximum absolute jitter applied to sub-biome thresholds.
    pub jitter: f64,
}

/// One entry of the weighted biome table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BiomeWeight {
    /// Biome identifier (e.g. `"grassland"`).
    pub name: String,
    /// Relative weight, must be positive.
    pub weight: f64,
}

impl BiomeWeight {
    /// Convenience constructor.
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

/// A `(stop, color)` pair of the surface color ramp.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ColorStop {
    /// Fractional height in `[0, 1]` (values outside clamp to the end colors).
    pub stop: f32,
    /// Linear RGB color.
    pub color: [f32; 3],
}

/// Surface and water colors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PaletteConfig {
    /// Height color ramp; sorted on load, need not be sorted in the file.
    pub color_stops: Vec<ColorStop>,
    /// Water color at moisture 0.
    pub shallow_water: [f32; 3],
    /// Water color at moisture 1.
    pub deep_water: [f32; 3],
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            rows: 32,
            cols: 32,
            cell_width: 4.0,
            cell_depth: 4.0,
            min_height: -40.0,
            max_height: 120.0,
        }
    }
}

impl Default for WorldConstants {
    fn default() -> Self {
        Self {
            sea_level: 0.0,
            cloud_elevation: 80.0,
            biome_tint: 0.35,
        }
    }
}

impl Default for StreamingConfig {
    fn default() -> Self {
        Self {
            visible_radius: 3,
            max_visible_chunks: 12,
            max_renderable_chunks: 24,
            generations_per_tick: 2,
        }
    }
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            base_frequency: 0.008,
            ridge_sharpness: 2.0,
            jitter: 0.02,
        }
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            color_stops: vec![
                ColorStop {
                    stop: 0.0,
                    color: [0.76, 0.70, 0.50],
                },
                ColorStop {
                    stop: 0.3,
                    color: [0.33, 0.55, 0.22],
                },
                ColorStop {
                    stop: 0.6,
                    color: [0.42, 0.36, 0.28],
                },
                ColorStop {
                    stop: 0.85,
                    color: [0.55, 0.55, 0.55],
                },
                ColorStop {
                    stop: 1.0,
                    color: [0.95, 0.95, 0.97],
                },
            ],
            shallow_water: [0.25, 0.70, 0.80],
            deep_water: [0.05, 0.20, 0.45],
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// The stock biome weight table, in draw order.
pub fn default_biome_weights() -> Vec<BiomeWeight> {
    vec![
        BiomeWeight::new("grassland", 14.0),
        BiomeWeight::new("desert", 8.0),
        BiomeWeight::new("tundra", 6.0),
        BiomeWeight::new("jungle", 10.0),
        BiomeWeight::new("archipelago", 9.0),
        BiomeWeight::new("mesa", 6.0),
        BiomeWeight::new("volcanic", 4.0),
        BiomeWeight::new("swamp", 7.0),
        BiomeWeight::new("alpine", 6.0),
        BiomeWeight::new("savanna", 9.0),
        BiomeWeight::new("reef", 5.0),
    ]
}

// --- Derived quantities and validation ---

impl ChunkConfig {
    /// Check that the grid has cells and a non-empty height range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        if self.rows == 0 || self.cols == 0 {
            return invalid("chunk rows and cols must be non-zero");
        }
        if !(self.cell_width > 0.0 && self.cell_depth > 0.0) {
            return invalid("cell sizes must be positive");
        }
        if !(self.min_height < self.max_height) {
            return invalid("min_height must be below max_height");
        }
        Ok(())
    }
}

impl WorldConfig {
    /// A default configuration with the stock biome table filled in.
    ///
    /// `Default` leaves `biomes` empty, which [`WorldConfig::validate`] rejects.
    pub fn standard() -> Self {
        Self {
            biomes: default_biome_weights(),
            ..Self::default()
        }
    }

    /// Width of one chunk along X in world units.
    pub fn chunk_width(&self) -> f64 {
        self.chunk.cols as f64 * self.chunk.cell_width
    }

    /// Depth of one chunk along Z in world units.
    pub fn chunk_depth(&self) -> f64 {
        self.chunk.rows as f64 * self.chunk.cell_depth
    }

    /// Check internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        self.chunk.validate()?;
        if self.streaming.max_visible_chunks == 0 {
            return invalid("max_visible_chunks must be non-zero");
        }
        if self.streaming.max_renderable_chunks < self.streaming.max_visible_chunks {
            return invalid("max_renderable_chunks must be at least max_visible_chunks");
        }
        if self.streaming.generations_per_tick == 0 {
            return invalid("generations_per_tick must be non-zero");
        }
        if self.biomes.is_empty() {
            return invalid("biome weight table is empty");
        }
        if let Some(bad) = self
            .biomes
            .iter()
            .find(|b| !(b.weight.is_finite() && b.weight > 0.0))
        {
            return Err(ConfigError::Invalid(format!(
                "biome `{}` has invalid weight {}",
                bad.name, bad.weight
            )));
        }
        Ok(())
    }
}

// --- Load / Save / Reload ---

impl WorldConfig {
    /// Load config from the given directory, or create the standard config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: WorldConfig = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded world config from {}", config_path.display());
            Ok(config)
        } else {
            let config = WorldConfig::standard();
            config.save(config_dir)?;
            log::info!("Created default world config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `world.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: WorldConfig = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("World config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}

/// Default configuration directory (`$CONFIG_DIR/atoll`), if the platform has one.
pub fn default_config_dir() -> Option<std::path::PathBuf> {
    dirs::config_dir().map(|d| d.join("atoll"))
}

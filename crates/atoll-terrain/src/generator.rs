//! World-level height, moisture, and color fields.
//!
//! [`BiomeGenerator`] owns the noise field and biome registry for a session.
//! It maps biome elevation into world height units, computes moisture, picks
//! sub-biomes and colors, and performs the weighted biome draw.

use atoll_config::{ConfigError, WorldConfig};

use crate::biome::{
    BiomeError, BiomeKind, BiomeRegistry, ClassifyContext, NoiseTuning, SamplePoint, SubBiome,
};
use crate::color::{Color, ColorRamp};
use crate::island::normalized_offset;
use crate::noise_field::{NoiseChannel, NoiseField};
use crate::seed::{RandomStream, Seed};

/// Moisture is sampled at this fraction of the base frequency so that wet and
/// dry regions span several chunks.
const MOISTURE_FREQUENCY_SCALE: f64 = 0.5;

/// Chunk grid geometry and height range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    /// Cell rows per chunk (NROWS).
    pub rows: u32,
    /// Cell columns per chunk (NCOLS).
    pub cols: u32,
    /// Cell size along X.
    pub cell_width: f64,
    /// Cell size along Z.
    pub cell_depth: f64,
    /// World height of raw elevation -1.
    pub min_height: f64,
    /// World height of raw elevation +1.
    pub max_height: f64,
}

impl GridSpec {
    /// Chunk extent along X.
    pub fn chunk_width(&self) -> f64 {
        self.cols as f64 * self.cell_width
    }

    /// Chunk extent along Z.
    pub fn chunk_depth(&self) -> f64 {
        self.rows as f64 * self.cell_depth
    }

    /// `(row, col)` of the chunk containing world `(x, z)`.
    ///
    /// Floors rather than truncates, so `x = -0.5` belongs to column -1.
    pub fn chunk_of(&self, x: f64, z: f64) -> (i64, i64) {
        let row = (z / self.chunk_depth()).floor() as i64;
        let col = (x / self.chunk_width()).floor() as i64;
        (row, col)
    }
}

/// Reasons a generator cannot be built from a configuration.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The chunk grid is degenerate.
    #[error(transparent)]
    Grid(#[from] ConfigError),
    /// The biome weight table is unusable.
    #[error(transparent)]
    Biome(#[from] BiomeError),
}

/// Session-scoped generator of elevation, moisture, and color.
pub struct BiomeGenerator {
    seed: Seed,
    noise: NoiseField,
    registry: BiomeRegistry,
    grid: GridSpec,
    tuning: NoiseTuning,
    classify: ClassifyContext,
    jitter: f64,
    biome_tint: f32,
    ramp: ColorRamp,
    shallow_water: Color,
    deep_water: Color,
}

impl BiomeGenerator {
    /// Build the generator for `seed` from a world configuration.
    ///
    /// # Errors
    ///
    /// [`GeneratorError::Grid`] if the chunk grid has no cells or an empty
    /// height range. [`GeneratorError::Biome`] for any problem with the
    /// weight table; an empty table is fatal and never replaced by a default
    /// biome.
    pub fn from_config(seed: Seed, config: &WorldConfig) -> Result<Self, GeneratorError> {
        config.chunk.validate()?;
        let registry = BiomeRegistry::from_weights(
            config.biomes.iter().map(|b| (b.name.as_str(), b.weight)),
        )?;
        tracing::debug!(
            seed = seed.value(),
            biomes = registry.len(),
            total_weight = registry.total_weight(),
            "biome generator ready"
        );
        let palette = &config.palette;
        let ramp = ColorRamp::new(
            palette
                .color_stops
                .iter()
                .map(|s| (s.stop, Color::from_array(s.color))),
        );

        Ok(Self {
            seed,
            noise: NoiseField::new(seed),
            registry,
            grid: GridSpec {
                rows: config.chunk.rows,
                cols: config.chunk.cols,
                cell_width: config.chunk.cell_width,
                cell_depth: config.chunk.cell_depth,
                min_height: config.chunk.min_height,
                max_height: config.chunk.max_height,
            },
            tuning: NoiseTuning {
                base_frequency: config.noise.base_frequency,
                ridge_sharpness: config.noise.ridge_sharpness,
            },
            classify: ClassifyContext {
                sea_level: config.world.sea_level,
                cloud_elevation: config.world.cloud_elevation,
            },
            jitter: config.noise.jitter,
            biome_tint: config.world.biome_tint.clamp(0.0, 1.0),
            ramp,
            shallow_water: Color::from_array(palette.shallow_water),
            deep_water: Color::from_array(palette.deep_water),
        })
    }

    /// World seed.
    pub fn seed(&self) -> Seed {
        self.seed
    }

    /// Chunk grid geometry.
    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    /// `(width, depth)` of one chunk in world units.
    pub fn chunk_extent(&self) -> (f64, f64) {
        (self.grid.chunk_width(), self.grid.chunk_depth())
    }

    /// Biome weight table.
    pub fn registry(&self) -> &BiomeRegistry {
        &self.registry
    }

    /// Underlying noise field.
    pub fn noise(&self) -> &NoiseField {
        &self.noise
    }

    /// Water surface height.
    pub fn sea_level(&self) -> f64 {
        self.classify.sea_level
    }

    /// Cloud layer height.
    pub fn cloud_elevation(&self) -> f64 {
        self.classify.cloud_elevation
    }

    /// Maximum absolute classification jitter.
    pub fn jitter(&self) -> f64 {
        self.jitter
    }

    /// Draw a biome for a new chunk from the session stream.
    ///
    /// # Errors
    ///
    /// [`BiomeError::EmptyWeightTable`] if the registry is empty.
    pub fn assign_biome(&self, stream: &mut RandomStream) -> Result<BiomeKind, BiomeError> {
        self.registry.draw(stream)
    }

    /// World height at `(x, z)` using `biome`, normalized against the chunk
    /// that contains the point.
    pub fn compute_height(&self, biome: BiomeKind, x: f64, z: f64) -> f64 {
        let (row, col) = self.grid.chunk_of(x, z);
        self.compute_height_in(biome, row, col, x, z)
    }

    /// World height at `(x, z)` normalized against chunk `(row, col)`.
    ///
    /// Vertices on a chunk's far edge lie in the neighbouring chunk by floor
    /// division; meshing passes the owning chunk explicitly.
    pub fn compute_height_in(&self, biome: BiomeKind, row: i64, col: i64, x: f64, z: f64) -> f64 {
        let width = self.grid.chunk_width();
        let depth = self.grid.chunk_depth();
        let point = SamplePoint {
            x,
            z,
            nx: normalized_offset(x - col as f64 * width, width),
            nz: normalized_offset(z - row as f64 * depth, depth),
        };
        let raw = biome.compute_elevation_at(&self.noise, &point, &self.tuning);
        self.to_world_height(raw)
    }

    /// Map raw elevation into `[min_height, max_height]`.
    pub fn to_world_height(&self, raw: f64) -> f64 {
        let min = self.grid.min_height;
        let max = self.grid.max_height;
        (min + (raw + 1.0) * 0.5 * (max - min)).clamp(min, max)
    }

    /// Moisture in `[0, 1]` at `(x, z)`.
    pub fn compute_moisture(&self, x: f64, z: f64) -> f64 {
        let f = self.tuning.base_frequency * MOISTURE_FREQUENCY_SCALE;
        let raw = self.noise.noise(NoiseChannel::Moisture, x * f, z * f);
        ((raw + 1.0) * 0.5).clamp(0.0, 1.0)
    }

    /// Water tint for moisture `m`, blending shallow toward deep.
    pub fn water_color(&self, m: f64) -> Color {
        self.shallow_water
            .lerp(self.deep_water, m.clamp(0.0, 1.0) as f32)
    }

    /// Sub-biome for height `e` and moisture `m` in `biome`.
    pub fn parameters_at(&self, biome: BiomeKind, e: f64, m: f64, jitter: f64) -> &'static SubBiome {
        biome.parameters_at(&self.classify, e, m, jitter)
    }

    /// Draw a classification jitter from a chunk stream.
    pub fn draw_jitter(&self, stream: &mut RandomStream) -> f64 {
        stream.next_signed(self.jitter)
    }

    /// Fractional position of world height `h` within the height range.
    pub fn height_fraction(&self, h: f64) -> f32 {
        let min = self.grid.min_height;
        let max = self.grid.max_height;
        ((h - min) / (max - min)) as f32
    }

    /// Height ramp color for world height `h`.
    pub fn ramp_color(&self, h: f64) -> Color {
        self.ramp.color_at(self.height_fraction(h))
    }

    /// Final surface color: the height ramp tinted toward the sub-biome color.
    pub fn surface_color(&self, h: f64, sub: &SubBiome) -> Color {
        self.ramp_color(h).lerp(sub.color, self.biome_tint)
    }
}

//! Session-scoped chunk cache and streaming scheduler.
//!
//! Each [`Terrain::update`] runs one tick of the streaming policy:
//!
//! 1. Select the visible window: coordinates within `visible_radius` of the
//!    observer's chunk, nearest first, capped at `max_visible_chunks`.
//! 2. Assign a biome to every visible coordinate seen for the first time, in
//!    that nearest-first order, drawing from the session stream.
//! 3. Request generation for visible coordinates that are missing or evicted.
//! 4. Generate up to `generations_per_tick` pending chunks, nearest first.
//! 5. Evict the farthest non-visible chunks until the resident count is within
//!    `max_renderable_chunks`.
//!
//! A chunk that becomes ready while outside the visible window stays resident
//! but is not rendered.

use atoll_config::{StreamingConfig, WorldConfig};
use atoll_terrain::{BiomeGenerator, BiomeKind, RandomStream, Seed};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::chunk::Chunk;
use crate::coord::ChunkCoord;
use crate::error::TerrainError;
use crate::object::{PlaceOptions, PlacedObject};
use crate::state::ChunkState;

/// Outcome of a single streaming tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    /// Observer's chunk this tick.
    pub observer: ChunkCoord,
    /// Biomes drawn for newly seen coordinates.
    pub assigned: usize,
    /// Chunks that entered `Pending` this tick.
    pub requested: usize,
    /// Chunks generated this tick, in generation order.
    pub generated: Vec<ChunkCoord>,
    /// Chunks evicted this tick, farthest first.
    pub evicted: Vec<ChunkCoord>,
    /// Chunks still waiting for generation.
    pub pending: usize,
    pub resident: usize,
    pub visible: usize,
    pub rendered: usize,
}

/// The streaming terrain cache.
pub struct Terrain {
    generator: BiomeGenerator,
    streaming: StreamingConfig,
    chunks: FxHashMap<ChunkCoord, Chunk>,
    /// Biome of every coordinate ever seen; survives eviction.
    assignments: FxHashMap<ChunkCoord, BiomeKind>,
    /// Persisted placements, re-applied after each regeneration.
    placements: FxHashMap<ChunkCoord, Vec<PlacedObject>>,
    visible: Vec<ChunkCoord>,
    visible_set: FxHashSet<ChunkCoord>,
    rendered: Vec<ChunkCoord>,
    observer: ChunkCoord,
}

impl Terrain {
    /// Creates an empty cache around `generator`.
    ///
    /// The visible cap is lowered to the resident cap if it exceeds it, so the
    /// resident budget can always be met.
    pub fn new(generator: BiomeGenerator, mut streaming: StreamingConfig) -> Self {
        if streaming.max_visible_chunks > streaming.max_renderable_chunks {
            tracing::warn!(
                max_visible = streaming.max_visible_chunks,
                max_renderable = streaming.max_renderable_chunks,
                "visible budget exceeds resident budget, clamping"
            );
            streaming.max_visible_chunks = streaming.max_renderable_chunks;
        }
        Self {
            generator,
            streaming,
            chunks: FxHashMap::default(),
            assignments: FxHashMap::default(),
            placements: FxHashMap::default(),
            visible: Vec::new(),
            visible_set: FxHashSet::default(),
            rendered: Vec::new(),
            observer: ChunkCoord::default(),
        }
    }

    /// Build the generator for `seed` and wrap it in a cache.
    pub fn from_config(seed: Seed, config: &WorldConfig) -> Result<Self, TerrainError> {
        let generator = BiomeGenerator::from_config(seed, config)?;
        Ok(Self::new(generator, config.streaming.clone()))
    }

    pub fn generator(&self) -> &BiomeGenerator {
        &self.generator
    }

    pub fn streaming(&self) -> &StreamingConfig {
        &self.streaming
    }

    /// Observer chunk from the last update.
    pub fn observer(&self) -> ChunkCoord {
        self.observer
    }

    /// Visible coordinates, nearest first.
    pub fn visible_coords(&self) -> &[ChunkCoord] {
        &self.visible
    }

    /// Visible coordinates whose chunk is ready.
    pub fn rendered_coords(&self) -> &[ChunkCoord] {
        &self.rendered
    }

    /// Chunks holding a slot in the resident budget.
    pub fn resident_count(&self) -> usize {
        self.chunks.values().filter(|c| c.state().is_resident()).count()
    }

    /// Coordinates waiting for generation.
    pub fn pending_count(&self) -> usize {
        self.chunks
            .values()
            .filter(|c| c.state() == ChunkState::Pending)
            .count()
    }

    /// Chunk at `coord` in any state, including evicted shells.
    pub fn chunk(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    /// Iterates over all chunks, including evicted shells.
    pub fn chunks(&self) -> impl Iterator<Item = (&ChunkCoord, &Chunk)> {
        self.chunks.iter()
    }

    /// Resident chunk containing world `(x, z)`.
    pub fn chunk_at(&self, x: f64, z: f64) -> Option<&Chunk> {
        let coord = ChunkCoord::from_world(self.generator.grid(), x, z);
        self.chunks.get(&coord).filter(|c| c.state().is_resident())
    }

    /// Mesh height at `(x, z)`; `None` unless that chunk is ready.
    pub fn height_at(&self, x: f64, z: f64) -> Option<f64> {
        self.chunk_at(x, z)?.height_at(x, z)
    }

    /// Analytic height at `(x, z)` using the owning chunk's biome; `None` if
    /// the chunk has never been assigned a biome.
    pub fn compute_height(&self, x: f64, z: f64) -> Option<f64> {
        let biome = self.biome_at(x, z)?;
        Some(self.generator.compute_height(biome, x, z))
    }

    /// Moisture at `(x, z)`; defined everywhere.
    pub fn compute_moisture(&self, x: f64, z: f64) -> f64 {
        self.generator.compute_moisture(x, z)
    }

    /// Biome assigned to the chunk containing `(x, z)`.
    pub fn biome_at(&self, x: f64, z: f64) -> Option<BiomeKind> {
        let coord = ChunkCoord::from_world(self.generator.grid(), x, z);
        self.assignments.get(&coord).copied()
    }

    /// Biome assigned to `coord`.
    pub fn assignment(&self, coord: ChunkCoord) -> Option<BiomeKind> {
        self.assignments.get(&coord).copied()
    }

    /// Persisted placements for `coord`.
    pub fn persisted_placements(&self, coord: ChunkCoord) -> &[PlacedObject] {
        self.placements
            .get(&coord)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Visible window around `observer`, nearest first with row-major
    /// tie-breaking.
    fn select_visible(&self, observer: ChunkCoord) -> Vec<ChunkCoord> {
        let r = self.streaming.visible_radius as i64;
        let mut window = Vec::with_capacity(((2 * r + 1) * (2 * r + 1)) as usize);
        for d_row in -r..=r {
            for d_col in -r..=r {
                window.push(observer.offset(d_row, d_col));
            }
        }
        window.sort_by_key(|c| (c.dist_sq(observer), *c));
        // Offsets saturate at the grid edge and can repeat a coordinate.
        window.dedup();
        window.truncate(self.streaming.max_visible_chunks);
        window
    }

    /// Queue `coord` for generation.
    ///
    /// Creates the chunk if missing and resets it if evicted. Returns `false`
    /// (a no-op) when the chunk is already pending, generating, or ready, or
    /// when the coordinate has no biome yet.
    pub fn request_generation(&mut self, coord: ChunkCoord) -> Result<bool, TerrainError> {
        let Some(&biome) = self.assignments.get(&coord) else {
            return Ok(false);
        };
        match self.chunks.get_mut(&coord) {
            None => {
                let chunk = Chunk::new(
                    coord,
                    biome,
                    self.generator.grid(),
                    self.generator.sea_level(),
                );
                self.chunks.insert(coord, chunk);
                Ok(true)
            }
            Some(chunk) if chunk.state().is_in_flight() => Ok(false),
            Some(chunk) if chunk.state() == ChunkState::Ready => Ok(false),
            Some(chunk) => {
                chunk.reset()?;
                Ok(true)
            }
        }
    }

    /// Run one streaming tick for an observer at world `(x, z)`.
    ///
    /// # Errors
    ///
    /// [`TerrainError::Biome`] if the biome table cannot produce a draw, or
    /// [`TerrainError::State`] if a chunk lifecycle invariant is broken.
    pub fn update(
        &mut self,
        x: f64,
        z: f64,
        stream: &mut RandomStream,
    ) -> Result<TickReport, TerrainError> {
        let observer = ChunkCoord::from_world(self.generator.grid(), x, z);
        let mut report = TickReport {
            observer,
            ..TickReport::default()
        };

        // --- Step 1: Visible window ---
        self.observer = observer;
        self.visible = self.select_visible(observer);
        self.visible_set = self.visible.iter().copied().collect();

        // --- Step 2/3: Assign and request ---
        let visible = self.visible.clone();
        for coord in visible {
            if !self.assignments.contains_key(&coord) {
                let biome = self.generator.assign_biome(stream)?;
                self.assignments.insert(coord, biome);
                report.assigned += 1;
            }
            if self.request_generation(coord)? {
                report.requested += 1;
            }
        }

        // --- Step 4: Budgeted generation ---
        let mut pending: Vec<ChunkCoord> = self
            .chunks
            .iter()
            .filter(|(_, c)| c.state() == ChunkState::Pending)
            .map(|(coord, _)| *coord)
            .collect();
        pending.sort_by_key(|c| (c.dist_sq(observer), *c));
        pending.truncate(self.streaming.generations_per_tick);
        for coord in pending {
            self.generate_chunk(coord)?;
            report.generated.push(coord);
        }

        // --- Step 5: Eviction ---
        report.evicted = self.evict_over_budget()?;

        self.rendered = self
            .visible
            .iter()
            .copied()
            .filter(|c| {
                self.chunks
                    .get(c)
                    .is_some_and(|chunk| chunk.state() == ChunkState::Ready)
            })
            .collect();

        report.pending = self.pending_count();
        report.resident = self.resident_count();
        report.visible = self.visible.len();
        report.rendered = self.rendered.len();

        tracing::trace!(
            observer = %observer,
            assigned = report.assigned,
            generated = report.generated.len(),
            evicted = report.evicted.len(),
            pending = report.pending,
            resident = report.resident,
            rendered = report.rendered,
            "terrain tick"
        );
        Ok(report)
    }

    fn generate_chunk(&mut self, coord: ChunkCoord) -> Result<(), TerrainError> {
        let Some(chunk) = self.chunks.get_mut(&coord) else {
            return Ok(());
        };
        chunk.generate(&self.generator)?;
        if let Some(objects) = self.placements.get(&coord) {
            for obj in objects {
                if !chunk.place_object(obj.clone()) {
                    tracing::warn!(coord = %coord, kind = %obj.kind, "persisted placement no longer fits");
                }
            }
        }
        Ok(())
    }

    /// Evict the farthest non-visible resident chunks until the resident
    /// count fits the budget.
    fn evict_over_budget(&mut self) -> Result<Vec<ChunkCoord>, TerrainError> {
        let resident = self.resident_count();
        let budget = self.streaming.max_renderable_chunks;
        if resident <= budget {
            return Ok(Vec::new());
        }

        let observer = self.observer;
        let mut candidates: Vec<ChunkCoord> = self
            .chunks
            .iter()
            .filter(|(coord, c)| c.state().is_resident() && !self.visible_set.contains(coord))
            .map(|(coord, _)| *coord)
            .collect();
        candidates.sort_by_key(|c| (std::cmp::Reverse(c.dist_sq(observer)), *c));
        candidates.truncate(resident - budget);

        for coord in &candidates {
            if let Some(chunk) = self.chunks.get_mut(coord) {
                chunk.evict()?;
                tracing::debug!(coord = %coord, distance_sq = coord.dist_sq(observer), "chunk evicted");
            }
        }
        Ok(candidates)
    }

    /// Whether `obj` could be placed on its chunk right now.
    pub fn can_place_object(&self, obj: &PlacedObject) -> bool {
        self.chunk_at(obj.x, obj.z)
            .is_some_and(|chunk| chunk.can_place_object(obj))
    }

    /// Place `obj` on its chunk. With `opts.persist` the placement is also
    /// stored so it is restored after eviction and saved in snapshots.
    pub fn place_object(&mut self, obj: PlacedObject, opts: PlaceOptions) -> bool {
        let coord = ChunkCoord::from_world(self.generator.grid(), obj.x, obj.z);
        let Some(chunk) = self
            .chunks
            .get_mut(&coord)
            .filter(|c| c.state().is_resident())
        else {
            tracing::debug!(coord = %coord, kind = %obj.kind, "placement rejected: chunk not resident");
            return false;
        };
        let stored = opts.persist.then(|| obj.clone());
        if !chunk.place_object(obj) {
            return false;
        }
        if let Some(obj) = stored {
            self.placements.entry(coord).or_default().push(obj);
        }
        true
    }

    pub(crate) fn assignments_sorted(&self) -> Vec<(ChunkCoord, BiomeKind)> {
        let mut out: Vec<_> = self.assignments.iter().map(|(c, b)| (*c, *b)).collect();
        out.sort_by_key(|(c, _)| *c);
        out
    }

    pub(crate) fn placements_sorted(&self) -> Vec<(ChunkCoord, PlacedObject)> {
        let mut coords: Vec<_> = self.placements.keys().copied().collect();
        coords.sort();
        coords
            .into_iter()
            .flat_map(|coord| {
                self.placements[&coord]
                    .iter()
                    .map(move |obj| (coord, obj.clone()))
            })
            .collect()
    }

    /// Drop every chunk and replace assignments and placements.
    pub(crate) fn reset_world(
        &mut self,
        assignments: impl IntoIterator<Item = (ChunkCoord, BiomeKind)>,
        placements: impl IntoIterator<Item = (ChunkCoord, PlacedObject)>,
    ) {
        self.chunks.clear();
        self.visible.clear();
        self.visible_set.clear();
        self.rendered.clear();
        self.assignments = assignments.into_iter().collect();
        self.placements.clear();
        for (coord, obj) in placements {
            self.placements.entry(coord).or_default().push(obj);
        }
    }
}


#[cfg(test)]
#[path = "terrain_tests.rs"]
mod walk_tests;

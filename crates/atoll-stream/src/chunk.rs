//! One terrain tile: sampling, meshing, water/cloud gating, and placement.

use atoll_terrain::{BiomeGenerator, BiomeKind, GridSpec, RandomStream, SubBiome};
use glam::Vec3;

use crate::coord::ChunkCoord;
use crate::error::ChunkStateError;
use crate::mesh::{CloudMesh, SurfaceMesh, WaterMesh};
use crate::object::{PlacedObject, PlacementRejection};
use crate::state::ChunkState;

/// Moisture above which clouds become likely.
const CLOUD_WET_MOISTURE: f64 = 0.66;
/// Moisture at or below which no cloud is built.
const CLOUD_DRY_MOISTURE: f64 = 0.34;
/// Draw threshold for moderately wet chunks.
const CLOUD_BASE_THRESHOLD: f64 = 0.975;

/// `true` iff a chunk whose lowest sample is `low` needs water geometry.
pub fn need_generate_water(low: f64, sea_level: f64) -> bool {
    low <= sea_level
}

/// Draw threshold a chunk with `moisture_average` must exceed to get a cloud.
pub fn cloud_threshold(moisture_average: f64) -> f64 {
    if moisture_average > CLOUD_WET_MOISTURE {
        (1.0 - moisture_average) + 0.5
    } else {
        CLOUD_BASE_THRESHOLD
    }
}

/// Cloud decision for a chunk given a fresh uniform `draw`.
pub fn need_generate_cloud(moisture_average: f64, draw: f64) -> bool {
    moisture_average > CLOUD_DRY_MOISTURE && draw > cloud_threshold(moisture_average)
}

/// World-space rectangle covered by a chunk. Both edges are inclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChunkBounds {
    pub min_x: f64,
    pub min_z: f64,
    pub max_x: f64,
    pub max_z: f64,
}

impl ChunkBounds {
    /// Bounds of `coord` in `grid`.
    pub fn of(coord: ChunkCoord, grid: &GridSpec) -> Self {
        let (min_x, min_z) = coord.origin(grid);
        Self {
            min_x,
            min_z,
            max_x: min_x + grid.chunk_width(),
            max_z: min_z + grid.chunk_depth(),
        }
    }

    pub fn contains(&self, x: f64, z: f64) -> bool {
        x >= self.min_x && x <= self.max_x && z >= self.min_z && z <= self.max_z
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_x + self.max_x) * 0.5,
            (self.min_z + self.max_z) * 0.5,
        )
    }
}

/// Statistics of a generated chunk.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChunkSummary {
    pub coord: ChunkCoord,
    pub biome: BiomeKind,
    /// Lowest sampled height.
    pub low: f64,
    /// Highest sampled height.
    pub high: f64,
    /// Mean moisture over all samples.
    pub moisture_average: f64,
    pub faces: usize,
    pub has_water: bool,
    pub has_cloud: bool,
}

/// Position of a world point inside the cell grid.
struct CellHit {
    row: usize,
    col: usize,
    fu: f64,
    fv: f64,
}

impl CellHit {
    /// The point lies in the second triangle of its cell.
    fn upper(&self) -> bool {
        self.fu + self.fv > 1.0
    }
}

/// A tile of the world grid.
#[derive(Debug)]
pub struct Chunk {
    coord: ChunkCoord,
    biome: BiomeKind,
    state: ChunkState,
    bounds: ChunkBounds,
    rows: u32,
    cols: u32,
    cell_width: f64,
    cell_depth: f64,
    sea_level: f64,
    /// `(rows + 1) * (cols + 1)` vertex heights, row-major. Empty unless generated.
    heights: Vec<f64>,
    low: f64,
    high: f64,
    moisture_average: f64,
    surface: Option<SurfaceMesh>,
    water: Option<WaterMesh>,
    cloud: Option<CloudMesh>,
    objects: Vec<PlacedObject>,
}

impl Chunk {
    /// A pending chunk with its biome already assigned.
    pub fn new(coord: ChunkCoord, biome: BiomeKind, grid: &GridSpec, sea_level: f64) -> Self {
        Self {
            coord,
            biome,
            state: ChunkState::Pending,
            bounds: ChunkBounds::of(coord, grid),
            rows: grid.rows,
            cols: grid.cols,
            cell_width: grid.cell_width,
            cell_depth: grid.cell_depth,
            sea_level,
            heights: Vec::new(),
            low: 0.0,
            high: 0.0,
            moisture_average: 0.0,
            surface: None,
            water: None,
            cloud: None,
            objects: Vec::new(),
        }
    }

    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    pub fn biome(&self) -> BiomeKind {
        self.biome
    }

    pub fn state(&self) -> ChunkState {
        self.state
    }

    pub fn bounds(&self) -> &ChunkBounds {
        &self.bounds
    }

    /// Lowest sampled height of the last generation.
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Highest sampled height of the last generation.
    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn moisture_average(&self) -> f64 {
        self.moisture_average
    }

    /// Vertex heights, row-major; empty unless the chunk is ready.
    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    pub fn surface(&self) -> Option<&SurfaceMesh> {
        self.surface.as_ref()
    }

    pub fn water(&self) -> Option<&WaterMesh> {
        self.water.as_ref()
    }

    pub fn cloud(&self) -> Option<&CloudMesh> {
        self.cloud.as_ref()
    }

    pub fn objects(&self) -> &[PlacedObject] {
        &self.objects
    }

    /// Move to `to`, rejecting transitions the lifecycle does not allow.
    pub fn transition(&mut self, to: ChunkState) -> Result<(), ChunkStateError> {
        if !self.state.can_transition_to(to) {
            return Err(ChunkStateError::InvalidTransition {
                coord: self.coord,
                from: self.state,
                to,
            });
        }
        self.state = to;
        Ok(())
    }

    /// Sample the vertex grid, build the colored surface, and decide on water
    /// and cloud geometry. The chunk must be `Pending`; it ends `Ready`.
    ///
    /// Threshold jitter and the cloud draw come from the chunk's own random
    /// stream, so regenerating a chunk reproduces it exactly.
    pub fn generate(&mut self, generator: &BiomeGenerator) -> Result<ChunkSummary, ChunkStateError> {
        self.transition(ChunkState::Generating)?;

        let mut stream = RandomStream::for_chunk(generator.seed(), self.coord.row, self.coord.col);
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        let stride = cols + 1;
        let vertex_count = (rows + 1) * stride;

        let mut mesh = SurfaceMesh::with_grid(self.rows, self.cols);
        let mut heights = Vec::with_capacity(vertex_count);
        let mut moisture = Vec::with_capacity(vertex_count);
        let mut low = f64::INFINITY;
        let mut high = f64::NEG_INFINITY;

        for r in 0..=rows {
            let z = self.bounds.min_z + r as f64 * self.cell_depth;
            for c in 0..=cols {
                let x = self.bounds.min_x + c as f64 * self.cell_width;
                let h = generator.compute_height_in(self.biome, self.coord.row, self.coord.col, x, z);
                let m = generator.compute_moisture(x, z);
                low = low.min(h);
                high = high.max(h);
                heights.push(h);
                moisture.push(m);
                mesh.push_vertex(Vec3::new(x as f32, h as f32, z as f32));
            }
        }

        for r in 0..rows {
            for c in 0..cols {
                let i00 = r * stride + c;
                let i10 = i00 + 1;
                let i01 = i00 + stride;
                let i11 = i01 + 1;
                for tri in [[i00, i01, i10], [i10, i01, i11]] {
                    let e = tri.iter().map(|&i| heights[i]).sum::<f64>() / 3.0;
                    let m = tri.iter().map(|&i| moisture[i]).sum::<f64>() / 3.0;
                    let jitter = generator.draw_jitter(&mut stream);
                    let sub = generator.parameters_at(self.biome, e, m, jitter);
                    let color = generator.surface_color(e, sub);
                    mesh.push_face(tri.map(|i| i as u32), color, sub);
                }
            }
        }

        self.moisture_average = moisture.iter().sum::<f64>() / moisture.len() as f64;
        self.low = low;
        self.high = high;
        self.heights = heights;
        self.surface = Some(mesh);

        self.water = self.need_generate_water().then(|| {
            WaterMesh::new(
                self.bounds.min_x as f32,
                self.bounds.min_z as f32,
                self.bounds.max_x as f32,
                self.bounds.max_z as f32,
                self.sea_level as f32,
                generator.water_color(self.moisture_average),
            )
        });

        self.cloud = if self.need_generate_cloud(&mut stream) {
            let (cx, cz) = self.bounds.center();
            let spread = 0.25 * (0.5 + self.moisture_average);
            Some(CloudMesh {
                center: Vec3::new(cx as f32, generator.cloud_elevation() as f32, cz as f32),
                half_extent: [
                    ((self.bounds.max_x - self.bounds.min_x) * spread) as f32,
                    ((self.bounds.max_z - self.bounds.min_z) * spread) as f32,
                ],
            })
        } else {
            None
        };

        self.transition(ChunkState::Ready)?;

        let summary = self.summary();
        tracing::debug!(
            coord = %self.coord,
            biome = %self.biome,
            low = summary.low,
            high = summary.high,
            moisture = summary.moisture_average,
            water = summary.has_water,
            cloud = summary.has_cloud,
            "chunk generated"
        );
        Ok(summary)
    }

    /// Statistics of the last generation.
    pub fn summary(&self) -> ChunkSummary {
        ChunkSummary {
            coord: self.coord,
            biome: self.biome,
            low: self.low,
            high: self.high,
            moisture_average: self.moisture_average,
            faces: self.surface.as_ref().map_or(0, SurfaceMesh::face_count),
            has_water: self.water.is_some(),
            has_cloud: self.cloud.is_some(),
        }
    }

    /// Water is needed when any sample is at or below sea level.
    pub fn need_generate_water(&self) -> bool {
        need_generate_water(self.low, self.sea_level)
    }

    /// Cloud decision; consumes one value from `stream`.
    pub fn need_generate_cloud(&self, stream: &mut RandomStream) -> bool {
        let draw = stream.next_f64();
        need_generate_cloud(self.moisture_average, draw)
    }

    /// Drop meshes, heights, and objects. Biome and summary stay.
    pub fn release_geometry(&mut self) {
        self.heights = Vec::new();
        self.surface = None;
        self.water = None;
        self.cloud = None;
        self.objects.clear();
    }

    /// Release geometry and move to `Evicted`. Valid from `Ready` or `Pending`.
    pub fn evict(&mut self) -> Result<(), ChunkStateError> {
        self.transition(ChunkState::Evicted)?;
        self.release_geometry();
        Ok(())
    }

    /// Bring an evicted chunk back to `Pending`.
    pub fn reset(&mut self) -> Result<(), ChunkStateError> {
        self.transition(ChunkState::Pending)
    }

    fn cell_at(&self, x: f64, z: f64) -> Option<CellHit> {
        if self.state != ChunkState::Ready || !self.bounds.contains(x, z) {
            return None;
        }
        let u = (x - self.bounds.min_x) / self.cell_width;
        let v = (z - self.bounds.min_z) / self.cell_depth;
        let col = (u.floor().max(0.0) as usize).min((self.cols as usize).saturating_sub(1));
        let row = (v.floor().max(0.0) as usize).min((self.rows as usize).saturating_sub(1));
        Some(CellHit {
            row,
            col,
            fu: (u - col as f64).clamp(0.0, 1.0),
            fv: (v - row as f64).clamp(0.0, 1.0),
        })
    }

    /// Surface height at `(x, z)`, interpolated on the mesh triangle that
    /// contains the point. `None` outside the chunk or before generation.
    pub fn height_at(&self, x: f64, z: f64) -> Option<f64> {
        let hit = self.cell_at(x, z)?;
        let stride = self.cols as usize + 1;
        let i00 = hit.row * stride + hit.col;
        let h00 = *self.heights.get(i00)?;
        let h10 = *self.heights.get(i00 + 1)?;
        let h01 = *self.heights.get(i00 + stride)?;
        let h11 = *self.heights.get(i00 + stride + 1)?;

        let h = if hit.upper() {
            h11 + (1.0 - hit.fu) * (h01 - h11) + (1.0 - hit.fv) * (h10 - h11)
        } else {
            h00 + hit.fu * (h10 - h00) + hit.fv * (h01 - h00)
        };
        Some(h)
    }

    /// Sub-biome of the face under `(x, z)`.
    pub fn sub_biome_at(&self, x: f64, z: f64) -> Option<&'static SubBiome> {
        let hit = self.cell_at(x, z)?;
        let face = 2 * (hit.row * self.cols as usize + hit.col) + usize::from(hit.upper());
        self.surface.as_ref()?.face_sub_biomes.get(face).copied()
    }

    /// Organism that spawns at `(x, z)` for a uniform `draw` in `[0, 1)`.
    pub fn organism_at(&self, x: f64, z: f64, draw: f64) -> Option<&'static str> {
        self.sub_biome_at(x, z)?.pick_organism(draw)
    }

    fn check_placement(&self, obj: &PlacedObject) -> Result<(), PlacementRejection> {
        if self.state != ChunkState::Ready {
            return Err(PlacementRejection::NotReady);
        }
        if !obj.radius.is_finite() || obj.radius < 0.0 {
            return Err(PlacementRejection::InvalidRadius);
        }
        if !self.bounds.contains(obj.x, obj.z) {
            return Err(PlacementRejection::OutOfBounds);
        }
        let ground = self
            .height_at(obj.x, obj.z)
            .ok_or(PlacementRejection::NotReady)?;
        if self.objects.iter().any(|o| o.overlaps(obj)) {
            return Err(PlacementRejection::Overlap);
        }
        if !obj.rule.admits(ground, obj.radius, self.sea_level) {
            return Err(PlacementRejection::RuleViolated);
        }
        Ok(())
    }

    /// Whether `obj` could be placed right now.
    pub fn can_place_object(&self, obj: &PlacedObject) -> bool {
        self.check_placement(obj).is_ok()
    }

    /// Place `obj` if it passes [`can_place_object`](Self::can_place_object).
    pub fn place_object(&mut self, obj: PlacedObject) -> bool {
        match self.check_placement(&obj) {
            Ok(()) => {
                self.objects.push(obj);
                true
            }
            Err(reason) => {
                tracing::debug!(
                    coord = %self.coord,
                    kind = %obj.kind,
                    x = obj.x,
                    z = obj.z,
                    %reason,
                    "placement rejected"
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atoll_config::WorldConfig;
    use atoll_terrain::Seed;

    fn generator() -> BiomeGenerator {
        let mut config = WorldConfig::standard();
        config.chunk.rows = 8;
        config.chunk.cols = 8;
        BiomeGenerator::from_config(Seed::from_phrase("abc"), &config).unwrap()
    }

    fn ready_chunk(g: &BiomeGenerator, coord: ChunkCoord, biome: BiomeKind) -> Chunk {
        let mut chunk = Chunk::new(coord, biome, g.grid(), g.sea_level());
        chunk.generate(g).unwrap();
        chunk
    }

    #[test]
    fn test_water_gating() {
        assert!(need_generate_water(-5.0, 0.0));
        assert!(need_generate_water(0.0, 0.0));
        assert!(!need_generate_water(10.0, 0.0));
    }

    #[test]
    fn test_cloud_threshold_branches() {
        assert!((cloud_threshold(0.8) - 0.7).abs() < 1e-12);
        assert!((cloud_threshold(0.9) - 0.6).abs() < 1e-12);
        assert_eq!(cloud_threshold(0.66), 0.975);
        assert_eq!(cloud_threshold(0.5), 0.975);
    }

    #[test]
    fn test_cloud_decision() {
        // Dry chunks never get clouds.
        assert!(!need_generate_cloud(0.34, 0.999));
        assert!(!need_generate_cloud(0.1, 0.999));
        assert!(need_generate_cloud(0.5, 0.98));
        assert!(!need_generate_cloud(0.5, 0.97));
        assert!(need_generate_cloud(0.9, 0.61));
        assert!(!need_generate_cloud(0.9, 0.59));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let g = generator();
        let coord = ChunkCoord::new(2, -3);
        for biome in BiomeKind::ALL {
            let a = ready_chunk(&g, coord, biome);
            let b = ready_chunk(&g, coord, biome);
            assert_eq!(a.heights(), b.heights());
            assert_eq!(a.surface(), b.surface());
            assert_eq!(a.summary(), b.summary());
        }
    }

    #[test]
    fn test_mesh_layout_and_winding() {
        let g = generator();
        let chunk = ready_chunk(&g, ChunkCoord::new(0, 0), BiomeKind::Grassland);
        let mesh = chunk.surface().unwrap();
        assert_eq!(mesh.vertex_count(), 9 * 9);
        assert_eq!(mesh.face_count(), 2 * 8 * 8);
        assert_eq!(mesh.face_colors.len(), mesh.face_count());
        assert_eq!(mesh.face_sub_biomes.len(), mesh.face_count());
        for face in 0..mesh.face_count() {
            assert!(mesh.face_normal(face).unwrap().y > 0.0, "face {face} points down");
        }
    }

    #[test]
    fn test_summary_statistics() {
        let g = generator();
        let chunk = ready_chunk(&g, ChunkCoord::new(-1, 4), BiomeKind::Swamp);
        let s = chunk.summary();
        assert_eq!(s.coord, ChunkCoord::new(-1, 4));
        assert!(chunk.heights().iter().all(|&h| h >= s.low && h <= s.high));
        assert!(chunk.heights().contains(&s.low));
        assert!((0.0..=1.0).contains(&s.moisture_average));
        assert_eq!(s.has_water, need_generate_water(s.low, g.sea_level()));
    }

    #[test]
    fn test_island_edges_need_water() {
        let g = generator();
        for biome in BiomeKind::ALL {
            let chunk = ready_chunk(&g, ChunkCoord::new(5, 5), biome);
            assert!(chunk.low() < g.sea_level(), "{biome}");
            let water = chunk.water().unwrap();
            assert_eq!(water.height(), g.sea_level() as f32);
        }
    }

    #[test]
    fn test_generate_twice_is_rejected() {
        let g = generator();
        let mut chunk = ready_chunk(&g, ChunkCoord::new(0, 0), BiomeKind::Desert);
        let err = chunk.generate(&g).unwrap_err();
        assert!(matches!(
            err,
            ChunkStateError::InvalidTransition {
                from: ChunkState::Ready,
                to: ChunkState::Generating,
                ..
            }
        ));
        assert_eq!(chunk.state(), ChunkState::Ready);
    }

    #[test]
    fn test_height_at_vertices_and_interior() {
        let g = generator();
        let chunk = ready_chunk(&g, ChunkCoord::new(1, 1), BiomeKind::Mesa);
        let b = *chunk.bounds();
        let (cw, cd) = (g.grid().cell_width, g.grid().cell_depth);
        let stride = g.grid().cols as usize + 1;

        for (r, c) in [(0, 0), (3, 5), (8, 8), (8, 0), (0, 8)] {
            let x = b.min_x + c as f64 * cw;
            let z = b.min_z + r as f64 * cd;
            let expected = chunk.heights()[r * stride + c];
            let h = chunk.height_at(x, z).unwrap();
            assert!((h - expected).abs() < 1e-9, "vertex ({r}, {c})");
        }

        // Cell center lies on the shared diagonal: mean of its two endpoints.
        let x = b.min_x + 2.5 * cw;
        let z = b.min_z + 4.5 * cd;
        let h10 = chunk.heights()[4 * stride + 3];
        let h01 = chunk.heights()[5 * stride + 2];
        let h = chunk.height_at(x, z).unwrap();
        assert!((h - (h10 + h01) * 0.5).abs() < 1e-9);

        assert!(chunk.height_at(b.min_x - 0.1, b.min_z).is_none());
        assert!(chunk.height_at(b.max_x + 0.1, b.max_z).is_none());
    }

    #[test]
    fn test_height_at_requires_ready() {
        let g = generator();
        let chunk = Chunk::new(ChunkCoord::new(0, 0), BiomeKind::Jungle, g.grid(), 0.0);
        let (cx, cz) = chunk.bounds().center();
        assert!(chunk.height_at(cx, cz).is_none());
        assert!(chunk.sub_biome_at(cx, cz).is_none());
    }

    #[test]
    fn test_evict_and_regenerate() {
        let g = generator();
        let coord = ChunkCoord::new(0, 2);
        let mut chunk = ready_chunk(&g, coord, BiomeKind::Alpine);
        let (cx, cz) = chunk.bounds().center();
        let before = chunk.height_at(cx, cz).unwrap();
        let surface = chunk.surface().cloned();

        chunk.evict().unwrap();
        assert_eq!(chunk.state(), ChunkState::Evicted);
        assert!(chunk.surface().is_none());
        assert!(chunk.water().is_none());
        assert!(chunk.height_at(cx, cz).is_none());
        assert_eq!(chunk.biome(), BiomeKind::Alpine);

        assert!(chunk.generate(&g).is_err());
        chunk.reset().unwrap();
        chunk.generate(&g).unwrap();
        assert_eq!(chunk.height_at(cx, cz), Some(before));
        assert_eq!(chunk.surface().cloned(), surface);
    }

    #[test]
    fn test_pending_chunk_can_be_evicted() {
        let g = generator();
        let mut chunk = Chunk::new(ChunkCoord::new(0, 0), BiomeKind::Tundra, g.grid(), 0.0);
        chunk.evict().unwrap();
        assert_eq!(chunk.state(), ChunkState::Evicted);
        assert!(chunk.evict().is_err());
    }

    #[test]
    fn test_placement_rules() {
        use crate::object::PlacementRule;

        let g = generator();
        let mut chunk = ready_chunk(&g, ChunkCoord::new(0, 0), BiomeKind::Grassland);
        let b = *chunk.bounds();
        let sea = g.sea_level();
        assert!(chunk.height_at(b.min_x, b.min_z).unwrap() < sea);

        let diver = PlacedObject::new("wreck", b.min_x, b.min_z, 0.0, PlacementRule::Underwater);
        assert!(chunk.can_place_object(&diver));
        assert!(chunk.place_object(diver));

        let buoy = PlacedObject::new("buoy", b.min_x, b.min_z, 1.0, PlacementRule::Floating);
        assert!(!chunk.place_object(buoy.clone()));
        let buoy = PlacedObject { x: b.max_x, z: b.max_z, ..buoy };
        assert!(chunk.place_object(buoy));

        let hut = PlacedObject::new("hut", b.max_x, b.min_z, 0.5, PlacementRule::Ground);
        assert!(!chunk.can_place_object(&hut));

        let outside = PlacedObject::new("hut", b.max_x + 1.0, b.min_z, 0.5, PlacementRule::Floating);
        assert!(!chunk.can_place_object(&outside));

        let bad = PlacedObject::new("hut", b.min_x, b.max_z, -1.0, PlacementRule::Floating);
        assert!(!chunk.can_place_object(&bad));

        assert_eq!(chunk.objects().len(), 2);

        // Highest vertex hosts a ground object if the island breaks the surface.
        if chunk.high() > sea {
            let stride = g.grid().cols as usize + 1;
            let peak = chunk
                .heights()
                .iter()
                .position(|&h| h == chunk.high())
                .unwrap();
            let x = b.min_x + (peak % stride) as f64 * g.grid().cell_width;
            let z = b.min_z + (peak / stride) as f64 * g.grid().cell_depth;
            let hut = PlacedObject::new("hut", x, z, 0.1, PlacementRule::Ground);
            assert!(chunk.place_object(hut));
        }

        chunk.evict().unwrap();
        assert!(chunk.objects().is_empty());
    }

    #[test]
    fn test_placement_requires_ready() {
        let g = generator();
        let chunk = Chunk::new(ChunkCoord::new(0, 0), BiomeKind::Reef, g.grid(), 0.0);
        let (cx, cz) = chunk.bounds().center();
        let obj = PlacedObject::new("buoy", cx, cz, 1.0, crate::object::PlacementRule::Floating);
        assert!(!chunk.can_place_object(&obj));
    }

    #[test]
    fn test_organism_comes_from_face_sub_biome() {
        let g = generator();
        let chunk = ready_chunk(&g, ChunkCoord::new(3, 3), BiomeKind::Jungle);
        let b = *chunk.bounds();
        for i in 0..20 {
            let x = b.min_x + (i as f64 + 0.3) * 1.5;
            let z = b.min_z + (i as f64 + 0.6) * 1.1;
            let Some(sub) = chunk.sub_biome_at(x, z) else {
                continue;
            };
            if let Some(name) = chunk.organism_at(x, z, 0.5) {
                assert!(sub.organisms.iter().any(|o| o.name == name));
            }
        }
    }
}

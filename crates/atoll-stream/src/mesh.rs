//! Geometry produced by chunk generation.

use atoll_terrain::{Color, SubBiome};
use glam::Vec3;

/// Triangulated, per-face colored terrain surface of one chunk.
///
/// Faces are stored in cell order: cell `(r, c)` owns faces `2 * (r * cols + c)`
/// and the one after it. Every triangle is wound counter-clockwise when seen
/// from above, so face normals point up.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SurfaceMesh {
    /// Vertex positions in world coordinates (`y` is height).
    pub positions: Vec<Vec3>,
    /// Triangle indices, three per face.
    pub indices: Vec<u32>,
    /// One color per face.
    pub face_colors: Vec<[f32; 3]>,
    /// Sub-biome chosen for each face.
    pub face_sub_biomes: Vec<&'static SubBiome>,
}

impl SurfaceMesh {
    /// Creates an empty mesh with room for a `rows x cols` cell grid.
    pub fn with_grid(rows: u32, cols: u32) -> Self {
        let vertices = (rows as usize + 1) * (cols as usize + 1);
        let faces = rows as usize * cols as usize * 2;
        Self {
            positions: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(faces * 3),
            face_colors: Vec::with_capacity(faces),
            face_sub_biomes: Vec::with_capacity(faces),
        }
    }

    /// Appends a vertex and returns its index.
    pub fn push_vertex(&mut self, position: Vec3) -> u32 {
        self.positions.push(position);
        (self.positions.len() - 1) as u32
    }

    /// Appends a triangle with its color and sub-biome.
    pub fn push_face(&mut self, tri: [u32; 3], color: Color, sub: &'static SubBiome) {
        self.indices.extend_from_slice(&tri);
        self.face_colors.push(color.to_array());
        self.face_sub_biomes.push(sub);
    }

    /// Number of triangles.
    pub fn face_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if the mesh has no faces.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Unnormalized normal of face `face`.
    pub fn face_normal(&self, face: usize) -> Option<Vec3> {
        let tri = self.indices.get(face * 3..face * 3 + 3)?;
        let a = *self.positions.get(tri[0] as usize)?;
        let b = *self.positions.get(tri[1] as usize)?;
        let c = *self.positions.get(tri[2] as usize)?;
        Some((b - a).cross(c - a))
    }
}

/// Flat water plane covering a chunk at sea level.
#[derive(Clone, Debug, PartialEq)]
pub struct WaterMesh {
    /// Corners at sea level, counter-clockwise from above.
    pub corners: [Vec3; 4],
    /// Tint derived from the chunk's average moisture.
    pub color: [f32; 3],
}

impl WaterMesh {
    /// Water plane over `[min_x, max_x] x [min_z, max_z]` at `height`.
    pub fn new(min_x: f32, min_z: f32, max_x: f32, max_z: f32, height: f32, color: Color) -> Self {
        Self {
            corners: [
                Vec3::new(min_x, height, min_z),
                Vec3::new(min_x, height, max_z),
                Vec3::new(max_x, height, max_z),
                Vec3::new(max_x, height, min_z),
            ],
            color: color.to_array(),
        }
    }

    /// Height of the plane.
    pub fn height(&self) -> f32 {
        self.corners[0].y
    }
}

/// A single cloud puff floating over a chunk.
#[derive(Clone, Debug, PartialEq)]
pub struct CloudMesh {
    /// Cloud center; `y` is the cloud elevation.
    pub center: Vec3,
    /// Horizontal half-extents along X and Z.
    pub half_extent: [f32; 2],
}

#[cfg(test)]
mod tests {
    use super::*;
    use atoll_terrain::biome::BEACH;

    #[test]
    fn test_push_face_keeps_buffers_aligned() {
        let mut mesh = SurfaceMesh::with_grid(1, 1);
        let a = mesh.push_vertex(Vec3::new(0.0, 0.0, 0.0));
        let b = mesh.push_vertex(Vec3::new(0.0, 0.0, 1.0));
        let c = mesh.push_vertex(Vec3::new(1.0, 0.0, 0.0));
        mesh.push_face([a, b, c], Color::rgb(1.0, 0.0, 0.0), &BEACH);

        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.face_colors, vec![[1.0, 0.0, 0.0]]);
        assert_eq!(mesh.face_sub_biomes[0].name, "common.beach");
        assert!(mesh.face_normal(0).unwrap().y > 0.0);
        assert!(mesh.face_normal(1).is_none());
    }

    #[test]
    fn test_water_plane_height() {
        let water = WaterMesh::new(0.0, 0.0, 8.0, 8.0, -0.5, Color::rgb(0.0, 0.0, 1.0));
        assert_eq!(water.height(), -0.5);
        assert!(water.corners.iter().all(|c| c.y == -0.5));
    }
}

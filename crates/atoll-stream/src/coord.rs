//! Chunk-grid coordinates.

use std::fmt;

use atoll_terrain::GridSpec;
use serde::{Deserialize, Serialize};

/// Position of a chunk in the world grid.
///
/// `row` advances along world Z and `col` along world X. Ordering is
/// row-major, which is used to break distance ties deterministically.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct ChunkCoord {
    /// Grid row (world Z).
    pub row: i64,
    /// Grid column (world X).
    pub col: i64,
}

impl ChunkCoord {
    /// Creates a new chunk coordinate.
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Chunk containing world `(x, z)`. Floors, so negative positions map to
    /// negative rows and columns.
    pub fn from_world(grid: &GridSpec, x: f64, z: f64) -> Self {
        let (row, col) = grid.chunk_of(x, z);
        Self { row, col }
    }

    /// Returns the coordinate offset by `(d_row, d_col)`, saturating at the
    /// edges of the grid.
    pub fn offset(self, d_row: i64, d_col: i64) -> Self {
        Self {
            row: self.row.saturating_add(d_row),
            col: self.col.saturating_add(d_col),
        }
    }

    /// Squared grid distance to `other`, saturating at `u64::MAX`.
    pub fn dist_sq(self, other: ChunkCoord) -> u64 {
        let dr = (self.row as i128 - other.row as i128).unsigned_abs();
        let dc = (self.col as i128 - other.col as i128).unsigned_abs();
        let d = dr.saturating_mul(dr).saturating_add(dc.saturating_mul(dc));
        u64::try_from(d).unwrap_or(u64::MAX)
    }

    /// World `(x, z)` of the chunk's minimum corner.
    pub fn origin(self, grid: &GridSpec) -> (f64, f64) {
        (
            self.col as f64 * grid.chunk_width(),
            self.row as f64 * grid.chunk_depth(),
        )
    }
}

impl fmt::Display for ChunkCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> GridSpec {
        GridSpec {
            rows: 8,
            cols: 8,
            cell_width: 2.0,
            cell_depth: 4.0,
            min_height: -10.0,
            max_height: 10.0,
        }
    }

    #[test]
    fn test_from_world_floors() {
        let g = grid();
        assert_eq!(ChunkCoord::from_world(&g, 0.0, 0.0), ChunkCoord::new(0, 0));
        assert_eq!(ChunkCoord::from_world(&g, 15.9, 31.9), ChunkCoord::new(0, 0));
        assert_eq!(ChunkCoord::from_world(&g, 16.0, 32.0), ChunkCoord::new(1, 1));
        assert_eq!(ChunkCoord::from_world(&g, -0.1, -0.1), ChunkCoord::new(-1, -1));
        assert_eq!(ChunkCoord::from_world(&g, -16.0, -32.1), ChunkCoord::new(-2, -1));
    }

    #[test]
    fn test_origin_round_trips() {
        let g = grid();
        let coord = ChunkCoord::new(-3, 5);
        let (x, z) = coord.origin(&g);
        assert_eq!((x, z), (80.0, -96.0));
        assert_eq!(ChunkCoord::from_world(&g, x + 0.5, z + 0.5), coord);
    }

    #[test]
    fn test_dist_sq() {
        let a = ChunkCoord::new(0, 0);
        assert_eq!(a.dist_sq(ChunkCoord::new(3, -4)), 25);
        assert_eq!(ChunkCoord::new(3, -4).dist_sq(a), 25);
        assert_eq!(a.dist_sq(a.offset(1, 1)), 2);
    }

    #[test]
    fn test_far_coordinates_saturate() {
        let edge = ChunkCoord::new(i64::MAX, i64::MIN);
        assert_eq!(edge.offset(3, -3), edge);
        assert_eq!(edge.offset(-1, 1), ChunkCoord::new(i64::MAX - 1, i64::MIN + 1));
        assert_eq!(edge.dist_sq(ChunkCoord::new(i64::MIN, i64::MAX)), u64::MAX);
        assert_eq!(edge.dist_sq(edge.offset(-2, 0)), 4);

        let g = grid();
        let far = ChunkCoord::from_world(&g, 1e300, -1e300);
        assert_eq!(far, ChunkCoord::new(i64::MIN, i64::MAX));
    }

    #[test]
    fn test_ordering_is_row_major() {
        let mut coords = vec![
            ChunkCoord::new(1, 0),
            ChunkCoord::new(0, 1),
            ChunkCoord::new(0, -1),
        ];
        coords.sort();
        assert_eq!(
            coords,
            vec![
                ChunkCoord::new(0, -1),
                ChunkCoord::new(0, 1),
                ChunkCoord::new(1, 0),
            ]
        );
    }
}

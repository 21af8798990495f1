//! Island edge shaping.
//!
//! Every chunk is shaped as an island: interior elevation is kept (scaled by
//! `a`), and elevation drops as the normalized distance from the chunk center
//! grows, so chunk borders sink below sea level.

/// Blend interior elevation `e` with normalized edge distance `d`.
///
/// `a` scales the interior, `b` is the knee exponent (larger keeps the
/// interior flat for longer) and `c` is the outer drop reached at `d = 1`.
/// Returns `a * e` at `d = 0` and is non-increasing in `d` for `c >= 0`.
/// Negative distances are treated as zero.
pub fn island_add_method(a: f64, b: f64, c: f64, d: f64, e: f64) -> f64 {
    let d = d.max(0.0);
    a * e - c * libm::pow(d, b)
}

/// Map a chunk-local coordinate in `[0, extent]` to `[-1, 1]`.
pub fn normalized_offset(local: f64, extent: f64) -> f64 {
    2.0 * local / extent - 1.0
}

/// Distance metric applied to normalized chunk coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DistanceMetric {
    /// `sqrt(nx² + nz²)`: round landmasses.
    Euclidean,
    /// `|nx| + |nz|`: angular, diamond-shaped coastlines.
    Manhattan,
}

impl DistanceMetric {
    /// Distance of `(nx, nz)` from the chunk center.
    pub fn distance(self, nx: f64, nz: f64) -> f64 {
        match self {
            DistanceMetric::Euclidean => libm::sqrt(nx * nx + nz * nz),
            DistanceMetric::Manhattan => nx.abs() + nz.abs(),
        }
    }
}

/// Per-biome island parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IslandShape {
    /// Interior flatness/scale.
    pub a: f64,
    /// Falloff sharpness (knee exponent).
    pub b: f64,
    /// Outer steepness.
    pub c: f64,
    /// Metric used for the edge distance.
    pub metric: DistanceMetric,
}

impl IslandShape {
    /// Shape interior elevation `e` at normalized position `(nx, nz)`.
    pub fn apply(&self, e: f64, nx: f64, nz: f64) -> f64 {
        island_add_method(self.a, self.b, self.c, self.metric.distance(nx, nz), e)
    }
}

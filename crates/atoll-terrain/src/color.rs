//! Linear RGB colors and the height color ramp.

use serde::{Deserialize, Serialize};

/// Linear RGB color with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Build from channel values.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    /// Build from an `[r, g, b]` array.
    pub const fn from_array(c: [f32; 3]) -> Self {
        Self::rgb(c[0], c[1], c[2])
    }

    /// `[r, g, b]` array for vertex buffers.
    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Per-channel linear interpolation; `t` is not clamped.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }
}

/// Piecewise-linear color ramp over `(stop, color)` pairs.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorRamp {
    stops: Vec<(f32, Color)>,
}

impl ColorRamp {
    /// Build a ramp; stops are sorted ascending.
    pub fn new(stops: impl IntoIterator<Item = (f32, Color)>) -> Self {
        let mut stops: Vec<_> = stops.into_iter().collect();
        stops.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { stops }
    }

    /// Sorted stops.
    pub fn stops(&self) -> &[(f32, Color)] {
        &self.stops
    }

    /// Color at fractional position `t`.
    ///
    /// Blends linearly between the two bracketing stops and clamps to the
    /// first/last color outside the stop range. An empty ramp is black.
    pub fn color_at(&self, t: f32) -> Color {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return Color::default();
        };
        if t <= first.0 {
            return first.1;
        }
        if t >= last.0 {
            return last.1;
        }

        for pair in self.stops.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if t >= lo.0 && t < hi.0 {
                let span = hi.0 - lo.0;
                if span <= 0.0 {
                    return hi.1;
                }
                return lo.1.lerp(hi.1, (t - lo.0) / span);
            }
        }
        last.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Color = Color::rgb(1.0, 0.0, 0.0);
    const B: Color = Color::rgb(0.0, 1.0, 0.0);
    const C: Color = Color::rgb(0.0, 0.0, 1.0);

    fn close(a: Color, b: Color) -> bool {
        (a.r - b.r).abs() < 1e-6 && (a.g - b.g).abs() < 1e-6 && (a.b - b.b).abs() < 1e-6
    }

    fn ramp() -> ColorRamp {
        ColorRamp::new([(0.0, A), (0.5, B), (1.0, C)])
    }

    #[test]
    fn test_midpoint_between_stops() {
        assert!(close(ramp().color_at(0.25), A.lerp(B, 0.5)));
        assert!(close(ramp().color_at(0.75), B.lerp(C, 0.5)));
    }

    #[test]
    fn test_clamped_outside_range() {
        assert_eq!(ramp().color_at(-1.0), A);
        assert_eq!(ramp().color_at(2.0), C);
    }

    #[test]
    fn test_exact_stops() {
        assert_eq!(ramp().color_at(0.0), A);
        assert!(close(ramp().color_at(0.5), B));
        assert_eq!(ramp().color_at(1.0), C);
    }

    #[test]
    fn test_unsorted_input_is_sorted() {
        let r = ColorRamp::new([(1.0, C), (0.0, A), (0.5, B)]);
        assert_eq!(r, ramp());
        assert!(close(r.color_at(0.25), A.lerp(B, 0.5)));
    }

    #[test]
    fn test_single_stop_and_empty() {
        let single = ColorRamp::new([(0.3, B)]);
        assert_eq!(single.color_at(0.0), B);
        assert_eq!(single.color_at(0.9), B);
        assert_eq!(ColorRamp::new([]).color_at(0.5), Color::default());
    }

    #[test]
    fn test_duplicate_stop_does_not_divide_by_zero() {
        let r = ColorRamp::new([(0.0, A), (0.5, B), (0.5, C), (1.0, A)]);
        let c = r.color_at(0.5);
        assert!(c.r.is_finite() && c.g.is_finite() && c.b.is_finite());
    }

    #[test]
    fn test_from_hex() {
        let c = Color::from_hex(0xff8000);
        assert!((c.r - 1.0).abs() < 1e-6);
        assert!((c.g - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.b, 0.0);
    }
}

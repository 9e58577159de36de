use nalgebra::{Point2, Vector2};
use serde::Serialize;

/// How far a segment endpoint is projected along the line direction from the
/// closest-to-origin point. Large enough to span any sensible frame.
pub const SEGMENT_REACH_PX: f32 = 1000.0;

/// A straight line in polar form: `rho` is the signed perpendicular distance
/// from the image origin in pixels, `theta` the angle of the line's normal
/// from the horizontal axis. `theta` always lies in `[0, π)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PolarLine {
    pub rho: f32,
    pub theta: f32,
    /// Accumulated vote count; candidates are ranked by this, descending.
    pub votes: u32,
}

/// Renderable segment spanning the image, derived from a polar line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LineSegment {
    pub p0: Point2<i32>,
    pub p1: Point2<i32>,
}

impl LineSegment {
    /// Converts a polar line into an image-space segment by walking
    /// [`SEGMENT_REACH_PX`] in both directions from the foot of the normal.
    pub fn from_polar(line: &PolarLine) -> Self {
        let (sin_t, cos_t) = line.theta.sin_cos();
        let foot = Vector2::new(cos_t * line.rho, sin_t * line.rho);
        let dir = Vector2::new(-sin_t, cos_t);
        let a = foot + SEGMENT_REACH_PX * dir;
        let b = foot - SEGMENT_REACH_PX * dir;
        LineSegment {
            p0: Point2::new(a.x.round() as i32, a.y.round() as i32),
            p1: Point2::new(b.x.round() as i32, b.y.round() as i32),
        }
    }
}

/// Compact result of one detector invocation.
#[derive(Clone, Debug, Default, Serialize)]
pub struct RowResult {
    /// Whether the threshold sweep reached the configured row count. A
    /// `false` here is a degraded-but-valid result, not an error.
    pub target_met: bool,
    /// Detected rows as renderable segments, at most `target_row_count` of
    /// them, strongest first.
    pub lines: Vec<LineSegment>,
    pub latency_ms: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_line_maps_to_vertical_segment() {
        let line = PolarLine {
            rho: 42.0,
            theta: 0.0,
            votes: 1,
        };
        let seg = LineSegment::from_polar(&line);
        assert_eq!(seg.p0.x, 42);
        assert_eq!(seg.p1.x, 42);
        assert_eq!((seg.p0.y - seg.p1.y).abs(), 2000);
    }

    #[test]
    fn horizontal_line_maps_to_horizontal_segment() {
        let line = PolarLine {
            rho: 10.0,
            theta: std::f32::consts::FRAC_PI_2,
            votes: 1,
        };
        let seg = LineSegment::from_polar(&line);
        assert_eq!(seg.p0.y, 10);
        assert_eq!(seg.p1.y, 10);
        assert_eq!((seg.p0.x - seg.p1.x).abs(), 2000);
    }

    #[test]
    fn negative_rho_is_respected() {
        let line = PolarLine {
            rho: -25.0,
            theta: 0.0,
            votes: 1,
        };
        let seg = LineSegment::from_polar(&line);
        assert_eq!(seg.p0.x, -25);
        assert_eq!(seg.p1.x, -25);
    }
}

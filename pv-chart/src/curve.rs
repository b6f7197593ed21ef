//! Smooth curve interpolation for line graphs.
//!
//! Turns an ordered list of pixel-space points into cubic Bézier segments
//! that pass through every point. Control points come from a Catmull-Rom
//! derived rule, which gives tangent continuity at interior points.

use crate::geometry::{PathSegment, Point};

/// Build the smoothed path through `points`.
///
/// Returns `points.len() - 1` segments, or none when fewer than two points
/// are given. For each pair (P1, P2) with neighbours P0 and P3 (each falling
/// back to the nearest endpoint at the edges of the series):
///
/// - `control1 = P1 + (P2 - P0) / 6`
/// - `control2 = P2 - (P3 - P1) / 6`
pub fn smooth_path(points: &[Point]) -> Vec<PathSegment> {
    if points.len() < 2 {
        return Vec::new();
    }

    let last = points.len() - 1;
    let mut segments = Vec::with_capacity(last);

    for i in 0..last {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(last)];

        segments.push(PathSegment {
            start: p1,
            control1: p1 + (p2 - p0) / 6.0,
            control2: p2 - (p3 - p1) / 6.0,
            end: p2,
        });
    }

    segments
}

/// Render segments as SVG path data: `M x y C c1x c1y, c2x c2y, x y ...`.
///
/// An empty slice yields an empty string, which draws nothing.
pub fn path_data(segments: &[PathSegment]) -> String {
    let Some(first) = segments.first() else {
        return String::new();
    };

    let mut d = format!("M {} {}", first.start.x, first.start.y);
    for seg in segments {
        d.push_str(&format!(
            " C {} {}, {} {}, {} {}",
            seg.control1.x, seg.control1.y, seg.control2.x, seg.control2.y, seg.end.x, seg.end.y
        ));
    }
    d
}

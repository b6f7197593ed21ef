//! Pixel-space primitives shared by the curve and bar modules.

use serde::Serialize;
use std::ops::{Add, Div, Sub};

/// A position in output pixel space. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

/// One cubic Bézier segment of a smoothed path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathSegment {
    pub start: Point,
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
}

/// A horizontal reference line at a labeled scale value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Gridline {
    /// The scale value the line marks (e.g. 120 bpm).
    pub level: f64,
    /// Pixel y of the line within the chart band.
    pub y: f64,
}

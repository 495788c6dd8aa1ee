//! Coordinate primitives for the subdivision engine and shape builders.
//!
//! A [`Point`] doubles as a position vector (a displacement anchored at the
//! origin); the two intents are kept apart by naming at the call sites
//! rather than by separate types.

use std::ops::{Add, Mul, Sub};

/// A 2D coordinate pair. All arithmetic is `f64` so deep recursion does not
/// accumulate drift; nothing is rounded before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Shorthand constructor.
pub const fn pt(x: f64, y: f64) -> Point {
    Point { x, y }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        pt(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        pt(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, k: f64) -> Point {
        pt(self.x * k, self.y * k)
    }
}

/// The vector from `a` to `b`.
pub fn displacement(a: Point, b: Point) -> Point {
    b - a
}

/// Rotate `point` about `axis` by `degrees`, counterclockwise positive in
/// the usual math convention. Negative angles are fine; rotating a point
/// onto itself (zero displacement) returns the point unchanged.
pub fn rotate(axis: Point, point: Point, degrees: f64) -> Point {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let v = displacement(axis, point);
    pt(axis.x + v.x * cos - v.y * sin, axis.y + v.x * sin + v.y * cos)
}

/// A line segment tagged with the recursion depth at which it was created
/// (0 = root). Endpoints are owned values, so recursive branches never
/// alias each other. Never mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub level: u32,
}

impl Segment {
    pub const fn new(start: Point, end: Point, level: u32) -> Self {
        Self { start, end, level }
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        let v = displacement(self.start, self.end);
        v.x.hypot(v.y)
    }
}

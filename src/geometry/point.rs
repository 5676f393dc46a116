//! Point type and Euclidean distance.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in the Euclidean plane.
///
/// Equality is by coordinate value. The construction heuristics track
/// placement by index into the point slice, so set-membership bookkeeping
/// never depends on coordinate comparison (the upstream generator
/// guarantees distinct coordinates anyway).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two points.
///
/// Symmetric, never fails, and zero iff the points are equal by value.
pub fn distance(a: Point, b: Point) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

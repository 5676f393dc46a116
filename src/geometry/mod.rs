//! Geometry primitives: points, distances, tour costs, convex hull.
//!
//! Pure functions with no side effects. Every heuristic in the crate is
//! built from [`distance`], [`tour_cost`] and [`insertion_cost`];
//! [`convex_hull`] additionally seeds the convex-hull-insertion strategy.

mod cost;
mod hull;
mod point;

pub use cost::{insertion_cost, tour_cost};
pub use hull::convex_hull;
pub use point::{distance, Point};

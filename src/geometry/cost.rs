//! Tour and insertion cost primitives.

use super::point::{distance, Point};

/// Total cost of an ordered point sequence: the sum of Euclidean
/// distances over consecutive pairs.
///
/// Sequences of length 0 or 1 cost zero. The closing edge of a cycle is
/// never implied; to price a closed tour, repeat the first point at the
/// end of the sequence.
pub fn tour_cost(points: &[Point]) -> f64 {
    points.windows(2).map(|w| distance(w[0], w[1])).sum()
}

/// Marginal cost of inserting `p` between adjacent tour points `a` and `b`:
/// `d(a,p) + d(p,b) - d(a,b)`.
///
/// Non-negative by the triangle inequality, and exactly zero when `p`
/// lies on the segment from `a` to `b`. Ties between equally cheap
/// positions are broken by the strategies' scan order, never by nudging
/// the value.
pub fn insertion_cost(a: Point, p: Point, b: Point) -> f64 {
    distance(a, p) + distance(p, b) - distance(a, b)
}

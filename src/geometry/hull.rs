//! Convex hull via the Andrew monotone chain construction.

use super::point::Point;

/// Cross product of `(b - a) x (c - a)`; positive for a left turn.
fn cross(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Computes the convex hull of `points`, returned as indices into the
/// input slice in counter-clockwise order.
///
/// Points are sorted lexicographically by `(x, y)`, then a lower and an
/// upper chain are built, rejecting the previous chain point while the
/// last three make a non-left turn (cross product `<= 0`). Collinear
/// boundary points are therefore excluded from the hull.
///
/// Fewer than three input points, or a fully collinear set, yield the
/// degenerate chain of extreme points only.
pub fn convex_hull(points: &[Point]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&i, &j| {
        let (a, b) = (points[i], points[j]);
        a.x.partial_cmp(&b.x)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal))
    });

    if order.len() < 3 {
        return order;
    }

    let mut lower: Vec<usize> = Vec::new();
    for &i in &order {
        while lower.len() >= 2 {
            let turn = cross(
                points[lower[lower.len() - 2]],
                points[lower[lower.len() - 1]],
                points[i],
            );
            if turn > 0.0 {
                break;
            }
            lower.pop();
        }
        lower.push(i);
    }

    let mut upper: Vec<usize> = Vec::new();
    for &i in order.iter().rev() {
        while upper.len() >= 2 {
            let turn = cross(
                points[upper[upper.len() - 2]],
                points[upper[upper.len() - 1]],
                points[i],
            );
            if turn > 0.0 {
                break;
            }
            upper.pop();
        }
        upper.push(i);
    }

    // Each chain ends on the other chain's first point.
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

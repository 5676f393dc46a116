//! Random point-set generation on an integer grid.
//!
//! The construction engine only requires that no two points are equal by
//! value; sampling grid cells without replacement guarantees it.

use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;
use thiserror::Error;

use crate::geometry::Point;

/// Errors from point-set generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// More points were requested than the usable grid region has cells.
    #[error("{requested} points requested but the region holds only {available} cells")]
    RegionTooSmall {
        requested: usize,
        available: usize,
    },
}

/// Samples `count` distinct points on a `width` x `height` cell grid,
/// keeping `margin` empty cells on every side. Coordinates are the cell
/// coordinates as `f64`.
///
/// # Errors
///
/// [`GenerateError::RegionTooSmall`] when `count` exceeds the number of
/// usable cells.
pub fn generate_points(
    count: usize,
    width: usize,
    height: usize,
    margin: usize,
    seed: Option<u64>,
) -> Result<Vec<Point>, GenerateError> {
    let usable_w = width.saturating_sub(2 * margin);
    let usable_h = height.saturating_sub(2 * margin);
    let available = usable_w * usable_h;
    if count > available {
        return Err(GenerateError::RegionTooSmall {
            requested: count,
            available,
        });
    }
    if count == 0 {
        return Ok(Vec::new());
    }

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::seed_from_u64(rand::random()),
    };

    let cells = index::sample(&mut rng, available, count);
    Ok(cells
        .iter()
        .map(|cell| {
            Point::new(
                (margin + cell % usable_w) as f64,
                (margin + cell / usable_w) as f64,
            )
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_the_requested_count() {
        let points = generate_points(20, 10, 10, 1, Some(1)).expect("generation failed");
        assert_eq!(points.len(), 20);
    }

    #[test]
    fn test_no_two_points_collide() {
        let points = generate_points(60, 10, 10, 1, Some(2)).expect("generation failed");
        for (i, p) in points.iter().enumerate() {
            assert!(!points[i + 1..].contains(p), "duplicate point {p:?}");
        }
    }

    #[test]
    fn test_margin_is_respected() {
        let points = generate_points(30, 12, 12, 2, Some(3)).expect("generation failed");
        for p in &points {
            assert!(p.x >= 2.0 && p.x <= 9.0, "x out of margin: {p:?}");
            assert!(p.y >= 2.0 && p.y <= 9.0, "y out of margin: {p:?}");
        }
    }

    #[test]
    fn test_overfull_request_is_rejected() {
        let err = generate_points(100, 5, 5, 1, Some(4));
        assert_eq!(
            err,
            Err(GenerateError::RegionTooSmall {
                requested: 100,
                available: 9,
            })
        );
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = generate_points(15, 20, 20, 1, Some(42)).expect("generation failed");
        let b = generate_points(15, 20, 20, 1, Some(42)).expect("generation failed");
        assert_eq!(a, b);
    }
}

//! Furthest-insertion construction.

use crate::cancel::CancelToken;
use crate::geometry::{distance, Point};

use super::config::ConstructConfig;
use super::support::{self, Emitter};
use super::types::{RunResult, StepObserver, TourStrategy};

/// Furthest-insertion heuristic.
///
/// Starts deterministically from the first point of the set, immediately
/// adds the point furthest from it, then each iteration selects the
/// remaining point whose nearest tour point is furthest away (the most
/// isolated point relative to the current tour) and inserts it at the
/// edge with the smallest insertion cost. Selection ties go to the first
/// point in remaining order; insertion ties to the first edge in tour
/// order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FurthestInsertion;

impl TourStrategy for FurthestInsertion {
    fn name(&self) -> &'static str {
        "furthest-insertion"
    }

    fn construct(
        &self,
        points: &[Point],
        config: &ConstructConfig,
        token: &CancelToken,
        on_step: &mut StepObserver<'_>,
    ) -> RunResult {
        let mut emitter = Emitter::new(on_step);
        if points.is_empty() {
            return emitter.complete(points, Vec::new());
        }

        // No random draw here; the start is the first point unless pinned.
        let start = match config.start_index {
            Some(i) if i < points.len() => i,
            _ => 0,
        };
        let mut tour = vec![start];
        let mut remaining: Vec<usize> = (0..points.len()).filter(|&i| i != start).collect();

        if !remaining.is_empty() {
            let anchor = points[start];
            let mut best_slot = 0;
            let mut best_dist = f64::NEG_INFINITY;
            for (slot, &candidate) in remaining.iter().enumerate() {
                let d = distance(anchor, points[candidate]);
                if d > best_dist {
                    best_dist = d;
                    best_slot = slot;
                }
            }

            let second = remaining.remove(best_slot);
            tour.push(second);
            emitter.progress(points, &tour, false, support::closed_cost(points, &tour));
        }

        while !remaining.is_empty() {
            if token.is_cancelled() {
                return emitter.stop(points, tour);
            }

            // Selection: maximize the distance to the nearest tour point.
            let mut best_slot = 0;
            let mut best_isolation = f64::NEG_INFINITY;
            for (slot, &candidate) in remaining.iter().enumerate() {
                let p = points[candidate];
                let nearest = tour
                    .iter()
                    .map(|&t| distance(p, points[t]))
                    .fold(f64::INFINITY, f64::min);
                if nearest > best_isolation {
                    best_isolation = nearest;
                    best_slot = slot;
                }
            }

            let next = remaining.remove(best_slot);
            let (pos, _) = support::cheapest_position(points, &tour, next);
            tour.insert(pos, next);
            emitter.progress(points, &tour, false, support::closed_cost(points, &tour));
        }

        emitter.complete(points, tour)
    }
}

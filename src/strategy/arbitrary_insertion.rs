//! Arbitrary-insertion construction.

use crate::cancel::CancelToken;
use crate::geometry::Point;

use super::config::ConstructConfig;
use super::support::{self, Emitter};
use super::types::{RunResult, StepObserver, TourStrategy};

/// Arbitrary-insertion heuristic.
///
/// Seeds a two-point tour from a random start point and the first other
/// point in set order, then consumes the remaining points in their
/// current order, inserting each at the gap (wrap-around included) that
/// minimizes the resulting closed-tour cost. The smallest gap index wins
/// ties.
///
/// Candidate gaps are priced by recomputing the full closed-tour cost
/// rather than the incremental insertion formula. The two agree on which
/// gap wins; the full recompute is kept so reported step costs match the
/// historical behavior of this heuristic family exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArbitraryInsertion;

impl TourStrategy for ArbitraryInsertion {
    fn name(&self) -> &'static str {
        "arbitrary-insertion"
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

        let mut rng = support::create_rng(config);
        let (mut tour, mut remaining) = support::seed_pair(points, config, &mut rng);

        while !remaining.is_empty() {
            if token.is_cancelled() {
                return emitter.stop(points, tour);
            }

            let candidate = remaining.remove(0);
            let mut best_pos = 0;
            let mut best_cost = f64::INFINITY;
            for pos in 0..=tour.len() {
                let mut trial = tour.clone();
                trial.insert(pos, candidate);
                let cost = support::closed_cost(points, &trial);
                if cost < best_cost {
                    best_cost = cost;
                    best_pos = pos;
                }
            }

            tour.insert(best_pos, candidate);
            emitter.progress(points, &tour, false, best_cost);
        }

        emitter.complete(points, tour)
    }
}

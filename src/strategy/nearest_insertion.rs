//! Nearest-insertion construction.

use crate::cancel::CancelToken;
use crate::geometry::Point;

use super::config::ConstructConfig;
use super::support::{self, Emitter};
use super::types::{RunResult, StepObserver, TourStrategy};

/// Nearest-insertion heuristic.
///
/// Seeds a two-point tour from a random start point and the first other
/// point in set order, then repeatedly scans every (remaining point,
/// tour edge) pair and applies the one with the smallest insertion cost.
/// The scan runs points in remaining order and edges in tour order, so
/// the first minimal pair wins ties.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestInsertion;

impl TourStrategy for NearestInsertion {
    fn name(&self) -> &'static str {
        "nearest-insertion"
    }

    fn construct(
        &self,
        points: &[Point],
        config: &ConstructConfig,
        token: &CancelToken,
        on_step: &mut StepObserver<'_>,
    ) -> RunResult {
        let emitter = Emitter::new(on_step);
        if points.is_empty() {
            return emitter.complete(points, Vec::new());
        }

        let mut rng = support::create_rng(config);
        let (tour, remaining) = support::seed_pair(points, config, &mut rng);

        support::nearest_insertion_loop(points, tour, remaining, token, emitter)
    }
}

//! Convex-hull-insertion construction.

use crate::cancel::CancelToken;
use crate::geometry::{convex_hull, Point};

use super::config::ConstructConfig;
use super::support::{self, Emitter};
use super::types::{RunResult, StepObserver, TourStrategy};

/// Convex-hull-insertion heuristic.
///
/// Computes the convex hull of the point set as the initial tour, emits
/// it as a closed snapshot, then places the interior points by the
/// nearest-insertion rule. A fully collinear point set degenerates to a
/// two-point hull chain, which the insertion loop handles like any other
/// tour (a one-point tour's wrap-around edge has length zero).
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvexHullInsertion;

impl TourStrategy for ConvexHullInsertion {
    fn name(&self) -> &'static str {
        "convex-hull"
    }

    fn construct(
        &self,
        points: &[Point],
        _config: &ConstructConfig,
        token: &CancelToken,
        on_step: &mut StepObserver<'_>,
    ) -> RunResult {
        let mut emitter = Emitter::new(on_step);
        if points.is_empty() {
            return emitter.complete(points, Vec::new());
        }

        let tour = convex_hull(points);

        let mut on_hull = vec![false; points.len()];
        for &i in &tour {
            on_hull[i] = true;
        }
        let remaining: Vec<usize> = (0..points.len()).filter(|&i| !on_hull[i]).collect();

        emitter.progress(points, &tour, true, support::closed_cost(points, &tour));

        support::nearest_insertion_loop(points, tour, remaining, token, emitter)
    }
}

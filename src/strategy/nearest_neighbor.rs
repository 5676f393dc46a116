//! Nearest-neighbor construction.

use crate::cancel::CancelToken;
use crate::geometry::{distance, Point};

use super::config::ConstructConfig;
use super::support::{self, Emitter};
use super::types::{RunResult, StepObserver, TourStrategy};

/// Nearest-neighbor heuristic.
///
/// Picks a random start point, then repeatedly appends the unplaced
/// point nearest the tour's current last point, closing the loop back to
/// the start once every point is placed. Equidistant candidates
/// tie-break to the one appearing first in the remaining set's current
/// order.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighbor;

impl TourStrategy for NearestNeighbor {
    fn name(&self) -> &'static str {
        "nearest-neighbor"
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
        let start = support::start_index(config, points.len(), &mut rng);
        let mut tour = vec![start];
        let mut remaining: Vec<usize> = (0..points.len()).filter(|&i| i != start).collect();

        while !remaining.is_empty() {
            if token.is_cancelled() {
                return emitter.stop(points, tour);
            }

            let last = points[tour[tour.len() - 1]];
            let mut best_slot = 0;
            let mut best_dist = f64::INFINITY;
            for (slot, &candidate) in remaining.iter().enumerate() {
                let d = distance(last, points[candidate]);
                if d < best_dist {
                    best_dist = d;
                    best_slot = slot;
                }
            }

            let next = remaining.remove(best_slot);
            tour.push(next);
            emitter.progress(points, &tour, false, support::open_cost(points, &tour));
        }

        emitter.complete(points, tour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::test_util::{assert_closed_permutation, collect_steps, line, run};

    #[test]
    fn test_visits_every_point_and_closes() {
        let points = line(6);
        let result = run(&NearestNeighbor, &points, 0);
        assert_closed_permutation(&points, &result);
        assert!(!result.stopped);
    }

    #[test]
    fn test_walks_a_line_in_order() {
        let points = line(5);
        let result = run(&NearestNeighbor, &points, 0);
        let expected: Vec<Point> = points.iter().copied().chain([points[0]]).collect();
        assert_eq!(result.final_tour, expected);
        // Open path of length 4 plus the closing edge back to the start.
        assert!((result.final_cost - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_point_emits_only_terminal_step() {
        let points = vec![Point::new(2.0, 3.0)];
        let steps = collect_steps(&NearestNeighbor, &points, 0);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].tour, vec![points[0], points[0]]);
        assert_eq!(steps[0].cost, 0.0);
    }

    #[test]
    fn test_tie_breaks_to_first_remaining_point() {
        // Two candidates equidistant from the start: the one earlier in
        // the point set must be appended first.
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 0.0),
        ];
        let result = run(&NearestNeighbor, &points, 0);
        assert_eq!(result.final_tour[1], points[1]);
    }

    #[test]
    fn test_deterministic_for_fixed_start() {
        let points = line(8);
        let a = run(&NearestNeighbor, &points, 3);
        let b = run(&NearestNeighbor, &points, 3);
        assert_eq!(a.final_tour, b.final_tour);
    }

    #[test]
    fn test_cancellation_yields_open_prefix() {
        let points = line(10);
        let token = CancelToken::new();
        token.cancel();

        let config = ConstructConfig::default().with_start_index(0);
        let mut sink = |_: &crate::strategy::Step| {};
        let result = NearestNeighbor.construct(&points, &config, &token, &mut sink);

        assert!(result.stopped);
        assert_eq!(result.final_tour, vec![points[0]]);
    }

    #[test]
    fn test_step_costs_are_open_path_costs() {
        let points = line(5);
        let steps = collect_steps(&NearestNeighbor, &points, 0);
        // Intermediate steps walk the line left to right: costs 1, 2, 3, 4.
        for (k, step) in steps.iter().take(4).enumerate() {
            assert!((step.cost - (k + 1) as f64).abs() < 1e-12);
        }
    }
}

//! Shared construction machinery: step emission, index-tour costing,
//! and the insertion primitives reused across strategies.
//!
//! Strategies work over index tours (`Vec<usize>` into the point slice)
//! so that placement bookkeeping is by identity, not by coordinate
//! comparison; points are resolved to coordinates only when a [`Step`]
//! snapshot is emitted.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cancel::CancelToken;
use crate::geometry::{distance, insertion_cost, tour_cost, Point};

use super::config::ConstructConfig;
use super::types::{RunResult, Step, StepObserver};

/// Tracks elapsed time and step emission for one run.
pub(crate) struct Emitter<'a, 'b> {
    started: Instant,
    steps: usize,
    on_step: &'a mut StepObserver<'b>,
}

impl<'a, 'b> Emitter<'a, 'b> {
    pub(crate) fn new(on_step: &'a mut StepObserver<'b>) -> Self {
        Self {
            started: Instant::now(),
            steps: 0,
            on_step,
        }
    }

    /// Emits an intermediate snapshot of the index tour. When `closed`,
    /// the snapshot repeats the first point last (used for the initial
    /// hull tour); the internal index tour always stays open.
    pub(crate) fn progress(&mut self, points: &[Point], tour: &[usize], closed: bool, cost: f64) {
        let mut snapshot = resolve(points, tour);
        if closed {
            if let Some(&first) = snapshot.first() {
                snapshot.push(first);
            }
        }
        self.emit(snapshot, cost);
    }

    /// Closes the tour, emits the terminal step, and produces the result.
    pub(crate) fn complete(mut self, points: &[Point], tour: Vec<usize>) -> RunResult {
        let mut final_tour = resolve(points, &tour);
        if let Some(&first) = final_tour.first() {
            final_tour.push(first);
        }
        let final_cost = tour_cost(&final_tour);
        self.emit(final_tour.clone(), final_cost);

        RunResult {
            final_tour,
            final_cost,
            stopped: false,
            steps: self.steps,
            elapsed: self.started.elapsed(),
        }
    }

    /// Emits the terminal step for a cancelled run. The tour stays open.
    pub(crate) fn stop(mut self, points: &[Point], tour: Vec<usize>) -> RunResult {
        let final_tour = resolve(points, &tour);
        let final_cost = tour_cost(&final_tour);
        self.emit(final_tour.clone(), final_cost);

        RunResult {
            final_tour,
            final_cost,
            stopped: true,
            steps: self.steps,
            elapsed: self.started.elapsed(),
        }
    }

    fn emit(&mut self, tour: Vec<Point>, cost: f64) {
        let step = Step {
            tour,
            cost,
            elapsed: self.started.elapsed(),
        };
        (self.on_step)(&step);
        self.steps += 1;
    }
}

/// Resolves an index tour to coordinates.
fn resolve(points: &[Point], tour: &[usize]) -> Vec<Point> {
    tour.iter().map(|&i| points[i]).collect()
}

/// Cost of the open index tour.
pub(crate) fn open_cost(points: &[Point], tour: &[usize]) -> f64 {
    tour.windows(2)
        .map(|w| distance(points[w[0]], points[w[1]]))
        .sum()
}

/// Cost of the index tour plus its closing edge (zero for fewer than
/// two points).
pub(crate) fn closed_cost(points: &[Point], tour: &[usize]) -> f64 {
    if tour.len() < 2 {
        return 0.0;
    }
    open_cost(points, tour) + distance(points[tour[tour.len() - 1]], points[tour[0]])
}

/// Seeded RNG for start-point selection.
pub(crate) fn create_rng(config: &ConstructConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    }
}

/// Start point for a run: the pinned index when valid, otherwise a
/// uniform draw.
pub(crate) fn start_index(config: &ConstructConfig, n: usize, rng: &mut StdRng) -> usize {
    match config.start_index {
        Some(i) if i < n => i,
        _ => rng.random_range(0..n),
    }
}

/// Seeds a two-point tour: the start point plus the first other point in
/// point-set order. Returns `(tour, remaining)`; a single-point set
/// yields a one-point tour and an empty remaining set.
pub(crate) fn seed_pair(
    points: &[Point],
    config: &ConstructConfig,
    rng: &mut StdRng,
) -> (Vec<usize>, Vec<usize>) {
    let start = start_index(config, points.len(), rng);
    let mut remaining: Vec<usize> = (0..points.len()).filter(|&i| i != start).collect();
    let mut tour = vec![start];
    if !remaining.is_empty() {
        tour.push(remaining.remove(0));
    }
    (tour, remaining)
}

/// Cheapest insertion position for `candidate` over the closed edge
/// cycle of `tour`, as the index at which to `Vec::insert`. The first
/// minimal edge in tour order wins ties.
///
/// A one-point tour has the single degenerate edge `(a, a)` whose own
/// length is zero, so the formula reduces to the out-and-back detour.
pub(crate) fn cheapest_position(points: &[Point], tour: &[usize], candidate: usize) -> (usize, f64) {
    let p = points[candidate];
    let mut best_pos = 1;
    let mut best_delta = f64::INFINITY;

    for k in 0..tour.len() {
        let a = points[tour[k]];
        let b = points[tour[(k + 1) % tour.len()]];
        let delta = insertion_cost(a, p, b);
        if delta < best_delta {
            best_delta = delta;
            best_pos = k + 1;
        }
    }

    (best_pos, best_delta)
}

/// The nearest-insertion refinement loop, shared by the nearest-insertion
/// and convex-hull strategies: each iteration scans every remaining point
/// (outer, in remaining order) against every tour edge (inner, in tour
/// order) and applies the pair with the smallest insertion cost.
pub(crate) fn nearest_insertion_loop(
    points: &[Point],
    mut tour: Vec<usize>,
    mut remaining: Vec<usize>,
    token: &CancelToken,
    mut emitter: Emitter<'_, '_>,
) -> RunResult {
    while !remaining.is_empty() {
        if token.is_cancelled() {
            return emitter.stop(points, tour);
        }

        let mut best_slot = 0;
        let mut best_pos = 1;
        let mut best_delta = f64::INFINITY;
        for (slot, &candidate) in remaining.iter().enumerate() {
            let (pos, delta) = cheapest_position(points, &tour, candidate);
            if delta < best_delta {
                best_delta = delta;
                best_slot = slot;
                best_pos = pos;
            }
        }

        let next = remaining.remove(best_slot);
        tour.insert(best_pos, next);
        emitter.progress(points, &tour, false, closed_cost(points, &tour));
    }

    emitter.complete(points, tour)
}

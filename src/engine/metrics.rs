//! Run metrics: tour counts, elapsed time, current and best distances.

use std::time::Duration;

use crate::strategy::Step;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of distinct closed tours over `n` points with a fixed start
/// point: `(n - 1)!`, saturating at `u128::MAX`. Zero and one point both
/// count a single (degenerate) tour.
pub fn possible_tours(n: usize) -> u128 {
    (2..n as u128).fold(1u128, |acc, k| acc.saturating_mul(k))
}

/// Snapshot of the metrics panel for the current point set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Metrics {
    /// `(N - 1)!` for the current point set.
    pub possible_tours: u128,
    /// Time spent in the current (or most recent) run.
    pub elapsed: Duration,
    /// Cost reported by the latest step; the final cost once a run
    /// completes.
    pub current_distance: f64,
    /// Minimum final cost across completed runs on this point set.
    /// `None` until a run completes; cleared when the point set changes.
    pub min_distance: Option<f64>,
}

/// Derives [`Metrics`] from the step stream of successive runs.
///
/// Per-run fields (`elapsed`, `current_distance`) reset when a run
/// starts; `min_distance` persists across runs for the same point set
/// and only resets on [`MetricsTracker::reset_points`].
#[derive(Debug, Clone)]
pub struct MetricsTracker {
    point_count: usize,
    possible_tours: u128,
    elapsed: Duration,
    current_distance: f64,
    min_distance: Option<f64>,
}

impl Default for MetricsTracker {
    fn default() -> Self {
        Self {
            point_count: 0,
            possible_tours: possible_tours(0),
            elapsed: Duration::ZERO,
            current_distance: 0.0,
            min_distance: None,
        }
    }
}

impl MetricsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebinds the tracker to a new point set, clearing every field
    /// including the running minimum.
    pub fn reset_points(&mut self, n: usize) {
        self.point_count = n;
        self.possible_tours = possible_tours(n);
        self.elapsed = Duration::ZERO;
        self.current_distance = 0.0;
        self.min_distance = None;
    }

    /// Size of the point set the tracker is bound to.
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    /// Clears the per-run fields at the start of a run.
    pub fn begin_run(&mut self) {
        self.elapsed = Duration::ZERO;
        self.current_distance = 0.0;
    }

    /// Folds one emitted step into the panel fields.
    pub fn record_step(&mut self, step: &Step) {
        self.elapsed = step.elapsed;
        self.current_distance = step.cost;
    }

    /// Folds a completed run's final cost into the running minimum.
    /// Cancelled runs must not be recorded here.
    pub fn complete_run(&mut self, final_cost: f64) {
        self.min_distance = Some(match self.min_distance {
            Some(best) if best <= final_cost => best,
            _ => final_cost,
        });
    }

    /// Current metrics snapshot.
    pub fn snapshot(&self) -> Metrics {
        Metrics {
            possible_tours: self.possible_tours,
            elapsed: self.elapsed,
            current_distance: self.current_distance,
            min_distance: self.min_distance,
        }
    }
}

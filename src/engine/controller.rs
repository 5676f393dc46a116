//! Run controller: strategy dispatch, cancellation ownership, metrics.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::cancel::CancelToken;
use crate::error::EngineError;
use crate::geometry::Point;
use crate::strategy::{ConstructConfig, RunResult, Step, StrategyKind};

use super::metrics::{Metrics, MetricsTracker};

/// Owns the lifecycle of construction runs: dispatches a strategy by
/// kind or wire name, holds the active run's cancellation token, and
/// folds the step stream into a [`MetricsTracker`].
///
/// At most one run executes at a time; a second request while one is
/// active is refused with [`EngineError::ConcurrentRunRejected`]. The
/// engine is `Sync`, so [`Engine::stop`] may be called from another
/// thread (or from the step observer) while a run is in progress.
///
/// # Examples
///
/// ```
/// use tourcraft::engine::Engine;
/// use tourcraft::geometry::Point;
/// use tourcraft::strategy::StrategyKind;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 0.0),
///     Point::new(3.0, 4.0),
/// ];
/// let engine = Engine::new();
/// let result = engine
///     .run(StrategyKind::NearestInsertion, &points, |_step| {})
///     .unwrap();
/// assert_eq!(result.final_tour.len(), points.len() + 1);
/// ```
#[derive(Debug, Default)]
pub struct Engine {
    config: ConstructConfig,
    running: AtomicBool,
    token: Mutex<CancelToken>,
    metrics: Mutex<MetricsTracker>,
}

impl Engine {
    /// Creates an engine with the default construction configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with a fixed construction configuration
    /// (seed and start-index pinning for reproducible runs).
    pub fn with_config(config: ConstructConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Runs one construction strategy over `points`, forwarding every
    /// emitted [`Step`] to `on_step` and blocking until the run
    /// completes or is stopped.
    ///
    /// # Errors
    ///
    /// [`EngineError::InsufficientPoints`] for an empty point set and
    /// [`EngineError::ConcurrentRunRejected`] while another run is
    /// active. Point sets of size 1 or 2 are degenerate but valid.
    pub fn run<F>(
        &self,
        kind: StrategyKind,
        points: &[Point],
        mut on_step: F,
    ) -> Result<RunResult, EngineError>
    where
        F: FnMut(&Step),
    {
        if points.is_empty() {
            return Err(EngineError::InsufficientPoints);
        }
        if self
            .running
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(EngineError::ConcurrentRunRejected);
        }

        let token = CancelToken::new();
        *lock(&self.token) = token.clone();

        {
            let mut tracker = lock(&self.metrics);
            if tracker.point_count() != points.len() {
                tracker.reset_points(points.len());
            }
            tracker.begin_run();
        }

        let mut observer = |step: &Step| {
            lock(&self.metrics).record_step(step);
            on_step(step);
        };
        let result = kind
            .strategy()
            .construct(points, &self.config, &token, &mut observer);

        if !result.stopped {
            lock(&self.metrics).complete_run(result.final_cost);
        }
        self.running.store(false, Ordering::Release);

        Ok(result)
    }

    /// Runs a strategy selected by wire name (one of `nearest-neighbor`,
    /// `arbitrary-insertion`, `nearest-insertion`, `furthest-insertion`,
    /// `convex-hull`).
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidStrategy`] for an unknown name, plus the
    /// conditions of [`Engine::run`].
    pub fn run_named<F>(
        &self,
        name: &str,
        points: &[Point],
        on_step: F,
    ) -> Result<RunResult, EngineError>
    where
        F: FnMut(&Step),
    {
        let kind: StrategyKind = name.parse()?;
        self.run(kind, points, on_step)
    }

    /// Cancels the active run, if any. The running strategy observes the
    /// flag at the top of its next iteration and returns its open
    /// partial tour with `stopped: true`. Idempotent; a no-op when no
    /// run is active.
    pub fn stop(&self) {
        lock(&self.token).cancel();
    }

    /// Current metrics snapshot.
    pub fn metrics(&self) -> Metrics {
        lock(&self.metrics).snapshot()
    }

    /// Rebinds the metrics to a new point set (the "randomize" or
    /// "clear" action), resetting the running minimum. [`Engine::run`]
    /// also does this automatically when the point count changes, but an
    /// equal-sized regenerated set needs the explicit reset.
    pub fn reset_points(&self, n: usize) {
        lock(&self.metrics).reset_points(n);
    }
}

/// Mutex poisoning cannot leave the tracker or token in a torn state
/// (every critical section is a plain field update), so recover the
/// guard instead of propagating the panic.
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::sync::Arc;

    fn square_points() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
            Point::new(2.0, 1.0),
        ]
    }

    #[test]
    fn test_run_by_name() {
        let engine = Engine::with_config(ConstructConfig::default().with_start_index(0));
        let result = engine
            .run_named("convex-hull", &square_points(), |_| {})
            .expect("run failed");
        assert!(!result.stopped);
        assert_eq!(result.final_tour.len(), 6);
    }

    #[test]
    fn test_unknown_name_is_rejected_before_running() {
        let engine = Engine::new();
        let err = engine.run_named("simulated-annealing", &square_points(), |_| {});
        assert_eq!(
            err,
            Err(EngineError::InvalidStrategy("simulated-annealing".into()))
        );
        // The engine stays usable.
        assert!(engine
            .run(StrategyKind::NearestNeighbor, &square_points(), |_| {})
            .is_ok());
    }

    #[test]
    fn test_empty_point_set_is_rejected() {
        let engine = Engine::new();
        let err = engine.run(StrategyKind::NearestNeighbor, &[], |_| {});
        assert_eq!(err, Err(EngineError::InsufficientPoints));
    }

    #[test]
    fn test_degenerate_sizes_are_valid() {
        let engine = Engine::with_config(ConstructConfig::default().with_start_index(0));
        for n in 1..=2 {
            let points: Vec<Point> = (0..n).map(|i| Point::new(i as f64, 0.0)).collect();
            let result = engine
                .run(StrategyKind::ArbitraryInsertion, &points, |_| {})
                .expect("degenerate run failed");
            assert_eq!(result.final_tour.len(), n + 1);
        }
    }

    #[test]
    fn test_metrics_follow_the_run() {
        let engine = Engine::with_config(ConstructConfig::default().with_start_index(0));
        let points = square_points();

        let result = engine
            .run(StrategyKind::NearestInsertion, &points, |_| {})
            .expect("run failed");

        let metrics = engine.metrics();
        assert_eq!(metrics.possible_tours, 24);
        assert_eq!(metrics.current_distance, result.final_cost);
        assert_eq!(metrics.min_distance, Some(result.final_cost));
    }

    #[test]
    fn test_min_distance_never_increases_across_runs() {
        let engine = Engine::with_config(ConstructConfig::default().with_start_index(0));
        let points = square_points();

        let mut best = f64::INFINITY;
        for kind in StrategyKind::ALL {
            let result = engine.run(kind, &points, |_| {}).expect("run failed");
            best = best.min(result.final_cost);
            assert_eq!(engine.metrics().min_distance, Some(best));
        }
    }

    #[test]
    fn test_reset_points_clears_the_minimum() {
        let engine = Engine::with_config(ConstructConfig::default().with_start_index(0));
        let points = square_points();
        engine
            .run(StrategyKind::NearestNeighbor, &points, |_| {})
            .expect("run failed");
        assert!(engine.metrics().min_distance.is_some());

        engine.reset_points(points.len());
        assert_eq!(engine.metrics().min_distance, None);
    }

    #[test]
    fn test_stop_with_no_active_run_is_a_noop() {
        let engine = Engine::with_config(ConstructConfig::default().with_start_index(0));
        engine.stop();
        engine.stop();
        // The next run gets a fresh token and completes normally.
        let result = engine
            .run(StrategyKind::NearestNeighbor, &square_points(), |_| {})
            .expect("run failed");
        assert!(!result.stopped);
    }

    #[test]
    fn test_stop_from_the_observer_stops_the_run() {
        let engine = Arc::new(Engine::with_config(
            ConstructConfig::default().with_start_index(0),
        ));
        let points = square_points();

        let handle = Arc::clone(&engine);
        let result = engine
            .run(StrategyKind::NearestNeighbor, &points, move |_| {
                handle.stop();
            })
            .expect("run failed");

        assert!(result.stopped);
        assert!(result.final_tour.len() < points.len());
    }

    #[test]
    fn test_concurrent_run_is_rejected() {
        let engine = Arc::new(Engine::with_config(
            ConstructConfig::default().with_start_index(0),
        ));
        let points = square_points();

        let (started_tx, started_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel::<()>();

        let background = {
            let engine = Arc::clone(&engine);
            let points = points.clone();
            std::thread::spawn(move || {
                let mut first = true;
                engine.run(StrategyKind::NearestNeighbor, &points, move |_| {
                    if first {
                        first = false;
                        started_tx.send(()).ok();
                        release_rx.recv().ok();
                    }
                })
            })
        };

        started_rx.recv().expect("background run never started");
        let err = engine.run(StrategyKind::NearestNeighbor, &points, |_| {});
        assert_eq!(err, Err(EngineError::ConcurrentRunRejected));

        engine.stop();
        release_tx.send(()).expect("background run gone");
        let result = background
            .join()
            .expect("background thread panicked")
            .expect("background run failed");
        assert!(result.stopped);

        // With the first run stopped, a new run is accepted again.
        assert!(engine
            .run(StrategyKind::NearestNeighbor, &points, |_| {})
            .is_ok());
    }
}

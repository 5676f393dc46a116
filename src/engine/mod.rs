//! Run controller and metrics.
//!
//! [`Engine`] dispatches one construction strategy at a time, owns the
//! active run's cancellation token, and derives a [`Metrics`] panel
//! (possible tour count, elapsed time, current and minimum distance)
//! from the step stream.

mod controller;
mod metrics;

pub use controller::Engine;
pub use metrics::{possible_tours, Metrics, MetricsTracker};

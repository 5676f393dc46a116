//! Step-by-step Euclidean tour construction.
//!
//! Builds a closed tour over a set of 2-D points using one of five
//! classical construction heuristics, emitting every intermediate tour
//! so an observer can watch the construction unfold:
//!
//! - **Nearest neighbor**: append the unplaced point nearest the tour end.
//! - **Arbitrary insertion**: take points in set order, insert each at
//!   the gap minimizing the resulting closed-tour cost.
//! - **Nearest insertion**: insert the (point, edge) pair with the
//!   smallest marginal insertion cost.
//! - **Furthest insertion**: grow the tour toward the most isolated
//!   remaining point, inserting it at its cheapest edge.
//! - **Convex-hull insertion**: start from the convex hull and fill the
//!   interior by nearest insertion.
//!
//! None of the heuristics is exact; they trade optimality for speed and
//! a construction process worth watching.
//!
//! # Architecture
//!
//! The heuristics implement one [`strategy::TourStrategy`] capability
//! and are dispatched by wire name through [`engine::Engine`], which
//! owns the per-run [`cancel::CancelToken`] and derives the
//! [`engine::Metrics`] panel from the step stream. Strategies emit a
//! [`strategy::Step`] after every placement; the observer callback
//! doubles as the cooperative yield point, so rendering and pacing stay
//! outside the algorithmic core. Each run is strictly sequential; the
//! cancellation token is the only shared mutable state between the
//! driving caller and a running strategy.

pub mod cancel;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod points;
pub mod strategy;

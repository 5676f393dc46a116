//! Tour-construction strategies.
//!
//! Five classical heuristics behind one [`TourStrategy`] capability:
//!
//! - [`NearestNeighbor`]: append the unplaced point nearest the tour end.
//! - [`ArbitraryInsertion`]: take points in set order, insert each at the
//!   gap minimizing the resulting closed-tour cost.
//! - [`NearestInsertion`]: insert the (point, edge) pair with the
//!   smallest marginal insertion cost.
//! - [`FurthestInsertion`]: grow the tour toward the most isolated
//!   remaining point, inserting it at its cheapest edge.
//! - [`ConvexHullInsertion`]: start from the convex hull and fill the
//!   interior by nearest insertion.
//!
//! Each strategy emits a [`Step`] after every placement and polls the
//! cancellation token at the top of each iteration, so a driving loop can
//! render intermediate tours and stop a run between placements. All
//! tie-breaks are first-encountered-in-scan-order, which makes every
//! strategy deterministic once the start point is fixed.

mod arbitrary_insertion;
mod config;
mod convex_hull;
mod furthest_insertion;
mod nearest_insertion;
mod nearest_neighbor;
mod support;
mod types;

pub use arbitrary_insertion::ArbitraryInsertion;
pub use config::ConstructConfig;
pub use convex_hull::ConvexHullInsertion;
pub use furthest_insertion::FurthestInsertion;
pub use nearest_insertion::NearestInsertion;
pub use nearest_neighbor::NearestNeighbor;
pub use types::{RunResult, Step, StepObserver, StrategyKind, TourStrategy};

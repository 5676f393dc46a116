//! Core trait and step-stream types for tour construction.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::cancel::CancelToken;
use crate::error::EngineError;
use crate::geometry::Point;

use super::config::ConstructConfig;
use super::{
    ArbitraryInsertion, ConvexHullInsertion, FurthestInsertion, NearestInsertion, NearestNeighbor,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A snapshot of the tour under construction, emitted after every
/// placement. Steps are fresh values, never mutated after emission.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Step {
    /// Visiting order so far. Open while the run is in progress; the
    /// terminal step of a completed run repeats the first point last.
    pub tour: Vec<Point>,
    /// Cost of the tour at this step. The insertion strategies report the
    /// closed-tour cost of the partial tour for comparability; nearest
    /// neighbor reports the open path cost it has actually walked.
    pub cost: f64,
    /// Time since the run started.
    pub elapsed: Duration,
}

/// Terminal state of a construction run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunResult {
    /// The constructed tour: closed on completion (first point repeated
    /// last), the open partial tour when the run was cancelled.
    pub final_tour: Vec<Point>,
    /// Cost of `final_tour`, including the closing edge when closed.
    pub final_cost: f64,
    /// Whether the run was cancelled before placing every point.
    pub stopped: bool,
    /// Number of steps emitted, terminal step included.
    pub steps: usize,
    /// Total construction time.
    pub elapsed: Duration,
}

/// Observer invoked after every emitted [`Step`].
///
/// This is also the cooperative yield point: a driving loop may render
/// the step, pace the run, or flip the cancellation token before control
/// returns to the strategy.
pub type StepObserver<'a> = dyn FnMut(&Step) + 'a;

/// A tour-construction heuristic.
///
/// The five built-in strategies implement this one capability so the
/// engine can dispatch them uniformly by name and tests can drive them
/// interchangeably.
pub trait TourStrategy: Send + Sync {
    /// The wire name used for dispatch.
    fn name(&self) -> &'static str;

    /// Builds a closed tour over `points`, emitting a [`Step`] after
    /// each placement and polling `token` at the top of each iteration.
    ///
    /// Total for any point set: an empty or single-point set produces a
    /// degenerate zero-cost tour rather than an error.
    fn construct(
        &self,
        points: &[Point],
        config: &ConstructConfig,
        token: &CancelToken,
        on_step: &mut StepObserver<'_>,
    ) -> RunResult;
}

/// The built-in construction strategies, dispatchable by wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StrategyKind {
    /// Append the nearest unplaced point to the tour end.
    NearestNeighbor,
    /// Insert points in set order at the cheapest gap.
    ArbitraryInsertion,
    /// Insert the globally cheapest (point, edge) pair.
    NearestInsertion,
    /// Grow toward the most isolated remaining point.
    FurthestInsertion,
    /// Start from the convex hull, fill in by nearest insertion.
    ConvexHull,
}

impl StrategyKind {
    /// All strategies, in display order.
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::NearestNeighbor,
        StrategyKind::ArbitraryInsertion,
        StrategyKind::NearestInsertion,
        StrategyKind::FurthestInsertion,
        StrategyKind::ConvexHull,
    ];

    /// The wire name for this strategy.
    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::NearestNeighbor => "nearest-neighbor",
            StrategyKind::ArbitraryInsertion => "arbitrary-insertion",
            StrategyKind::NearestInsertion => "nearest-insertion",
            StrategyKind::FurthestInsertion => "furthest-insertion",
            StrategyKind::ConvexHull => "convex-hull",
        }
    }

    /// The strategy implementation for this kind.
    pub fn strategy(self) -> &'static dyn TourStrategy {
        match self {
            StrategyKind::NearestNeighbor => &NearestNeighbor,
            StrategyKind::ArbitraryInsertion => &ArbitraryInsertion,
            StrategyKind::NearestInsertion => &NearestInsertion,
            StrategyKind::FurthestInsertion => &FurthestInsertion,
            StrategyKind::ConvexHull => &ConvexHullInsertion,
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| EngineError::InvalidStrategy(s.to_string()))
    }
}

//! Engine error taxonomy.

use thiserror::Error;

/// Errors surfaced synchronously when a construction run is requested.
///
/// All variants are local, recoverable conditions; none poisons the
/// engine, and no error can occur mid-run from the algorithms themselves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The requested strategy name is not one of the known five.
    #[error("unknown strategy {0:?}")]
    InvalidStrategy(String),

    /// A run was requested over an empty point set.
    #[error("cannot construct a tour over an empty point set")]
    InsufficientPoints,

    /// A run was requested while a previous run is still active.
    #[error("a construction run is already in progress")]
    ConcurrentRunRejected,
}

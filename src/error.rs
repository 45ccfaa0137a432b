//! Error types for graph construction and search configuration.
//!
//! Running out of iterations is not an error: it is the
//! [`Exhausted`](crate::tabucol::TabucolOutcome::Exhausted) outcome of a run.

use thiserror::Error;

/// Rejected graph input.
///
/// Validation is fail-fast: the edge list is checked once at construction,
/// before any search state exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge joins a vertex to itself.
    #[error("self-loop on vertex {0}")]
    SelfLoop(usize),

    /// An edge endpoint is not in the vertex set.
    #[error("edge ({u}, {v}) references a vertex outside 0..{vertex_count}")]
    VertexOutOfRange {
        /// First endpoint as given.
        u: usize,
        /// Second endpoint as given.
        v: usize,
        /// Size of the vertex set the edge was checked against.
        vertex_count: usize,
    },
}

/// Rejected search parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The requested color count is zero.
    #[error("number of colors must be positive")]
    ZeroColors,

    /// `tabu_size` is zero.
    #[error("tabu_size must be positive")]
    ZeroTabuSize,

    /// `reps` is zero.
    #[error("reps must be positive")]
    ZeroReps,

    /// `max_iterations` is zero.
    #[error("max_iterations must be positive")]
    ZeroMaxIterations,
}

//! TABUCOL: tabu search for the k-coloring decision problem.
//!
//! A single-solution trajectory metaheuristic over single-vertex
//! recolorings. Each iteration samples improving moves among the endpoints
//! of conflicting edges; a bounded FIFO tabu list forbids reversing recent
//! moves, and an aspiration table overrides the tabu for moves that beat
//! the best escape ever made from the current conflict level.
//!
//! # References
//!
//! - Hertz, A. & de Werra, D. (1987). "Using tabu search techniques for
//!   graph coloring", *Computing* 39(4), 345-351.
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing*
//!   1(3), 190-206.

mod config;
mod runner;
mod types;

pub use config::TabucolConfig;
pub use runner::{conflict_count, conflicted_vertices, TabucolRunner};
pub use types::{Color, Coloring, TabuList, TabucolOutcome};

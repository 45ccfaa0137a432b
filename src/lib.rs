//! Tabu-search heuristic for the graph k-coloring decision problem.
//!
//! Given an undirected graph and a target color count `k`, a run either
//! finds a proper coloring (no edge joins two same-colored vertices) or
//! reports that none was found within a bounded iteration budget. The
//! algorithm is TABUCOL (Hertz & de Werra, 1987): randomized local search
//! over single-vertex recolorings, with a short-term tabu memory that
//! prevents cycling back to just-abandoned colors and an aspiration
//! criterion that keeps the tabu from blocking moves improving on the best
//! escape ever made from a conflict level.
//!
//! # Architecture
//!
//! This crate is the search core only. Building graphs from coordinates or
//! generators and rendering colorings are consumer concerns: callers supply
//! a [`Graph`] and consume a [`TabucolOutcome`]. Trying several values of
//! `k` (chromatic-number estimation) is likewise driver orchestration over
//! independent runs — runs share no state, and parallel restarts across
//! seeds or color counts are the caller's to launch.
//!
//! # Example
//!
//! ```
//! use tabu_color::{Graph, TabucolConfig, TabucolRunner};
//!
//! // A triangle needs three colors.
//! let graph = Graph::from_edges(3, &[(0, 1), (1, 2), (0, 2)])?;
//! let config = TabucolConfig::default().with_seed(42);
//! let outcome = TabucolRunner::run(&graph, 3, &config)?;
//! assert!(outcome.is_colored());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod graph;
pub mod tabucol;

pub use error::{ConfigError, GraphError};
pub use graph::{Graph, VertexId};
pub use tabucol::{Color, Coloring, TabucolConfig, TabucolOutcome, TabucolRunner};

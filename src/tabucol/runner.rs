//! Tabucol execution engine.
//!
//! # Algorithm
//!
//! 1. Assign every vertex the first color.
//! 2. At each iteration:
//!    a. Collect the conflicted vertices (endpoints of monochromatic
//!       edges). Zero conflicts is the success terminal.
//!    b. Sample up to `reps` single-vertex recolorings among conflicted
//!       vertices; accept the first strictly improving trial that is
//!       either non-tabu or admitted by the aspiration criterion.
//!    c. On acceptance, mark the reverse move tabu (oldest entry evicted
//!       at capacity). An iteration with no accepted move retains the
//!       current solution; it records no tabu entry.
//! 3. Stop after `max_iterations` iterations and report exhaustion with
//!    the last observed conflict count.
//!
//! # Reference
//!
//! Hertz, A. & de Werra, D. (1987). "Using tabu search techniques for
//! graph coloring", *Computing* 39(4), 345-351.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use super::config::TabucolConfig;
use super::types::{Color, Coloring, TabuList, TabucolOutcome};
use crate::error::ConfigError;
use crate::graph::{Graph, VertexId};

/// Number of edges whose endpoints share a color under `coloring`.
///
/// Pure in `(graph, coloring)`: summing over the edges in any order yields
/// the same count. Cost is proportional to the edge count, and one call is
/// made per trial move, which makes this the dominant cost of a run.
pub fn conflict_count(graph: &Graph, coloring: &[Color]) -> usize {
    graph
        .edges()
        .iter()
        .filter(|&&(u, v)| coloring[u] == coloring[v])
        .count()
}

/// Vertices incident to at least one monochromatic edge, ascending.
///
/// The ascending order keeps vertex sampling reproducible under a fixed
/// seed; collecting through a hash set would not.
pub fn conflicted_vertices(graph: &Graph, coloring: &[Color]) -> Vec<VertexId> {
    let mut conflicted = vec![false; graph.vertex_count()];
    for &(u, v) in graph.edges() {
        if coloring[u] == coloring[v] {
            conflicted[u] = true;
            conflicted[v] = true;
        }
    }
    conflicted
        .iter()
        .enumerate()
        .filter_map(|(v, &hit)| hit.then_some(v))
        .collect()
}

/// Tabucol runner.
///
/// One call is one bounded-effort run: single-threaded, no shared state.
/// Callers wanting restarts across seeds or color counts launch independent
/// runs.
pub struct TabucolRunner;

impl TabucolRunner {
    /// Runs tabucol on `graph` with `num_colors` colors.
    ///
    /// # Examples
    ///
    /// ```
    /// use tabu_color::{Graph, TabucolConfig, TabucolRunner};
    ///
    /// // A triangle is 3-colorable but not 2-colorable.
    /// let graph = Graph::from_edges(3, &[(0, 1), (1, 2), (0, 2)])?;
    /// let config = TabucolConfig::default().with_seed(42);
    /// let outcome = TabucolRunner::run(&graph, 3, &config)?;
    /// assert!(outcome.is_colored());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn run(
        graph: &Graph,
        num_colors: usize,
        config: &TabucolConfig,
    ) -> Result<TabucolOutcome, ConfigError> {
        Self::run_with_cancel(graph, num_colors, config, None)
    }

    /// Runs tabucol with an optional cooperative cancellation flag.
    ///
    /// The flag is checked once per iteration; raising it yields
    /// [`TabucolOutcome::Cancelled`] without altering either documented
    /// termination rule (success at zero conflicts, exhaustion at the
    /// iteration cap).
    pub fn run_with_cancel(
        graph: &Graph,
        num_colors: usize,
        config: &TabucolConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<TabucolOutcome, ConfigError> {
        if num_colors == 0 {
            return Err(ConfigError::ZeroColors);
        }
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        // Initial solution: a total assignment, every vertex on color 0.
        // Starting from an all-equal coloring means the first accepted moves
        // carve out color classes one vertex at a time.
        let mut coloring: Coloring = vec![0; graph.vertex_count()];

        let mut tabu = TabuList::new(config.tabu_size);
        // aspiration[c]: conflict count a tabu move escaping level c must
        // reach to be admitted anyway.
        let mut aspiration: HashMap<usize, usize> = HashMap::new();
        let mut conflicts = conflict_count(graph, &coloring);

        for iteration in 0..config.max_iterations {
            if conflicts == 0 {
                debug!(iterations = iteration, "proper coloring found");
                return Ok(TabucolOutcome::Colored {
                    coloring,
                    iterations: iteration,
                });
            }
            if let Some(flag) = &cancel {
                if flag.load(Ordering::Relaxed) {
                    debug!(iterations = iteration, conflicts, "search cancelled");
                    return Ok(TabucolOutcome::Cancelled {
                        conflicts,
                        iterations: iteration,
                    });
                }
            }

            // With a single color there is no alternative to recolor to; the
            // iteration is a no-op and the run walks to the cap.
            if num_colors < 2 {
                continue;
            }

            let candidates = conflicted_vertices(graph, &coloring);
            for _ in 0..config.reps {
                let vertex = candidates[rng.random_range(0..candidates.len())];
                let current_color = coloring[vertex];
                // Uniform over the num_colors - 1 other colors.
                let mut color = rng.random_range(0..num_colors - 1);
                if color >= current_color {
                    color += 1;
                }

                // Trial: single-index write, evaluate, restore.
                coloring[vertex] = color;
                let trial_conflicts = conflict_count(graph, &coloring);
                coloring[vertex] = current_color;

                if trial_conflicts >= conflicts {
                    continue;
                }

                // Improving trial. A tabu move is admitted only through the
                // aspiration override: it must beat the best escape ever
                // recorded from the current conflict level, and its tabu
                // entry is cleared on admission.
                let threshold = *aspiration.entry(conflicts).or_insert(conflicts - 1);
                if trial_conflicts <= threshold {
                    aspiration.insert(conflicts, trial_conflicts.saturating_sub(1));
                    tabu.remove((vertex, color));
                } else if tabu.contains((vertex, color)) {
                    continue;
                }

                coloring[vertex] = color;
                tabu.push((vertex, current_color));
                trace!(
                    iteration,
                    vertex,
                    from = current_color,
                    to = color,
                    conflicts = trial_conflicts,
                    "move accepted"
                );
                conflicts = trial_conflicts;
                break;
            }
        }

        if conflicts == 0 {
            // The last iteration's move removed the final conflict.
            debug!(iterations = config.max_iterations, "proper coloring found");
            return Ok(TabucolOutcome::Colored {
                coloring,
                iterations: config.max_iterations,
            });
        }

        debug!(
            iterations = config.max_iterations,
            conflicts, "iteration budget exhausted"
        );
        Ok(TabucolOutcome::Exhausted {
            conflicts,
            iterations: config.max_iterations,
        })
    }
}

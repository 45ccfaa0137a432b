//! Core types for the tabucol search.

use std::collections::{HashSet, VecDeque};

use crate::graph::VertexId;

/// A color, in `[0, num_colors)`.
pub type Color = usize;

/// A total assignment of one color to every vertex, indexed by [`VertexId`].
///
/// The search keeps this total at all times: every vertex has exactly one
/// color at every iteration boundary, including while a trial move is being
/// evaluated.
pub type Coloring = Vec<Color>;

/// Terminal outcome of a tabucol run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabucolOutcome {
    /// A proper coloring was found (zero monochromatic edges).
    Colored {
        /// The vertex-to-color mapping, indexed by [`VertexId`].
        coloring: Coloring,
        /// Iterations executed before success.
        iterations: usize,
    },

    /// The iteration budget ran out before the conflict count reached zero.
    Exhausted {
        /// Conflict count of the retained solution at termination.
        conflicts: usize,
        /// Iterations executed (always `max_iterations`).
        iterations: usize,
    },

    /// The run observed the cooperative cancellation flag.
    Cancelled {
        /// Conflict count of the retained solution when cancelled.
        conflicts: usize,
        /// Iterations executed before cancellation.
        iterations: usize,
    },
}

impl TabucolOutcome {
    /// Returns the coloring if the run succeeded.
    pub fn coloring(&self) -> Option<&[Color]> {
        match self {
            TabucolOutcome::Colored { coloring, .. } => Some(coloring),
            _ => None,
        }
    }

    /// Whether the run produced a proper coloring.
    pub fn is_colored(&self) -> bool {
        matches!(self, TabucolOutcome::Colored { .. })
    }

    /// Iterations executed before termination, on any path.
    pub fn iterations(&self) -> usize {
        match self {
            TabucolOutcome::Colored { iterations, .. }
            | TabucolOutcome::Exhausted { iterations, .. }
            | TabucolOutcome::Cancelled { iterations, .. } => *iterations,
        }
    }
}

/// Bounded, insertion-ordered memory of forbidden `(vertex, color)` moves.
///
/// A FIFO queue paired with a set for O(1) membership. The oldest entry is
/// evicted when a push would exceed capacity: a move stays forbidden only
/// while it is among the `capacity` most recent, which is the short-term
/// "recency" memory of tabu search.
#[derive(Debug, Clone)]
pub struct TabuList {
    capacity: usize,
    queue: VecDeque<(VertexId, Color)>,
    members: HashSet<(VertexId, Color)>,
}

impl TabuList {
    /// Creates an empty list holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            queue: VecDeque::with_capacity(capacity),
            members: HashSet::with_capacity(capacity),
        }
    }

    /// Whether `entry` is currently forbidden.
    pub fn contains(&self, entry: (VertexId, Color)) -> bool {
        self.members.contains(&entry)
    }

    /// Records `entry`, evicting the oldest entry at capacity.
    ///
    /// Re-pushing an entry already present refreshes its recency instead of
    /// duplicating it.
    pub fn push(&mut self, entry: (VertexId, Color)) {
        if self.members.contains(&entry) {
            self.queue.retain(|e| *e != entry);
        } else {
            if self.queue.len() == self.capacity {
                if let Some(oldest) = self.queue.pop_front() {
                    self.members.remove(&oldest);
                }
            }
            self.members.insert(entry);
        }
        self.queue.push_back(entry);
    }

    /// Removes a specific entry (the aspiration override path).
    pub fn remove(&mut self, entry: (VertexId, Color)) {
        if self.members.remove(&entry) {
            self.queue.retain(|e| *e != entry);
        }
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabu_list_never_exceeds_capacity() {
        let mut tabu = TabuList::new(3);
        for v in 0..10 {
            tabu.push((v, 0));
            assert!(tabu.len() <= 3);
        }
        assert_eq!(tabu.len(), 3);
    }

    #[test]
    fn test_tabu_list_evicts_oldest_first() {
        let mut tabu = TabuList::new(2);
        tabu.push((0, 0));
        tabu.push((1, 0));
        tabu.push((2, 0));
        assert!(!tabu.contains((0, 0)));
        assert!(tabu.contains((1, 0)));
        assert!(tabu.contains((2, 0)));
    }

    #[test]
    fn test_tabu_list_remove() {
        let mut tabu = TabuList::new(4);
        tabu.push((0, 1));
        tabu.push((1, 2));
        tabu.remove((0, 1));
        assert!(!tabu.contains((0, 1)));
        assert!(tabu.contains((1, 2)));
        assert_eq!(tabu.len(), 1);
    }

    #[test]
    fn test_tabu_list_repush_refreshes_recency() {
        let mut tabu = TabuList::new(2);
        tabu.push((0, 0));
        tabu.push((1, 0));
        tabu.push((0, 0));
        // (1, 0) is now the oldest and gets evicted next.
        tabu.push((2, 0));
        assert!(tabu.contains((0, 0)));
        assert!(!tabu.contains((1, 0)));
        assert!(tabu.contains((2, 0)));
    }

    #[test]
    fn test_outcome_accessors() {
        let colored = TabucolOutcome::Colored {
            coloring: vec![0, 1],
            iterations: 5,
        };
        assert!(colored.is_colored());
        assert_eq!(colored.coloring(), Some(&[0, 1][..]));
        assert_eq!(colored.iterations(), 5);

        let exhausted = TabucolOutcome::Exhausted {
            conflicts: 2,
            iterations: 100,
        };
        assert!(!exhausted.is_colored());
        assert_eq!(exhausted.coloring(), None);
        assert_eq!(exhausted.iterations(), 100);
    }
}

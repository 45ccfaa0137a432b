//! Immutable undirected graph input.
//!
//! Vertices are dense indices `0..vertex_count`; callers that identify
//! vertices by label map labels to indices before building the graph. The
//! graph is fixed for the lifetime of a search — construction validates the
//! edge list once and nothing mutates it afterwards.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// Index of a vertex, in `0..Graph::vertex_count()`.
pub type VertexId = usize;

/// An undirected graph without self-loops or parallel edges.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Graph {
    vertex_count: usize,
    /// Normalized edges: `u < v`, ascending, deduplicated.
    edges: Vec<(VertexId, VertexId)>,
    /// `adjacency[v]`: neighbors of `v`, ascending.
    adjacency: Vec<Vec<VertexId>>,
}

impl Graph {
    /// Builds a graph on vertices `0..vertex_count` from an edge list.
    ///
    /// Duplicate edges (in either orientation) are ignored; a self-loop or
    /// an endpoint outside the vertex set rejects the whole input.
    ///
    /// # Examples
    ///
    /// ```
    /// use tabu_color::Graph;
    ///
    /// let graph = Graph::from_edges(4, &[(0, 1), (1, 0), (2, 3)]).unwrap();
    /// assert_eq!(graph.edge_count(), 2);
    /// assert!(Graph::from_edges(4, &[(1, 1)]).is_err());
    /// ```
    pub fn from_edges(
        vertex_count: usize,
        edges: &[(VertexId, VertexId)],
    ) -> Result<Self, GraphError> {
        let mut normalized = Vec::with_capacity(edges.len());
        for &(u, v) in edges {
            if u == v {
                return Err(GraphError::SelfLoop(u));
            }
            if u >= vertex_count || v >= vertex_count {
                return Err(GraphError::VertexOutOfRange {
                    u,
                    v,
                    vertex_count,
                });
            }
            normalized.push(if u < v { (u, v) } else { (v, u) });
        }
        normalized.sort_unstable();
        normalized.dedup();

        let mut adjacency = vec![Vec::new(); vertex_count];
        for &(u, v) in &normalized {
            adjacency[u].push(v);
            adjacency[v].push(u);
        }
        for neighbors in &mut adjacency {
            neighbors.sort_unstable();
        }

        Ok(Self {
            vertex_count,
            edges: normalized,
            adjacency,
        })
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges as `(u, v)` pairs with `u < v`, in ascending order.
    pub fn edges(&self) -> &[(VertexId, VertexId)] {
        &self.edges
    }

    /// Neighbors of `v`, in ascending order.
    pub fn neighbors(&self, v: VertexId) -> &[VertexId] {
        &self.adjacency[v]
    }

    /// Degree of `v`.
    pub fn degree(&self, v: VertexId) -> usize {
        self.adjacency[v].len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_edges_basic() {
        let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.neighbors(0), &[1, 3]);
        assert_eq!(graph.degree(2), 2);
    }

    #[test]
    fn test_duplicate_edges_ignored() {
        let graph = Graph::from_edges(3, &[(0, 1), (1, 0), (0, 1)]).unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges(), &[(0, 1)]);
    }

    #[test]
    fn test_edges_normalized_ascending() {
        let graph = Graph::from_edges(4, &[(3, 1), (2, 0)]).unwrap();
        assert_eq!(graph.edges(), &[(0, 2), (1, 3)]);
    }

    #[test]
    fn test_self_loop_rejected() {
        assert_eq!(
            Graph::from_edges(3, &[(0, 1), (2, 2)]),
            Err(GraphError::SelfLoop(2))
        );
    }

    #[test]
    fn test_out_of_range_endpoint_rejected() {
        assert_eq!(
            Graph::from_edges(3, &[(0, 5)]),
            Err(GraphError::VertexOutOfRange {
                u: 0,
                v: 5,
                vertex_count: 3
            })
        );
    }

    #[test]
    fn test_empty_graph() {
        let graph = Graph::from_edges(0, &[]).unwrap();
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_edgeless_graph() {
        let graph = Graph::from_edges(5, &[]).unwrap();
        assert_eq!(graph.vertex_count(), 5);
        assert!(graph.neighbors(4).is_empty());
    }
}

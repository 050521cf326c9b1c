//! Proximity graph over positioned orders.
//!
//! Two orders are adjacent iff the Chebyshev distance between their cells
//! is at most the radius. Same-cell orders are always adjacent.
//!
//! # Complexity
//! O(n × (2r+1)²): each node scans a fixed window through the
//! [`SpatialIndex`] instead of comparing against every other node.

use super::{PositionedOrder, SpatialIndex};

/// Undirected adjacency lists, indexed like the `positioned` slice.
#[derive(Debug, Clone, Default)]
pub struct NeighborGraph {
    adjacency: Vec<Vec<usize>>,
}

impl NeighborGraph {
    /// Builds the graph.
    ///
    /// The distance check is repeated per candidate so the result stays
    /// correct if the index window is ever wider than `radius`.
    pub fn build(positioned: &[PositionedOrder], index: &SpatialIndex, radius: i32) -> Self {
        let limit = radius.max(0).unsigned_abs();
        let adjacency: Vec<Vec<usize>> = positioned
            .iter()
            .enumerate()
            .map(|(node, current)| {
                index
                    .window(current.position, radius.max(0))
                    .filter(|&other| other != node)
                    .filter(|&other| {
                        current
                            .position
                            .chebyshev_distance(&positioned[other].position)
                            <= limit
                    })
                    .collect()
            })
            .collect();

        Self { adjacency }
    }

    /// Neighbors of `node`.
    #[inline]
    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }

    /// Number of neighbors of `node`.
    #[inline]
    pub fn degree(&self, node: usize) -> usize {
        self.adjacency[node].len()
    }

    /// Whether `a` and `b` are adjacent.
    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        self.adjacency[a].contains(&b)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }
}

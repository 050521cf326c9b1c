//! Degree-ordered greedy coloring.
//!
//! # Algorithm
//!
//! 1. Sort pending nodes by degree descending, ties by (y, x) ascending.
//! 2. For each node, count the colors of its already-colored neighbors.
//! 3. Pick a color:
//!    - no colored neighbors: multiplicative hash of the order ID
//!    - some colors free: the free color with the best worst-case contrast
//!      against the used ones
//!    - palette saturated: the color maximizing average contrast minus a
//!      penalty of 5 per neighbor already wearing it
//! 4. Record the color immediately so later nodes see it.
//!
//! All ties resolve to the smallest palette index.
//!
//! # Complexity
//! O(n log n + n × (d + K²)) for n nodes, degree d, palette size K.
//!
//! # Reference
//! Welsh & Powell (1967), largest-degree-first ordering

use std::cmp::Reverse;

use super::{NeighborGraph, PositionedOrder};
use crate::models::{ContrastMatrix, OrderId, PALETTE_SIZE};

/// Odd 32-bit multiplier (⌊2³² / φ⌋) for scattering unconstrained defaults.
pub const HASH_MULTIPLIER: u32 = 2_654_435_761;

const REUSE_PENALTY: i64 = 5;

/// Default color for a node with no colored neighbors.
///
/// Wraps with 32-bit unsigned arithmetic so the result is identical on
/// every platform.
#[inline]
pub fn hash_color(id: OrderId) -> usize {
    ((id as u32).wrapping_mul(HASH_MULTIPLIER) % PALETTE_SIZE as u32) as usize
}

/// Color for orders that never reach the grid.
#[inline]
pub fn fallback_color(id: OrderId) -> usize {
    id.rem_euclid(PALETTE_SIZE as i64) as usize
}

/// Greedy colorer over a [`NeighborGraph`].
#[derive(Debug, Clone, Copy)]
pub struct GreedyColorer<'a> {
    contrast: &'a ContrastMatrix,
}

impl<'a> GreedyColorer<'a> {
    /// Creates a colorer scoring candidates with `contrast`.
    pub fn new(contrast: &'a ContrastMatrix) -> Self {
        Self { contrast }
    }

    /// Colors every node in `pending` whose slot in `colors` is empty.
    ///
    /// Nodes outside `pending` that already hold a color act as fixed
    /// context; uncolored ones are ignored. `colors` is indexed like
    /// `nodes`.
    pub fn color(
        &self,
        nodes: &[PositionedOrder],
        graph: &NeighborGraph,
        pending: &[usize],
        colors: &mut [Option<usize>],
    ) {
        let mut order: Vec<usize> = pending
            .iter()
            .copied()
            .filter(|&node| colors[node].is_none())
            .collect();
        order.sort_by_key(|&node| (Reverse(graph.degree(node)), nodes[node].position.row_major()));

        for node in order {
            let mut counts = [0u32; PALETTE_SIZE];
            for &neighbor in graph.neighbors(node) {
                if let Some(c) = colors[neighbor] {
                    counts[c] += 1;
                }
            }
            colors[node] = Some(self.choose(nodes[node].id, &counts));
        }
    }

    /// Picks a color given how many neighbors wear each palette entry.
    pub fn choose(&self, id: OrderId, neighbor_counts: &[u32; PALETTE_SIZE]) -> usize {
        let used = neighbor_counts.iter().filter(|&&n| n > 0).count();
        match used {
            0 => hash_color(id),
            PALETTE_SIZE => self.least_conflicting(neighbor_counts),
            _ => self.most_contrasting_free(neighbor_counts),
        }
    }

    /// Free color maximizing the minimum contrast to every used color.
    fn most_contrasting_free(&self, counts: &[u32; PALETTE_SIZE]) -> usize {
        let mut best: Option<(usize, u32)> = None;
        for candidate in (0..PALETTE_SIZE).filter(|&c| counts[c] == 0) {
            let worst = (0..PALETTE_SIZE)
                .filter(|&u| counts[u] > 0)
                .map(|u| self.contrast.contrast(candidate, u))
                .min()
                .unwrap_or(0);
            if best.map_or(true, |(_, score)| worst > score) {
                best = Some((candidate, worst));
            }
        }
        best.map_or(0, |(color, _)| color)
    }

    /// Every color is taken: trade average contrast against exact reuse.
    ///
    /// Scores are compared scaled by the number of used colors so the
    /// average stays in integer arithmetic.
    fn least_conflicting(&self, counts: &[u32; PALETTE_SIZE]) -> usize {
        let used: Vec<usize> = (0..PALETTE_SIZE).filter(|&u| counts[u] > 0).collect();
        let scale = used.len() as i64;

        let mut best = (0, i64::MIN);
        for candidate in 0..PALETTE_SIZE {
            let total: i64 = used
                .iter()
                .map(|&u| i64::from(self.contrast.contrast(candidate, u)))
                .sum();
            let score = total - REUSE_PENALTY * i64::from(counts[candidate]) * scale;
            if score > best.1 {
                best = (candidate, score);
            }
        }
        best.0
    }
}

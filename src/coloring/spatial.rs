//! Cell-bucketed spatial index.
//!
//! Buckets positioned orders by exact grid cell. Neighborhood queries scan
//! the (2r+1)² cells around a point instead of every order, and cells with
//! more than one order are reported as collisions for the view.

use std::collections::{BTreeMap, HashMap};

use super::PositionedOrder;
use crate::models::VisualPosition;

/// Orders bucketed by grid cell.
///
/// Bucket entries are indices into the `positioned` slice the index was
/// built from, in slice order.
#[derive(Debug, Clone, Default)]
pub struct SpatialIndex {
    cells: HashMap<VisualPosition, Vec<usize>>,
}

impl SpatialIndex {
    /// Builds the index.
    pub fn build(positioned: &[PositionedOrder]) -> Self {
        let mut cells: HashMap<VisualPosition, Vec<usize>> = HashMap::new();
        for (node, p) in positioned.iter().enumerate() {
            cells.entry(p.position).or_default().push(node);
        }
        Self { cells }
    }

    /// Nodes occupying exactly `cell`.
    pub fn at(&self, cell: VisualPosition) -> &[usize] {
        self.cells.get(&cell).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Nodes in the square window of the given radius around `center`,
    /// including `center` itself.
    pub fn window(&self, center: VisualPosition, radius: i32) -> impl Iterator<Item = usize> + '_ {
        (-radius..=radius)
            .flat_map(move |dx| (-radius..=radius).map(move |dy| center.offset(dx, dy)))
            .flat_map(move |cell| self.at(cell).iter().copied())
    }

    /// Number of occupied cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether more than one order shares `cell`.
    pub fn is_collision(&self, cell: VisualPosition) -> bool {
        self.at(cell).len() > 1
    }

    /// Collision cells, sorted by row then column.
    pub fn collision_cells(&self) -> Vec<VisualPosition> {
        let mut cells: Vec<VisualPosition> = self
            .cells
            .iter()
            .filter(|(_, nodes)| nodes.len() > 1)
            .map(|(cell, _)| *cell)
            .collect();
        cells.sort_by_key(VisualPosition::row_major);
        cells
    }

    /// Largest cell occupancy per row (line rank).
    ///
    /// The timeline view sizes each line row to fit its tallest stack.
    pub fn max_stack_per_row(&self) -> BTreeMap<i32, usize> {
        let mut rows: BTreeMap<i32, usize> = BTreeMap::new();
        for (cell, nodes) in &self.cells {
            let slot = rows.entry(cell.y).or_insert(0);
            *slot = (*slot).max(nodes.len());
        }
        rows
    }
}

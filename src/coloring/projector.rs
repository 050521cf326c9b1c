//! Grid projection.
//!
//! Maps each order's (date, shift, line) onto an integer grid cell.
//!
//! # Coordinates
//! - `x = (day − first_day) × shift_count + (shift − 1)`
//! - `y = rank of line` among the distinct lines present, ascending from 0
//!
//! Orders without a line, with a shift outside `1..=shift_count`, or whose
//! column does not fit the grid are not projected. They are reported as
//! unassigned and colored separately.

use std::collections::BTreeMap;

use super::config::MAX_RADIUS;
use super::ColoringConfig;
use crate::models::{Order, OrderId, VisualPosition};

/// Largest column a projected order may occupy; neighborhood windows
/// reach up to `MAX_RADIUS` columns past it.
const MAX_COLUMN: i32 = i32::MAX - MAX_RADIUS;

/// An order that landed on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionedOrder {
    /// Order identifier.
    pub id: OrderId,
    /// Grid cell.
    pub position: VisualPosition,
}

/// Result of projecting an order list onto the grid.
#[derive(Debug, Clone, Default)]
pub struct GridProjection {
    /// Orders placed on the grid, in input order.
    pub positioned: Vec<PositionedOrder>,
    /// Input indices of orders that could not be placed.
    pub unassigned: Vec<usize>,
    line_ranks: BTreeMap<i32, i32>,
    first_day: Option<i32>,
}

impl GridProjection {
    /// Projects `orders` onto the grid.
    ///
    /// # Complexity
    /// O(n log L) where L = number of distinct lines.
    pub fn project(orders: &[Order], config: &ColoringConfig) -> Self {
        let placeable = |order: &Order| order.line.is_some() && config.is_valid_shift(order.shift);

        let first_day = orders
            .iter()
            .filter(|&order| placeable(order))
            .map(Order::day_index)
            .min();

        let columns: Vec<Option<i32>> = orders
            .iter()
            .map(|order| match first_day {
                Some(origin) if placeable(order) => column(order, origin, config.shift_count),
                _ => None,
            })
            .collect();

        let mut line_ranks: BTreeMap<i32, i32> = BTreeMap::new();
        for (order, column) in orders.iter().zip(&columns) {
            if let (Some(line), Some(_)) = (order.line, column) {
                line_ranks.insert(line, 0);
            }
        }
        // BTreeMap iterates ascending, so enumeration order is the rank.
        for (rank, slot) in line_ranks.values_mut().enumerate() {
            *slot = rank as i32;
        }

        let mut positioned = Vec::new();
        let mut unassigned = Vec::new();
        for (index, (order, column)) in orders.iter().zip(&columns).enumerate() {
            let row = order.line.and_then(|line| line_ranks.get(&line).copied());
            match (*column, row) {
                (Some(x), Some(y)) => positioned.push(PositionedOrder {
                    id: order.id,
                    position: VisualPosition::new(x, y),
                }),
                _ => unassigned.push(index),
            }
        }

        Self {
            positioned,
            unassigned,
            line_ranks,
            first_day,
        }
    }

    /// Row index of a production line, if any projected order uses it.
    pub fn line_rank(&self, line: i32) -> Option<i32> {
        self.line_ranks.get(&line).copied()
    }

    /// Distinct projected lines, ascending.
    pub fn lines(&self) -> impl Iterator<Item = i32> + '_ {
        self.line_ranks.keys().copied()
    }

    /// Day index of column 0, or `None` when nothing was projected.
    pub fn first_day(&self) -> Option<i32> {
        self.first_day
    }
}

/// Column of `order` relative to `origin`, or `None` when it overflows.
fn column(order: &Order, origin: i32, shift_count: i32) -> Option<i32> {
    let x = (i64::from(order.day_index()) - i64::from(origin))
        .checked_mul(i64::from(shift_count))?
        .checked_add(i64::from(order.shift) - 1)?;
    i32::try_from(x).ok().filter(|&x| x <= MAX_COLUMN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: OrderId, date: &str, shift: i32, line: Option<i32>) -> Order {
        Order::parse(id, date, shift, line).unwrap()
    }

    #[test]
    fn test_project_basic() {
        let orders = vec![
            order(1, "2025-01-15", 1, Some(10)),
            order(2, "2025-01-15", 3, Some(10)),
            order(3, "2025-01-16", 2, Some(33)),
        ];
        let proj = GridProjection::project(&orders, &ColoringConfig::default());

        assert!(proj.unassigned.is_empty());
        let pos: Vec<_> = proj.positioned.iter().map(|p| p.position).collect();
        assert_eq!(
            pos,
            vec![
                VisualPosition::new(0, 0),
                VisualPosition::new(2, 0),
                VisualPosition::new(4, 1),
            ]
        );
    }

    #[test]
    fn test_line_ranks_are_dense() {
        let orders = vec![
            order(1, "2025-01-15", 1, Some(44)),
            order(2, "2025-01-15", 1, Some(3)),
            order(3, "2025-01-15", 1, Some(7)),
            order(4, "2025-01-15", 1, Some(3)),
        ];
        let proj = GridProjection::project(&orders, &ColoringConfig::default());

        assert_eq!(proj.line_rank(3), Some(0));
        assert_eq!(proj.line_rank(7), Some(1));
        assert_eq!(proj.line_rank(44), Some(2));
        assert_eq!(proj.line_rank(5), None);
        assert_eq!(proj.lines().collect::<Vec<_>>(), vec![3, 7, 44]);
    }

    #[test]
    fn test_origin_is_earliest_day() {
        let orders = vec![
            order(1, "2025-02-01", 1, Some(1)),
            order(2, "2025-01-31", 3, Some(1)),
        ];
        let proj = GridProjection::project(&orders, &ColoringConfig::default());

        assert_eq!(proj.first_day(), Some(orders[1].day_index()));
        assert_eq!(proj.positioned[0].position, VisualPosition::new(3, 0));
        assert_eq!(proj.positioned[1].position, VisualPosition::new(2, 0));
    }

    #[test]
    fn test_time_of_day_does_not_move_column() {
        let orders = vec![
            order(1, "2025-01-15T00:00:01", 1, Some(1)),
            order(2, "2025-01-15T23:59:59", 1, Some(1)),
        ];
        let proj = GridProjection::project(&orders, &ColoringConfig::default());
        assert_eq!(proj.positioned[0].position, proj.positioned[1].position);
    }

    #[test]
    fn test_unplaceable_orders() {
        let orders = vec![
            order(1, "2025-01-15", 1, None),
            order(2, "2025-01-15", 0, Some(1)),
            order(3, "2025-01-15", 4, Some(2)),
            order(4, "2025-01-20", 2, Some(5)),
        ];
        let proj = GridProjection::project(&orders, &ColoringConfig::default());

        assert_eq!(proj.unassigned, vec![0, 1, 2]);
        assert_eq!(proj.positioned.len(), 1);
        // Invalid-shift orders neither claim a row nor move the origin.
        assert_eq!(proj.line_rank(5), Some(0));
        assert_eq!(proj.line_rank(1), None);
        assert_eq!(proj.positioned[0].position, VisualPosition::new(1, 0));
    }

    #[test]
    fn test_custom_shift_count() {
        let orders = vec![
            order(1, "2025-01-15", 2, Some(1)),
            order(2, "2025-01-16", 2, Some(1)),
        ];
        let cfg = ColoringConfig::new().with_shift_count(2);
        let proj = GridProjection::project(&orders, &cfg);
        assert_eq!(proj.positioned[1].position, VisualPosition::new(3, 0));
    }

    #[test]
    fn test_column_overflow_is_unassigned() {
        let orders = vec![
            order(1, "2020-01-01", 1, Some(1)),
            order(2, "2026-01-01", 1, Some(2)),
        ];
        let cfg = ColoringConfig::new().with_shift_count(1_000_000);
        let proj = GridProjection::project(&orders, &cfg);

        assert_eq!(proj.unassigned, vec![1]);
        assert_eq!(proj.positioned.len(), 1);
        assert_eq!(proj.positioned[0].position, VisualPosition::new(0, 0));
        // The overflowing order does not claim a row.
        assert_eq!(proj.line_rank(2), None);
    }

    #[test]
    fn test_largest_column_still_fits() {
        let orders = vec![
            order(1, "2025-01-01", 1, Some(1)),
            order(2, "2025-01-02", 1, Some(1)),
            order(3, "2025-01-03", 1, Some(1)),
        ];
        let cfg = ColoringConfig::new().with_shift_count(MAX_COLUMN);
        let proj = GridProjection::project(&orders, &cfg);

        assert_eq!(proj.unassigned, vec![2]);
        assert_eq!(proj.positioned[1].position, VisualPosition::new(MAX_COLUMN, 0));
    }

    #[test]
    fn test_project_empty() {
        let proj = GridProjection::project(&[], &ColoringConfig::default());
        assert!(proj.positioned.is_empty());
        assert!(proj.unassigned.is_empty());
        assert_eq!(proj.first_day(), None);
    }
}

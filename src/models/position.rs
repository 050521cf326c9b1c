//! Grid coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell on the timeline grid.
///
/// `x` walks time (day × shifts + shift), `y` walks production lines by rank.
/// Doubles as the spatial index key; `Display` renders it as `x_y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisualPosition {
    /// Time column.
    pub x: i32,
    /// Line row.
    pub y: i32,
}

impl VisualPosition {
    /// Creates a position.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance: `max(|dx|, |dy|)`.
    #[inline]
    pub fn chebyshev_distance(&self, other: &Self) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// The position shifted by `(dx, dy)`.
    #[inline]
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Sort key: row first, then column.
    #[inline]
    pub fn row_major(&self) -> (i32, i32) {
        (self.y, self.x)
    }
}

impl fmt::Display for VisualPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chebyshev_distance() {
        let a = VisualPosition::new(0, 0);
        assert_eq!(a.chebyshev_distance(&a), 0);
        assert_eq!(a.chebyshev_distance(&VisualPosition::new(2, 1)), 2);
        assert_eq!(a.chebyshev_distance(&VisualPosition::new(-3, 2)), 3);
        assert_eq!(
            VisualPosition::new(5, 5).chebyshev_distance(&VisualPosition::new(4, 6)),
            1
        );
    }

    #[test]
    fn test_display_key() {
        assert_eq!(VisualPosition::new(12, 3).to_string(), "12_3");
        assert_eq!(VisualPosition::new(-1, 0).offset(1, 2).to_string(), "0_2");
    }
}

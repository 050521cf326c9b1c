//! Pipeline configuration.

use serde::{Deserialize, Serialize};

use crate::ColoringError;

/// Neighborhood radius used by the timeline view.
pub const DEFAULT_RADIUS: i32 = 2;
/// Shifts per production day.
pub const DEFAULT_SHIFT_COUNT: i32 = 3;
/// Largest number of new orders colored in one greedy pass.
pub const DEFAULT_MAX_ORDERS_PER_PASS: usize = 10_000;

pub(crate) const MAX_RADIUS: i32 = 8;

/// Tuning knobs for the coloring pipeline.
///
/// Missing fields deserialize to their defaults, so a host application can
/// override a single value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColoringConfig {
    /// Chebyshev radius within which two orders constrain each other.
    pub radius: i32,
    /// Shifts per day; valid shifts are `1..=shift_count`. Orders whose
    /// column overflows the grid get the fallback color.
    pub shift_count: i32,
    /// New orders colored per pass; larger inputs are chunked.
    pub max_orders_per_pass: usize,
}

impl ColoringConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the neighborhood radius.
    pub fn with_radius(mut self, radius: i32) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the number of shifts per day.
    pub fn with_shift_count(mut self, shift_count: i32) -> Self {
        self.shift_count = shift_count;
        self
    }

    /// Sets the per-pass order limit.
    pub fn with_max_orders_per_pass(mut self, max: usize) -> Self {
        self.max_orders_per_pass = max;
        self
    }

    /// Whether `shift` is a valid shift number.
    #[inline]
    pub fn is_valid_shift(&self, shift: i32) -> bool {
        (1..=self.shift_count).contains(&shift)
    }

    /// Checks that every field is in range.
    ///
    /// # Errors
    /// - `radius` outside `0..=8`
    /// - `shift_count` < 1
    /// - `max_orders_per_pass` == 0
    pub fn validate(&self) -> Result<(), ColoringError> {
        if !(0..=MAX_RADIUS).contains(&self.radius) {
            return Err(ColoringError::InvalidConfig(format!(
                "radius must be in 0..={MAX_RADIUS}, got {}",
                self.radius
            )));
        }
        if self.shift_count < 1 {
            return Err(ColoringError::InvalidConfig(format!(
                "shift_count must be positive, got {}",
                self.shift_count
            )));
        }
        if self.max_orders_per_pass == 0 {
            return Err(ColoringError::InvalidConfig(
                "max_orders_per_pass must be positive".into(),
            ));
        }
        Ok(())
    }
}

impl Default for ColoringConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            shift_count: DEFAULT_SHIFT_COUNT,
            max_orders_per_pass: DEFAULT_MAX_ORDERS_PER_PASS,
        }
    }
}

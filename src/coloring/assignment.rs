//! Order → palette index mapping.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{palette_color, OrderId, PaletteColor};

/// Palette index per order ID.
///
/// Serializes as a plain `{id: index}` map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorAssignment {
    colors: HashMap<OrderId, usize>,
}

impl ColorAssignment {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            colors: HashMap::with_capacity(capacity),
        }
    }

    pub(crate) fn insert(&mut self, id: OrderId, color_index: usize) {
        self.colors.insert(id, color_index);
    }

    /// Palette index of an order.
    pub fn get(&self, id: OrderId) -> Option<usize> {
        self.colors.get(&id).copied()
    }

    /// Palette entry of an order.
    pub fn palette_color(&self, id: OrderId) -> Option<&'static PaletteColor> {
        self.get(id).map(palette_color)
    }

    /// Whether the order has a color.
    pub fn contains(&self, id: OrderId) -> bool {
        self.colors.contains_key(&id)
    }

    /// Number of colored orders.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether no order is colored.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterates `(id, color_index)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (OrderId, usize)> + '_ {
        self.colors.iter().map(|(&id, &c)| (id, c))
    }
}

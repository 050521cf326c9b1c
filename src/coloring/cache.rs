//! Session-scoped color cache and the pipeline entry point.
//!
//! A view owns one [`ColorCache`] for the whole viewing session. Every call
//! to [`ColorCache::assign_colors`] reuses cached colors and only runs the
//! greedy pass for orders it has not seen, so blocks already on screen keep
//! their color when the visible window grows or data is refetched.
//!
//! # Pipeline
//! 1. Project every input order (cached or not) onto the grid.
//! 2. Index cells over all positioned orders.
//! 3. Pre-color cached orders, then color the new ones in passes of at most
//!    `max_orders_per_pass`, earliest columns first. Each pass builds its
//!    neighbor graph over its own orders plus the already-colored orders
//!    within reach, and greedily colors it.
//! 4. Merge new colors into the cache.
//!
//! Projection and indexing are single linear scans; the graph and the
//! degree sort never hold more than one pass and its colored context.
//!
//! # Concurrency
//! Single writer: `assign_colors` takes `&mut self`. Share a cache between
//! views only behind external serialization.

use std::collections::{HashMap, HashSet};

use log::{debug, warn};

use super::{
    fallback_color, ColorAssignment, ColoringConfig, GreedyColorer, GridProjection,
    NeighborGraph, PositionedOrder, SpatialIndex,
};
use crate::models::{ContrastMatrix, Order, OrderId};
use crate::ColoringError;

/// Size of the subgraph one greedy pass worked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PassStats {
    nodes: usize,
    edges: usize,
}

/// Colors stable across calls for one viewing session.
#[derive(Debug, Clone, Default)]
pub struct ColorCache {
    colors: HashMap<OrderId, usize>,
    config: ColoringConfig,
    contrast: ContrastMatrix,
}

impl ColorCache {
    /// Creates an empty cache with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty cache with a custom configuration.
    ///
    /// # Errors
    /// Returns [`ColoringError::InvalidConfig`] when `config` fails validation.
    pub fn with_config(config: ColoringConfig) -> Result<Self, ColoringError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// Replaces the contrast scores used for new assignments.
    pub fn with_contrast(mut self, contrast: ContrastMatrix) -> Self {
        self.contrast = contrast;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &ColoringConfig {
        &self.config
    }

    /// Assigns a palette index to every order in `orders`.
    ///
    /// Cached orders keep their color. The returned map covers exactly the
    /// input IDs. Total over any input, including empty lists.
    ///
    /// # Complexity
    /// O(n × (2r+1)²) plus a sort of the uncached orders. Graph memory is
    /// bounded by one pass and its colored context.
    pub fn assign_colors(&mut self, orders: &[Order]) -> ColorAssignment {
        let mut result = ColorAssignment::with_capacity(orders.len());
        if orders.is_empty() {
            return result;
        }

        let projection = GridProjection::project(orders, &self.config);

        for &i in &projection.unassigned {
            let id = orders[i].id;
            let color = *self.colors.entry(id).or_insert_with(|| fallback_color(id));
            result.insert(id, color);
        }

        let nodes = &projection.positioned;
        let mut colors: Vec<Option<usize>> = nodes
            .iter()
            .map(|n| self.colors.get(&n.id).copied())
            .collect();
        let mut pending: Vec<usize> = (0..nodes.len()).filter(|&n| colors[n].is_none()).collect();
        let index = SpatialIndex::build(nodes);

        let pass_size = self.config.max_orders_per_pass.max(1);
        if pending.len() > pass_size {
            warn!(
                "event=assign_colors_chunked module=coloring status=degraded pending={} pass_size={}",
                pending.len(),
                pass_size
            );
        }
        // Stable sort: same-cell orders keep input order.
        pending.sort_by_key(|&n| (nodes[n].position.x, nodes[n].position.y));

        let mut edges = 0;
        let mut largest_pass = 0;
        for chunk in pending.chunks(pass_size) {
            let stats = self.color_pass(nodes, &index, chunk, &mut colors);
            edges += stats.edges;
            largest_pass = largest_pass.max(stats.nodes);
        }

        debug!(
            "event=assign_colors module=coloring status=ok orders={} cached={} computed={} unassigned={} passes={} largest_pass={} edges={} collisions={}",
            orders.len(),
            nodes.len() - pending.len(),
            pending.len(),
            projection.unassigned.len(),
            pending.len().div_ceil(pass_size),
            largest_pass,
            edges,
            index.collision_cells().len()
        );

        for (node, color) in nodes.iter().zip(&colors) {
            if let Some(c) = *color {
                self.colors.insert(node.id, c);
                result.insert(node.id, c);
            }
        }

        result
    }

    /// Colors `chunk` against the colored orders within reach of it.
    ///
    /// The graph is built over the chunk and that context only, so orders
    /// still waiting for a later pass neither count toward degrees nor
    /// cost memory here.
    fn color_pass(
        &self,
        nodes: &[PositionedOrder],
        index: &SpatialIndex,
        chunk: &[usize],
        colors: &mut [Option<usize>],
    ) -> PassStats {
        let radius = self.config.radius;
        let mut members: Vec<usize> = chunk.to_vec();
        let mut seen: HashSet<usize> = chunk.iter().copied().collect();
        for &node in chunk {
            for other in index.window(nodes[node].position, radius) {
                if colors[other].is_some() && seen.insert(other) {
                    members.push(other);
                }
            }
        }

        let local: Vec<PositionedOrder> = members.iter().map(|&n| nodes[n]).collect();
        let local_index = SpatialIndex::build(&local);
        let graph = NeighborGraph::build(&local, &local_index, radius);
        let mut local_colors: Vec<Option<usize>> = members.iter().map(|&n| colors[n]).collect();
        let pending: Vec<usize> = (0..chunk.len()).collect();

        GreedyColorer::new(&self.contrast).color(&local, &graph, &pending, &mut local_colors);
        for (&node, color) in members.iter().zip(local_colors) {
            colors[node] = color;
        }

        PassStats {
            nodes: members.len(),
            edges: graph.edge_count(),
        }
    }

    /// Cached color of an order.
    pub fn get(&self, id: OrderId) -> Option<usize> {
        self.colors.get(&id).copied()
    }

    /// Whether the order has a cached color.
    pub fn contains(&self, id: OrderId) -> bool {
        self.colors.contains_key(&id)
    }

    /// Number of cached orders.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Forgets one order so its next assignment is recomputed, e.g. after
    /// it was moved to another line. Returns the dropped color.
    pub fn invalidate(&mut self, id: OrderId) -> Option<usize> {
        let dropped = self.colors.remove(&id);
        debug!(
            "event=color_cache_invalidate module=coloring status=ok id={} hit={}",
            id,
            dropped.is_some()
        );
        dropped
    }

    /// Drops every cached color. Call on session restart only.
    pub fn clear(&mut self) {
        debug!(
            "event=color_cache_clear module=coloring status=ok entries={}",
            self.colors.len()
        );
        self.colors.clear();
    }
}

/// Colors `orders` with the default configuration and no cache.
///
/// # Example
///
/// ```
/// use shift_colors::coloring::assign_order_colors;
/// use shift_colors::models::Order;
///
/// let orders = vec![
///     Order::parse(1, "2025-01-15", 1, Some(1)).unwrap(),
///     Order::parse(2, "2025-01-15", 2, Some(1)).unwrap(),
///     Order::parse(3, "2025-01-15", 1, None).unwrap(),
/// ];
/// let colors = assign_order_colors(&orders);
/// assert_eq!(colors.len(), 3);
/// assert_ne!(colors.get(1), colors.get(2));
/// assert_eq!(colors.get(3), Some(3));
/// ```
pub fn assign_order_colors(orders: &[Order]) -> ColorAssignment {
    ColorCache::new().assign_colors(orders)
}

//! Proximity-aware order coloring.
//!
//! Turns a list of orders into a palette index per order such that orders
//! drawn near each other on the timeline get high-contrast colors.
//!
//! # Pipeline
//!
//! | Stage | Type | Output |
//! |-------|------|--------|
//! | Projection | `GridProjection` | (x, y) cell per order |
//! | Indexing | `SpatialIndex` | orders per cell, collisions |
//! | Graph | `NeighborGraph` | Chebyshev-radius adjacency |
//! | Coloring | `GreedyColorer` | palette index per node |
//! | Caching | `ColorCache` | stable colors across calls |
//!
//! The greedy pass is a heuristic: it does not minimize the number of
//! colors and gives no optimality guarantee.
//!
//! # Reference
//! Welsh & Powell (1967), "An upper bound for the chromatic number of a
//! graph and its application to timetabling problems"

mod assignment;
mod cache;
mod config;
mod graph;
mod greedy;
mod projector;
mod spatial;

pub use assignment::ColorAssignment;
pub use cache::{assign_order_colors, ColorCache};
pub use config::{
    ColoringConfig, DEFAULT_MAX_ORDERS_PER_PASS, DEFAULT_RADIUS, DEFAULT_SHIFT_COUNT,
};
pub use graph::NeighborGraph;
pub use greedy::{fallback_color, hash_color, GreedyColorer, HASH_MULTIPLIER};
pub use projector::{GridProjection, PositionedOrder};
pub use spatial::SpatialIndex;

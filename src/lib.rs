//! Contrast-aware color assignment for production timelines.
//!
//! Scheduled production orders are drawn on a 2D grid: the x axis walks
//! days and shifts, the y axis walks production lines. Orders that end up
//! close to each other on that grid must be visually distinguishable, so
//! this crate assigns each order an index into a fixed 12-color palette
//! such that near neighbors get high-contrast colors.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Order`, `PaletteColor`, `ContrastMatrix`,
//!   `VisualPosition`
//! - **`coloring`**: The pipeline: grid projection, spatial index, neighbor
//!   graph, greedy coloring, and the session-scoped `ColorCache`
//! - **`validation`**: Caller-side input diagnostics (duplicate IDs, shift
//!   ranges, contrast matrix sanity)
//!
//! # Example
//!
//! ```
//! use shift_colors::coloring::ColorCache;
//! use shift_colors::models::Order;
//!
//! let orders = vec![
//!     Order::parse(1, "2025-01-15", 1, Some(1)).unwrap(),
//!     Order::parse(2, "2025-01-15", 1, Some(1)).unwrap(),
//! ];
//!
//! let mut cache = ColorCache::new();
//! let colors = cache.assign_colors(&orders);
//! assert_eq!(colors.len(), 2);
//! assert_ne!(colors.get(1), colors.get(2));
//! ```
//!
//! # Algorithm
//!
//! The coloring is a single-pass greedy heuristic (Welsh-Powell ordering),
//! not an exact solver: it does not minimize the number of colors used.
//!
//! # References
//!
//! - Welsh & Powell (1967), "An upper bound for the chromatic number of a
//!   graph and its application to timetabling problems"
//! - Knuth (1998), "The Art of Computer Programming", Vol. 3, 6.4
//!   (multiplicative hashing)

pub mod coloring;
mod error;
pub mod models;
pub mod validation;

pub use error::ColoringError;

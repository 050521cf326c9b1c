//! Timeline coloring domain models.
//!
//! Provides the data types the coloring pipeline reads and produces.
//!
//! # Domain Mappings
//!
//! | shift-colors | Timeline view | Graph coloring |
//! |--------------|---------------|----------------|
//! | Order | Order block | Vertex |
//! | VisualPosition | Grid cell | Vertex embedding |
//! | PaletteColor | Block style | Color |
//! | ContrastMatrix | Perceived distinctness | Color distance |

mod contrast;
mod order;
mod palette;
mod position;

pub use contrast::ContrastMatrix;
pub use order::{parse_calendar_day, Order, OrderId};
pub use palette::{palette_color, PaletteColor, PALETTE, PALETTE_SIZE};
pub use position::VisualPosition;

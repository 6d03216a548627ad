//! Mosaic: a grid of randomly generated tiles.
//!
//! Each tile is a square or circle filled with a random color, with a random
//! letter drawn on top in black or white depending on the fill brightness.
//! The grid can be regenerated as a whole, one tile at a time, or rebuilt at
//! a new size.
//!
//! ```
//! use mosaic::grid::GridController;
//!
//! let mut grid = GridController::seeded(3, 4, 42).unwrap();
//! grid.randomize_one();
//! assert_eq!(grid.len(), 12);
//! assert!(grid.resize(0, 4).is_err());
//! ```

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod grid;
pub mod render;
pub mod tile;


pub use app::{Command, Mosaic};
pub use error::{MosaicError, Result};
pub use grid::GridController;
pub use tile::{Rgb, ShapeKind, TextColor, Tile};

//! Tile module.
//!
//! This module organizes the tile model, its attribute types and the text contrast rule.

pub mod contrast;
pub mod tile;
pub mod types;

pub use contrast::*;
pub use tile::*;
pub use types::*;

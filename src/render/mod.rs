//! Rendering module.
//!
//! The painter draws tiles onto any [`Surface`]; the terminal renderer prints
//! the grid with ANSI colors.

pub mod painter;
pub mod surface;
pub mod terminal;

pub use painter::*;
pub use surface::*;
pub use terminal::*;

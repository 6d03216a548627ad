/// Rendering configuration constants.
///
/// Surface size, tile inset and glyph font used by the rendering collaborator.
pub const SURFACE_WIDTH: i32 = 1200; // Default drawing surface width.

/// Default drawing surface height.
pub const SURFACE_HEIGHT: i32 = 800;

/// Inset applied on each side of a tile cell before filling the shape.
pub const TILE_MARGIN: i32 = 5;

/// Fixed-width font family used for the tile letter.
pub const FONT_FAMILY: &str = "Courier";

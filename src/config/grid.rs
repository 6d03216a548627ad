/// Grid configuration constants.
///
/// This module defines the startup grid dimensions and the upper bound on the
/// number of tiles a resize may request.
pub const DEFAULT_ROWS: usize = 12;

/// Number of columns in the grid at startup.
pub const DEFAULT_COLS: usize = 12;

/// Largest accepted rows x cols product. Larger requests are rejected as invalid dimensions.
pub const MAX_TILES: usize = 1_000_000;

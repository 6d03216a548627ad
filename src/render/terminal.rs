//! Terminal rendering.
//!
//! Prints the grid with 24-bit ANSI colors: `[A]` for a square tile and
//! `(A)` for a circle, letter in the contrast color on the tile's fill.

use std::io::{self, Write};

use crate::grid::GridController;
use crate::tile::{ShapeKind, Tile};

const RESET: &str = "\x1b[0m";

/// Colored three-character cell for one tile.
pub fn tile_cell(tile: &Tile) -> String {
    let fill = tile.color();
    let text = tile.text_color().rgb();
    let (open, close) = match tile.shape() {
        ShapeKind::Square => ('[', ']'),
        ShapeKind::Circle => ('(', ')'),
    };
    format!(
        "\x1b[48;2;{};{};{}m\x1b[38;2;{};{};{}m{}{}{}{}",
        fill.r, fill.g, fill.b, text.r, text.g, text.b, open, tile.glyph(), close, RESET
    )
}

/// Print the grid one row per line.
pub fn print_grid<R, W: Write>(grid: &GridController<R>, out: &mut W) -> io::Result<()> {
    for row in grid.tiles().chunks(grid.cols().max(1)) {
        for tile in row {
            write!(out, "{}", tile_cell(tile))?;
        }
        writeln!(out)?;
    }
    out.flush()
}

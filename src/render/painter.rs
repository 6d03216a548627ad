//! Tile painter.
//!
//! Lays tiles out on a surface like a grid layout manager (equal cells, row
//! by row) and draws each one: the shape inset by a fixed margin, then the
//! letter roughly centered on top.

use crate::config::render::{SURFACE_HEIGHT, SURFACE_WIDTH, TILE_MARGIN};
use crate::grid::GridController;
use crate::render::surface::{FontSpec, Rect, Surface};
use crate::tile::{ShapeKind, Tile, TileGeometry};

/// Size of the area the grid is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: i32,
    pub height: i32,
}

impl SurfaceSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self::new(SURFACE_WIDTH, SURFACE_HEIGHT)
    }
}

/// Shape size and font size for a cell of `width` x `height`.
///
/// Saturates instead of overflowing on extreme cell sizes.
pub fn tile_geometry(width: i32, height: i32) -> TileGeometry {
    let shape_width = width.saturating_sub(2 * TILE_MARGIN);
    let shape_height = height.saturating_sub(2 * TILE_MARGIN);
    TileGeometry {
        width: shape_width,
        height: shape_height,
        font_size: (shape_height / 2).min(shape_width / 2),
    }
}

/// Cell rectangles for a `rows` x `cols` grid, in row-major order.
pub fn cell_rects(rows: usize, cols: usize, size: SurfaceSize) -> Vec<Rect> {
    if rows == 0 || cols == 0 {
        return Vec::new();
    }
    let cell_width = size.width / cols as i32;
    let cell_height = size.height / rows as i32;

    (0..rows)
        .flat_map(|row| {
            (0..cols).map(move |col| {
                Rect::new(col as i32 * cell_width, row as i32 * cell_height, cell_width, cell_height)
            })
        })
        .collect()
}

/// Record on every tile the geometry it gets on a surface of `size`.
pub fn layout_grid<R>(grid: &mut GridController<R>, size: SurfaceSize) {
    let rects = cell_rects(grid.rows(), grid.cols(), size);
    for (tile, rect) in grid.tiles_mut().iter_mut().zip(rects) {
        tile.set_geometry(tile_geometry(rect.width, rect.height));
    }
}

/// Draw one tile into `cell` and record the geometry used.
pub fn paint_tile<S: Surface + ?Sized>(tile: &mut Tile, cell: Rect, surface: &mut S) {
    let geometry = tile_geometry(cell.width, cell.height);
    tile.set_geometry(geometry);

    if geometry.width > 0 && geometry.height > 0 {
        let fill = Rect::new(
            cell.x.saturating_add(TILE_MARGIN),
            cell.y.saturating_add(TILE_MARGIN),
            geometry.width,
            geometry.height,
        );
        match tile.shape() {
            ShapeKind::Square => surface.fill_rect(fill, tile.color()),
            ShapeKind::Circle => surface.fill_oval(fill, tile.color()),
        }
    }

    if geometry.font_size > 0 {
        let x = cell.x.saturating_add(geometry.width / 2 - geometry.font_size / 5);
        let y = cell.y.saturating_add(geometry.height / 2 + geometry.font_size / 2);
        surface.draw_glyph(tile.glyph(), x, y, FontSpec::monospace(geometry.font_size), tile.text_color());
    }
}

/// Draw the whole grid on a surface of `size`.
pub fn paint_grid<R, S: Surface + ?Sized>(grid: &mut GridController<R>, size: SurfaceSize, surface: &mut S) {
    let rects = cell_rects(grid.rows(), grid.cols(), size);
    for (tile, rect) in grid.tiles_mut().iter_mut().zip(rects) {
        paint_tile(tile, rect, surface);
    }
}

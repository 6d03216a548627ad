//! Drawing surface abstraction.
//!
//! The painter only needs three primitives. Anything that can fill a
//! rectangle, fill an ellipse and draw a letter can host the mosaic.

use crate::config::render::FONT_FAMILY;
use crate::tile::{Rgb, TextColor};

/// Bold fixed-width font at a given pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSpec {
    pub family: &'static str,
    pub bold: bool,
    pub size: i32,
}

impl FontSpec {
    pub fn monospace(size: i32) -> Self {
        Self {
            family: FONT_FAMILY,
            bold: true,
            size,
        }
    }
}

/// Axis-aligned rectangle in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }
}

pub trait Surface {
    fn fill_rect(&mut self, rect: Rect, color: Rgb);

    /// Fill the ellipse inscribed in `rect`.
    fn fill_oval(&mut self, rect: Rect, color: Rgb);

    /// Draw `glyph` with its baseline starting at (`x`, `y`).
    fn draw_glyph(&mut self, glyph: char, x: i32, y: i32, font: FontSpec, color: TextColor);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    FillRect { rect: Rect, color: Rgb },
    FillOval { rect: Rect, color: Rgb },
    Glyph { glyph: char, x: i32, y: i32, font: FontSpec, color: TextColor },
}

/// Surface that records draw calls instead of rasterizing them.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn fill_oval(&mut self, rect: Rect, color: Rgb) {
        self.commands.push(DrawCommand::FillOval { rect, color });
    }

    fn draw_glyph(&mut self, glyph: char, x: i32, y: i32, font: FontSpec, color: TextColor) {
        self.commands.push(DrawCommand::Glyph { glyph, x, y, font, color });
    }
}

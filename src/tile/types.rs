use std::fmt;

use serde::Serialize;

/// Shape drawn inside a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ShapeKind {
    #[serde(rename = "Rectangle")]
    Square,
    #[serde(rename = "Oval")]
    Circle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 2] = [ShapeKind::Square, ShapeKind::Circle];

    /// Name used in diagnostic records.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Square => "Rectangle",
            ShapeKind::Circle => "Oval",
        }
    }
}

/// Fill color of a tile. Each channel covers 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.r, self.g, self.b)
    }
}

/// Letter color, picked for contrast against the fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TextColor {
    Black,
    White,
}

impl TextColor {
    pub fn name(self) -> &'static str {
        match self {
            TextColor::Black => "Black",
            TextColor::White => "White",
        }
    }

    pub fn rgb(self) -> Rgb {
        match self {
            TextColor::Black => Rgb::new(0, 0, 0),
            TextColor::White => Rgb::new(255, 255, 255),
        }
    }
}

/// Geometry of the last render of a tile. All zero until the tile has been drawn once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TileGeometry {
    pub width: i32,
    pub height: i32,
    pub font_size: i32,
}

//! Tile model.
//!
//! A tile is one grid cell: a colored square or circle with a letter on top.
//! All of its attributes are drawn together, and the letter color is always
//! derived from the fill.

use rand::Rng;

use crate::diagnostics::{TileDescription, TileRecord};
use crate::tile::contrast::text_color_for;
use crate::tile::types::{Rgb, ShapeKind, TextColor, TileGeometry};

pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    shape: ShapeKind,
    color: Rgb,
    glyph: char,
    geometry: TileGeometry,
}

impl Tile {
    /// Create a tile with freshly drawn attributes.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut tile = Self::from_parts(ShapeKind::Square, Rgb::default(), 'A');
        tile.randomize(rng);
        tile
    }

    pub(crate) fn from_parts(shape: ShapeKind, color: Rgb, glyph: char) -> Self {
        Self {
            shape,
            color,
            glyph,
            geometry: TileGeometry::default(),
        }
    }

    /// Replace color, shape and letter with new uniform draws.
    ///
    /// Each channel is its own draw in 0..=255. Geometry from the last render is kept.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        let color = Rgb::new(
            rng.random_range(0..=u8::MAX),
            rng.random_range(0..=u8::MAX),
            rng.random_range(0..=u8::MAX),
        );
        let shape = ShapeKind::ALL[rng.random_range(0..ShapeKind::ALL.len())];
        let glyph = char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]);

        self.color = color;
        self.shape = shape;
        self.glyph = glyph;
    }

    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn glyph(&self) -> char {
        self.glyph
    }

    /// Letter color for this tile's fill.
    pub fn text_color(&self) -> TextColor {
        text_color_for(self.color)
    }

    pub fn geometry(&self) -> TileGeometry {
        self.geometry
    }

    pub(crate) fn set_geometry(&mut self, geometry: TileGeometry) {
        self.geometry = geometry;
    }

    /// Machine-readable summary of the tile for diagnostics.
    pub fn describe(&self) -> TileDescription {
        TileDescription {
            tile: TileRecord {
                shape: self.shape,
                shape_rgb: self.color.to_string(),
                width: self.geometry.width,
                height: self.geometry.height,
                font_size: self.geometry.font_size,
                font_color: self.text_color(),
                letter: self.glyph,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_tiles_stay_in_domain() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2_000 {
            let tile = Tile::random(&mut rng);
            assert!(tile.glyph().is_ascii_uppercase());
            assert!(ShapeKind::ALL.contains(&tile.shape()));
            assert_eq!(tile.text_color(), text_color_for(tile.color()));
        }
    }

    #[test]
    fn test_every_letter_and_shape_is_reachable() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut letters = std::collections::HashSet::new();
        let mut shapes = std::collections::HashSet::new();
        for _ in 0..5_000 {
            let tile = Tile::random(&mut rng);
            letters.insert(tile.glyph());
            shapes.insert(tile.shape());
        }
        assert_eq!(letters.len(), 26);
        assert_eq!(shapes.len(), 2);
    }

    #[test]
    fn test_randomize_keeps_geometry() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut tile = Tile::random(&mut rng);
        let geometry = TileGeometry { width: 90, height: 53, font_size: 26 };
        tile.set_geometry(geometry);

        tile.randomize(&mut rng);
        assert_eq!(tile.geometry(), geometry);
    }

    #[test]
    fn test_text_color_follows_color() {
        let light = Tile::from_parts(ShapeKind::Circle, Rgb::new(250, 250, 250), 'Q');
        let dark = Tile::from_parts(ShapeKind::Circle, Rgb::new(10, 20, 30), 'Q');
        assert_eq!(light.text_color(), TextColor::Black);
        assert_eq!(dark.text_color(), TextColor::White);
    }

    #[test]
    fn test_describe_defaults_geometry_to_zero() {
        let tile = Tile::from_parts(ShapeKind::Square, Rgb::new(1, 2, 3), 'Z');
        let record = tile.describe().tile;

        assert_eq!(record.shape_rgb, "1, 2, 3");
        assert_eq!((record.width, record.height, record.font_size), (0, 0, 0));
        assert_eq!(record.letter, 'Z');
    }

    #[test]
    fn test_describe_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(5);
        let tile = Tile::random(&mut rng);
        assert_eq!(tile.describe(), tile.describe());
        assert_eq!(tile.describe().to_json(), tile.describe().to_json());
    }
}

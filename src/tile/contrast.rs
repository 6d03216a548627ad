//! Text contrast rule.
//!
//! Picks black or white letters from the perceived brightness of the fill,
//! using the weighted RGB luminance approximation.

use crate::tile::types::{Rgb, TextColor};

pub const RED_WEIGHT: f64 = 0.299;
pub const GREEN_WEIGHT: f64 = 0.587;
pub const BLUE_WEIGHT: f64 = 0.114;

/// Fills brighter than this get black text. Equal counts as dark.
pub const LUMINOSITY_THRESHOLD: f64 = 186.0;

/// Weighted brightness of a color, in 0.0..=255.0.
pub fn luminosity(color: Rgb) -> f64 {
    f64::from(color.r) * RED_WEIGHT + f64::from(color.g) * GREEN_WEIGHT + f64::from(color.b) * BLUE_WEIGHT
}

pub fn text_color_for_luminosity(luminosity: f64) -> TextColor {
    if luminosity > LUMINOSITY_THRESHOLD {
        TextColor::Black
    } else {
        TextColor::White
    }
}

/// Readable text color for the given fill.
pub fn text_color_for(color: Rgb) -> TextColor {
    text_color_for_luminosity(luminosity(color))
}

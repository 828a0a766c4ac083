//! Color palette matching.
//!
//! Grid cells store palette indices, not colors. These helpers map RGB
//! values and `#rrggbb` strings onto the nearest palette entry.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// An RGB color. Components are `f64` so averaged pixel blocks keep
/// their precision until matched.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red, 0..=255.
    pub r: f64,
    /// Green, 0..=255.
    pub g: f64,
    /// Blue, 0..=255.
    pub b: f64,
}

impl Rgb {
    /// Build a color from 8-bit components.
    pub const fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64,
            g: g as f64,
            b: b as f64,
        }
    }

    /// Squared Euclidean distance in RGB space.
    pub fn distance_sq(&self, other: &Rgb) -> f64 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        dr * dr + dg * dg + db * db
    }

    /// Parse `#rrggbb` or `rrggbb`.
    pub fn from_hex(hex: &str) -> Result<Self, CoreError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CoreError::InvalidHexColor(hex.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| CoreError::InvalidHexColor(hex.to_string()))
        };
        Ok(Self::from_u8(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// An ordered list of colors; a cell's color index is a position in it.
///
/// Index 0 is the background color.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Build a palette from explicit colors.
    pub fn new(colors: Vec<Rgb>) -> Self {
        Self { colors }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// `true` if the palette has no entries.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index`.
    pub fn get(&self, index: u32) -> Option<Rgb> {
        self.colors.get(index as usize).copied()
    }

    /// Index of the nearest palette entry; ties keep the lower index.
    ///
    /// Returns `None` only for an empty palette.
    pub fn nearest(&self, color: &Rgb) -> Option<u32> {
        let mut best: Option<(u32, f64)> = None;
        for (i, c) in self.colors.iter().enumerate() {
            let d = c.distance_sq(color);
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((i as u32, d));
            }
        }
        best.map(|(i, _)| i)
    }

    /// Nearest palette index for a hex color string.
    pub fn nearest_hex(&self, hex: &str) -> Result<Option<u32>, CoreError> {
        Ok(self.nearest(&Rgb::from_hex(hex)?))
    }
}

impl Default for Palette {
    /// The twelve-color simulator palette: black, white, magenta, yellow,
    /// green, cyan, red, orange, blue, hot pink, orchid, blue violet.
    fn default() -> Self {
        Self::new(vec![
            Rgb::from_u8(0, 0, 0),
            Rgb::from_u8(255, 255, 255),
            Rgb::from_u8(255, 0, 255),
            Rgb::from_u8(255, 255, 0),
            Rgb::from_u8(0, 255, 0),
            Rgb::from_u8(0, 255, 255),
            Rgb::from_u8(255, 0, 0),
            Rgb::from_u8(255, 165, 0),
            Rgb::from_u8(0, 0, 255),
            Rgb::from_u8(255, 105, 180),
            Rgb::from_u8(218, 112, 214),
            Rgb::from_u8(138, 43, 226),
        ])
    }
}

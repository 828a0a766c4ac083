//! Image-to-grid rasterization.

use crate::error::SpaceError;
use crate::grid::GridContext;
use antgen_core::{Palette, Point, Rgb};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Byte layout of a raw pixel buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelLayout {
    /// `r g b a`, 4 bytes per pixel.
    #[default]
    Rgba,
    /// `r g b`, 3 bytes per pixel.
    Rgb,
    /// `b g r a`, 4 bytes per pixel (little-endian ARGB words).
    Abgr,
}

impl PixelLayout {
    /// Bytes per pixel.
    pub fn channels(self) -> usize {
        match self {
            PixelLayout::Rgba | PixelLayout::Abgr => 4,
            PixelLayout::Rgb => 3,
        }
    }

    fn read(self, px: &[u8]) -> (f64, f64, f64) {
        match self {
            PixelLayout::Rgba | PixelLayout::Rgb => {
                (f64::from(px[0]), f64::from(px[1]), f64::from(px[2]))
            }
            PixelLayout::Abgr => (f64::from(px[2]), f64::from(px[1]), f64::from(px[0])),
        }
    }
}

impl GridContext {
    /// Overwrite every cell with the palette color nearest to the average
    /// of the image pixels it covers.
    ///
    /// The image is stretched over the whole grid. When the image is
    /// smaller than the grid, a cell may cover no whole pixel; it then
    /// takes the single pixel under its top-left corner.
    pub fn paint_image(
        &mut self,
        pixels: &[u8],
        width: u32,
        height: u32,
        layout: PixelLayout,
        palette: &Palette,
    ) -> Result<(), SpaceError> {
        if width == 0 || height == 0 {
            return Err(SpaceError::EmptyImage { width, height });
        }
        let channels = layout.channels();
        let expected = (width as usize) * (height as usize) * channels;
        if pixels.len() != expected {
            return Err(SpaceError::ImageSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        let (w, h) = (width as usize, height as usize);
        let px_per_col = w as f64 / f64::from(self.cols());
        let px_per_row = h as f64 / f64::from(self.rows());
        let pixel_at = |x: usize, y: usize| {
            let i = (y * w + x) * channels;
            layout.read(&pixels[i..i + channels])
        };

        for gx in 0..self.cols() {
            let x0 = (f64::from(gx) * px_per_col).floor() as usize;
            let x1 = ((f64::from(gx + 1) * px_per_col).floor() as usize).min(w);
            for gy in 0..self.rows() {
                let y0 = (f64::from(gy) * px_per_row).floor() as usize;
                let y1 = ((f64::from(gy + 1) * px_per_row).floor() as usize).min(h);

                let (mut r, mut g, mut b, mut count) = (0.0, 0.0, 0.0, 0usize);
                for py in y0..y1 {
                    for px in x0..x1 {
                        let (pr, pg, pb) = pixel_at(px, py);
                        r += pr;
                        g += pg;
                        b += pb;
                        count += 1;
                    }
                }
                let avg = if count == 0 {
                    let (pr, pg, pb) = pixel_at(x0.min(w - 1), y0.min(h - 1));
                    Rgb { r: pr, g: pg, b: pb }
                } else {
                    let n = count as f64;
                    Rgb {
                        r: r / n,
                        g: g / n,
                        b: b / n,
                    }
                };
                let color = palette.nearest(&avg).unwrap_or(0);
                self.set(Point::new(gx as i32, gy as i32), color);
            }
        }

        debug!(
            width,
            height,
            ?layout,
            cols = self.cols(),
            rows = self.rows(),
            "rasterized image onto grid"
        );
        Ok(())
    }
}

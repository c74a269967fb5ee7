//! Luminance to glyph mapping.
//!
//! Walks the resampled buffers cell by cell, quantizes each adjusted
//! pixel's luminance to a ramp index and optionally records the original
//! (pre-adjustment) color for colorized rendering.

use image::RgbaImage;

use crate::color::luminance;

/// RGB color recorded per cell for colorized rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// The mapped glyph grid plus the optional per-cell color map.
#[derive(Debug, Clone)]
pub struct GlyphGrid {
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells.
    pub height: u32,
    /// Glyphs in row-major order, `width * height` entries.
    pub cells: Vec<char>,
    /// Original colors in row-major order; only built when colorized.
    pub colors: Option<Vec<CellColor>>,
}

impl GlyphGrid {
    /// Render the grid as text: rows joined in order, every row
    /// newline-terminated (including the last).
    pub fn to_text(&self) -> String {
        let w = self.width as usize;
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for row in self.cells.chunks(w) {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }
}

/// Map a luminance value to a ramp index.
///
/// `index = min(len - 1, floor(lum * len / 256))`, so the full [0, 256)
/// range distributes evenly over the ramp and index 0 is the darkest slot.
/// Non-decreasing in `lum` for any fixed ramp length.
#[inline]
pub fn ramp_index(lum: u8, ramp_len: usize) -> usize {
    (lum as usize * ramp_len / 256).min(ramp_len - 1)
}

/// Map the adjusted buffer to a glyph grid.
///
/// Both buffers must already be resampled to the effective grid dimensions;
/// one pixel corresponds to one cell. When `original` is provided its RGB is
/// recorded per cell for colorized rendering; the glyph choice itself always
/// comes from the adjusted buffer, so text output is identical between
/// colorized and monochrome runs.
///
/// # Panics
/// Panics if `ramp` is empty or the buffers disagree in size; the pipeline
/// validates both before calling.
pub fn map_to_grid(adjusted: &RgbaImage, original: Option<&RgbaImage>, ramp: &[char]) -> GlyphGrid {
    assert!(!ramp.is_empty(), "glyph ramp must not be empty");
    if let Some(orig) = original {
        assert_eq!(adjusted.dimensions(), orig.dimensions());
    }

    let (width, height) = adjusted.dimensions();
    let len = ramp.len();
    let mut cells = Vec::with_capacity((width * height) as usize);
    let mut colors = original.map(|_| Vec::with_capacity((width * height) as usize));

    for y in 0..height {
        for x in 0..width {
            let p = adjusted.get_pixel(x, y);
            let lum = luminance(p[0], p[1], p[2]);
            cells.push(ramp[ramp_index(lum, len)]);

            if let (Some(colors), Some(orig)) = (colors.as_mut(), original) {
                let o = orig.get_pixel(x, y);
                colors.push(CellColor {
                    r: o[0],
                    g: o[1],
                    b: o[2],
                });
            }
        }
    }

    GlyphGrid {
        width,
        height,
        cells,
        colors,
    }
}

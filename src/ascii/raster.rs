//! Rasterization of a glyph grid back into an image.
//!
//! Each cell is drawn as an 8x16 pixel monospace cell on a white canvas
//! from an 8x8 glyph bitmap with rows doubled, which keeps the rendered
//! image's aspect close to the sampled grid's. Glyphs without a hand-drawn
//! bitmap fall back to an ordered-dither pattern proportional to the
//! glyph's visual density, so arbitrary custom ramps still render with a
//! plausible tone.

use image::{Rgba, RgbaImage};
use std::io::Cursor;

use crate::ascii::mapping::GlyphGrid;
use crate::error::ConvertError;

/// Width of one rendered glyph cell in pixels.
pub const CELL_WIDTH: u32 = 8;

/// Height of one rendered glyph cell in pixels.
pub const CELL_HEIGHT: u32 = 16;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Rasterize a glyph grid onto a white canvas.
///
/// Monochrome grids draw every glyph in black; when the grid carries a
/// color map, each glyph is drawn in its recorded original color.
///
/// # Errors
/// Returns [`ConvertError::RenderFailure`] if the output surface would be
/// empty or too large to allocate.
pub fn rasterize(grid: &GlyphGrid) -> Result<RgbaImage, ConvertError> {
    let width = grid.width.checked_mul(CELL_WIDTH);
    let height = grid.height.checked_mul(CELL_HEIGHT);
    let (width, height) = match (width, height) {
        (Some(w), Some(h)) if w > 0 && h > 0 => (w, h),
        _ => {
            return Err(ConvertError::RenderFailure(format!(
                "cannot allocate output surface for {}x{} cells",
                grid.width, grid.height
            )))
        }
    };

    let mut output = RgbaImage::from_pixel(width, height, WHITE);

    for cy in 0..grid.height {
        for cx in 0..grid.width {
            let idx = (cy * grid.width + cx) as usize;
            let ch = grid.cells[idx];
            if ch == ' ' {
                continue;
            }
            let color = match &grid.colors {
                Some(colors) => {
                    let c = colors[idx];
                    Rgba([c.r, c.g, c.b, 255])
                }
                None => BLACK,
            };

            let base_x = cx * CELL_WIDTH;
            let base_y = cy * CELL_HEIGHT;
            for py in 0..CELL_HEIGHT {
                // 8x8 bitmap stretched to 8x16 by doubling rows
                let row = py / 2;
                for px in 0..CELL_WIDTH {
                    if glyph_pixel(ch, px, row) {
                        output.put_pixel(base_x + px, base_y + py, color);
                    }
                }
            }
        }
    }

    Ok(output)
}

/// Encode a rasterized surface to PNG bytes.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, ConvertError> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .map_err(|e| ConvertError::RenderFailure(format!("PNG encoding failed: {}", e)))?;
    Ok(bytes)
}

/// Whether a pixel of the 8x8 glyph bitmap is set.
///
/// Common ramp characters get hand-drawn shapes; anything else falls back
/// to [`dither_pixel`] coverage based on estimated density.
fn glyph_pixel(ch: char, x: u32, y: u32) -> bool {
    match ch {
        ' ' => false,

        '.' | ',' => (3..=4).contains(&x) && (5..=6).contains(&y),

        '\'' | '`' => (3..=4).contains(&x) && (1..=2).contains(&y),

        ':' | ';' => (3..=4).contains(&x) && (y == 2 || y == 5),

        '-' | '_' => y == 4 && (1..=6).contains(&x),

        '~' => y == 3 && (x == 1 || x == 2 || x == 5 || x == 6) || y == 4 && (3..=4).contains(&x),

        '=' => (y == 3 || y == 5) && (1..=6).contains(&x),

        '+' => ((x == 3 || x == 4) && (2..=6).contains(&y)) || (y == 4 && (1..=6).contains(&x)),

        '*' => {
            ((x == 3 || x == 4) && (2..=5).contains(&y))
                || (y == 3 || y == 4) && (1..=6).contains(&x)
                || (x == y && (2..=5).contains(&x))
                || (x == 7 - y && (2..=5).contains(&x))
        }

        '|' | '!' | 'l' | 'I' | '1' => x == 3 || x == 4,

        '/' => {
            let d = 7 - y;
            x == d || (x + 1) == d.max(1)
        }

        '\\' => x == y || (x + 1) == y.max(1),

        '(' | '[' | '{' => x == 2 || (x == 3 && (y == 0 || y == 7)),

        ')' | ']' | '}' => x == 5 || (x == 4 && (y == 0 || y == 7)),

        '#' => (x == 2 || x == 5) || (y == 2 || y == 5),

        '%' => (x + y == 7) || (x <= 1 && y <= 1) || (x >= 6 && y >= 6),

        '@' => {
            let dx = x as i32 - 3;
            let dy = y as i32 - 3;
            dx * dx + dy * dy <= 12
        }

        '$' => {
            ((x == 3 || x == 4) && !(3..=4).contains(&y))
                || ((1..=6).contains(&x) && (y == 1 || y == 3 || y == 6))
        }

        '█' => true,

        // Everything else: tone-matched dither fill
        _ => dither_pixel(ch, x, y),
    }
}

/// 4x4 Bayer threshold matrix scaled to 0-255.
#[rustfmt::skip]
const BAYER_4X4: [[u32; 4]; 4] = [
    [  0, 128,  32, 160],
    [192,  64, 224,  96],
    [ 48, 176,  16, 144],
    [240, 112, 208,  80],
];

/// Ordered-dither fallback: light pixels in proportion to the glyph's
/// estimated ink coverage.
fn dither_pixel(ch: char, x: u32, y: u32) -> bool {
    let coverage = (char_density(ch) * 255.0) as u32;
    BAYER_4X4[(y % 4) as usize][(x % 4) as usize] < coverage
}

/// Estimate a glyph's visual density in [0.0, 1.0].
fn char_density(ch: char) -> f32 {
    match ch {
        ' ' => 0.0,
        '.' | ',' | '\'' | '`' | ':' | ';' => 0.1,
        '-' | '_' | '~' | '^' | '"' => 0.15,
        '!' | '|' | '/' | '\\' | 'i' | 'l' | 'I' | '1' | '?' => 0.2,
        '+' | '<' | '>' | 't' | 'f' | 'j' | 'r' => 0.3,
        '=' | '(' | ')' | '{' | '}' | '[' | ']' => 0.35,
        'v' | 'x' | 'z' | 'n' | 'u' | 'c' | 'o' | 'a' | 'e' | 's' => 0.4,
        'b' | 'd' | 'h' | 'k' | 'p' | 'q' | 'w' | 'm' => 0.5,
        'A'..='Z' | '0' => 0.55,
        '#' | '@' | '%' | '&' | '$' => 0.7,
        '░' => 0.25,
        '▒' => 0.5,
        '▓' => 0.75,
        '█' => 1.0,
        _ => 0.5,
    }
}

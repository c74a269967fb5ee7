//! Top-level conversion pipeline.
//!
//! Wires the stages together for one conversion call: validate settings,
//! resolve the glyph ramp, resample the source to the effective sample
//! grid, run the adjustment chain on a working copy, map to glyphs and
//! rasterize. Every call owns its buffers; nothing is shared or cached
//! across conversions.

use image::{imageops, RgbaImage};
use log::debug;
use std::path::Path;

use crate::adjust::apply_adjustments;
use crate::ascii::{
    effective_dimensions, encode_png, map_to_grid, rasterize, resolve_ramp,
};
use crate::error::ConvertError;
use crate::settings::Settings;

/// Result of one conversion: the glyph text and the rasterized image.
///
/// `text` is newline-terminated rows of the glyph grid; `image` is PNG
/// bytes of the same grid. Fully owned by the caller; the engine retains
/// nothing.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub text: String,
    pub image: Vec<u8>,
}

/// Convert a decoded image to ASCII art.
///
/// The result is all-or-nothing: if rasterization or encoding fails the
/// text is discarded and only the error is returned.
///
/// # Errors
/// - [`ConvertError::InvalidInput`] for out-of-range settings, an empty
///   glyph ramp or a sample grid that collapses to zero in either axis.
/// - [`ConvertError::RenderFailure`] if the output surface cannot be
///   allocated or encoded.
pub fn convert(source: &RgbaImage, settings: &Settings) -> Result<Conversion, ConvertError> {
    settings.validate().map_err(ConvertError::InvalidInput)?;

    let ramp = resolve_ramp(settings.charset, &settings.custom_chars);
    if ramp.is_empty() {
        return Err(ConvertError::InvalidInput(
            "glyph ramp is empty".to_string(),
        ));
    }

    let (src_w, src_h) = source.dimensions();
    if src_w == 0 || src_h == 0 {
        return Err(ConvertError::InvalidInput(format!(
            "source image is empty ({}x{})",
            src_w, src_h
        )));
    }

    let (cols, rows) = effective_dimensions(
        settings.width,
        settings.height,
        settings.stretch_width,
        settings.stretch_height,
        src_w,
        src_h,
    );
    if cols == 0 || rows == 0 {
        return Err(ConvertError::InvalidInput(format!(
            "effective grid dimensions are {}x{}",
            cols, rows
        )));
    }
    debug!(
        "converting {}x{} source on a {}x{} glyph grid ({} ramp levels)",
        src_w,
        src_h,
        cols,
        rows,
        ramp.len()
    );

    // Resample once; the original stays untouched for colorized rendering
    // while the working copy takes the adjustment chain.
    let original = if (src_w, src_h) == (cols, rows) {
        source.clone()
    } else {
        imageops::resize(source, cols, rows, imageops::FilterType::Lanczos3)
    };
    let mut working = original.clone();
    apply_adjustments(&mut working, settings);

    let grid = map_to_grid(
        &working,
        settings.colorized.then_some(&original),
        &ramp,
    );
    let text = grid.to_text();

    let surface = rasterize(&grid)?;
    let image = encode_png(&surface)?;
    debug!(
        "rendered {} bytes of PNG from {} cells",
        image.len(),
        grid.cells.len()
    );

    Ok(Conversion { text, image })
}

/// Convenience wrapper: open and decode an image file, then convert it.
///
/// # Errors
/// [`ConvertError::SourceUnavailable`] if the file cannot be read or
/// decoded, plus everything [`convert`] can return.
pub fn convert_image(path: &Path, settings: &Settings) -> Result<Conversion, ConvertError> {
    let source = image::open(path)?.to_rgba8();
    convert(&source, settings)
}

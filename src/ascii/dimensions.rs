//! Sample-grid dimension calculation.
//!
//! Glyph cells are roughly twice as tall as wide, so an auto-derived height
//! scales the image aspect ratio by 0.5 to keep the rendered grid visually
//! proportional to the source.

/// Aspect compensation factor for glyph cells (~2x taller than wide).
pub const CHAR_ASPECT_COMPENSATION: f32 = 0.5;

/// Resolve the requested row count.
///
/// An explicit height wins. Otherwise the height derives from the requested
/// width and the source image's aspect ratio, scaled by
/// [`CHAR_ASPECT_COMPENSATION`].
///
/// # Arguments
/// * `width` - Requested output columns
/// * `height` - Requested output rows, or None for auto
/// * `img_width` - Source image width in pixels
/// * `img_height` - Source image height in pixels
pub fn resolve_height(width: u32, height: Option<u32>, img_width: u32, img_height: u32) -> u32 {
    if let Some(h) = height {
        return h;
    }
    if img_width == 0 {
        return 0;
    }
    let aspect = img_height as f32 / img_width as f32;
    (width as f32 * aspect * CHAR_ASPECT_COMPENSATION).round() as u32
}

/// Compute the effective sample-grid dimensions.
///
/// Stretch percentages post-scale the requested dimensions:
/// `effective = round(requested * stretch / 100)`.
///
/// Either result may round to 0 (for example `width=1, stretch_width=50`);
/// the pipeline treats that as an invalid-input error rather than producing
/// a silent empty grid.
///
/// # Returns
/// A tuple of (columns, rows) for the sample grid.
pub fn effective_dimensions(
    width: u32,
    height: Option<u32>,
    stretch_width: u32,
    stretch_height: u32,
    img_width: u32,
    img_height: u32,
) -> (u32, u32) {
    let rows = resolve_height(width, height, img_width, img_height);
    let eff_w = (width as f32 * stretch_width as f32 / 100.0).round() as u32;
    let eff_h = (rows as f32 * stretch_height as f32 / 100.0).round() as u32;
    (eff_w, eff_h)
}

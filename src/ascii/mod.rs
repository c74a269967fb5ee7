//! Glyph mapping and rendering stage.
//!
//! Consumes an adjusted RGBA buffer (plus the original buffer when
//! colorized output is requested) and produces the glyph grid, its text
//! form and the re-rasterized image:
//!
//! 1. **Dimensions** - effective sample grid from width/height + stretch
//! 2. **Charset** - named glyph ramps and custom ramp resolution
//! 3. **Mapping** - luminance to ramp index, per-cell color capture
//! 4. **Raster** - glyph grid to RGBA canvas, PNG encoding

mod charset;
mod dimensions;
mod mapping;
mod raster;

pub use charset::{
    named_ramps, resolve_ramp, CharSet, BLOCKS_RAMP, EXTENDED_RAMP, SIMPLE_RAMP, STANDARD_RAMP,
};
pub use dimensions::{
    effective_dimensions, resolve_height, CHAR_ASPECT_COMPENSATION,
};
pub use mapping::{map_to_grid, ramp_index, CellColor, GlyphGrid};
pub use raster::{encode_png, rasterize, CELL_HEIGHT, CELL_WIDTH};

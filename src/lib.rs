//! img2ascii library crate.
//!
//! Image-to-ASCII-art conversion engine: applies a chain of per-pixel
//! color adjustments, quantizes each sample to a glyph from a luminance
//! ramp, and renders the result both as text and as a re-rasterized PNG.

pub mod adjust;
pub mod ascii;
pub mod cli;
pub mod color;
pub mod convert;
pub mod error;
pub mod settings;

pub use convert::{convert, convert_image, Conversion};
pub use error::ConvertError;
pub use settings::{schema, Settings};

//! Glyph ramp definitions for ASCII rendering.
//!
//! Ramps are ordered darkest-first: index 0 is the character used for the
//! lowest luminance. Named ramps assume dark glyphs on a light background,
//! matching the white-canvas rasterizer.

/// Standard density ramp (10 levels), densest to lightest.
pub const STANDARD_RAMP: &str = "@%#*+=-:. ";

/// Extended ramp (70 levels), the classic Paul Bourke grayscale sequence.
pub const EXTENDED_RAMP: &str =
    "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,\"^`'. ";

/// Unicode block ramp (5 levels) for a pseudo-pixel look.
pub const BLOCKS_RAMP: &str = "█▓▒░ ";

/// Simple 3-level ramp for high-contrast output.
pub const SIMPLE_RAMP: &str = "#. ";

/// Named glyph ramp selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharSet {
    /// Standard 10-level density ramp
    #[default]
    Standard,
    /// 70-level extended ramp for smoother gradients
    Extended,
    /// Unicode block characters
    Blocks,
    /// Minimal 3-level ramp
    Simple,
}

impl CharSet {
    /// Get the ramp string for this charset, darkest character first.
    pub fn ramp(&self) -> &'static str {
        match self {
            CharSet::Standard => STANDARD_RAMP,
            CharSet::Extended => EXTENDED_RAMP,
            CharSet::Blocks => BLOCKS_RAMP,
            CharSet::Simple => SIMPLE_RAMP,
        }
    }

    /// Get a human-readable name for the charset.
    pub fn name(&self) -> &'static str {
        match self {
            CharSet::Standard => "standard",
            CharSet::Extended => "extended",
            CharSet::Blocks => "blocks",
            CharSet::Simple => "simple",
        }
    }

    /// Parse a charset name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "standard" => Some(CharSet::Standard),
            "extended" => Some(CharSet::Extended),
            "blocks" => Some(CharSet::Blocks),
            "simple" => Some(CharSet::Simple),
            _ => None,
        }
    }
}

/// All named charsets, for settings introspection.
pub fn named_ramps() -> &'static [CharSet] {
    &[
        CharSet::Standard,
        CharSet::Extended,
        CharSet::Blocks,
        CharSet::Simple,
    ]
}

/// Resolve the active ramp for a conversion.
///
/// A non-empty `custom_chars` string takes precedence over the named set;
/// its character order is honored as given (position 0 = darkest). Exactly
/// one ramp is active per conversion.
pub fn resolve_ramp(charset: CharSet, custom_chars: &str) -> Vec<char> {
    if custom_chars.is_empty() {
        charset.ramp().chars().collect()
    } else {
        custom_chars.chars().collect()
    }
}

//! Error types for the conversion engine.

/// Errors that can occur during a conversion.
///
/// The engine never retries internally; every failure surfaces synchronously
/// to the caller. The result is all-or-nothing: no partial text is returned
/// when rasterization fails.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Settings or derived values that make the conversion impossible:
    /// non-positive grid dimensions or an empty glyph ramp.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The provided image source could not be read or decoded.
    #[error("source unavailable: {0}")]
    SourceUnavailable(#[from] image::ImageError),

    /// The rasterization step could not allocate or encode the output.
    #[error("render failure: {0}")]
    RenderFailure(String),
}

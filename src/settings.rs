//! Conversion settings: defaults, validation, TOML loading, and the
//! read-only schema used by front-ends to build their own option surface.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::CharSet;

/// Settings for a single conversion.
///
/// Immutable per call; unset fields fall back to the documented defaults.
/// Percent fields are integers (100 = identity for brightness, contrast and
/// saturation; 0 = identity for grayscale, invert and sepia).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Target output columns (>= 1).
    pub width: u32,
    /// Target output rows. None derives from the source aspect ratio.
    pub height: Option<u32>,
    /// Horizontal post-scale percent (50-200).
    pub stretch_width: u32,
    /// Vertical post-scale percent (50-200).
    pub stretch_height: u32,
    /// Brightness percent (0-200, 100 = unchanged).
    pub brightness: u32,
    /// Contrast percent (0-200, 100 = unchanged).
    pub contrast: u32,
    /// Saturation percent (0-200, 100 = unchanged).
    pub saturation: u32,
    /// Grayscale blend percent (0-100, 0 = unchanged).
    pub grayscale: u32,
    /// Inversion blend percent (0-100, 0 = unchanged).
    pub invert: u32,
    /// Hue rotation in degrees (0 = unchanged, wraps modulo 360).
    pub hue: i32,
    /// Sepia blend percent (0-100, 0 = unchanged).
    pub sepia: u32,
    /// Render glyphs in the original per-cell color instead of black.
    pub colorized: bool,
    /// Named glyph ramp.
    pub charset: CharSet,
    /// Custom glyph ramp; overrides `charset` when non-empty.
    pub custom_chars: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 100,
            height: None,
            stretch_width: 100,
            stretch_height: 100,
            brightness: 100,
            contrast: 100,
            saturation: 100,
            grayscale: 0,
            invert: 0,
            hue: 0,
            sepia: 0,
            colorized: false,
            charset: CharSet::Standard,
            custom_chars: String::new(),
        }
    }
}

impl Settings {
    /// Validate settings ranges.
    ///
    /// Hue is unbounded (rotation wraps); everything else follows the
    /// documented ranges.
    pub fn validate(&self) -> Result<(), String> {
        if self.width < 1 {
            return Err(format!("width must be >= 1, got {}", self.width));
        }
        if let Some(h) = self.height {
            if h < 1 {
                return Err(format!("height must be >= 1 when set, got {}", h));
            }
        }
        for (name, value) in [
            ("stretch_width", self.stretch_width),
            ("stretch_height", self.stretch_height),
        ] {
            if !(50..=200).contains(&value) {
                return Err(format!("{} must be between 50 and 200, got {}", name, value));
            }
        }
        for (name, value) in [
            ("brightness", self.brightness),
            ("contrast", self.contrast),
            ("saturation", self.saturation),
        ] {
            if value > 200 {
                return Err(format!("{} must be between 0 and 200, got {}", name, value));
            }
        }
        for (name, value) in [
            ("grayscale", self.grayscale),
            ("invert", self.invert),
            ("sepia", self.sepia),
        ] {
            if value > 100 {
                return Err(format!("{} must be between 0 and 100, got {}", name, value));
            }
        }
        Ok(())
    }

    /// Load settings from a TOML file.
    /// Returns defaults if the file doesn't exist.
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Settings::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| SettingsError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let settings: Settings = toml::from_str(&content).map_err(|e| SettingsError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(settings)
    }
}

/// Errors that can occur when loading settings.
#[derive(Debug)]
pub enum SettingsError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io { path, source } => {
                write!(
                    f,
                    "Failed to read settings file '{}': {}",
                    path.display(),
                    source
                )
            }
            SettingsError::Parse { path, source } => {
                write!(
                    f,
                    "Failed to parse settings file '{}': {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io { source, .. } => Some(source),
            SettingsError::Parse { source, .. } => Some(source),
        }
    }
}

/// Description of one settings field, for building a settings UI.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub default: &'static str,
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub help: &'static str,
}

/// Read-only schema of all recognized settings fields.
///
/// Paired with [`crate::ascii::named_ramps`] this is everything a
/// front-end needs to construct its controls; no pixel code involved.
pub fn schema() -> &'static [FieldSpec] {
    &[
        FieldSpec {
            name: "width",
            default: "100",
            min: Some(1),
            max: None,
            help: "target output columns",
        },
        FieldSpec {
            name: "height",
            default: "auto",
            min: Some(1),
            max: None,
            help: "target output rows (auto = derived from aspect ratio)",
        },
        FieldSpec {
            name: "stretch_width",
            default: "100",
            min: Some(50),
            max: Some(200),
            help: "horizontal post-scale percent",
        },
        FieldSpec {
            name: "stretch_height",
            default: "100",
            min: Some(50),
            max: Some(200),
            help: "vertical post-scale percent",
        },
        FieldSpec {
            name: "brightness",
            default: "100",
            min: Some(0),
            max: Some(200),
            help: "brightness percent",
        },
        FieldSpec {
            name: "contrast",
            default: "100",
            min: Some(0),
            max: Some(200),
            help: "contrast percent around midpoint 128",
        },
        FieldSpec {
            name: "saturation",
            default: "100",
            min: Some(0),
            max: Some(200),
            help: "saturation percent",
        },
        FieldSpec {
            name: "grayscale",
            default: "0",
            min: Some(0),
            max: Some(100),
            help: "blend toward luminance gray",
        },
        FieldSpec {
            name: "invert",
            default: "0",
            min: Some(0),
            max: Some(100),
            help: "blend toward channel inversion",
        },
        FieldSpec {
            name: "hue",
            default: "0",
            min: None,
            max: None,
            help: "hue rotation in degrees",
        },
        FieldSpec {
            name: "sepia",
            default: "0",
            min: Some(0),
            max: Some(100),
            help: "blend toward sepia tone",
        },
        FieldSpec {
            name: "colorized",
            default: "false",
            min: None,
            max: None,
            help: "render glyphs in original per-cell color",
        },
        FieldSpec {
            name: "charset",
            default: "standard",
            min: None,
            max: None,
            help: "named glyph ramp (standard, extended, blocks, simple)",
        },
        FieldSpec {
            name: "custom_chars",
            default: "",
            min: None,
            max: None,
            help: "custom glyph ramp, overrides charset when non-empty",
        },
    ]
}

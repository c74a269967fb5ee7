//! Command-line interface definitions and helpers.
//!
//! All argument parsing, validation and subcommand handling lives here.
//! Resource-limiting policy also lives here: the engine itself accepts any
//! positive dimensions, so the interactive confirmation for very wide
//! output is a front-end concern and never reaches the pixel code.

use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;

use crate::ascii;
use crate::convert::convert_image;
use crate::settings::{schema, Settings};

/// Output widths above this ask for confirmation before converting.
pub const WIDTH_CONFIRM_THRESHOLD: u32 = 500;

/// Named glyph ramp, CLI flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CharacterSet {
    #[default]
    Standard,
    Extended,
    Blocks,
    Simple,
}

impl From<CharacterSet> for ascii::CharSet {
    fn from(c: CharacterSet) -> Self {
        match c {
            CharacterSet::Standard => ascii::CharSet::Standard,
            CharacterSet::Extended => ascii::CharSet::Extended,
            CharacterSet::Blocks => ascii::CharSet::Blocks,
            CharacterSet::Simple => ascii::CharSet::Simple,
        }
    }
}

/// Parse and validate a 0-200 scale percent (brightness, contrast, saturation).
pub fn parse_scale_percent(s: &str) -> Result<u32, String> {
    let v: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if v > 200 {
        return Err(format!("value must be between 0 and 200, got {}", v));
    }
    Ok(v)
}

/// Parse and validate a 0-100 blend percent (grayscale, invert, sepia).
pub fn parse_blend_percent(s: &str) -> Result<u32, String> {
    let v: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if v > 100 {
        return Err(format!("value must be between 0 and 100, got {}", v));
    }
    Ok(v)
}

/// Parse and validate a 50-200 stretch percent.
pub fn parse_stretch_percent(s: &str) -> Result<u32, String> {
    let v: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !(50..=200).contains(&v) {
        return Err(format!("stretch must be between 50 and 200, got {}", v));
    }
    Ok(v)
}

#[derive(Parser)]
#[command(
    name = "img2ascii",
    about = "Convert images to ASCII art with color adjustments",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert an image to ASCII art
    Convert {
        /// Input image file (png, jpeg, bmp, gif)
        input: PathBuf,

        /// Write the text output to this file instead of stdout
        #[arg(long)]
        out_text: Option<PathBuf>,

        /// Write the rasterized PNG output to this file
        #[arg(long)]
        out_image: Option<PathBuf>,

        /// Settings file (TOML); CLI flags override its values
        #[arg(long)]
        config: Option<PathBuf>,

        /// Target output columns
        #[arg(long)]
        width: Option<u32>,

        /// Target output rows (derived from aspect ratio when omitted)
        #[arg(long)]
        height: Option<u32>,

        /// Horizontal post-scale percent (50-200)
        #[arg(long, value_parser = parse_stretch_percent)]
        stretch_width: Option<u32>,

        /// Vertical post-scale percent (50-200)
        #[arg(long, value_parser = parse_stretch_percent)]
        stretch_height: Option<u32>,

        /// Brightness percent (0-200)
        #[arg(long, value_parser = parse_scale_percent)]
        brightness: Option<u32>,

        /// Contrast percent (0-200)
        #[arg(long, value_parser = parse_scale_percent)]
        contrast: Option<u32>,

        /// Saturation percent (0-200)
        #[arg(long, value_parser = parse_scale_percent)]
        saturation: Option<u32>,

        /// Grayscale blend percent (0-100)
        #[arg(long, value_parser = parse_blend_percent)]
        grayscale: Option<u32>,

        /// Inversion blend percent (0-100)
        #[arg(long, value_parser = parse_blend_percent)]
        invert: Option<u32>,

        /// Hue rotation in degrees
        #[arg(long)]
        hue: Option<i32>,

        /// Sepia blend percent (0-100)
        #[arg(long, value_parser = parse_blend_percent)]
        sepia: Option<u32>,

        /// Render glyphs in the original per-cell color
        #[arg(long)]
        colorized: bool,

        /// Named glyph ramp
        #[arg(long)]
        charset: Option<CharacterSet>,

        /// Custom glyph ramp (overrides --charset), darkest character first
        #[arg(long)]
        chars: Option<String>,

        /// Skip the confirmation prompt for very wide output
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List the named glyph ramps and the settings schema
    Charsets,
}

/// Arguments of the `convert` subcommand, regrouped for handling.
pub struct ConvertArgs {
    pub input: PathBuf,
    pub out_text: Option<PathBuf>,
    pub out_image: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub overrides: SettingsOverrides,
    pub yes: bool,
}

/// Optional per-field overrides collected from CLI flags.
#[derive(Default)]
pub struct SettingsOverrides {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub stretch_width: Option<u32>,
    pub stretch_height: Option<u32>,
    pub brightness: Option<u32>,
    pub contrast: Option<u32>,
    pub saturation: Option<u32>,
    pub grayscale: Option<u32>,
    pub invert: Option<u32>,
    pub hue: Option<i32>,
    pub sepia: Option<u32>,
    pub colorized: bool,
    pub charset: Option<CharacterSet>,
    pub chars: Option<String>,
}

impl SettingsOverrides {
    /// Layer CLI overrides on top of config-file settings.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(v) = self.width {
            settings.width = v;
        }
        if let Some(v) = self.height {
            settings.height = Some(v);
        }
        if let Some(v) = self.stretch_width {
            settings.stretch_width = v;
        }
        if let Some(v) = self.stretch_height {
            settings.stretch_height = v;
        }
        if let Some(v) = self.brightness {
            settings.brightness = v;
        }
        if let Some(v) = self.contrast {
            settings.contrast = v;
        }
        if let Some(v) = self.saturation {
            settings.saturation = v;
        }
        if let Some(v) = self.grayscale {
            settings.grayscale = v;
        }
        if let Some(v) = self.invert {
            settings.invert = v;
        }
        if let Some(v) = self.hue {
            settings.hue = v;
        }
        if let Some(v) = self.sepia {
            settings.sepia = v;
        }
        if self.colorized {
            settings.colorized = true;
        }
        if let Some(c) = self.charset {
            settings.charset = c.into();
        }
        if let Some(chars) = &self.chars {
            settings.custom_chars = chars.clone();
        }
    }
}

/// Handle the `convert` subcommand.
pub fn handle_convert(args: ConvertArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    args.overrides.apply(&mut settings);

    // Resource-limiting policy stays out of the engine: confirm here,
    // before any pixel work starts.
    if settings.width > WIDTH_CONFIRM_THRESHOLD && !args.yes {
        if !confirm_large_width(settings.width)? {
            eprintln!("Aborted.");
            return Ok(());
        }
    }

    log::info!("converting {}", args.input.display());
    let result = convert_image(&args.input, &settings)?;

    match &args.out_text {
        Some(path) => std::fs::write(path, &result.text)?,
        None => print!("{}", result.text),
    }
    if let Some(path) = &args.out_image {
        std::fs::write(path, &result.image)?;
        log::info!("wrote {} ({} bytes)", path.display(), result.image.len());
    }
    Ok(())
}

/// Handle the `charsets` subcommand.
pub fn handle_charsets() {
    println!("Named glyph ramps (darkest character first):");
    for set in ascii::named_ramps() {
        println!("  {:<10} {:?}", set.name(), set.ramp());
    }
    println!();
    println!("Settings:");
    for field in schema() {
        let range = match (field.min, field.max) {
            (Some(min), Some(max)) => format!(" [{}-{}]", min, max),
            (Some(min), None) => format!(" [>= {}]", min),
            _ => String::new(),
        };
        println!(
            "  {:<16} default {:<10}{} - {}",
            field.name, field.default, range, field.help
        );
    }
}

/// Ask the user to confirm a very wide conversion on stdin.
fn confirm_large_width(width: u32) -> Result<bool, std::io::Error> {
    eprint!(
        "Requested width {} exceeds {} and may be slow. Continue? [y/N] ",
        width, WIDTH_CONFIRM_THRESHOLD
    );
    std::io::stderr().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    let answer = line.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

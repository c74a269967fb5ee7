//! End-to-end tests for the conversion pipeline.
//!
//! These exercise the whole path from a decoded source image to the
//! `{text, image}` result, including settings-file loading and error
//! surfacing.

use image::{Rgba, RgbaImage};
use img2ascii::ascii::{CharSet, CELL_HEIGHT, CELL_WIDTH};
use img2ascii::{convert, convert_image, ConvertError, Settings};
use std::io::Write;

/// Helper to create a test image with a named pattern.
fn make_test_image(pattern: &str, width: u32, height: u32) -> RgbaImage {
    match pattern {
        "gradient_h" => RgbaImage::from_fn(width, height, |x, _| {
            let v = ((x * 255) / (width - 1).max(1)) as u8;
            Rgba([v, v, v, 255])
        }),
        "checker" => RgbaImage::from_fn(width, height, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([255, 255, 255, 255])
            }
        }),
        "red_green" => RgbaImage::from_fn(width, height, |x, _| {
            if x < width / 2 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 255, 0, 255])
            }
        }),
        _ => panic!("unknown pattern {}", pattern),
    }
}

// ==================== Basic conversion ====================

#[test]
fn test_two_pixel_example_with_simple_ramp() {
    // Black + white 2x1 source, width=2, height=1, simple ramp "#. ":
    // luminance 0 -> '#', luminance 255 -> index floor(765/256)=2 -> ' '
    let mut img = RgbaImage::new(2, 1);
    img.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
    img.put_pixel(1, 0, Rgba([255, 255, 255, 255]));
    let settings = Settings {
        width: 2,
        height: Some(1),
        charset: CharSet::Simple,
        ..Default::default()
    };
    let result = convert(&img, &settings).unwrap();
    assert_eq!(result.text, "# \n");
}

#[test]
fn test_text_grid_shape_matches_settings() {
    let img = make_test_image("gradient_h", 120, 60);
    let settings = Settings {
        width: 30,
        height: Some(10),
        ..Default::default()
    };
    let result = convert(&img, &settings).unwrap();
    let lines: Vec<&str> = result.text.lines().collect();
    assert_eq!(lines.len(), 10);
    assert!(lines.iter().all(|l| l.chars().count() == 30));
    assert!(result.text.ends_with('\n'));
}

#[test]
fn test_output_image_decodes_with_expected_dimensions() {
    let img = make_test_image("checker", 40, 40);
    let settings = Settings {
        width: 20,
        height: Some(10),
        ..Default::default()
    };
    let result = convert(&img, &settings).unwrap();
    let decoded = image::load_from_memory(&result.image).unwrap().to_rgba8();
    assert_eq!(
        decoded.dimensions(),
        (20 * CELL_WIDTH, 10 * CELL_HEIGHT)
    );
}

#[test]
fn test_gradient_produces_varied_characters() {
    let img = make_test_image("gradient_h", 200, 50);
    let settings = Settings {
        width: 50,
        height: Some(10),
        ..Default::default()
    };
    let result = convert(&img, &settings).unwrap();
    let distinct: std::collections::HashSet<char> =
        result.text.chars().filter(|c| *c != '\n').collect();
    assert!(
        distinct.len() >= 5,
        "expected a varied ramp, got {:?}",
        distinct
    );
}

// ==================== Ramp selection ====================

#[test]
fn test_custom_chars_override_named_charset() {
    let img = make_test_image("checker", 16, 16);
    let settings = Settings {
        width: 8,
        height: Some(4),
        charset: CharSet::Blocks,
        custom_chars: "AB".to_string(),
        ..Default::default()
    };
    let result = convert(&img, &settings).unwrap();
    assert!(result
        .text
        .chars()
        .all(|c| c == 'A' || c == 'B' || c == '\n'));
}

#[test]
fn test_single_character_ramp() {
    let img = make_test_image("gradient_h", 32, 16);
    let settings = Settings {
        width: 8,
        height: Some(4),
        custom_chars: "x".to_string(),
        ..Default::default()
    };
    let result = convert(&img, &settings).unwrap();
    assert!(result.text.chars().all(|c| c == 'x' || c == '\n'));
}

// ==================== Colorized rendering ====================

#[test]
fn test_colorized_and_monochrome_text_identical() {
    let img = make_test_image("red_green", 40, 20);
    let base = Settings {
        width: 20,
        height: Some(10),
        brightness: 120,
        sepia: 30,
        ..Default::default()
    };
    let mono = convert(&img, &base).unwrap();
    let colorized = convert(
        &img,
        &Settings {
            colorized: true,
            ..base
        },
    )
    .unwrap();
    assert_eq!(mono.text, colorized.text);
    assert_ne!(mono.image, colorized.image);
}

#[test]
fn test_colorized_output_contains_original_hues() {
    // Adjustments that kill saturation must not bleach colorized output:
    // glyph colors come from the pre-adjustment buffer
    let img = RgbaImage::from_pixel(8, 8, Rgba([200, 10, 10, 255]));
    let settings = Settings {
        width: 4,
        height: Some(2),
        saturation: 0,
        colorized: true,
        ..Default::default()
    };
    let result = convert(&img, &settings).unwrap();
    let decoded = image::load_from_memory(&result.image).unwrap().to_rgba8();
    let has_red = decoded
        .pixels()
        .any(|p| p[0] > 150 && p[1] < 80 && p[2] < 80);
    assert!(has_red, "expected original red in colorized output");
}

// ==================== Error surfacing ====================

#[test]
fn test_missing_source_is_source_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.png");
    let err = convert_image(&path, &Settings::default()).unwrap_err();
    assert!(matches!(err, ConvertError::SourceUnavailable(_)));
}

#[test]
fn test_corrupt_source_is_source_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.png");
    std::fs::write(&path, b"not an image at all").unwrap();
    let err = convert_image(&path, &Settings::default()).unwrap_err();
    assert!(matches!(err, ConvertError::SourceUnavailable(_)));
}

#[test]
fn test_out_of_range_settings_are_invalid_input() {
    let img = make_test_image("checker", 8, 8);
    let settings = Settings {
        stretch_width: 300,
        ..Default::default()
    };
    assert!(matches!(
        convert(&img, &settings),
        Err(ConvertError::InvalidInput(_))
    ));
}

// ==================== Settings file round-trip ====================

#[test]
fn test_settings_load_from_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(
        file,
        "width = 42\nbrightness = 130\ncharset = \"blocks\"\ncolorized = true"
    )
    .unwrap();

    let settings = Settings::load(&path).unwrap();
    assert_eq!(settings.width, 42);
    assert_eq!(settings.brightness, 130);
    assert_eq!(settings.charset, CharSet::Blocks);
    assert!(settings.colorized);
    // Unspecified fields fall back to the documented defaults
    assert_eq!(settings.contrast, 100);
    assert_eq!(settings.height, None);
}

#[test]
fn test_settings_load_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load(&dir.path().join("nope.toml")).unwrap();
    assert_eq!(settings.width, 100);
}

#[test]
fn test_settings_load_rejects_bad_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "width = \"not a number\"").unwrap();
    assert!(Settings::load(&path).is_err());
}

#[test]
fn test_convert_image_end_to_end_via_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.png");
    make_test_image("gradient_h", 64, 32).save(&path).unwrap();

    let settings = Settings {
        width: 16,
        height: Some(8),
        ..Default::default()
    };
    let result = convert_image(&path, &settings).unwrap();
    assert_eq!(result.text.lines().count(), 8);
    assert!(image::load_from_memory(&result.image).is_ok());
}

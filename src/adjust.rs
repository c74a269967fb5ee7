//! Per-pixel color adjustment stage.
//!
//! Applies the configured transforms to a working RGBA buffer in place, in
//! a fixed order: brightness, contrast, saturation, grayscale, invert,
//! sepia, hue rotation. Each step clamps to [0, 255] before the next so
//! overflow never compounds. The alpha channel is never touched.
//!
//! Steps at their identity value (100 for the scaling factors, 0 for the
//! blends and hue) are skipped entirely, so identity settings leave the
//! buffer bit-identical.

use image::RgbaImage;

use crate::color::{clamp_channel, hsl_to_rgb, luminance_f, rgb_to_hsl, sepia};
use crate::settings::Settings;

/// Apply the adjustment chain to `img` in place.
///
/// Channels are carried as f32 across the chain for one pixel and written
/// back rounded, so a single conversion accumulates at most one rounding
/// step per channel.
pub fn apply_adjustments(img: &mut RgbaImage, settings: &Settings) {
    let brightness = settings.brightness as f32 / 100.0;
    let contrast = settings.contrast as f32 / 100.0;
    let saturation = settings.saturation as f32 / 100.0;
    let grayscale = settings.grayscale as f32 / 100.0;
    let invert = settings.invert as f32 / 100.0;
    let sepia_amount = settings.sepia as f32 / 100.0;
    let hue = settings.hue.rem_euclid(360);

    let identity = settings.brightness == 100
        && settings.contrast == 100
        && settings.saturation == 100
        && settings.grayscale == 0
        && settings.invert == 0
        && settings.sepia == 0
        && hue == 0;
    if identity {
        return;
    }

    for pixel in img.pixels_mut() {
        let mut c = [pixel[0] as f32, pixel[1] as f32, pixel[2] as f32];

        // 1. Brightness: multiplicative scale per channel
        if settings.brightness != 100 {
            for ch in &mut c {
                *ch = clamp_channel(*ch * brightness);
            }
        }

        // 2. Contrast: curve centered on midpoint 128
        if settings.contrast != 100 {
            for ch in &mut c {
                *ch = clamp_channel(contrast * (*ch - 128.0) + 128.0);
            }
        }

        // 3. Saturation: blend away from / toward luminance gray
        if settings.saturation != 100 {
            let l = luminance_f(c[0], c[1], c[2]);
            for ch in &mut c {
                *ch = clamp_channel(l + (*ch - l) * saturation);
            }
        }

        // 4. Grayscale: blend toward luminance recomputed on current values
        if settings.grayscale != 0 {
            let l = luminance_f(c[0], c[1], c[2]);
            for ch in &mut c {
                *ch = clamp_channel(*ch + (l - *ch) * grayscale);
            }
        }

        // 5. Invert: blend toward 255 - channel
        if settings.invert != 0 {
            for ch in &mut c {
                *ch = clamp_channel(*ch + (255.0 - 2.0 * *ch) * invert);
            }
        }

        // 6. Sepia: blend toward the sepia matrix output
        if settings.sepia != 0 {
            let (sr, sg, sb) = sepia(c[0], c[1], c[2]);
            c[0] = clamp_channel(c[0] + (sr - c[0]) * sepia_amount);
            c[1] = clamp_channel(c[1] + (sg - c[1]) * sepia_amount);
            c[2] = clamp_channel(c[2] + (sb - c[2]) * sepia_amount);
        }

        // 7. Hue rotation via HSL round-trip
        if hue != 0 {
            let r = c[0].round() as u8;
            let g = c[1].round() as u8;
            let b = c[2].round() as u8;
            let (h, s, l) = rgb_to_hsl(r, g, b);
            let (r, g, b) = hsl_to_rgb((h + hue as f32).rem_euclid(360.0), s, l);
            c = [r as f32, g as f32, b as f32];
        }

        pixel[0] = c[0].round() as u8;
        pixel[1] = c[1].round() as u8;
        pixel[2] = c[2].round() as u8;
        // pixel[3] (alpha) deliberately untouched
    }
}

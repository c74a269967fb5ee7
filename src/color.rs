//! Color math shared by the adjustment and mapping stages.
//!
//! Luminance uses the ITU-R BT.601 weighted formula (0.299/0.587/0.114).
//! The HSL round-trip backs the hue-rotation adjustment; the sepia matrix
//! backs the sepia blend.

/// Compute luminance from 8-bit RGB using ITU-R BT.601 weights.
///
/// Uses integer math for the hot path. Coefficients scaled by 1000:
/// 299 + 587 + 114 = 1000, so the result stays in 0-255.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    ((299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000) as u8
}

/// Floating-point luminance for in-flight adjustment values.
///
/// Same BT.601 weights as [`luminance`], but takes channels that may sit
/// between integer steps mid-chain.
#[inline]
pub fn luminance_f(r: f32, g: f32, b: f32) -> f32 {
    0.299 * r + 0.587 * g + 0.114 * b
}

/// Clamp a channel value to the representable [0, 255] range.
#[inline]
pub fn clamp_channel(v: f32) -> f32 {
    v.clamp(0.0, 255.0)
}

/// Apply the standard sepia matrix to an RGB triple.
///
/// Each output channel is clamped to [0, 255]:
/// - R' = 0.393R + 0.769G + 0.189B
/// - G' = 0.349R + 0.686G + 0.168B
/// - B' = 0.272R + 0.534G + 0.131B
#[inline]
pub fn sepia(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    (
        clamp_channel(0.393 * r + 0.769 * g + 0.189 * b),
        clamp_channel(0.349 * r + 0.686 * g + 0.168 * b),
        clamp_channel(0.272 * r + 0.534 * g + 0.131 * b),
    )
}

/// Convert 8-bit RGB to HSL.
///
/// Returns hue in degrees [0, 360), saturation and lightness in [0, 1].
/// Achromatic inputs yield hue 0 and saturation 0.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    let r = r as f32 / 255.0;
    let g = g as f32 / 255.0;
    let b = b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        // Achromatic: hue and saturation are undefined, use 0
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    // Hue sector selection based on the dominant channel
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h * 60.0, s, l)
}

/// Convert HSL back to 8-bit RGB.
///
/// Hue is taken in degrees (any value, wrapped to [0, 360)), saturation and
/// lightness in [0, 1].
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (u8, u8, u8) {
    if s == 0.0 {
        // Achromatic: all channels equal lightness
        let v = (l * 255.0).round().clamp(0.0, 255.0) as u8;
        return (v, v, v);
    }

    let h = h.rem_euclid(360.0) / 360.0;
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    let r = hue_to_channel(p, q, h + 1.0 / 3.0);
    let g = hue_to_channel(p, q, h);
    let b = hue_to_channel(p, q, h - 1.0 / 3.0);

    (
        (r * 255.0).round().clamp(0.0, 255.0) as u8,
        (g * 255.0).round().clamp(0.0, 255.0) as u8,
        (b * 255.0).round().clamp(0.0, 255.0) as u8,
    )
}

/// Standard hue2rgb reconstruction for one channel.
fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_primaries() {
        // 299 * 255 / 1000 = 76, 587 * 255 / 1000 = 149, 114 * 255 / 1000 = 29
        assert_eq!(luminance(255, 0, 0), 76);
        assert_eq!(luminance(0, 255, 0), 149);
        assert_eq!(luminance(0, 0, 255), 29);
    }

    #[test]
    fn test_luminance_extremes() {
        assert_eq!(luminance(0, 0, 0), 0);
        assert_eq!(luminance(255, 255, 255), 255);
    }

    #[test]
    fn test_hsl_achromatic_round_trip_exact() {
        for v in [0u8, 1, 64, 127, 128, 200, 254, 255] {
            let (h, s, l) = rgb_to_hsl(v, v, v);
            assert_eq!(h, 0.0);
            assert_eq!(s, 0.0);
            assert_eq!(hsl_to_rgb(h, s, l), (v, v, v));
        }
    }

    #[test]
    fn test_hsl_primaries() {
        let (h, s, l) = rgb_to_hsl(255, 0, 0);
        assert!((h - 0.0).abs() < 0.01);
        assert!((s - 1.0).abs() < 0.01);
        assert!((l - 0.5).abs() < 0.01);

        let (h, _, _) = rgb_to_hsl(0, 255, 0);
        assert!((h - 120.0).abs() < 0.01);

        let (h, _, _) = rgb_to_hsl(0, 0, 255);
        assert!((h - 240.0).abs() < 0.01);
    }

    #[test]
    fn test_hsl_round_trip_within_one() {
        // Sparse sweep of the RGB cube
        for r in (0..=255u16).step_by(17) {
            for g in (0..=255u16).step_by(17) {
                for b in (0..=255u16).step_by(17) {
                    let (r, g, b) = (r as u8, g as u8, b as u8);
                    let (h, s, l) = rgb_to_hsl(r, g, b);
                    let (r2, g2, b2) = hsl_to_rgb(h, s, l);
                    assert!((r as i16 - r2 as i16).abs() <= 1, "r: {} -> {}", r, r2);
                    assert!((g as i16 - g2 as i16).abs() <= 1, "g: {} -> {}", g, g2);
                    assert!((b as i16 - b2 as i16).abs() <= 1, "b: {} -> {}", b, b2);
                }
            }
        }
    }

    #[test]
    fn test_hue_wraps() {
        let (r, g, b) = hsl_to_rgb(360.0, 1.0, 0.5);
        assert_eq!((r, g, b), (255, 0, 0));
        let (r2, g2, b2) = hsl_to_rgb(-360.0, 1.0, 0.5);
        assert_eq!((r2, g2, b2), (255, 0, 0));
    }

    #[test]
    fn test_sepia_stays_in_range() {
        let (r, g, b) = sepia(255.0, 255.0, 255.0);
        assert_eq!(r, 255.0);
        assert_eq!(g, 255.0);
        assert!(b <= 255.0);

        let (r, g, b) = sepia(0.0, 0.0, 0.0);
        assert_eq!((r, g, b), (0.0, 0.0, 0.0));
    }
}

//! RGB to HSV conversion
//!
//! Hue is an angle in [0, 360), saturation and value are in [0, 1].
//! The conversion is total over 8-bit input and never caches results.

use palette::Hsv as PaletteHsv;
use serde::{Deserialize, Serialize};

use super::RgbSample;

/// Hue, saturation and value derived from an [`RgbSample`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    /// Hue angle in degrees, [0, 360)
    pub hue: f32,
    /// Saturation, [0, 1]
    pub saturation: f32,
    /// Value (brightness), [0, 1]
    pub value: f32,
}

impl Hsv {
    pub const fn new(hue: f32, saturation: f32, value: f32) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// True when no hue can be read from the color (all channels equal)
    pub fn is_gray(&self) -> bool {
        self.saturation == 0.0
    }
}

impl From<RgbSample> for Hsv {
    fn from(sample: RgbSample) -> Self {
        rgb_to_hsv(sample.r, sample.g, sample.b)
    }
}

impl From<Hsv> for PaletteHsv {
    fn from(hsv: Hsv) -> Self {
        PaletteHsv::new(hsv.hue, hsv.saturation, hsv.value)
    }
}

/// Convert 8-bit RGB to HSV
///
/// # Arguments
///
/// * `r`, `g`, `b` - RGB values in range [0, 255]
///
/// # Returns
///
/// HSV triple. Achromatic input (all channels equal) has hue 0.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let r = r as f32 / 255.0;
    let g = g as f32 / 255.0;
    let b = b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let value = max;
    let saturation = if max == 0.0 { 0.0 } else { delta / max };

    if delta == 0.0 {
        return Hsv::new(0.0, saturation, value);
    }

    let mut hue = if max == r {
        60.0 * (((g - b) / delta) % 6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    if hue < 0.0 {
        hue += 360.0;
    }
    // -epsilon + 360 can round up to exactly 360 in f32
    if hue >= 360.0 {
        hue -= 360.0;
    }

    Hsv::new(hue, saturation.clamp(0.0, 1.0), value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette::{FromColor, Srgb};

    fn assert_hsv(actual: Hsv, hue: f32, saturation: f32, value: f32) {
        assert!((actual.hue - hue).abs() < 1e-3, "hue {} != {}", actual.hue, hue);
        assert!((actual.saturation - saturation).abs() < 1e-4);
        assert!((actual.value - value).abs() < 1e-4);
    }

    #[test]
    fn test_black_and_white() {
        assert_hsv(rgb_to_hsv(0, 0, 0), 0.0, 0.0, 0.0);

        let white = rgb_to_hsv(255, 255, 255);
        assert_eq!(white.saturation, 0.0);
        assert_eq!(white.value, 1.0);
        assert!(white.is_gray());
    }

    #[test]
    fn test_primaries() {
        assert_hsv(rgb_to_hsv(255, 0, 0), 0.0, 1.0, 1.0);
        assert_hsv(rgb_to_hsv(0, 255, 0), 120.0, 1.0, 1.0);
        assert_hsv(rgb_to_hsv(0, 0, 255), 240.0, 1.0, 1.0);
    }

    #[test]
    fn test_secondaries() {
        assert_hsv(rgb_to_hsv(255, 255, 0), 60.0, 1.0, 1.0);
        assert_hsv(rgb_to_hsv(0, 255, 255), 180.0, 1.0, 1.0);
        assert_hsv(rgb_to_hsv(255, 0, 255), 300.0, 1.0, 1.0);
    }

    #[test]
    fn test_negative_hue_wraps() {
        // Red max with blue above green lands just below 360
        let hsv = rgb_to_hsv(255, 0, 10);
        assert!(hsv.hue > 357.0 && hsv.hue < 360.0);
    }

    #[test]
    fn test_ranges_over_grid() {
        for r in (0..=255u16).step_by(15) {
            for g in (0..=255u16).step_by(15) {
                for b in (0..=255u16).step_by(15) {
                    let hsv = rgb_to_hsv(r as u8, g as u8, b as u8);
                    assert!((0.0..360.0).contains(&hsv.hue));
                    assert!((0.0..=1.0).contains(&hsv.saturation));
                    assert!((0.0..=1.0).contains(&hsv.value));
                }
            }
        }
    }

    #[test]
    fn test_agrees_with_palette() {
        for &(r, g, b) in &[(200u8, 100u8, 50u8), (10, 200, 90), (90, 30, 220), (250, 10, 128)] {
            let ours = rgb_to_hsv(r, g, b);
            let theirs = palette::Hsv::from_color(Srgb::new(r, g, b).into_format::<f32>());
            assert!((ours.hue - theirs.hue.into_positive_degrees()).abs() < 0.05);
            assert!((ours.saturation - theirs.saturation).abs() < 1e-3);
            assert!((ours.value - theirs.value).abs() < 1e-3);
        }
    }

    #[test]
    fn test_from_sample() {
        let hsv: Hsv = RgbSample::new(0, 0, 255).into();
        assert_hsv(hsv, 240.0, 1.0, 1.0);

        let palette_hsv: palette::Hsv = hsv.into();
        assert!((palette_hsv.hue.into_positive_degrees() - 240.0).abs() < 1e-3);
    }
}

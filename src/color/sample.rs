//! RGB sample value type
//!
//! One sample is produced per classification request, typically the
//! central pixel of a video frame.

use palette::Srgb;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{NamingError, Result};

/// An 8-bit RGB triplet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbSample {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbSample {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a sample from wider integers, clamping each channel to [0, 255]
    pub fn from_clamped(r: i64, g: i64, b: i64) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }

    /// Channels as an array, in R, G, B order
    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Squared Euclidean distance to another sample in RGB space
    pub fn distance_squared(&self, other: &RgbSample) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Format as an uppercase hex string (e.g. "#FF0000")
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parse a hex color string, with or without the leading '#'
    ///
    /// # Errors
    ///
    /// Returns `NamingError::InvalidHex` if the string is not exactly six
    /// hexadecimal digits.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(NamingError::InvalidHex(format!(
                "expected 6 hex digits, got '{}'",
                hex
            )));
        }

        let channel = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| NamingError::InvalidHex(format!("invalid {} value in '{}': {}", name, hex, e)))
        };

        Ok(Self {
            r: channel(0..2, "red")?,
            g: channel(2..4, "green")?,
            b: channel(4..6, "blue")?,
        })
    }
}

fn clamp_channel(value: i64) -> u8 {
    value.clamp(0, 255) as u8
}

impl fmt::Display for RgbSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for RgbSample {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Srgb<u8>> for RgbSample {
    fn from(color: Srgb<u8>) -> Self {
        Self::new(color.red, color.green, color.blue)
    }
}

impl From<RgbSample> for Srgb<u8> {
    fn from(sample: RgbSample) -> Self {
        Srgb::new(sample.r, sample.g, sample.b)
    }
}

impl From<RgbSample> for Srgb<f32> {
    fn from(sample: RgbSample) -> Self {
        Srgb::new(
            sample.r as f32 / 255.0,
            sample.g as f32 / 255.0,
            sample.b as f32 / 255.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_clamped() {
        assert_eq!(RgbSample::from_clamped(-20, 128, 300), RgbSample::new(0, 128, 255));
        assert_eq!(RgbSample::from_clamped(0, 255, 17), RgbSample::new(0, 255, 17));
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(RgbSample::new(255, 0, 0).to_hex(), "#FF0000");
        assert_eq!(RgbSample::new(0, 128, 10).to_hex(), "#00800A");
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(RgbSample::from_hex("#FF0000").unwrap(), RgbSample::new(255, 0, 0));
        assert_eq!(RgbSample::from_hex("00ff7f").unwrap(), RgbSample::new(0, 255, 127));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(RgbSample::from_hex("#FF").is_err());
        assert!(RgbSample::from_hex("#GGGGGG").is_err());
        assert!(RgbSample::from_hex("#ÄÄÄÄ").is_err());
        assert!(RgbSample::from_hex("#+F+F+F").is_err());
        assert!(RgbSample::from_hex("-1-1-1").is_err());
    }

    #[test]
    fn test_distance_squared() {
        let a = RgbSample::new(10, 20, 30);
        let b = RgbSample::new(13, 24, 30);
        assert_eq!(a.distance_squared(&b), 25);
        assert_eq!(b.distance_squared(&a), 25);
        assert_eq!(a.distance_squared(&a), 0);
        assert_eq!(
            RgbSample::new(0, 0, 0).distance_squared(&RgbSample::new(255, 255, 255)),
            3 * 255 * 255
        );
    }

    #[test]
    fn test_palette_interop() {
        let sample = RgbSample::new(12, 34, 56);
        let srgb: Srgb<u8> = sample.into();
        assert_eq!(RgbSample::from(srgb), sample);

        let float: Srgb<f32> = RgbSample::new(255, 0, 51).into();
        assert!((float.red - 1.0).abs() < 1e-6);
        assert!((float.blue - 0.2).abs() < 1e-6);
    }
}

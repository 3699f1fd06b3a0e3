//! Color value types and conversion
//!
//! This module holds the RGB sample type fed to every classifier and the
//! HSV conversion the rule-based classifier works on.

pub mod conversion;
pub mod sample;

pub use conversion::{rgb_to_hsv, Hsv};
pub use sample::RgbSample;

//! Uniform color swatch rendering
//!
//! Swatches are written through the `image` crate. Only lossless and
//! widely readable formats are offered; JPEG is included for training
//! pipelines that expect it, at the cost of slight color drift.

use image::{ImageFormat, Rgb, RgbImage};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::color::RgbSample;
use crate::{NamingError, Result};

/// Output image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwatchFormat {
    #[default]
    Png,
    Jpeg,
    Bmp,
}

impl SwatchFormat {
    /// File extension written for this format, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            SwatchFormat::Png => "png",
            SwatchFormat::Jpeg => "jpg",
            SwatchFormat::Bmp => "bmp",
        }
    }

    fn image_format(&self) -> ImageFormat {
        match self {
            SwatchFormat::Png => ImageFormat::Png,
            SwatchFormat::Jpeg => ImageFormat::Jpeg,
            SwatchFormat::Bmp => ImageFormat::Bmp,
        }
    }
}

/// Render a uniform swatch of the given size
pub fn render_swatch(color: RgbSample, width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb(color.channels()))
}

/// Render and write a swatch to `path`
///
/// # Errors
///
/// Returns `NamingError::ImageWrite` if encoding or writing fails. The
/// parent directory must already exist.
pub fn write_swatch(
    path: &Path,
    color: RgbSample,
    width: u32,
    height: u32,
    format: SwatchFormat,
) -> Result<()> {
    render_swatch(color, width, height)
        .save_with_format(path, format.image_format())
        .map_err(|source| NamingError::ImageWrite {
            path: path.to_path_buf(),
            source,
        })
}

//! Tunable thresholds and default values for color naming
//!
//! The ordered decision tables themselves live next to the code that
//! evaluates them (see [`crate::classify::rules`]). This module holds the
//! scalar parameters those tables and the exporter are built from.

/// Label returned when no rule or reference entry applies
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Achromatic detection parameters
pub mod achromatic {
    /// Saturation below which a color is named by value alone
    pub const SATURATION_THRESHOLD: f32 = 0.1;

    /// Upper (exclusive) value bound of the Black band
    pub const BLACK_MAX_VALUE: f32 = 0.15;

    /// Upper (exclusive) value bound of the Dark Gray band
    pub const DARK_GRAY_MAX_VALUE: f32 = 0.4;

    /// Upper (exclusive) value bound of the Gray band
    pub const GRAY_MAX_VALUE: f32 = 0.65;

    /// Upper (exclusive) value bound of the Light Gray band.
    /// Everything at or above this is White.
    pub const LIGHT_GRAY_MAX_VALUE: f32 = 0.9;
}

/// Tone modifier parameters (saturation and value bounds)
pub mod tone {
    /// Value below which a chromatic color is "Very Dark"
    pub const VERY_DARK_MAX_VALUE: f32 = 0.25;

    /// Value below which a chromatic color is "Dark"
    pub const DARK_MAX_VALUE: f32 = 0.45;

    /// Saturation below which a bright color is "Very Light"
    pub const VERY_LIGHT_MAX_SATURATION: f32 = 0.3;

    /// Minimum value for "Very Light"
    pub const VERY_LIGHT_MIN_VALUE: f32 = 0.85;

    /// Saturation below which a bright color is "Light"
    pub const LIGHT_MAX_SATURATION: f32 = 0.55;

    /// Minimum value for "Light"
    pub const LIGHT_MIN_VALUE: f32 = 0.7;

    /// Saturation at or above which a color is "Deep" or "Bright"
    pub const VIVID_MIN_SATURATION: f32 = 0.75;

    /// Value at or above which a vivid color is "Bright" rather than "Deep"
    pub const BRIGHT_MIN_VALUE: f32 = 0.8;
}

/// Dataset export defaults
pub mod export {
    /// Swatch images rendered per dataset row
    pub const VARIANTS_PER_ROW: u32 = 10;

    /// Maximum per-channel perturbation applied to each swatch
    pub const JITTER: u8 = 10;

    /// Swatch edge length in pixels (a common classifier input size)
    pub const IMAGE_SIZE: u32 = 224;

    /// Replacement for spaces in label directory and file names
    pub const LABEL_SEPARATOR: &str = "_";

    /// Column delimiter of the labeled table
    pub const DELIMITER: char = ',';

    /// Default output directory name
    pub const OUTPUT_DIR: &str = "ColorImages";
}

/// Announcement defaults
pub mod announce {
    use std::time::Duration;

    /// Minimum time between two announcements of the same label
    pub const REPEAT_COOLDOWN: Duration = Duration::from_millis(2000);
}

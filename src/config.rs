//! Configuration structures for color naming and dataset export.
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use name_colors::NamingConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = NamingConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = NamingConfig::default();
//! # Ok::<(), name_colors::NamingError>(())
//! ```
//!
//! Every section carries `#[serde(default)]`, so a file only needs the
//! keys it changes.
//!
//! # Configuration Sections
//!
//! - [`ClassificationConfig`]: default naming strategy
//! - [`ExportConfig`]: dataset exporter output and jitter settings
//! - [`AnnounceConfig`]: repeat suppression for label sinks

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{announce, export};
use crate::dataset::SwatchFormat;
use crate::identify::{ColorNamer, Strategy};
use crate::{NamingError, Result};

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    pub classification: ClassificationConfig,
    pub export: ExportConfig,
    pub announce: AnnounceConfig,
}

/// Classification settings.
///
/// The reference tables are never reconciled into one; which one (or the
/// rule cascade) answers by default is decided here.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationConfig {
    pub default_strategy: Strategy,
}

/// Dataset export parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Root directory; one sub-directory is created per label
    pub output_root: PathBuf,

    /// Swatch images per dataset row
    pub variants_per_row: u32,

    /// Maximum absolute per-channel perturbation
    pub jitter: u8,

    pub image_width: u32,
    pub image_height: u32,

    pub format: SwatchFormat,

    /// Seed for the jitter generator. `None` seeds from the OS.
    pub seed: Option<u64>,

    /// Replacement for spaces in label directory and file names
    pub label_separator: String,

    /// Skip the first line of the table
    pub has_header: bool,

    pub delimiter: char,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from(export::OUTPUT_DIR),
            variants_per_row: export::VARIANTS_PER_ROW,
            jitter: export::JITTER,
            image_width: export::IMAGE_SIZE,
            image_height: export::IMAGE_SIZE,
            format: SwatchFormat::Png,
            seed: None,
            label_separator: export::LABEL_SEPARATOR.to_string(),
            has_header: true,
            delimiter: export::DELIMITER,
        }
    }
}

/// Announcement parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnounceConfig {
    /// Minimum time in milliseconds before the same label is published again
    pub cooldown_ms: u64,
}

impl Default for AnnounceConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: announce::REPEAT_COOLDOWN.as_millis() as u64,
        }
    }
}

impl AnnounceConfig {
    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }
}

impl ExportConfig {
    /// Check parameters that would make the export produce nothing useful
    pub fn validate(&self) -> Result<()> {
        if self.variants_per_row == 0 {
            return Err(invalid("variants_per_row", self.variants_per_row));
        }
        if self.image_width == 0 {
            return Err(invalid("image_width", self.image_width));
        }
        if self.image_height == 0 {
            return Err(invalid("image_height", self.image_height));
        }
        if self.label_separator.contains(['/', '\\']) {
            return Err(invalid("label_separator", &self.label_separator));
        }
        Ok(())
    }
}

fn invalid(parameter: &str, value: impl ToString) -> NamingError {
    NamingError::InvalidParameter {
        parameter: parameter.to_string(),
        value: value.to_string(),
    }
}

impl NamingConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| NamingError::io(path, e))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| NamingError::config(format!("{} is not a valid config", path.display()), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| NamingError::config("Failed to serialize config", e))?;
        std::fs::write(path, json).map_err(|e| NamingError::io(path, e))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.export.validate()
    }

    /// Classifier using the configured default strategy
    pub fn namer(&self) -> ColorNamer {
        ColorNamer::new(self.classification.default_strategy)
    }
}

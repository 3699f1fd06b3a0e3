//! Error types for the name_colors library
//!
//! Classification itself never fails. Only parsing (hex strings, strategy
//! names, dataset rows), configuration loading and dataset export I/O
//! produce these errors.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for name_colors operations
pub type Result<T> = std::result::Result<T, NamingError>;

/// Error types for parsing, configuration and dataset export
#[derive(Error, Debug)]
pub enum NamingError {
    /// A dataset row could not be parsed (missing column, non-numeric channel, empty label)
    #[error("Malformed dataset row {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    /// Directory creation or file access failed
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A swatch image could not be encoded or written
    #[error("Failed to write image {}: {source}", path.display())]
    ImageWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Strategy name not recognised
    #[error("Unknown classification strategy: {0}")]
    UnknownStrategy(String),

    /// Hex color string could not be parsed
    #[error("Invalid hex color: {0}")]
    InvalidHex(String),

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl NamingError {
    /// Create an I/O error tagged with the path it happened on
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a malformed row error
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRow {
            line,
            reason: reason.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check if this error only affects a single row or file.
    ///
    /// Batch operations log recoverable errors and keep going.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            NamingError::MalformedRow { .. }
                | NamingError::Io { .. }
                | NamingError::ImageWrite { .. }
        )
    }

    /// Get a user-friendly description for command-line display
    pub fn user_message(&self) -> String {
        match self {
            NamingError::MalformedRow { line, .. } => {
                format!("Row {} of the dataset could not be read and was skipped.", line)
            }
            NamingError::UnknownStrategy(name) => format!(
                "'{}' is not a known strategy. Use one of: hsv-rules, tone-grid, web-colors, rgb-thresholds.",
                name
            ),
            NamingError::InvalidHex(_) => {
                "Colors must be given as three numbers (0-255) or as #RRGGBB.".to_string()
            }
            NamingError::Config { .. } => {
                "Could not load the configuration file. Please check that it is valid JSON.".to_string()
            }
            _ => "The operation failed. See the log for details.".to_string(),
        }
    }
}

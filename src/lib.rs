//! # Name Colors
//!
//! A Rust crate for turning a sampled RGB value into a human-readable
//! color name, for example to announce the color under a camera's
//! crosshair.
//!
//! This library provides:
//! - RGB to HSV conversion
//! - A rule-based HSV classifier with tone modifiers ("Deep Red", "Navy")
//! - Nearest-neighbor naming against fixed reference tables
//! - A facade that selects between these strategies
//! - A dataset exporter that writes jittered color swatches per label
//!
//! All classification is pure and total: every 8-bit RGB triple gets a
//! label, and the reference tables are immutable statics, so naming can
//! run concurrently from any number of threads.
//!
//! ## Example
//!
//! ```rust
//! use name_colors::{identify, RgbSample, Strategy};
//!
//! let sample = RgbSample::new(200, 0, 0);
//! assert_eq!(identify(sample, Strategy::HsvRules), "Deep Red");
//! assert_eq!(identify(sample, Strategy::WebColors), "Firebrick");
//! ```

pub mod classify;
pub mod color;
pub mod config;
pub mod constants;
pub mod dataset;
pub mod error;
pub mod identify;
pub mod pipeline;
pub mod reference;

pub use classify::{classify_by_rule, classify_by_threshold};
pub use color::{rgb_to_hsv, Hsv, RgbSample};
pub use config::NamingConfig;
pub use dataset::{export_dataset, DatasetExporter, DatasetRow, ExportReport};
pub use error::{NamingError, Result};
pub use identify::{identify, identify_default, ColorNamer, Identification, Strategy};
pub use reference::{nearest_named_color, NamedColor, ReferenceTable};

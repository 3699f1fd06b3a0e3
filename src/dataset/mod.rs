//! Labeled color dataset export
//!
//! Reads an `R,G,B,Label` table and writes jittered uniform swatch images,
//! one directory per label. This is an offline batch tool; it performs
//! blocking file I/O and should not run on a latency-sensitive path.

pub mod exporter;
pub mod row;
pub mod swatch;

pub use exporter::{export_dataset, DatasetExporter, ExportFailure, ExportReport};
pub use row::{parse_row, parse_rows, sanitize_label, DatasetRow};
pub use swatch::{render_swatch, write_swatch, SwatchFormat};

//! Reference palette matching
//!
//! Fixed, process-wide tables of named colors and a table-agnostic
//! nearest-neighbor lookup over them.

pub mod matcher;
pub mod tables;

pub use matcher::{nearest_entry, nearest_named_color, PaletteMatch, ReferenceTable};
pub use tables::{NamedColor, TONE_GRID, WEB_COLORS};

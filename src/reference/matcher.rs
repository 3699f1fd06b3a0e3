//! Nearest-neighbor color naming against a reference table
//!
//! Distance is squared Euclidean in 8-bit RGB space. The scan is linear
//! and keeps the first entry on ties, so the result only depends on the
//! table contents and their order.

use serde::{Deserialize, Serialize};

use super::tables::{NamedColor, TONE_GRID, WEB_COLORS};
use crate::color::RgbSample;
use crate::constants::UNKNOWN_LABEL;

/// Built-in reference tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferenceTable {
    ToneGrid,
    WebColors,
}

impl ReferenceTable {
    pub fn entries(&self) -> &'static [NamedColor] {
        match self {
            ReferenceTable::ToneGrid => &TONE_GRID,
            ReferenceTable::WebColors => &WEB_COLORS,
        }
    }
}

/// Closest table entry and its squared distance to the query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteMatch<'a> {
    pub entry: &'a NamedColor,
    pub distance_squared: u32,
}

impl PaletteMatch<'_> {
    /// Euclidean distance in RGB units
    pub fn distance(&self) -> f32 {
        (self.distance_squared as f32).sqrt()
    }
}

/// Find the closest entry in `table`, or `None` if the table is empty
pub fn nearest_entry(sample: RgbSample, table: &[NamedColor]) -> Option<PaletteMatch<'_>> {
    let mut best: Option<PaletteMatch<'_>> = None;

    for entry in table {
        let distance_squared = sample.distance_squared(&entry.rgb);
        let closer = best.map_or(true, |b| distance_squared < b.distance_squared);
        if closer {
            best = Some(PaletteMatch {
                entry,
                distance_squared,
            });
            if distance_squared == 0 {
                break;
            }
        }
    }

    best
}

/// Label of the closest entry in `table`.
///
/// An empty table yields [`UNKNOWN_LABEL`].
pub fn nearest_named_color(sample: RgbSample, table: &[NamedColor]) -> String {
    nearest_entry(sample, table)
        .map(|m| m.entry.label().into_owned())
        .unwrap_or_else(|| UNKNOWN_LABEL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_entries_match_themselves() {
        for table in [ReferenceTable::ToneGrid, ReferenceTable::WebColors] {
            for entry in table.entries() {
                let found = nearest_entry(entry.rgb, table.entries()).unwrap();
                assert_eq!(found.distance_squared, 0);
                assert_eq!(nearest_named_color(entry.rgb, table.entries()), entry.label());
            }
        }
    }

    #[test]
    fn test_nearest_web_color() {
        let table = ReferenceTable::WebColors.entries();
        assert_eq!(nearest_named_color(RgbSample::new(250, 5, 5), table), "Red");
        assert_eq!(nearest_named_color(RgbSample::new(0, 0, 120), table), "Navy");
        assert_eq!(nearest_named_color(RgbSample::new(250, 250, 250), table), "White");
    }

    #[test]
    fn test_nearest_tone_grid() {
        let table = ReferenceTable::ToneGrid.entries();
        assert_eq!(nearest_named_color(RgbSample::new(250, 5, 5), table), "Bright Red");
        assert_eq!(nearest_named_color(RgbSample::new(10, 20, 70), table), "Very Dark Blue");
    }

    #[test]
    fn test_ties_keep_first_entry() {
        let table = [
            NamedColor::new("Left", 0, 0, 0),
            NamedColor::new("Right", 20, 0, 0),
        ];
        let found = nearest_entry(RgbSample::new(10, 0, 0), &table).unwrap();
        assert_eq!(found.entry.name, "Left");
        assert_eq!(found.distance_squared, 100);
        assert!((found.distance() - 10.0).abs() < 1e-6);

        let reversed = [table[1], table[0]];
        assert_eq!(nearest_named_color(RgbSample::new(10, 0, 0), &reversed), "Right");
    }

    #[test]
    fn test_order_independent_without_ties() {
        let table = ReferenceTable::WebColors.entries();
        let mut shuffled: Vec<NamedColor> = table.to_vec();
        shuffled.reverse();
        shuffled.rotate_left(17);

        for sample in [
            RgbSample::new(12, 200, 40),
            RgbSample::new(201, 33, 90),
            RgbSample::new(90, 90, 160),
            RgbSample::new(240, 200, 10),
        ] {
            assert_eq!(
                nearest_named_color(sample, table),
                nearest_named_color(sample, &shuffled)
            );
        }
    }

    #[test]
    fn test_empty_table_is_unknown() {
        assert!(nearest_entry(RgbSample::new(1, 2, 3), &[]).is_none());
        assert_eq!(nearest_named_color(RgbSample::new(1, 2, 3), &[]), UNKNOWN_LABEL);
    }
}

//! Static reference color tables
//!
//! Two tables are provided:
//! - [`TONE_GRID`]: 11 base colors x 7 tones, labelled `"<tone> <color>"`
//! - [`WEB_COLORS`]: common named web colors
//!
//! Neither table is sorted and no lookup may assume it is. Exact RGB
//! duplicates are not allowed within a table.

use serde::Serialize;
use std::borrow::Cow;

use crate::color::RgbSample;

/// Named entry of a reference table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NamedColor {
    pub tone: Option<&'static str>,
    pub name: &'static str,
    pub rgb: RgbSample,
}

impl NamedColor {
    pub const fn new(name: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self {
            tone: None,
            name,
            rgb: RgbSample::new(r, g, b),
        }
    }

    pub const fn toned(tone: &'static str, name: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self {
            tone: Some(tone),
            name,
            rgb: RgbSample::new(r, g, b),
        }
    }

    /// Display label: `"<tone> <name>"` or just the name
    pub fn label(&self) -> Cow<'static, str> {
        match self.tone {
            Some(tone) => Cow::Owned(format!("{} {}", tone, self.name)),
            None => Cow::Borrowed(self.name),
        }
    }
}

const fn grid(tone: &'static str, name: &'static str, r: u8, g: u8, b: u8) -> NamedColor {
    NamedColor::toned(tone, name, r, g, b)
}

const fn web(name: &'static str, r: u8, g: u8, b: u8) -> NamedColor {
    NamedColor::new(name, r, g, b)
}

/// Tone/color grid: Red, Orange, Yellow, Lime, Green, Cyan, Blue, Purple,
/// Pink, Brown and Gray, each in seven tones from Very Dark to Very Light
pub static TONE_GRID: [NamedColor; 77] = [
    grid("Very Dark", "Red", 64, 6, 6),
    grid("Dark", "Red", 107, 16, 16),
    grid("Deep", "Red", 158, 8, 8),
    grid("Medium", "Red", 191, 67, 67),
    grid("Bright", "Red", 255, 0, 0),
    grid("Light", "Red", 242, 133, 133),
    grid("Very Light", "Red", 255, 204, 204),
    grid("Very Dark", "Orange", 64, 35, 6),
    grid("Dark", "Orange", 107, 62, 16),
    grid("Deep", "Orange", 158, 83, 8),
    grid("Medium", "Orange", 191, 129, 67),
    grid("Bright", "Orange", 255, 128, 0),
    grid("Light", "Orange", 242, 188, 133),
    grid("Very Light", "Orange", 255, 230, 204),
    grid("Very Dark", "Yellow", 64, 59, 6),
    grid("Dark", "Yellow", 107, 100, 16),
    grid("Deep", "Yellow", 158, 146, 8),
    grid("Medium", "Yellow", 191, 181, 67),
    grid("Bright", "Yellow", 255, 234, 0),
    grid("Light", "Yellow", 242, 233, 133),
    grid("Very Light", "Yellow", 255, 251, 204),
    grid("Very Dark", "Lime", 35, 64, 6),
    grid("Dark", "Lime", 62, 107, 16),
    grid("Deep", "Lime", 83, 158, 8),
    grid("Medium", "Lime", 129, 191, 67),
    grid("Bright", "Lime", 128, 255, 0),
    grid("Light", "Lime", 188, 242, 133),
    grid("Very Light", "Lime", 230, 255, 204),
    grid("Very Dark", "Green", 6, 64, 11),
    grid("Dark", "Green", 16, 107, 24),
    grid("Deep", "Green", 8, 158, 20),
    grid("Medium", "Green", 67, 191, 77),
    grid("Bright", "Green", 0, 255, 21),
    grid("Light", "Green", 133, 242, 142),
    grid("Very Light", "Green", 204, 255, 208),
    grid("Very Dark", "Cyan", 6, 59, 64),
    grid("Dark", "Cyan", 16, 100, 107),
    grid("Deep", "Cyan", 8, 146, 158),
    grid("Medium", "Cyan", 67, 181, 191),
    grid("Bright", "Cyan", 0, 234, 255),
    grid("Light", "Cyan", 133, 233, 242),
    grid("Very Light", "Cyan", 204, 251, 255),
    grid("Very Dark", "Blue", 6, 21, 64),
    grid("Dark", "Blue", 16, 39, 107),
    grid("Deep", "Blue", 8, 45, 158),
    grid("Medium", "Blue", 67, 98, 191),
    grid("Bright", "Blue", 0, 64, 255),
    grid("Light", "Blue", 133, 160, 242),
    grid("Very Light", "Blue", 204, 217, 255),
    grid("Very Dark", "Purple", 40, 6, 64),
    grid("Dark", "Purple", 69, 16, 107),
    grid("Deep", "Purple", 96, 8, 158),
    grid("Medium", "Purple", 139, 67, 191),
    grid("Bright", "Purple", 149, 0, 255),
    grid("Light", "Purple", 197, 133, 242),
    grid("Very Light", "Purple", 234, 204, 255),
    grid("Very Dark", "Pink", 64, 6, 35),
    grid("Dark", "Pink", 107, 16, 62),
    grid("Deep", "Pink", 158, 8, 83),
    grid("Medium", "Pink", 191, 67, 129),
    grid("Bright", "Pink", 255, 0, 128),
    grid("Light", "Pink", 242, 133, 188),
    grid("Very Light", "Pink", 255, 204, 230),
    grid("Very Dark", "Brown", 40, 18, 2),
    grid("Dark", "Brown", 66, 31, 6),
    grid("Deep", "Brown", 98, 41, 0),
    grid("Medium", "Brown", 119, 69, 33),
    grid("Bright", "Brown", 158, 66, 0),
    grid("Light", "Brown", 178, 126, 89),
    grid("Very Light", "Brown", 199, 164, 139),
    grid("Very Dark", "Gray", 38, 38, 38),
    grid("Dark", "Gray", 76, 76, 76),
    grid("Deep", "Gray", 107, 107, 107),
    grid("Medium", "Gray", 140, 140, 140),
    grid("Bright", "Gray", 173, 173, 173),
    grid("Light", "Gray", 204, 204, 204),
    grid("Very Light", "Gray", 230, 230, 230),
];

/// Named web colors (CSS names, spaced for speech)
pub static WEB_COLORS: [NamedColor; 60] = [
    web("Black", 0, 0, 0),
    web("White", 255, 255, 255),
    web("Gray", 128, 128, 128),
    web("Silver", 192, 192, 192),
    web("Dark Gray", 64, 64, 64),
    web("Light Gray", 211, 211, 211),
    web("Dim Gray", 105, 105, 105),
    web("Red", 255, 0, 0),
    web("Dark Red", 139, 0, 0),
    web("Maroon", 128, 0, 0),
    web("Crimson", 220, 20, 60),
    web("Firebrick", 178, 34, 34),
    web("Indian Red", 205, 92, 92),
    web("Salmon", 250, 128, 114),
    web("Light Salmon", 255, 160, 122),
    web("Coral", 255, 127, 80),
    web("Tomato", 255, 99, 71),
    web("Orange Red", 255, 69, 0),
    web("Orange", 255, 165, 0),
    web("Dark Orange", 255, 140, 0),
    web("Gold", 255, 215, 0),
    web("Yellow", 255, 255, 0),
    web("Light Yellow", 255, 255, 224),
    web("Khaki", 240, 230, 140),
    web("Dark Khaki", 189, 183, 107),
    web("Olive", 128, 128, 0),
    web("Yellow Green", 154, 205, 50),
    web("Lime", 0, 255, 0),
    web("Lime Green", 50, 205, 50),
    web("Light Green", 144, 238, 144),
    web("Green", 0, 128, 0),
    web("Dark Green", 0, 100, 0),
    web("Forest Green", 34, 139, 34),
    web("Sea Green", 46, 139, 87),
    web("Olive Drab", 107, 142, 35),
    web("Mint", 189, 252, 201),
    web("Teal", 0, 128, 128),
    web("Cyan", 0, 255, 255),
    web("Light Cyan", 224, 255, 255),
    web("Turquoise", 64, 224, 208),
    web("Aquamarine", 127, 255, 212),
    web("Sky Blue", 135, 206, 235),
    web("Light Blue", 173, 216, 230),
    web("Steel Blue", 70, 130, 180),
    web("Royal Blue", 65, 105, 225),
    web("Blue", 0, 0, 255),
    web("Medium Blue", 0, 0, 205),
    web("Navy", 0, 0, 128),
    web("Indigo", 75, 0, 130),
    web("Purple", 128, 0, 128),
    web("Violet", 238, 130, 238),
    web("Lavender", 230, 230, 250),
    web("Plum", 221, 160, 221),
    web("Magenta", 255, 0, 255),
    web("Pink", 255, 192, 203),
    web("Hot Pink", 255, 105, 180),
    web("Deep Pink", 255, 20, 147),
    web("Brown", 165, 42, 42),
    web("Chocolate", 210, 105, 30),
    web("Tan", 210, 180, 140),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique_rgb(table: &[NamedColor]) {
        let mut seen = HashSet::new();
        for entry in table {
            assert!(seen.insert(entry.rgb), "duplicate RGB {} ({})", entry.rgb, entry.label());
        }
    }

    #[test]
    fn test_tables_non_empty_and_unique() {
        assert!(!TONE_GRID.is_empty());
        assert!(!WEB_COLORS.is_empty());
        assert_unique_rgb(&TONE_GRID);
        assert_unique_rgb(&WEB_COLORS);
    }

    #[test]
    fn test_tone_grid_shape() {
        let colors: HashSet<_> = TONE_GRID.iter().map(|c| c.name).collect();
        let tones: HashSet<_> = TONE_GRID.iter().filter_map(|c| c.tone).collect();
        assert_eq!(colors.len(), 11);
        assert_eq!(tones.len(), 7);

        let labels: HashSet<_> = TONE_GRID.iter().map(|c| c.label()).collect();
        assert_eq!(labels.len(), TONE_GRID.len());
    }

    #[test]
    fn test_labels() {
        assert_eq!(TONE_GRID[0].label(), "Very Dark Red");
        assert_eq!(web("Teal", 0, 128, 128).label(), "Teal");
        assert!(WEB_COLORS.iter().all(|c| c.tone.is_none()));
    }
}

//! Rule-based HSV classifier
//!
//! Classification runs in a fixed order, each stage backed by a static
//! decision table that is evaluated first-match-wins:
//!
//! 1. [`ACHROMATIC_BANDS`]: saturation below
//!    [`achromatic::SATURATION_THRESHOLD`] is named by value alone.
//! 2. [`HUE_SECTORS`]: the hue circle is tiled into wrap-aware sectors,
//!    each naming a [`BaseColor`].
//! 3. [`TONE_RULES`]: saturation and value pick a [`Tone`] modifier.
//! 4. [`SPECIAL_CASES`]: checked after base and tone are known. The first
//!    matching entry replaces the composed `"<tone> <base>"` label.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::color::Hsv;
use crate::constants::{achromatic, tone, UNKNOWN_LABEL};

/// Half-open interval `[min, max)` over saturation or value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f32,
    pub max: f32,
}

impl Bounds {
    /// Matches every value in [0, 1]
    pub const ANY: Bounds = Bounds::new(0.0, f32::INFINITY);

    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub const fn below(max: f32) -> Self {
        Self::new(0.0, max)
    }

    pub const fn at_least(min: f32) -> Self {
        Self::new(min, f32::INFINITY)
    }

    pub fn contains(&self, x: f32) -> bool {
        x >= self.min && x < self.max
    }
}

/// Hue-sector color names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseColor {
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
    Magenta,
    Pink,
}

impl BaseColor {
    pub fn name(&self) -> &'static str {
        match self {
            BaseColor::Red => "Red",
            BaseColor::Orange => "Orange",
            BaseColor::Yellow => "Yellow",
            BaseColor::Green => "Green",
            BaseColor::Cyan => "Cyan",
            BaseColor::Blue => "Blue",
            BaseColor::Purple => "Purple",
            BaseColor::Magenta => "Magenta",
            BaseColor::Pink => "Pink",
        }
    }
}

impl fmt::Display for BaseColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lightness/saturation modifier composed with a base color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    VeryDark,
    Dark,
    Deep,
    Medium,
    Bright,
    Light,
    VeryLight,
}

impl Tone {
    /// All tones from darkest to lightest
    pub const ALL: [Tone; 7] = [
        Tone::VeryDark,
        Tone::Dark,
        Tone::Deep,
        Tone::Medium,
        Tone::Bright,
        Tone::Light,
        Tone::VeryLight,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Tone::VeryDark => "Very Dark",
            Tone::Dark => "Dark",
            Tone::Deep => "Deep",
            Tone::Medium => "Medium",
            Tone::Bright => "Bright",
            Tone::Light => "Light",
            Tone::VeryLight => "Very Light",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value band for achromatic colors, `[.., max_value)`
#[derive(Debug, Clone, Copy)]
pub struct ValueBand {
    pub max_value: f32,
    pub name: &'static str,
}

/// Achromatic bands, ordered by value. The last band is unbounded above.
pub const ACHROMATIC_BANDS: [ValueBand; 5] = [
    ValueBand { max_value: achromatic::BLACK_MAX_VALUE, name: "Black" },
    ValueBand { max_value: achromatic::DARK_GRAY_MAX_VALUE, name: "Dark Gray" },
    ValueBand { max_value: achromatic::GRAY_MAX_VALUE, name: "Gray" },
    ValueBand { max_value: achromatic::LIGHT_GRAY_MAX_VALUE, name: "Light Gray" },
    ValueBand { max_value: f32::INFINITY, name: "White" },
];

/// A hue sector `[start, end)` in degrees. When `start > end` the sector
/// wraps through 0.
#[derive(Debug, Clone, Copy)]
pub struct HueSector {
    pub start: f32,
    pub end: f32,
    pub base: BaseColor,
}

impl HueSector {
    pub fn contains(&self, hue: f32) -> bool {
        if self.start <= self.end {
            hue >= self.start && hue < self.end
        } else {
            hue >= self.start || hue < self.end
        }
    }
}

/// Hue sectors in circle order. Each sector ends where the next begins,
/// and the last ends where the first begins.
pub const HUE_SECTORS: [HueSector; 9] = [
    HueSector { start: 345.0, end: 15.0, base: BaseColor::Red },
    HueSector { start: 15.0, end: 45.0, base: BaseColor::Orange },
    HueSector { start: 45.0, end: 70.0, base: BaseColor::Yellow },
    HueSector { start: 70.0, end: 165.0, base: BaseColor::Green },
    HueSector { start: 165.0, end: 195.0, base: BaseColor::Cyan },
    HueSector { start: 195.0, end: 255.0, base: BaseColor::Blue },
    HueSector { start: 255.0, end: 285.0, base: BaseColor::Purple },
    HueSector { start: 285.0, end: 320.0, base: BaseColor::Magenta },
    HueSector { start: 320.0, end: 345.0, base: BaseColor::Pink },
];

/// Tone rule: applies when both saturation and value fall in bounds
#[derive(Debug, Clone, Copy)]
pub struct ToneRule {
    pub tone: Tone,
    pub saturation: Bounds,
    pub value: Bounds,
}

/// Tone rules in evaluation order. The final catch-all guarantees a tone.
pub const TONE_RULES: [ToneRule; 7] = [
    ToneRule {
        tone: Tone::VeryDark,
        saturation: Bounds::ANY,
        value: Bounds::below(tone::VERY_DARK_MAX_VALUE),
    },
    ToneRule {
        tone: Tone::Dark,
        saturation: Bounds::ANY,
        value: Bounds::below(tone::DARK_MAX_VALUE),
    },
    ToneRule {
        tone: Tone::VeryLight,
        saturation: Bounds::below(tone::VERY_LIGHT_MAX_SATURATION),
        value: Bounds::at_least(tone::VERY_LIGHT_MIN_VALUE),
    },
    ToneRule {
        tone: Tone::Light,
        saturation: Bounds::below(tone::LIGHT_MAX_SATURATION),
        value: Bounds::at_least(tone::LIGHT_MIN_VALUE),
    },
    ToneRule {
        tone: Tone::Deep,
        saturation: Bounds::at_least(tone::VIVID_MIN_SATURATION),
        value: Bounds::below(tone::BRIGHT_MIN_VALUE),
    },
    ToneRule {
        tone: Tone::Bright,
        saturation: Bounds::at_least(tone::VIVID_MIN_SATURATION),
        value: Bounds::at_least(tone::BRIGHT_MIN_VALUE),
    },
    ToneRule {
        tone: Tone::Medium,
        saturation: Bounds::ANY,
        value: Bounds::ANY,
    },
];

/// Named override for a base color within saturation/value bounds
#[derive(Debug, Clone, Copy)]
pub struct SpecialCase {
    pub name: &'static str,
    pub base: BaseColor,
    pub saturation: Bounds,
    pub value: Bounds,
}

/// Special-case overrides in evaluation order
pub const SPECIAL_CASES: [SpecialCase; 7] = [
    SpecialCase {
        name: "Maroon",
        base: BaseColor::Red,
        saturation: Bounds::at_least(0.6),
        value: Bounds::new(0.25, 0.55),
    },
    SpecialCase {
        name: "Pink",
        base: BaseColor::Red,
        saturation: Bounds::below(0.45),
        value: Bounds::at_least(0.8),
    },
    SpecialCase {
        name: "Brown",
        base: BaseColor::Orange,
        saturation: Bounds::at_least(0.4),
        value: Bounds::below(0.65),
    },
    SpecialCase {
        name: "Gold",
        base: BaseColor::Yellow,
        saturation: Bounds::below(0.45),
        value: Bounds::at_least(0.8),
    },
    SpecialCase {
        name: "Olive",
        base: BaseColor::Yellow,
        saturation: Bounds::ANY,
        value: Bounds::below(0.6),
    },
    SpecialCase {
        name: "Teal",
        base: BaseColor::Cyan,
        saturation: Bounds::at_least(0.5),
        value: Bounds::below(0.6),
    },
    SpecialCase {
        name: "Navy",
        base: BaseColor::Blue,
        saturation: Bounds::at_least(0.5),
        value: Bounds::below(0.45),
    },
];

/// Structured result of the rule cascade
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RuleOutcome {
    Achromatic(&'static str),
    Special(&'static str),
    Toned { tone: Tone, base: BaseColor },
    Unclassified,
}

impl RuleOutcome {
    pub fn label(&self) -> String {
        match self {
            RuleOutcome::Achromatic(name) | RuleOutcome::Special(name) => name.to_string(),
            RuleOutcome::Toned { tone, base } => format!("{} {}", tone, base),
            RuleOutcome::Unclassified => UNKNOWN_LABEL.to_string(),
        }
    }
}

/// Look up the base color for a hue in degrees
pub fn base_color_for_hue(hue: f32) -> Option<BaseColor> {
    HUE_SECTORS
        .iter()
        .find(|sector| sector.contains(hue))
        .map(|sector| sector.base)
}

/// Pick the tone modifier for a saturation/value pair
pub fn tone_for(saturation: f32, value: f32) -> Tone {
    TONE_RULES
        .iter()
        .find(|rule| rule.saturation.contains(saturation) && rule.value.contains(value))
        .map(|rule| rule.tone)
        .unwrap_or(Tone::Medium)
}

fn achromatic_name(value: f32) -> &'static str {
    ACHROMATIC_BANDS
        .iter()
        .find(|band| value < band.max_value)
        .map(|band| band.name)
        .unwrap_or("White")
}

fn special_case(base: BaseColor, saturation: f32, value: f32) -> Option<&'static str> {
    SPECIAL_CASES
        .iter()
        .find(|case| {
            case.base == base && case.saturation.contains(saturation) && case.value.contains(value)
        })
        .map(|case| case.name)
}

/// Run the full rule cascade on an HSV triple
///
/// Out-of-range input is normalized first: hue is wrapped into
/// [0, 360), saturation and value are clamped to [0, 1]. NaN input yields
/// [`RuleOutcome::Unclassified`].
pub fn evaluate(hsv: Hsv) -> RuleOutcome {
    if hsv.hue.is_nan() || hsv.saturation.is_nan() || hsv.value.is_nan() {
        return RuleOutcome::Unclassified;
    }

    let mut hue = hsv.hue.rem_euclid(360.0);
    if hue >= 360.0 {
        hue = 0.0;
    }
    let saturation = hsv.saturation.clamp(0.0, 1.0);
    let value = hsv.value.clamp(0.0, 1.0);

    if saturation < achromatic::SATURATION_THRESHOLD {
        return RuleOutcome::Achromatic(achromatic_name(value));
    }

    let Some(base) = base_color_for_hue(hue) else {
        return RuleOutcome::Unclassified;
    };
    let tone = tone_for(saturation, value);

    match special_case(base, saturation, value) {
        Some(name) => RuleOutcome::Special(name),
        None => RuleOutcome::Toned { tone, base },
    }
}

/// Classify an HSV triple into a color label
///
/// Returns either a single name ("White", "Maroon") or `"<tone> <base>"`
/// ("Deep Red", "Very Light Blue"). Never fails.
pub fn classify_by_rule(hue: f32, saturation: f32, value: f32) -> String {
    evaluate(Hsv::new(hue, saturation, value)).label()
}

//! RGB channel-threshold classifier
//!
//! The simplest naming scheme: each rule is a box in RGB space and the
//! first box containing the sample names it. Large parts of the cube fall
//! in no box and get [`UNKNOWN_LABEL`].

use std::ops::RangeInclusive;

use crate::color::RgbSample;
use crate::constants::UNKNOWN_LABEL;

/// Axis-aligned box in RGB space with a name
#[derive(Debug, Clone)]
pub struct ThresholdRule {
    pub name: &'static str,
    pub r: RangeInclusive<u8>,
    pub g: RangeInclusive<u8>,
    pub b: RangeInclusive<u8>,
}

impl ThresholdRule {
    pub fn matches(&self, sample: RgbSample) -> bool {
        self.r.contains(&sample.r) && self.g.contains(&sample.g) && self.b.contains(&sample.b)
    }
}

/// Rules in evaluation order; first match wins
pub const THRESHOLD_RULES: [ThresholdRule; 12] = [
    ThresholdRule { name: "Red", r: 201..=255, g: 0..=99, b: 0..=99 },
    ThresholdRule { name: "Orange", r: 201..=255, g: 101..=199, b: 0..=99 },
    ThresholdRule { name: "Yellow", r: 201..=255, g: 201..=255, b: 0..=99 },
    ThresholdRule { name: "Green", r: 0..=99, g: 151..=255, b: 0..=99 },
    ThresholdRule { name: "Cyan", r: 0..=99, g: 151..=255, b: 151..=255 },
    ThresholdRule { name: "Blue", r: 0..=99, g: 0..=99, b: 151..=255 },
    ThresholdRule { name: "Purple", r: 101..=199, g: 0..=99, b: 151..=255 },
    ThresholdRule { name: "Pink", r: 201..=255, g: 0..=149, b: 151..=255 },
    ThresholdRule { name: "Brown", r: 101..=199, g: 51..=149, b: 0..=99 },
    ThresholdRule { name: "White", r: 201..=255, g: 201..=255, b: 201..=255 },
    ThresholdRule { name: "Gray", r: 101..=199, g: 101..=199, b: 101..=199 },
    ThresholdRule { name: "Black", r: 0..=49, g: 0..=49, b: 0..=49 },
];

/// Name a sample by the first threshold box that contains it
pub fn classify_by_threshold(sample: RgbSample) -> String {
    THRESHOLD_RULES
        .iter()
        .find(|rule| rule.matches(sample))
        .map(|rule| rule.name)
        .unwrap_or(UNKNOWN_LABEL)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(r: u8, g: u8, b: u8) -> String {
        classify_by_threshold(RgbSample::new(r, g, b))
    }

    #[test]
    fn test_basic_colors() {
        assert_eq!(name(255, 0, 0), "Red");
        assert_eq!(name(255, 150, 0), "Orange");
        assert_eq!(name(255, 255, 0), "Yellow");
        assert_eq!(name(0, 255, 0), "Green");
        assert_eq!(name(0, 255, 255), "Cyan");
        assert_eq!(name(0, 0, 255), "Blue");
        assert_eq!(name(150, 0, 255), "Purple");
        assert_eq!(name(255, 100, 200), "Pink");
        assert_eq!(name(150, 100, 50), "Brown");
        assert_eq!(name(255, 255, 255), "White");
        assert_eq!(name(150, 150, 150), "Gray");
        assert_eq!(name(0, 0, 0), "Black");
    }

    #[test]
    fn test_bounds_are_exclusive() {
        // r must exceed 200 for Red
        assert_eq!(name(200, 0, 0), UNKNOWN_LABEL);
        // g == 100 sits between the Red and Orange boxes
        assert_eq!(name(255, 100, 0), UNKNOWN_LABEL);
    }

    #[test]
    fn test_boxes_do_not_overlap() {
        for r in (0..=255u16).step_by(5) {
            for g in (0..=255u16).step_by(5) {
                for b in (0..=255u16).step_by(5) {
                    let sample = RgbSample::new(r as u8, g as u8, b as u8);
                    let hits = THRESHOLD_RULES.iter().filter(|rule| rule.matches(sample)).count();
                    assert!(hits <= 1, "{} matched {} rules", sample, hits);
                }
            }
        }
    }

    #[test]
    fn test_gaps_fall_back_to_unknown() {
        assert_eq!(name(75, 75, 75), UNKNOWN_LABEL);
        assert_eq!(name(120, 200, 30), UNKNOWN_LABEL);
    }
}

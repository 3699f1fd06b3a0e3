//! Classification facade
//!
//! Selects one of the naming strategies for a sample. Every strategy is a
//! pure function of the sample, so [`identify`] is deterministic and safe
//! to call from any thread.
//!
//! Which strategy is the default is a configuration decision (see
//! [`crate::config::ClassificationConfig`]). The built-in default is
//! [`Strategy::HsvRules`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::classify::{classify_by_rule, classify_by_threshold};
use crate::color::{Hsv, RgbSample};
use crate::reference::{nearest_named_color, ReferenceTable};
use crate::{NamingError, Result};

/// Color naming strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// HSV sectors with tone modifiers and named overrides
    #[default]
    HsvRules,
    /// Nearest entry of the 77-entry tone/color grid
    ToneGrid,
    /// Nearest named web color
    WebColors,
    /// First matching RGB channel-threshold box
    RgbThresholds,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::HsvRules,
        Strategy::ToneGrid,
        Strategy::WebColors,
        Strategy::RgbThresholds,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::HsvRules => "hsv-rules",
            Strategy::ToneGrid => "tone-grid",
            Strategy::WebColors => "web-colors",
            Strategy::RgbThresholds => "rgb-thresholds",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = NamingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "hsv-rules" | "hsv" | "rules" => Ok(Strategy::HsvRules),
            "tone-grid" | "grid" => Ok(Strategy::ToneGrid),
            "web-colors" | "web" => Ok(Strategy::WebColors),
            "rgb-thresholds" | "threshold" | "thresholds" => Ok(Strategy::RgbThresholds),
            _ => Err(NamingError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Name a sample using the given strategy
pub fn identify(sample: RgbSample, strategy: Strategy) -> String {
    match strategy {
        Strategy::HsvRules => {
            let hsv = Hsv::from(sample);
            classify_by_rule(hsv.hue, hsv.saturation, hsv.value)
        }
        Strategy::ToneGrid => nearest_named_color(sample, ReferenceTable::ToneGrid.entries()),
        Strategy::WebColors => nearest_named_color(sample, ReferenceTable::WebColors.entries()),
        Strategy::RgbThresholds => classify_by_threshold(sample),
    }
}

/// Name a sample using [`Strategy::default`]
pub fn identify_default(sample: RgbSample) -> String {
    identify(sample, Strategy::default())
}

/// Full description of a classified sample, for display and logging
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identification {
    pub sample: RgbSample,
    pub hex: String,
    pub hsv: Hsv,
    pub strategy: Strategy,
    pub label: String,
}

/// Classifier bound to a configured default strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorNamer {
    default_strategy: Strategy,
}

impl ColorNamer {
    pub fn new(default_strategy: Strategy) -> Self {
        Self { default_strategy }
    }

    pub fn default_strategy(&self) -> Strategy {
        self.default_strategy
    }

    /// Name a sample with the default strategy
    pub fn name(&self, sample: RgbSample) -> String {
        identify(sample, self.default_strategy)
    }

    /// Name a sample with an explicit strategy, or the default when `None`
    pub fn name_with(&self, sample: RgbSample, strategy: Option<Strategy>) -> String {
        identify(sample, strategy.unwrap_or(self.default_strategy))
    }

    /// Name a sample and keep the intermediate representations
    pub fn describe(&self, sample: RgbSample, strategy: Option<Strategy>) -> Identification {
        let strategy = strategy.unwrap_or(self.default_strategy);
        Identification {
            sample,
            hex: sample.to_hex(),
            hsv: Hsv::from(sample),
            strategy,
            label: identify(sample, strategy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_strategy_is_hsv_rules() {
        assert_eq!(Strategy::default(), Strategy::HsvRules);
        let sample = RgbSample::new(200, 0, 0);
        assert_eq!(identify_default(sample), identify(sample, Strategy::HsvRules));
        assert_eq!(ColorNamer::default().name(sample), "Deep Red");
    }

    #[test]
    fn test_each_strategy() {
        let sample = RgbSample::new(255, 0, 0);
        assert_eq!(identify(sample, Strategy::HsvRules), "Bright Red");
        assert_eq!(identify(sample, Strategy::ToneGrid), "Bright Red");
        assert_eq!(identify(sample, Strategy::WebColors), "Red");
        assert_eq!(identify(sample, Strategy::RgbThresholds), "Red");
    }

    #[test]
    fn test_parse_strategy() {
        assert_eq!("hsv-rules".parse::<Strategy>().unwrap(), Strategy::HsvRules);
        assert_eq!("Tone_Grid".parse::<Strategy>().unwrap(), Strategy::ToneGrid);
        assert_eq!(" web ".parse::<Strategy>().unwrap(), Strategy::WebColors);
        assert_eq!("threshold".parse::<Strategy>().unwrap(), Strategy::RgbThresholds);
        assert!(matches!(
            "lab".parse::<Strategy>(),
            Err(NamingError::UnknownStrategy(_))
        ));
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>().unwrap(), strategy);
        }
    }

    #[test]
    fn test_strategy_serde_names() {
        let json = serde_json::to_string(&Strategy::WebColors).unwrap();
        assert_eq!(json, "\"web-colors\"");
        let parsed: Strategy = serde_json::from_str("\"rgb-thresholds\"").unwrap();
        assert_eq!(parsed, Strategy::RgbThresholds);
    }

    #[test]
    fn test_namer_override() {
        let namer = ColorNamer::new(Strategy::WebColors);
        let sample = RgbSample::new(0, 0, 128);
        assert_eq!(namer.name(sample), "Navy");
        assert_eq!(namer.name_with(sample, None), "Navy");
        assert_eq!(namer.name_with(sample, Some(Strategy::RgbThresholds)), "Unknown");
    }

    #[test]
    fn test_describe() {
        let namer = ColorNamer::new(Strategy::ToneGrid);
        let description = namer.describe(RgbSample::new(0, 0, 255), None);
        assert_eq!(description.hex, "#0000FF");
        assert_eq!(description.strategy, Strategy::ToneGrid);
        assert!((description.hsv.hue - 240.0).abs() < 1e-3);
        assert_eq!(description.label, identify(RgbSample::new(0, 0, 255), Strategy::ToneGrid));
    }
}

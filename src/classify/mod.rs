//! Rule-driven color classifiers
//!
//! Both classifiers evaluate static, ordered decision tables:
//! - [`rules`]: HSV sectors with tone modifiers and named overrides
//! - [`threshold`]: axis-aligned boxes in RGB space

pub mod rules;
pub mod threshold;

pub use rules::{classify_by_rule, BaseColor, RuleOutcome, Tone};
pub use threshold::classify_by_threshold;

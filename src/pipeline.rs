//! Frame source → classifier → label sink chain
//!
//! Capture and presentation are external collaborators. They plug in
//! through [`FrameSource`] and [`LabelSink`]; the only state the chain
//! keeps is what those values own, such as the last announced label in a
//! [`RepeatSuppressor`].

use std::time::{Duration, Instant};
use tracing::debug;

use crate::color::RgbSample;
use crate::config::AnnounceConfig;
use crate::constants::announce;
use crate::identify::ColorNamer;

/// Supplies one RGB sample per processed frame
pub trait FrameSource {
    /// Next sample, or `None` once the source is exhausted
    fn next_sample(&mut self) -> Option<RgbSample>;
}

impl<I> FrameSource for I
where
    I: Iterator<Item = RgbSample>,
{
    fn next_sample(&mut self) -> Option<RgbSample> {
        self.next()
    }
}

/// Receives classified labels (display, speech, logging)
pub trait LabelSink {
    fn publish(&mut self, sample: RgbSample, label: &str);
}

/// Adapts a closure into a [`LabelSink`]
pub struct FnSink<F>(pub F);

impl<F> LabelSink for FnSink<F>
where
    F: FnMut(RgbSample, &str),
{
    fn publish(&mut self, sample: RgbSample, label: &str) {
        (self.0)(sample, label)
    }
}

/// Drops a label equal to the previous one if it arrives within the
/// cooldown window. A different label always passes and restarts the
/// window.
pub struct RepeatSuppressor<S> {
    inner: S,
    cooldown: Duration,
    last: Option<(String, Instant)>,
}

impl<S: LabelSink> RepeatSuppressor<S> {
    pub fn new(inner: S) -> Self {
        Self::with_cooldown(inner, announce::REPEAT_COOLDOWN)
    }

    /// Use the cooldown from the `announce` configuration section
    pub fn from_config(inner: S, config: &AnnounceConfig) -> Self {
        Self::with_cooldown(inner, config.cooldown())
    }

    pub fn with_cooldown(inner: S, cooldown: Duration) -> Self {
        Self {
            inner,
            cooldown,
            last: None,
        }
    }

    /// Publish as of `now`. Returns whether the label was forwarded.
    pub fn publish_at(&mut self, sample: RgbSample, label: &str, now: Instant) -> bool {
        if let Some((last_label, at)) = &self.last {
            if last_label == label && now.saturating_duration_since(*at) < self.cooldown {
                return false;
            }
        }

        self.inner.publish(sample, label);
        self.last = Some((label.to_string(), now));
        true
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: LabelSink> LabelSink for RepeatSuppressor<S> {
    fn publish(&mut self, sample: RgbSample, label: &str) {
        self.publish_at(sample, label, Instant::now());
    }
}

/// Classify every sample from `source` and hand the labels to `sink`.
///
/// Returns the number of samples processed.
pub fn run_pipeline<F, S>(source: &mut F, namer: &ColorNamer, sink: &mut S) -> usize
where
    F: FrameSource + ?Sized,
    S: LabelSink + ?Sized,
{
    let mut processed = 0;
    while let Some(sample) = source.next_sample() {
        let label = namer.name(sample);
        debug!("Frame {}: {} -> {}", processed, sample, label);
        sink.publish(sample, &label);
        processed += 1;
    }
    processed
}

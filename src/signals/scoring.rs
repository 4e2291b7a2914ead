//! Signal tallying and confidence calculation

use crate::common::math;
use crate::models::signal::{Polarity, Recommendation, Signal};

/// Confidence must exceed this before a directional call is made.
pub const MIN_DIRECTIONAL_CONFIDENCE: f64 = 0.5;

/// Bullish/bearish counts over a signal list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignalTally {
    pub bullish: usize,
    pub bearish: usize,
}

impl SignalTally {
    pub fn from_signals(signals: &[Signal]) -> Self {
        signals
            .iter()
            .fold(Self::default(), |mut tally, signal| {
                match signal.polarity() {
                    Polarity::Bullish => tally.bullish += 1,
                    Polarity::Bearish => tally.bearish += 1,
                }
                tally
            })
    }

    pub fn total(&self) -> usize {
        self.bullish + self.bearish
    }
}

/// Confidence is the net lean as a share of all signals: |b - s| / n.
pub fn calculate_confidence(tally: &SignalTally) -> f64 {
    let total = tally.total();
    if total == 0 {
        return 0.0;
    }
    tally.bullish.abs_diff(tally.bearish) as f64 / total as f64
}

/// Score a signal list into a recommendation and a confidence rounded to two
/// decimals. Ties and weak leans are HOLD.
pub fn score_signals(signals: &[Signal]) -> (Recommendation, f64) {
    let tally = SignalTally::from_signals(signals);
    let confidence = calculate_confidence(&tally);

    let recommendation = if tally.bullish > tally.bearish && confidence > MIN_DIRECTIONAL_CONFIDENCE
    {
        Recommendation::Buy
    } else if tally.bearish > tally.bullish && confidence > MIN_DIRECTIONAL_CONFIDENCE {
        Recommendation::Sell
    } else {
        Recommendation::Hold
    };

    (recommendation, math::round2(confidence))
}

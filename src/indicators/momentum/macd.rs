//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::indicators::trend::calculate_ema;
use crate::models::indicators::MacdIndicator;

pub const MACD_FAST_PERIOD: usize = 12;
pub const MACD_SLOW_PERIOD: usize = 26;

/// Ratio used in place of a 9-period EMA of the MACD line.
///
/// Only the latest MACD value is known, so the signal line is approximated
/// as a fixed fraction of it. This is not textbook MACD.
pub const SIGNAL_LINE_RATIO: f64 = 0.9;

/// Calculate MACD over a most-recent-first series.
///
/// MACD = EMA(12) - EMA(26)
/// Signal = MACD * 0.9
/// Histogram = MACD - Signal
pub fn calculate_macd(closes: &[f64]) -> Option<MacdIndicator> {
    if closes.len() < MACD_SLOW_PERIOD {
        return None;
    }

    let fast_ema = calculate_ema(closes, MACD_FAST_PERIOD)?;
    let slow_ema = calculate_ema(closes, MACD_SLOW_PERIOD)?;

    let macd_line = fast_ema - slow_ema;
    let signal_line = macd_line * SIGNAL_LINE_RATIO;
    let histogram = macd_line - signal_line;

    Some(MacdIndicator {
        line: math::round2(macd_line),
        signal: math::round2(signal_line),
        histogram: math::round2(histogram),
    })
}

//! Runs every calculator over one price history.

use crate::indicators::momentum::{calculate_macd, calculate_rsi_default};
use crate::indicators::trend::{calculate_ema, FAST_EMA_PERIOD, SLOW_EMA_PERIOD};
use crate::indicators::volatility::calculate_bollinger_bands_default;
use crate::models::indicators::IndicatorSet;

/// Compute the full indicator set for a most-recent-first series.
///
/// Calculators are independent; any of them may come back empty on a short
/// history without affecting the others.
pub fn calculate_indicator_set(closes: &[f64]) -> IndicatorSet {
    IndicatorSet {
        rsi: calculate_rsi_default(closes),
        ema_20: calculate_ema(closes, FAST_EMA_PERIOD),
        ema_50: calculate_ema(closes, SLOW_EMA_PERIOD),
        macd: calculate_macd(closes),
        bollinger_bands: calculate_bollinger_bands_default(closes),
    }
}

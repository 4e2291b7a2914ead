//! Bollinger Bands indicator

use crate::common::math;
use crate::models::indicators::BollingerBandsIndicator;

pub const DEFAULT_BOLLINGER_PERIOD: usize = 20;
pub const DEFAULT_BOLLINGER_STD_DEV: f64 = 2.0;

/// Calculate Bollinger Bands over the newest `period` closes
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * standard deviation)
/// Lower Band = Middle - (std_dev * standard deviation)
pub fn calculate_bollinger_bands(
    closes: &[f64],
    period: usize,
    std_dev: f64,
) -> Option<BollingerBandsIndicator> {
    if period == 0 || closes.len() < period {
        return None;
    }

    let recent = &closes[..period];
    let middle = math::mean(recent)?;
    let std = math::population_std_dev(recent)?;

    Some(BollingerBandsIndicator {
        upper: math::round2(middle + (std_dev * std)),
        middle: math::round2(middle),
        lower: math::round2(middle - (std_dev * std)),
    })
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn calculate_bollinger_bands_default(closes: &[f64]) -> Option<BollingerBandsIndicator> {
    calculate_bollinger_bands(closes, DEFAULT_BOLLINGER_PERIOD, DEFAULT_BOLLINGER_STD_DEV)
}

//! EMA (Exponential Moving Average) indicator

use crate::common::math;

pub const FAST_EMA_PERIOD: usize = 20;
pub const SLOW_EMA_PERIOD: usize = 50;

/// Calculate EMA for a specific period over a most-recent-first series.
///
/// The whole series is walked oldest to newest, seeded with the mean of the
/// oldest `period` closes. Rounded to two decimals.
pub fn calculate_ema(closes: &[f64], period: usize) -> Option<f64> {
    if period == 0 || closes.len() < period {
        return None;
    }

    let chronological: Vec<f64> = closes.iter().rev().copied().collect();
    math::ema(&chronological, period).map(math::round2)
}

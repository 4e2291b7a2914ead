//! Small numeric helpers shared by the indicator calculators.

/// Round to two decimal places, the precision every published reading uses.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Arithmetic mean. `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (divides by N, not N - 1).
pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    let avg = mean(values)?;
    let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}

/// Take the newest `count` prices of a most-recent-first series and return
/// them oldest to newest.
pub fn chronological_window(closes: &[f64], count: usize) -> Option<Vec<f64>> {
    if count == 0 || closes.len() < count {
        return None;
    }
    Some(closes[..count].iter().rev().copied().collect())
}

/// Seed-and-walk exponential moving average over an oldest-to-newest slice.
///
/// The seed is the simple mean of the first `period` values; each later value
/// is folded in with multiplier `2 / (period + 1)`.
pub fn ema(chronological: &[f64], period: usize) -> Option<f64> {
    if period == 0 || chronological.len() < period {
        return None;
    }

    let multiplier = 2.0 / (period as f64 + 1.0);
    let seed = mean(&chronological[..period])?;

    Some(
        chronological[period..]
            .iter()
            .fold(seed, |ema, price| (price - ema) * multiplier + ema),
    )
}

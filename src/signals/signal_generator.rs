use crate::models::indicators::{BollingerBandsIndicator, IndicatorSet, MacdIndicator};
use crate::models::signal::Signal;

/// RSI levels that mark oversold/overbought conditions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RsiThresholds {
    pub oversold: f64,
    pub overbought: f64,
}

impl Default for RsiThresholds {
    fn default() -> Self {
        Self {
            oversold: 30.0,
            overbought: 70.0,
        }
    }
}

/// Maps indicator readings and the latest price to discrete signals.
#[derive(Debug, Clone, Default)]
pub struct SignalGenerator {
    thresholds: RsiThresholds,
}

impl SignalGenerator {
    pub fn new(thresholds: RsiThresholds) -> Self {
        Self { thresholds }
    }

    /// Emission order is fixed: RSI, EMA cross, MACD, Bollinger.
    pub fn generate_signals(&self, indicators: &IndicatorSet, price: f64) -> Vec<Signal> {
        let mut signals = Vec::new();

        if let Some(signal) = indicators.rsi.and_then(|rsi| self.analyze_rsi(rsi)) {
            signals.push(signal);
        }

        if let (Some(fast), Some(slow)) = (indicators.ema_20, indicators.ema_50) {
            signals.push(Self::analyze_ema_cross(fast, slow));
        }

        if let Some(macd) = &indicators.macd {
            signals.push(Self::analyze_macd(macd));
        }

        if let Some(signal) = indicators
            .bollinger_bands
            .as_ref()
            .and_then(|bands| Self::analyze_bollinger(bands, price))
        {
            signals.push(signal);
        }

        signals
    }

    fn analyze_rsi(&self, rsi: f64) -> Option<Signal> {
        if rsi < self.thresholds.oversold {
            Some(Signal::RsiOversold)
        } else if rsi > self.thresholds.overbought {
            Some(Signal::RsiOverbought)
        } else {
            None
        }
    }

    fn analyze_ema_cross(fast: f64, slow: f64) -> Signal {
        if fast > slow {
            Signal::BullishEmaCross
        } else {
            Signal::BearishEmaCross
        }
    }

    fn analyze_macd(macd: &MacdIndicator) -> Signal {
        if macd.line > macd.signal {
            Signal::MacdBullish
        } else {
            Signal::MacdBearish
        }
    }

    fn analyze_bollinger(bands: &BollingerBandsIndicator, price: f64) -> Option<Signal> {
        if price > bands.upper {
            Some(Signal::PriceAboveUpperBb)
        } else if price < bands.lower {
            Some(Signal::PriceBelowLowerBb)
        } else {
            None
        }
    }
}

//! End-to-end scenarios over indicators, signals and scoring

use market_analyst::indicators::calculate_indicator_set;
use market_analyst::models::{
    BollingerBandsIndicator, IndicatorSet, MacdIndicator, Recommendation, Signal,
};
use market_analyst::signals::{score_signals, SignalGenerator};

use crate::fixtures::rising_closes;

#[test]
fn test_fully_bullish_indicator_set() {
    let indicators = IndicatorSet::new()
        .with_rsi(25.0)
        .with_emas(105.0, 100.0)
        .with_macd(MacdIndicator {
            line: 1.2,
            signal: 1.08,
            histogram: 0.12,
        })
        .with_bollinger_bands(BollingerBandsIndicator {
            upper: 110.0,
            middle: 100.0,
            lower: 90.0,
        });

    let signals = SignalGenerator::default().generate_signals(&indicators, 88.0);
    assert_eq!(
        signals,
        vec![
            Signal::RsiOversold,
            Signal::BullishEmaCross,
            Signal::MacdBullish,
            Signal::PriceBelowLowerBb,
        ]
    );
    assert_eq!(score_signals(&signals), (Recommendation::Buy, 1.0));
}

#[test]
fn test_short_history_defaults_to_hold() {
    let closes = rising_closes(12, 50.0, 0.5);
    let indicators = calculate_indicator_set(&closes);
    assert!(indicators.rsi.is_none());
    assert!(indicators.bollinger_bands.is_none());

    let signals = SignalGenerator::default().generate_signals(&indicators, closes[0]);
    assert!(signals.is_empty());
    assert_eq!(score_signals(&signals), (Recommendation::Hold, 0.0));
}

#[test]
fn test_monotonic_uptrend() {
    let closes = rising_closes(100, 1.0, 1.0);
    let indicators = calculate_indicator_set(&closes);
    assert!(indicators.ema_20.unwrap() > indicators.ema_50.unwrap());

    let signals = SignalGenerator::default().generate_signals(&indicators, closes[0]);
    assert!(signals.contains(&Signal::BullishEmaCross));
    // RSI pins at 100 and price stays inside the bands
    assert_eq!(
        signals,
        vec![Signal::RsiOverbought, Signal::BullishEmaCross, Signal::MacdBullish]
    );
    assert_eq!(score_signals(&signals), (Recommendation::Hold, 0.33));
}

#[test]
fn test_daily_summary_fixture() {
    // AAPL: neutral RSI, EMA20 above EMA50, no MACD or band readings
    let indicators = IndicatorSet::new().with_rsi(42.5).with_emas(178.20, 172.80);

    let signals = SignalGenerator::default().generate_signals(&indicators, 175.50);
    assert_eq!(signals, vec![Signal::BullishEmaCross]);
    assert_eq!(score_signals(&signals), (Recommendation::Buy, 1.0));
}

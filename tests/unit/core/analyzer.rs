//! Unit tests for the analysis orchestrator

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use market_analyst::core::analyzer::{normalize_symbol, order_bars, MarketAnalyzer};
use market_analyst::error::{AnalysisError, ProviderError};
use market_analyst::indicators::calculate_indicator_set;
use market_analyst::models::{DailySeries, Recommendation, Signal};
use market_analyst::services::{DailySeriesProvider, InMemorySeriesProvider};
use market_analyst::signals::{RsiThresholds, SignalGenerator};

use crate::fixtures::{choppy_closes, daily_series, newest_first};

struct CountingProvider {
    calls: AtomicUsize,
}

#[async_trait]
impl DailySeriesProvider for CountingProvider {
    async fn fetch_daily_series(&self, _symbol: &str) -> Result<DailySeries, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ProviderError::NoData)
    }
}

fn analyzer_with(provider: InMemorySeriesProvider) -> MarketAnalyzer {
    MarketAnalyzer::new(Arc::new(provider))
}

#[tokio::test]
async fn test_empty_symbol_fails_before_fetch() {
    let provider = Arc::new(CountingProvider {
        calls: AtomicUsize::new(0),
    });
    let analyzer = MarketAnalyzer::new(provider.clone());

    for symbol in ["", "   "] {
        let err = analyzer.analyze(symbol).await.unwrap_err();
        assert_eq!(err, AnalysisError::InvalidInput);
        assert_eq!(err.to_string(), "Symbol required");
    }
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);

    let err = analyzer.analyze("AAPL").await.unwrap_err();
    assert_eq!(err, AnalysisError::DataUnavailable(ProviderError::NoData));
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_provider_errors_surface_verbatim() {
    let analyzer = analyzer_with(
        InMemorySeriesProvider::new().with_error("IBM", ProviderError::RateLimited),
    );

    let err = analyzer.analyze("IBM").await.unwrap_err();
    assert_eq!(err, AnalysisError::DataUnavailable(ProviderError::RateLimited));
    assert_eq!(err.to_string(), "API rate limit reached");

    let err = analyzer.analyze("XYZ").await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid symbol: XYZ");
}

#[tokio::test]
async fn test_symbol_is_normalized() {
    let analyzer = analyzer_with(
        InMemorySeriesProvider::new().with_series("AAPL", daily_series(&choppy_closes(30))),
    );

    let result = analyzer.analyze("  aapl ").await.unwrap();
    assert_eq!(result.symbol, "AAPL");
}

#[tokio::test]
async fn test_latest_bar_comes_from_newest_date() {
    let series = DailySeries::new()
        .push("2024-03-01", 10.0, 100)
        .push("2024-03-05", 12.5, 500)
        .push("2024-03-04", 11.0, 400);
    let analyzer = analyzer_with(InMemorySeriesProvider::new().with_series("T", series));

    let result = analyzer.analyze("T").await.unwrap();
    assert_eq!(result.date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    assert_eq!(result.price, 12.5);
    assert_eq!(result.volume, 500);
    assert!(result.signals.is_empty());
    assert_eq!(result.recommendation, Recommendation::Hold);
    assert_eq!(result.confidence, 0.0);
}

#[tokio::test]
async fn test_full_history_computes_every_indicator() {
    let chronological = choppy_closes(120);
    let analyzer = analyzer_with(
        InMemorySeriesProvider::new().with_series("NVDA", daily_series(&chronological)),
    );

    let result = analyzer.analyze("NVDA").await.unwrap();
    assert!(result.indicators.missing().is_empty());
    assert!(!result.signals.is_empty());
    assert!((0.0..=1.0).contains(&result.confidence));
    assert_eq!(result.price, *chronological.last().unwrap());
}

#[test]
fn test_history_is_capped() {
    let chronological = choppy_closes(150);
    let analyzer = analyzer_with(InMemorySeriesProvider::new()).with_history_limit(100);

    let result = analyzer
        .analyze_series("SPY", daily_series(&chronological))
        .unwrap();
    let newest_hundred = newest_first(&chronological[50..]);
    assert_eq!(result.indicators, calculate_indicator_set(&newest_hundred));
}

#[test]
fn test_custom_signal_generator() {
    let generator = SignalGenerator::new(RsiThresholds {
        oversold: 101.0,
        overbought: 101.0,
    });
    let analyzer = analyzer_with(InMemorySeriesProvider::new()).with_signal_generator(generator);

    let result = analyzer
        .analyze_series("QQQ", daily_series(&choppy_closes(40)))
        .unwrap();
    assert_eq!(result.signals.first(), Some(&Signal::RsiOversold));
}

#[test]
fn test_order_bars_validation() {
    let mismatched = DailySeries {
        dates: vec!["2024-01-01".to_string()],
        closes: vec![1.0, 2.0],
        volumes: vec![1],
    };
    assert!(matches!(
        order_bars(mismatched, 100),
        Err(ProviderError::MalformedPayload(_))
    ));

    assert_eq!(order_bars(DailySeries::new(), 100), Err(ProviderError::NoData));

    let bad_date = DailySeries::new().push("01/02/2024", 1.0, 1);
    assert!(matches!(
        order_bars(bad_date, 100),
        Err(ProviderError::MalformedPayload(_))
    ));

    let bad_close = DailySeries::new().push("2024-01-02", 0.0, 1);
    assert!(matches!(
        order_bars(bad_close, 100),
        Err(ProviderError::MalformedPayload(_))
    ));

    let nan_close = DailySeries::new().push("2024-01-02", f64::NAN, 1);
    assert!(matches!(
        order_bars(nan_close, 100),
        Err(ProviderError::MalformedPayload(_))
    ));
}

#[test]
fn test_result_json_shape() {
    let analyzer = analyzer_with(InMemorySeriesProvider::new());
    let result = analyzer
        .analyze_series("tsla", daily_series(&[200.0, 201.0, 199.5]))
        .unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["symbol"], "TSLA");
    assert_eq!(json["date"], "2024-01-03");
    assert_eq!(json["price"], 199.5);
    assert_eq!(json["volume"], 1002);
    assert!(json["indicators"]["rsi"].is_null());
    assert_eq!(
        json["indicators"]["macd"],
        serde_json::json!({ "line": null, "signal": null, "histogram": null })
    );
    assert_eq!(
        json["indicators"]["bollinger_bands"],
        serde_json::json!({ "upper": null, "middle": null, "lower": null })
    );
    assert_eq!(json["signals"], serde_json::json!([]));
    assert_eq!(json["recommendation"], "HOLD");
    assert_eq!(json["confidence"], 0.0);
    assert!(json["timestamp"].is_string());
}

#[test]
fn test_normalize_symbol() {
    assert_eq!(normalize_symbol(" brk.b "), Ok("BRK.B".to_string()));
    assert_eq!(normalize_symbol(""), Err(AnalysisError::InvalidInput));
}

#[test]
fn test_short_history_indicators_round_trip() {
    let analyzer = analyzer_with(InMemorySeriesProvider::new());
    let result = analyzer
        .analyze_series("X", daily_series(&[10.0, 11.0]))
        .unwrap();

    let json = serde_json::to_string(&result.indicators).unwrap();
    assert_eq!(
        json,
        r#"{"rsi":null,"ema_20":null,"ema_50":null,"macd":{"line":null,"signal":null,"histogram":null},"bollinger_bands":{"upper":null,"middle":null,"lower":null}}"#
    );
    let parsed: market_analyst::models::IndicatorSet = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, result.indicators);
}

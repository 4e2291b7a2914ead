//! Unit tests for the combined indicator run

use market_analyst::indicators::calculate_indicator_set;

use crate::fixtures::{choppy_closes, newest_first, rising_closes};

#[test]
fn test_short_history_leaves_everything_absent() {
    let set = calculate_indicator_set(&rising_closes(10, 100.0, 1.0));
    assert!(set.rsi.is_none());
    assert!(set.ema_20.is_none());
    assert!(set.ema_50.is_none());
    assert!(set.macd.is_none());
    assert!(set.bollinger_bands.is_none());
    assert_eq!(set.missing().len(), 5);
}

#[test]
fn test_partial_history() {
    // 30 closes: RSI, EMA20, MACD and bands but no EMA50
    let set = calculate_indicator_set(&newest_first(&choppy_closes(30)));
    assert!(set.rsi.is_some());
    assert!(set.ema_20.is_some());
    assert!(set.ema_50.is_none());
    assert!(set.macd.is_some());
    assert!(set.bollinger_bands.is_some());
    assert_eq!(set.missing(), vec!["ema_50"]);
}

#[test]
fn test_full_history() {
    let set = calculate_indicator_set(&newest_first(&choppy_closes(100)));
    assert!(set.missing().is_empty());
}

#[test]
fn test_absent_fields_serialize_as_null() {
    let set = calculate_indicator_set(&rising_closes(16, 100.0, 1.0));
    let json = serde_json::to_value(&set).unwrap();

    assert_eq!(json["rsi"], 100.0);
    assert!(json["ema_20"].is_null());
    assert!(json["ema_50"].is_null());
    assert!(json["macd"].is_null());
    assert!(json["bollinger_bands"].is_null());
}

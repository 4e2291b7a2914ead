//! Unit tests for the in-memory provider

use market_analyst::error::ProviderError;
use market_analyst::services::{DailySeriesProvider, InMemorySeriesProvider};

use crate::fixtures::daily_series;

#[tokio::test]
async fn test_lookup_is_case_insensitive() {
    let series = daily_series(&[1.0, 2.0, 3.0]);
    let provider = InMemorySeriesProvider::new().with_series("msft", series.clone());

    assert_eq!(provider.fetch_daily_series("MSFT").await, Ok(series.clone()));
    assert_eq!(provider.fetch_daily_series("msft").await, Ok(series));
}

#[tokio::test]
async fn test_configured_errors_are_returned() {
    let provider = InMemorySeriesProvider::new().with_error("IBM", ProviderError::RateLimited);
    assert_eq!(
        provider.fetch_daily_series("IBM").await,
        Err(ProviderError::RateLimited)
    );
}

#[tokio::test]
async fn test_unknown_symbol_is_invalid() {
    let provider = InMemorySeriesProvider::new();
    assert_eq!(
        provider.fetch_daily_series("ZZZZ").await,
        Err(ProviderError::InvalidSymbol("ZZZZ".to_string()))
    );
}

//! Alpha Vantage `TIME_SERIES_DAILY` provider

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::config::AlphaVantageConfig;
use crate::error::ProviderError;
use crate::models::series::DailySeries;
use crate::services::market_data::DailySeriesProvider;

const TIME_SERIES_KEY: &str = "Time Series (Daily)";
const CLOSE_KEY: &str = "4. close";
const VOLUME_KEY: &str = "5. volume";

pub struct AlphaVantageClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl AlphaVantageClient {
    pub fn new(config: &AlphaVantageConfig, api_key: impl Into<String>) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self::with_client(config.base_url.clone(), api_key, client))
    }

    pub fn with_client(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        client: reqwest::Client,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl DailySeriesProvider for AlphaVantageClient {
    async fn fetch_daily_series(&self, symbol: &str) -> Result<DailySeries, ProviderError> {
        let url = format!("{}/query", self.base_url.trim_end_matches('/'));
        debug!(symbol = %symbol, url = %url, "Requesting daily series");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("function", "TIME_SERIES_DAILY"),
                ("symbol", symbol),
                ("apikey", self.api_key.as_str()),
                ("outputsize", "compact"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: Value = response
            .json()
            .await
            .map_err(|e| ProviderError::MalformedPayload(e.to_string()))?;

        parse_daily_series(symbol, &body)
    }
}

/// Convert a `TIME_SERIES_DAILY` response body into a newest-first series.
///
/// Error bodies are checked first: `Error Message` means an unknown symbol,
/// `Note`/`Information` are the throttling notices.
pub fn parse_daily_series(symbol: &str, body: &Value) -> Result<DailySeries, ProviderError> {
    if body.get("Error Message").is_some() {
        return Err(ProviderError::InvalidSymbol(symbol.to_string()));
    }
    if body.get("Note").is_some() || body.get("Information").is_some() {
        return Err(ProviderError::RateLimited);
    }

    let time_series = body
        .get(TIME_SERIES_KEY)
        .and_then(Value::as_object)
        .ok_or(ProviderError::NoData)?;

    let mut rows = time_series
        .iter()
        .map(|(date, entry)| {
            let close = numeric_field(entry, CLOSE_KEY)
                .and_then(|raw| raw.parse::<f64>().ok())
                .ok_or_else(|| malformed(date, CLOSE_KEY))?;
            let volume = numeric_field(entry, VOLUME_KEY)
                .and_then(|raw| raw.parse::<u64>().ok())
                .ok_or_else(|| malformed(date, VOLUME_KEY))?;
            Ok::<_, ProviderError>((date.clone(), close, volume))
        })
        .collect::<Result<Vec<_>, _>>()?;

    // ISO dates sort lexicographically
    rows.sort_by(|a, b| b.0.cmp(&a.0));

    Ok(rows
        .into_iter()
        .fold(DailySeries::new(), |series, (date, close, volume)| {
            series.push(date, close, volume)
        }))
}

fn numeric_field(entry: &Value, key: &str) -> Option<String> {
    match entry.get(key)? {
        Value::String(raw) => Some(raw.trim().to_string()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn malformed(date: &str, key: &str) -> ProviderError {
    ProviderError::MalformedPayload(format!("missing or invalid '{}' for {}", key, date))
}


//! Analysis orchestrator: fetch, order, compute, score.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info, warn};

use crate::config::DEFAULT_HISTORY_LIMIT;
use crate::error::{AnalysisError, ProviderError};
use crate::indicators::calculate_indicator_set;
use crate::models::analysis::AnalysisResult;
use crate::models::series::{DailyBar, DailySeries};
use crate::services::market_data::DailySeriesProvider;
use crate::signals::{score_signals, SignalGenerator};

pub struct MarketAnalyzer {
    provider: Arc<dyn DailySeriesProvider>,
    generator: SignalGenerator,
    history_limit: usize,
}

impl MarketAnalyzer {
    pub fn new(provider: Arc<dyn DailySeriesProvider>) -> Self {
        Self {
            provider,
            generator: SignalGenerator::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Cap on how many of the newest trading days feed the calculators.
    pub fn with_history_limit(mut self, history_limit: usize) -> Self {
        self.history_limit = history_limit.max(1);
        self
    }

    pub fn with_signal_generator(mut self, generator: SignalGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// Fetch the daily series for `symbol` and analyse it.
    ///
    /// An empty symbol fails before the provider is called. Provider errors
    /// are returned unchanged inside [`AnalysisError::DataUnavailable`].
    pub async fn analyze(&self, symbol: &str) -> Result<AnalysisResult, AnalysisError> {
        let symbol = normalize_symbol(symbol)?;

        let series = self
            .provider
            .fetch_daily_series(&symbol)
            .await
            .map_err(|e| {
                warn!(symbol = %symbol, error = %e, "Market data unavailable");
                e
            })?;

        self.analyze_series(&symbol, series)
    }

    /// Analyse a series the caller already holds.
    pub fn analyze_series(
        &self,
        symbol: &str,
        series: DailySeries,
    ) -> Result<AnalysisResult, AnalysisError> {
        let symbol = normalize_symbol(symbol)?;
        let bars = order_bars(series, self.history_limit)?;

        // order_bars guarantees at least one bar
        let latest = bars[0];
        let closes: Vec<f64> = bars.iter().map(|bar| bar.close).collect();

        let indicators = calculate_indicator_set(&closes);
        let missing = indicators.missing();
        if !missing.is_empty() {
            debug!(
                symbol = %symbol,
                history = closes.len(),
                skipped = ?missing,
                "Insufficient history for some indicators"
            );
        }

        let signals = self.generator.generate_signals(&indicators, latest.close);
        let (recommendation, confidence) = score_signals(&signals);

        info!(
            symbol = %symbol,
            date = %latest.date,
            price = latest.close,
            signals = signals.len(),
            recommendation = %recommendation,
            confidence = confidence,
            "Analysis complete"
        );

        Ok(AnalysisResult {
            symbol,
            date: latest.date,
            price: latest.close,
            volume: latest.volume,
            indicators,
            signals,
            recommendation,
            confidence,
            timestamp: Utc::now(),
        })
    }
}

/// Trim and upper-case a ticker. Empty input is [`AnalysisError::InvalidInput`].
pub fn normalize_symbol(symbol: &str) -> Result<String, AnalysisError> {
    let trimmed = symbol.trim();
    if trimmed.is_empty() {
        return Err(AnalysisError::InvalidInput);
    }
    Ok(trimmed.to_uppercase())
}

/// Validate a raw series and return its newest `limit` bars, newest first.
pub fn order_bars(series: DailySeries, limit: usize) -> Result<Vec<DailyBar>, ProviderError> {
    let DailySeries {
        dates,
        closes,
        volumes,
    } = series;

    if dates.len() != closes.len() || dates.len() != volumes.len() {
        return Err(ProviderError::MalformedPayload(format!(
            "series lengths differ: {} dates, {} closes, {} volumes",
            dates.len(),
            closes.len(),
            volumes.len()
        )));
    }
    if dates.is_empty() {
        return Err(ProviderError::NoData);
    }

    let mut bars = dates
        .iter()
        .zip(closes)
        .zip(volumes)
        .map(|((date, close), volume)| {
            let date = date.trim().parse::<NaiveDate>().map_err(|_| {
                ProviderError::MalformedPayload(format!("invalid date '{}'", date))
            })?;
            if !close.is_finite() || close <= 0.0 {
                return Err(ProviderError::MalformedPayload(format!(
                    "invalid close {} on {}",
                    close, date
                )));
            }
            Ok::<_, ProviderError>(DailyBar {
                date,
                close,
                volume,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    bars.sort_by(|a, b| b.date.cmp(&a.date));
    bars.truncate(limit.max(1));
    Ok(bars)
}

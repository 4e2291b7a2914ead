//! Market data provider interface.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::models::series::DailySeries;

/// Source of daily closing-price histories.
#[async_trait]
pub trait DailySeriesProvider: Send + Sync {
    /// Fetch the daily series for a symbol
    async fn fetch_daily_series(&self, symbol: &str) -> Result<DailySeries, ProviderError>;
}

/// Provider backed by fixed responses, keyed by upper-cased symbol.
///
/// Unknown symbols report [`ProviderError::InvalidSymbol`].
#[derive(Debug, Clone, Default)]
pub struct InMemorySeriesProvider {
    responses: HashMap<String, Result<DailySeries, ProviderError>>,
}

impl InMemorySeriesProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, symbol: &str, series: DailySeries) -> Self {
        self.responses.insert(symbol.to_uppercase(), Ok(series));
        self
    }

    pub fn with_error(mut self, symbol: &str, error: ProviderError) -> Self {
        self.responses.insert(symbol.to_uppercase(), Err(error));
        self
    }
}

#[async_trait]
impl DailySeriesProvider for InMemorySeriesProvider {
    async fn fetch_daily_series(&self, symbol: &str) -> Result<DailySeries, ProviderError> {
        self.responses
            .get(&symbol.to_uppercase())
            .cloned()
            .unwrap_or_else(|| Err(ProviderError::InvalidSymbol(symbol.to_string())))
    }
}

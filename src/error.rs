use thiserror::Error;

/// Conditions reported by a market-data provider.
///
/// These are surfaced to the caller as-is; nothing in the crate retries them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),
    #[error("API rate limit reached")]
    RateLimited,
    #[error("No data available")]
    NoData,
    #[error("Malformed provider payload: {0}")]
    MalformedPayload(String),
    #[error("Request failed: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value.to_string())
    }
}

/// Error type surfaced by [`crate::MarketAnalyzer`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Symbol required")]
    InvalidInput,
    #[error(transparent)]
    DataUnavailable(#[from] ProviderError),
}

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::indicators::IndicatorSet;
use super::signal::{Recommendation, Signal};

/// Outcome of one analysis request. Built once by the analyzer and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub symbol: String,
    /// Trading day of the most recent close.
    pub date: NaiveDate,
    pub price: f64,
    pub volume: u64,
    pub indicators: IndicatorSet,
    pub signals: Vec<Signal>,
    pub recommendation: Recommendation,
    pub confidence: f64,
    pub timestamp: DateTime<Utc>,
}

/// Failure body returned to callers: `{ "error": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

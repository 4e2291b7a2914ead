use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raw daily series as returned by a market-data provider.
///
/// The three vectors are parallel. Providers are not required to order them;
/// the analyzer sorts by date before computing anything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailySeries {
    pub dates: Vec<String>,
    pub closes: Vec<f64>,
    pub volumes: Vec<u64>,
}

impl DailySeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, date: impl Into<String>, close: f64, volume: u64) -> Self {
        self.dates.push(date.into());
        self.closes.push(close);
        self.volumes.push(volume);
        self
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// One validated trading day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyBar {
    pub date: NaiveDate,
    pub close: f64,
    pub volume: u64,
}

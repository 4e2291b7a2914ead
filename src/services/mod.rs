//! External market-data collaborators.

pub mod alpha_vantage;
pub mod market_data;

pub use alpha_vantage::AlphaVantageClient;
pub use market_data::{DailySeriesProvider, InMemorySeriesProvider};

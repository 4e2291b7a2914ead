//! Technical-analysis engine for daily equity price histories.
//!
//! Turns a ticker's closing prices into RSI, EMA, MACD and Bollinger readings,
//! derives discrete trading signals from them and scores the signals into a
//! BUY/SELL/HOLD recommendation.

pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;

pub use crate::core::analyzer::MarketAnalyzer;
pub use error::{AnalysisError, ProviderError};
pub use models::{AnalysisResult, IndicatorSet, Recommendation, Signal};

//! Shared data models spanning the engine layers.

pub mod analysis;
pub mod indicators;
pub mod series;
pub mod signal;

pub use analysis::{AnalysisResult, ErrorResponse};
pub use indicators::{BollingerBandsIndicator, IndicatorSet, MacdIndicator};
pub use series::{DailyBar, DailySeries};
pub use signal::{Polarity, Recommendation, Signal};

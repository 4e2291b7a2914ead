//! Indicator calculators.
//!
//! Every calculator takes closing prices ordered most-recent-first
//! (`closes[0]` is the latest close) and returns `None` when the history is
//! too short for its period.

pub mod snapshot;

pub mod momentum;
pub mod trend;
pub mod volatility;

pub use snapshot::*;

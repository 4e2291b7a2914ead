//! Signal derivation and scoring.

pub mod scoring;
pub mod signal_generator;

pub use scoring::*;
pub use signal_generator::*;

//! Core application primitives (analyzer, HTTP surface)

pub mod analyzer;
pub mod http;

pub use analyzer::*;
pub use http::*;

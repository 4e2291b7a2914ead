//! Environment-driven configuration.

use std::env;
use std::str::FromStr;

use tracing::warn;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_ALPHA_VANTAGE_URL: &str = "https://www.alphavantage.co";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Alpha Vantage's compact output covers the last 100 trading days.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Deployment environment name (`ENVIRONMENT`), `sandbox` when unset.
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlphaVantageConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for AlphaVantageConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_ALPHA_VANTAGE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub port: u16,
    pub history_limit: usize,
    pub alpha_vantage: AlphaVantageConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            history_limit: DEFAULT_HISTORY_LIMIT,
            alpha_vantage: AlphaVantageConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Read settings from the process environment. Call `dotenvy::dotenv()`
    /// first if `.env` should be honoured.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparsable values fall back to
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("ALPHA_VANTAGE_API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        Self {
            port: parse_or(&lookup, "PORT", DEFAULT_PORT),
            history_limit: parse_or(&lookup, "HISTORY_LIMIT", DEFAULT_HISTORY_LIMIT).max(1),
            alpha_vantage: AlphaVantageConfig {
                api_key,
                base_url: lookup("ALPHA_VANTAGE_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_ALPHA_VANTAGE_URL.to_string()),
                timeout_secs: parse_or(&lookup, "ALPHA_VANTAGE_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
            },
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Copy + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key = key, value = %raw, default = %default, "Ignoring unparsable setting");
            default
        }),
        None => default,
    }
}

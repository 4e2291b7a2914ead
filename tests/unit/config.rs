//! Unit tests for environment configuration

use std::collections::HashMap;

use market_analyst::config::{ServiceConfig, DEFAULT_ALPHA_VANTAGE_URL};

fn config_from(pairs: &[(&str, &str)]) -> ServiceConfig {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ServiceConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_defaults() {
    let config = config_from(&[]);
    assert_eq!(config, ServiceConfig::default());
    assert_eq!(config.port, 8080);
    assert_eq!(config.history_limit, 100);
    assert_eq!(config.alpha_vantage.api_key, None);
    assert_eq!(config.alpha_vantage.base_url, DEFAULT_ALPHA_VANTAGE_URL);
    assert_eq!(config.alpha_vantage.timeout_secs, 10);
}

#[test]
fn test_overrides() {
    let config = config_from(&[
        ("PORT", "9090"),
        ("HISTORY_LIMIT", "60"),
        ("ALPHA_VANTAGE_API_KEY", " demo "),
        ("ALPHA_VANTAGE_BASE_URL", "http://localhost:1234"),
        ("ALPHA_VANTAGE_TIMEOUT_SECS", "3"),
    ]);
    assert_eq!(config.port, 9090);
    assert_eq!(config.history_limit, 60);
    assert_eq!(config.alpha_vantage.api_key.as_deref(), Some("demo"));
    assert_eq!(config.alpha_vantage.base_url, "http://localhost:1234");
    assert_eq!(config.alpha_vantage.timeout_secs, 3);
}

#[test]
fn test_invalid_values_fall_back() {
    let config = config_from(&[
        ("PORT", "not-a-port"),
        ("HISTORY_LIMIT", "0"),
        ("ALPHA_VANTAGE_API_KEY", "   "),
    ]);
    assert_eq!(config.port, 8080);
    assert_eq!(config.history_limit, 1);
    assert_eq!(config.alpha_vantage.api_key, None);
}

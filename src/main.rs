use std::process::ExitCode;

use dotenvy::dotenv;
use market_analyst::config::ServiceConfig;
use market_analyst::core::http::build_analyzer;
use market_analyst::logging;
use market_analyst::models::ErrorResponse;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    logging::init_logging();

    let symbols: Vec<String> = std::env::args().skip(1).collect();
    if symbols.is_empty() {
        eprintln!("usage: market-analyst SYMBOL [SYMBOL...]");
        return ExitCode::from(2);
    }

    let config = ServiceConfig::from_env();
    let analyzer = match build_analyzer(&config) {
        Ok(Some(analyzer)) => analyzer,
        Ok(None) => {
            print_json(&ErrorResponse::new("API key not configured"));
            return ExitCode::FAILURE;
        }
        Err(e) => {
            error!(error = %e, "Failed to build market data client");
            return ExitCode::FAILURE;
        }
    };

    let mut failed = false;
    for symbol in &symbols {
        match analyzer.analyze(symbol).await {
            Ok(result) => print_json(&result),
            Err(e) => {
                failed = true;
                print_json(&ErrorResponse::new(e.to_string()));
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => error!(error = %e, "Failed to serialize output"),
    }
}

//! HTTP endpoint server using Axum

use axum::{
    body::Bytes,
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, warn, Level};

use crate::config::ServiceConfig;
use crate::core::analyzer::MarketAnalyzer;
use crate::metrics::Metrics;
use crate::models::analysis::ErrorResponse;
use crate::services::alpha_vantage::AlphaVantageClient;

#[derive(Clone)]
pub struct AppState {
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    /// `None` when no market-data API key is configured.
    pub analyzer: Option<Arc<MarketAnalyzer>>,
}

const HEALTHY_STATUS: &str = "healthy";

#[derive(Debug, Default, Deserialize)]
struct AnalyzeRequest {
    symbol: Option<String>,
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": HEALTHY_STATUS,
        "uptime_seconds": uptime_seconds,
        "service": "market-analyst",
        "analyzer_configured": state.analyzer.is_some()
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

/// Analyse the symbol named in a `{"symbol": "..."}` body.
///
/// A missing or unreadable body is treated as an empty symbol.
async fn analyze_from_body(State(state): State<AppState>, body: Bytes) -> Response {
    let request: AnalyzeRequest = serde_json::from_slice(&body).unwrap_or_default();
    run_analysis(&state, request.symbol.as_deref().unwrap_or_default()).await
}

async fn analyze_from_path(State(state): State<AppState>, Path(symbol): Path<String>) -> Response {
    run_analysis(&state, &symbol).await
}

async fn run_analysis(state: &AppState, symbol: &str) -> Response {
    let Some(analyzer) = state.analyzer.as_ref() else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("API key not configured")),
        )
            .into_response();
    };

    match analyzer.analyze(symbol).await {
        Ok(result) => {
            state.metrics.record_recommendation(result.recommendation);
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(e) => {
            state.metrics.record_failure();
            warn!(symbol = %symbol, error = %e, "Analysis failed");
            (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(e.to_string()))).into_response()
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/analyze", post(analyze_from_body))
        .route("/api/analyze/{symbol}", get(analyze_from_path))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Build the analyzer for a configuration, `None` without an API key.
pub fn build_analyzer(
    config: &ServiceConfig,
) -> Result<Option<Arc<MarketAnalyzer>>, Box<dyn std::error::Error>> {
    let Some(api_key) = config.alpha_vantage.api_key.as_deref() else {
        return Ok(None);
    };

    let client = AlphaVantageClient::new(&config.alpha_vantage, api_key)?;
    let analyzer = MarketAnalyzer::new(Arc::new(client)).with_history_limit(config.history_limit);
    Ok(Some(Arc::new(analyzer)))
}

pub async fn start_server(config: ServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let analyzer = build_analyzer(&config)?;
    if analyzer.is_none() {
        warn!("ALPHA_VANTAGE_API_KEY not set - analysis requests will fail");
    }

    let state = AppState {
        metrics,
        start_time: Arc::new(Instant::now()),
        analyzer,
    };
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    info!(port = config.port, "HTTP server listening on port {}", config.port);
    axum::serve(listener, app).await?;

    Ok(())
}

//! Health check handlers

use crate::AppState;
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Serialize)]
pub struct ReadyResponse {
    pub status: String,
    pub checks: HealthChecks,
}

#[derive(Serialize)]
pub struct HealthChecks {
    pub engines: CheckResult,
}

#[derive(Serialize)]
pub struct CheckResult {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

/// Liveness probe - always returns healthy if server is running
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

/// Readiness probe. The engines hold no external dependencies; a trivial
/// pass through each confirms they are wired.
pub async fn ready(State(state): State<AppState>) -> Json<ReadyResponse> {
    let start = std::time::Instant::now();

    let analytics = state.analyzer.analyze("");
    let graph = state.synthesizer.synthesize(&Default::default());

    let up = analytics.metrics.word_count == 0 && graph.node_count() >= 1;

    let engines = CheckResult {
        status: if up { "up" } else { "down" }.to_string(),
        latency_ms: Some(start.elapsed().as_millis() as u64),
    };

    Json(ReadyResponse {
        status: if up { "ready" } else { "not_ready" }.to_string(),
        checks: HealthChecks { engines },
    })
}

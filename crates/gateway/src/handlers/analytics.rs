//! Document analytics handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use validator::Validate;

use crate::AppState;
use paperscope_analytics::DocumentAnalytics;
use paperscope_common::{
    errors::{AppError, Result},
    metrics,
};

/// Text analysis request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeTextRequest {
    /// Raw extracted document text. May be empty; the engine degrades to
    /// zeroed metrics instead of failing.
    pub text: String,

    /// Original upload name, for log correlation only
    #[validate(length(max = 255))]
    pub file_name: Option<String>,
}

/// Text analysis response
#[derive(Serialize)]
pub struct AnalyzeTextResponse {
    #[serde(flatten)]
    pub analytics: DocumentAnalytics,

    pub processing_time_ms: u64,
}

/// Analyze raw document text into metrics, top terms, and the citation
/// timeline.
pub async fn analyze_text(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeTextRequest>,
) -> Result<Json<AnalyzeTextResponse>> {
    let start = Instant::now();

    request.validate().map_err(|e| AppError::Validation {
        message: e.to_string(),
        field: None,
    })?;

    // The upstream parser enforces the same cap; enforce it here as well so
    // the engine contract stays unconditional.
    let limit = state.config.analytics.max_text_bytes;
    if request.text.len() > limit {
        return Err(AppError::PayloadTooLarge {
            size: request.text.len(),
            limit,
        });
    }

    let analytics = state.analyzer.analyze(&request.text);

    let processing_time_ms = start.elapsed().as_millis() as u64;
    metrics::record_analysis(start.elapsed().as_secs_f64(), analytics.metrics.word_count);

    tracing::info!(
        file_name = request.file_name.as_deref().unwrap_or("<unnamed>"),
        input_len = request.text.len(),
        word_count = analytics.metrics.word_count,
        sentence_count = analytics.metrics.sentence_count,
        citation_count = analytics.metrics.citation_count,
        latency_ms = processing_time_ms,
        "Document analyzed"
    );

    Ok(Json(AnalyzeTextResponse {
        analytics,
        processing_time_ms,
    }))
}

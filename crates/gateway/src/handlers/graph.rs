//! Knowledge-graph synthesis handlers

use axum::{extract::State, Json};
use serde::Serialize;
use std::time::Instant;

use crate::AppState;
use paperscope_common::{errors::Result, metrics};
use paperscope_graph::{AnalysisPayload, KnowledgeGraph};

/// Graph synthesis response
#[derive(Serialize)]
pub struct SynthesizeGraphResponse {
    #[serde(flatten)]
    pub graph: KnowledgeGraph,

    /// Which synthesis tier handled the payload
    pub strategy: &'static str,

    pub processing_time_ms: u64,
}

/// Normalize an analysis payload into a typed node/edge graph.
///
/// The body is the raw analysis object from the LLM service; missing fields
/// suppress nodes rather than erroring, and the response always contains at
/// least one node.
pub async fn synthesize_graph(
    State(state): State<AppState>,
    Json(payload): Json<AnalysisPayload>,
) -> Result<Json<SynthesizeGraphResponse>> {
    let start = Instant::now();

    let (strategy, graph) = state.synthesizer.synthesize_labeled(&payload);

    let processing_time_ms = start.elapsed().as_millis() as u64;
    metrics::record_synthesis(start.elapsed().as_secs_f64(), strategy, graph.node_count());

    tracing::info!(
        strategy,
        nodes = graph.node_count(),
        links = graph.link_count(),
        latency_ms = processing_time_ms,
        "Graph synthesized"
    );

    Ok(Json(SynthesizeGraphResponse {
        graph,
        strategy,
        processing_time_ms,
    }))
}

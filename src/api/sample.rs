/// Sample context REST API endpoints
///
/// Lets the editor inspect or swap the data previews resolve against. Swaps are
/// atomic; in-flight previews finish against the context they started with.

use crate::api::preview::AppState;
use crate::preview::SampleSnapshot;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::Value;

/// Request body for replacing the sample context
#[derive(Debug, Deserialize)]
pub struct ReplaceSampleRequest {
    pub context: Value,
}

/// Create sample context routes
pub fn create_sample_routes() -> Router<AppState> {
    Router::new().route(
        "/api/preview/sample",
        get(get_sample).put(replace_sample).delete(reset_sample),
    )
}

/// Get the active sample context
///
/// GET /api/preview/sample
/// Returns: { "context": {...}, "updatedAt": "...", "isDefault": true }
async fn get_sample(State(state): State<AppState>) -> Json<SampleSnapshot> {
    Json(state.samples.current().as_ref().clone())
}

/// Replace the sample context
///
/// PUT /api/preview/sample
/// Body: { "context": {...} } - must be a JSON object
async fn replace_sample(
    State(state): State<AppState>,
    Json(payload): Json<ReplaceSampleRequest>,
) -> Result<Json<SampleSnapshot>, StatusCode> {
    if let Err(e) = state.samples.replace(payload.context) {
        tracing::warn!("❌ Rejected sample context: {}", e);
        return Err(StatusCode::BAD_REQUEST);
    }

    Ok(Json(state.samples.current().as_ref().clone()))
}

/// Restore the built-in sample fixture
///
/// DELETE /api/preview/sample
async fn reset_sample(State(state): State<AppState>) -> Json<SampleSnapshot> {
    state.samples.reset();
    Json(state.samples.current().as_ref().clone())
}

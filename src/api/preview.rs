/// Preview REST API endpoints
///
/// Stateless endpoints wrapping the interpolation engine. When a request carries
/// no context, the registry's current sample context is used.

use crate::{
    expression::{detect_expressions_opt, InterpolationReport, Interpolator},
    preview::{build_preview, preview_node, NodeConfig, NodePreview, Preview, SampleContextRegistry},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Hot-swappable sample context used when requests bring none
    pub samples: Arc<SampleContextRegistry>,
}

impl AppState {
    fn context_or_sample(&self, context: Option<Value>) -> Value {
        context.unwrap_or_else(|| self.samples.context())
    }
}

/// Request body for expression detection
#[derive(Debug, Deserialize)]
pub struct DetectRequest {
    #[serde(default)]
    pub template: Option<String>,
}

/// Response for expression detection
#[derive(Debug, Serialize)]
pub struct DetectResponse {
    pub expressions: Vec<String>,
}

/// Request body for template preview and raw interpolation
#[derive(Debug, Deserialize)]
pub struct TemplateRequest {
    #[serde(default)]
    pub template: Option<String>,
    /// Data context; defaults to the active sample context
    #[serde(default)]
    pub context: Option<Value>,
}

/// Response for template preview; `preview` is null when nothing was detected
#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub preview: Option<Preview>,
}

/// Request body for whole-node preview
#[derive(Debug, Deserialize)]
pub struct NodePreviewRequest {
    pub node: NodeConfig,
    #[serde(default)]
    pub context: Option<Value>,
}

/// Create preview routes
///
/// All endpoints are pure transformations over the request body plus the
/// shared sample context.
pub fn create_preview_routes() -> Router<AppState> {
    Router::new()
        .route("/api/expressions/detect", post(detect))
        .route("/api/interpolate", post(interpolate_template))
        .route("/api/preview", post(preview_template))
        .route("/api/nodes/preview", post(preview_node_params))
}

/// Detect placeholder paths
///
/// POST /api/expressions/detect
/// Body: { "template": "Hello {{ trigger.data.body.message }}" }
/// Returns: { "expressions": ["trigger.data.body.message"] }
async fn detect(Json(payload): Json<DetectRequest>) -> Json<DetectResponse> {
    let expressions = detect_expressions_opt(payload.template.as_deref());
    tracing::debug!("🔍 Detected {} expression(s)", expressions.len());
    Json(DetectResponse { expressions })
}

/// Interpolate a template and report each placeholder
///
/// POST /api/interpolate
/// Body: { "template": "...", "context": {...} }
/// Returns: { "resolvedText": "...", "isFullyResolved": true, "placeholders": [...] }
async fn interpolate_template(
    State(state): State<AppState>,
    Json(payload): Json<TemplateRequest>,
) -> Json<InterpolationReport> {
    let context = state.context_or_sample(payload.context);
    let template = payload.template.unwrap_or_default();

    let report = Interpolator::new().interpolate_with_report(&template, &context);
    if !report.result.is_fully_resolved {
        tracing::warn!(
            "⚠️ Template not fully resolved: {}",
            report.result.unresolved_reason.as_deref().unwrap_or_default()
        );
    }

    Json(report)
}

/// Build the preview panel content for one template
///
/// POST /api/preview
/// Body: { "template": "...", "context": {...} }
/// Returns: { "preview": null } or { "preview": { "expressions": [...], "result": {...} } }
async fn preview_template(
    State(state): State<AppState>,
    Json(payload): Json<TemplateRequest>,
) -> Json<PreviewResponse> {
    let context = state.context_or_sample(payload.context);
    let preview = build_preview(payload.template.as_deref(), &context);

    if let Some(p) = preview.as_ref().filter(|p| !p.result.is_fully_resolved) {
        tracing::warn!("⚠️ Preview not fully resolved for expressions {:?}", p.expressions);
    }

    Json(PreviewResponse { preview })
}

/// Preview every templated field of a node
///
/// POST /api/nodes/preview
/// Body: { "node": { "id": "...", "nodeType": "...", "params": {...} }, "context": {...} }
/// Returns: { "nodeId": "...", "fields": [{ "field": "...", "preview": {...} }] }
async fn preview_node_params(
    State(state): State<AppState>,
    Json(payload): Json<NodePreviewRequest>,
) -> Result<Json<NodePreview>, StatusCode> {
    if payload.node.id.is_empty() {
        tracing::warn!("❌ Node preview requested without a node id");
        return Err(StatusCode::BAD_REQUEST);
    }

    let context = state.context_or_sample(payload.context);
    let preview = preview_node(&payload.node, &context);

    tracing::info!(
        "📋 Previewed node '{}' ({}): {} templated field(s), fully resolved: {}",
        preview.node_id,
        payload.node.node_type,
        preview.fields.len(),
        preview.is_fully_resolved()
    );

    Ok(Json(preview))
}

// Shared helpers for HTTP-level tests

use axum::{body::Body, http::Request, Router};
use flowpreview::{api::AppState, preview::SampleContextRegistry, server::create_router};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub fn test_app() -> Router {
    create_router(AppState {
        samples: Arc::new(SampleContextRegistry::new()),
    })
}

/// Send a request and return status plus JSON body (Null for empty/non-JSON bodies)
pub async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (u16, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status().as_u16();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

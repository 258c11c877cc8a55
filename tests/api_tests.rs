// HTTP-level tests for the preview service router

mod common;

use common::{send, test_app};
use serde_json::json;

#[tokio::test]
async fn health_check_returns_ok() {
    use axum::{body::Body, http::Request};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    let response = test_app()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"ok");
}

#[tokio::test]
async fn detect_endpoint_lists_expressions() {
    let (status, body) = send(
        test_app(),
        "POST",
        "/api/expressions/detect",
        Some(json!({"template": "{{a}} plus {{ b }} and {{a}}"})),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({"expressions": ["a", "b", "a"]}));

    let (status, body) = send(test_app(), "POST", "/api/expressions/detect", Some(json!({"template": null}))).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({"expressions": []}));
}

#[tokio::test]
async fn preview_uses_sample_context_by_default() {
    let (status, body) = send(
        test_app(),
        "POST",
        "/api/preview",
        Some(json!({"template": "Count: {{nodes.http-request-1.response.data.count}}"})),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({
            "preview": {
                "expressions": ["nodes.http-request-1.response.data.count"],
                "result": {"resolvedText": "Count: 42", "isFullyResolved": true}
            }
        })
    );
}

#[tokio::test]
async fn preview_is_null_without_placeholders() {
    let (status, body) = send(test_app(), "POST", "/api/preview", Some(json!({"template": "plain text"}))).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({"preview": null}));
}

#[tokio::test]
async fn interpolate_with_explicit_context_reports_placeholders() {
    let (status, body) = send(
        test_app(),
        "POST",
        "/api/interpolate",
        Some(json!({
            "template": "{{list.1}} {{list.9}}",
            "context": {"list": ["a", "b", "c"]}
        })),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["resolvedText"], "b {{list.9}}");
    assert_eq!(body["isFullyResolved"], false);
    assert_eq!(body["unresolvedReason"], "some variables could not be resolved");
    assert_eq!(body["placeholders"][0], json!({"path": "list.1", "resolved": true}));
    assert_eq!(
        body["placeholders"][1],
        json!({"path": "list.9", "resolved": false, "reason": "array index out of range"})
    );
}

#[tokio::test]
async fn node_preview_covers_templated_fields() {
    let (status, body) = send(
        test_app(),
        "POST",
        "/api/nodes/preview",
        Some(json!({
            "node": {
                "id": "http-request-2",
                "nodeType": "HttpRequest",
                "params": {
                    "url": "{{variables.apiUrl}}/users/{{trigger.data.body.user.id}}",
                    "method": "GET",
                    "body": {"note": "{{ execution.id }}"}
                }
            }
        })),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["nodeId"], "http-request-2");
    assert_eq!(body["fields"][0]["field"], "url");
    assert_eq!(
        body["fields"][0]["preview"]["result"]["resolvedText"],
        "https://api.example.com/users/123"
    );
    assert_eq!(body["fields"][1]["field"], "body.note");
    assert_eq!(body["fields"][1]["preview"]["result"]["resolvedText"], "exec-preview-0001");
}

#[tokio::test]
async fn node_preview_requires_id() {
    let (status, _) = send(
        test_app(),
        "POST",
        "/api/nodes/preview",
        Some(json!({"node": {"id": "", "params": {}}})),
    )
    .await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn sample_context_can_be_swapped_and_reset() {
    let app = test_app();

    let (status, body) = send(app.clone(), "GET", "/api/preview/sample", None).await;
    assert_eq!(status, 200);
    assert_eq!(body["isDefault"], true);
    assert_eq!(body["context"]["trigger"]["data"]["body"]["message"], "Hello World");

    let (status, body) = send(
        app.clone(),
        "PUT",
        "/api/preview/sample",
        Some(json!({"context": {"variables": {"greeting": "Howdy"}}})),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["isDefault"], false);

    let (_, body) = send(app.clone(), "POST", "/api/preview", Some(json!({"template": "{{variables.greeting}}"}))).await;
    assert_eq!(body["preview"]["result"]["resolvedText"], "Howdy");

    let (status, body) = send(app.clone(), "DELETE", "/api/preview/sample", None).await;
    assert_eq!(status, 200);
    assert_eq!(body["isDefault"], true);

    let (_, body) = send(app, "POST", "/api/preview", Some(json!({"template": "{{variables.greeting}}"}))).await;
    assert_eq!(body["preview"]["result"]["isFullyResolved"], false);
}

#[tokio::test]
async fn non_object_sample_context_is_rejected() {
    let app = test_app();
    let (status, _) = send(app.clone(), "PUT", "/api/preview/sample", Some(json!({"context": [1, 2, 3]}))).await;
    assert_eq!(status, 400);

    let (_, body) = send(app, "GET", "/api/preview/sample", None).await;
    assert_eq!(body["isDefault"], true);
}

#[tokio::test]
async fn malformed_body_is_a_client_error() {
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/preview")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn unresolved_preview_still_succeeds() {
    let (status, body) = send(
        test_app(),
        "POST",
        "/api/preview",
        Some(json!({"template": "{{ variables.missing }}", "context": {"variables": {}}})),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["preview"]["expressions"], json!(["variables.missing"]));
    assert_eq!(body["preview"]["result"]["resolvedText"], "{{ variables.missing }}");
    assert_eq!(body["preview"]["result"]["isFullyResolved"], false);
}

#[tokio::test]
async fn editor_facing_shapes_use_camel_case() {
    let (_, body) = send(
        test_app(),
        "POST",
        "/api/nodes/preview",
        Some(json!({"node": {"id": "n1", "node_type": "Legacy", "params": {"text": "{{execution.id}}"}}})),
    )
    .await;
    assert_eq!(body["nodeId"], "n1");
    assert!(body.get("node_id").is_none());

    let (_, body) = send(test_app(), "GET", "/api/preview/sample", None).await;
    assert!(body["updatedAt"].is_string());
    assert!(body.get("updated_at").is_none());
}

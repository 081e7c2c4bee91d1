//! HTTP-level integration tests for the visualization server.
//!
//! These prove the deployed contract: the welcome health check, the
//! `/api/visualize` payload shape, extractor-level rejection of malformed
//! bodies, and the 500 safety net when the layout engine refuses a document.

use std::sync::Arc;

use axum::body::Body;
use http_body_util::BodyExt;
use hyper::{Request, StatusCode};
use jsonvista_core::{LayoutConfig, TreeLayoutBuilder};
use jsonvista_server::handlers::AppState;
use jsonvista_server::router::build_router;
use tower::ServiceExt;

fn build_test_app() -> axum::Router {
    build_app_with_config(LayoutConfig::default())
}

fn build_app_with_config(config: LayoutConfig) -> axum::Router {
    let state = AppState {
        builder: Arc::new(TreeLayoutBuilder::with_config(config)),
    };
    build_router(state)
}

fn post_visualize(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/visualize")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

// ── Helper to read response body ───────────────────────────────

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or_else(|_| {
        serde_json::json!({ "raw": String::from_utf8_lossy(&bytes).to_string() })
    })
}

// ── Tests ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_welcome() {
    let app = build_test_app();
    let resp = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"Welcome!");
}

#[tokio::test]
async fn test_visualize_object() {
    let app = build_test_app();
    let resp = app
        .oneshot(post_visualize(serde_json::json!({"a": 1}).to_string()))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let nodes = body["newNodes"].as_array().unwrap();
    let edges = body["newEdges"].as_array().unwrap();
    assert_eq!(nodes.len(), 3);
    assert_eq!(edges.len(), 2);

    assert_eq!(nodes[0]["id"], "root");
    assert_eq!(nodes[0]["data"]["label"], "Root");
    assert_eq!(nodes[1]["id"], "root=a");
    assert_eq!(nodes[2]["id"], "root=a-value");
    assert_eq!(nodes[2]["data"]["label"], "1");
    assert_eq!(nodes[2]["style"]["backgroundColor"], "#FFD700");
    assert!(nodes[0]["style"].get("backgroundColor").is_none());

    assert_eq!(edges[0]["source"], "root");
    assert_eq!(edges[0]["target"], "root=a");
    assert_eq!(edges[1]["source"], "root=a");
    assert_eq!(edges[1]["target"], "root=a-value");
}

#[tokio::test]
async fn test_visualize_bare_scalar() {
    let app = build_test_app();
    let resp = app.oneshot(post_visualize("42".to_string())).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["newNodes"].as_array().unwrap().len(), 2);
    assert_eq!(body["newEdges"].as_array().unwrap().len(), 1);
    assert_eq!(body["newNodes"][1]["data"]["label"], "42");
}

#[tokio::test]
async fn test_visualize_empty_object() {
    let app = build_test_app();
    let resp = app.oneshot(post_visualize("{}".to_string())).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["newNodes"].as_array().unwrap().len(), 1);
    assert!(body["newEdges"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_body_rejected_before_layout() {
    let app = build_test_app();
    let resp = app
        .oneshot(post_visualize("{not json".to_string()))
        .await
        .unwrap();
    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn test_depth_guard_surfaces_as_500() {
    let app = build_app_with_config(LayoutConfig {
        max_depth: 2,
        ..LayoutConfig::default()
    });
    let resp = app
        .oneshot(post_visualize(
            serde_json::json!({"a": {"b": {"c": 1}}}).to_string(),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(resp).await;
    assert_eq!(body["message"], "Failed to process JSON");
}

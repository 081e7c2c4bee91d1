//! HTTP handlers for the visualization API.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};
use jsonvista_core::{TreeGraph, TreeLayoutBuilder};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Application state shared across requests. The layout engine is stateless,
/// so a single instance serves all requests concurrently.
#[derive(Clone)]
pub struct AppState {
    pub builder: Arc<TreeLayoutBuilder>,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Health check.
pub async fn welcome() -> &'static str {
    "Welcome!"
}

/// Lay out an arbitrary JSON document as a tree graph.
///
/// Malformed bodies never reach the engine; the `Json` extractor rejects them
/// with a 4xx first. A layout failure (depth guard) surfaces as a generic 500.
pub async fn visualize(
    State(state): State<AppState>,
    Json(document): Json<serde_json::Value>,
) -> Result<Json<TreeGraph>, (StatusCode, Json<ErrorBody>)> {
    match state.builder.layout(&document) {
        Ok(graph) => {
            info!(
                nodes = graph.nodes.len(),
                edges = graph.edges.len(),
                "laid out document"
            );
            Ok(Json(graph))
        }
        Err(e) => {
            warn!("Failed to lay out document: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    message: "Failed to process JSON".to_string(),
                }),
            ))
        }
    }
}

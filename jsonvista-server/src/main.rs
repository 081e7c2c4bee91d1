use std::sync::Arc;

use jsonvista_core::{LayoutConfig, TreeLayoutBuilder};
use jsonvista_server::handlers::AppState;
use jsonvista_server::router::build_router;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter("jsonvista_server=info,tower_http=debug")
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let mut config = LayoutConfig::default();
    if let Ok(max_depth) = std::env::var("JSONVISTA_MAX_DEPTH") {
        config.max_depth = max_depth.parse().unwrap_or(config.max_depth);
    }

    let state = AppState {
        builder: Arc::new(TreeLayoutBuilder::with_config(config)),
    };
    let app = build_router(state);

    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "5000".to_string())
        .parse::<u16>()
        .unwrap_or(5000);

    let addr = format!("0.0.0.0:{}", port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

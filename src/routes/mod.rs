//! HTTP routes
//!
//! The HTML screens, the JSON API and the health check, assembled into one
//! router with the shared middleware stack.

pub mod api_routes;
pub mod ui_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::cors_for;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = cors_for(&state.config.cors_origins);

    Router::new()
        .route("/health", get(health_check))
        .merge(ui_routes::create_ui_router())
        .merge(api_routes::create_api_router())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

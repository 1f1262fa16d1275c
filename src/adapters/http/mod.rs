//! HTTP adapters: axum routers and handlers.

use axum::{routing::get, Json, Router};

pub mod donation;

pub use donation::{donation_router, DonationAppState};

/// GET /health - liveness probe
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Create the health router.
pub fn health_routes<S: Clone + Send + Sync + 'static>() -> Router<S> {
    Router::new().route("/health", get(health))
}

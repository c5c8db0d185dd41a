//! Routes for the dashboard page, its layout, and the two chart callbacks.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    trace::TraceLayer,
    compression::CompressionLayer,
};
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    dashboard::{dashboard, api_layout},
    charts::{update_success_pie, update_success_payload_scatter},
};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Page
        .route("/",           get(dashboard))
        .route("/api/layout", get(api_layout))

        // Control callbacks
        .route("/api/charts/success-pie",             post(update_success_pie))
        .route("/api/charts/success-payload-scatter", post(update_success_payload_scatter))

        // Middleware
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}

//! Chart update callbacks, one per chart placeholder.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use spacex_dash_charts::{payload_scatter, success_pie, PayloadRange, SiteSelection};
use spacex_dash_common::error::ApiError;

use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct PieRequest {
    #[serde(default)]
    pub site: SiteSelection,
}

#[derive(Debug, Deserialize)]
pub struct ScatterRequest {
    #[serde(default)]
    pub site: SiteSelection,
    pub payload_range: PayloadRange,
}

/// POST /api/charts/success-pie: recompute the pie for the selected site
pub async fn update_success_pie(
    State(state): State<SharedState>,
    payload: Result<Json<PieRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(req) = payload?;
    Ok(Json(success_pie(&state.dataset, &req.site).to_figure()))
}

/// POST /api/charts/success-payload-scatter: recompute the scatter for site and payload range
pub async fn update_success_payload_scatter(
    State(state): State<SharedState>,
    payload: Result<Json<ScatterRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(req) = payload?;
    Ok(Json(payload_scatter(&state.dataset, &req.site, &req.payload_range).to_figure()))
}

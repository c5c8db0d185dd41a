//! The dashboard page and its static layout.

use axum::{extract::State, response::Html, Json};
use minijinja::{context, Environment};
use spacex_dash_charts::DashboardLayout;
use spacex_dash_common::error::{ApiError, DashError};

use crate::state::SharedState;

/// Page template; the layout is passed in both as fields and as JSON for the client script.
pub const DASHBOARD_HTML: &str = include_str!("../../templates/dashboard.html");

pub async fn dashboard(State(state): State<SharedState>) -> Result<Html<String>, ApiError> {
    Ok(Html(render_dashboard(&state.layout)?))
}

/// GET /api/layout: the static layout, including initial figures
pub async fn api_layout(State(state): State<SharedState>) -> Json<DashboardLayout> {
    Json(state.layout.clone())
}

pub fn render_dashboard(layout: &DashboardLayout) -> Result<String, DashError> {
    let mut env = Environment::new();
    env.add_template("dashboard.html", DASHBOARD_HTML)?;

    let layout_json = serde_json::to_string(layout)?;
    let html = env.get_template("dashboard.html")?.render(context! {
        layout => layout,
        layout_json => layout_json,
    })?;
    Ok(html)
}

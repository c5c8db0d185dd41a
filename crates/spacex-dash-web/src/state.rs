//! Shared application state for the web server.

use std::sync::Arc;
use spacex_dash_charts::DashboardLayout;
use spacex_dash_data::LaunchDataset;

/// Shared state injected into every Axum handler.
/// Built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct AppState {
    pub dataset: LaunchDataset,
    pub layout: DashboardLayout,
}

impl AppState {
    pub fn new(dataset: LaunchDataset) -> Self {
        let layout = DashboardLayout::build(&dataset);
        Self { dataset, layout }
    }
}

pub type SharedState = Arc<AppState>;

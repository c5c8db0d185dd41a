//! spacex-dash-web — Web GUI for the SpaceX launch records dashboard.
//! Serves a single page with:
//!   - Launch site dropdown and payload range slider
//!   - Success pie chart (per site, or split by outcome for one site)
//!   - Payload vs. outcome scatter chart colored by booster category
//!
//! Control changes are posted back to the chart endpoints, which recompute
//! the figure from the read-only dataset.

pub mod router;
pub mod handlers;
pub mod state;

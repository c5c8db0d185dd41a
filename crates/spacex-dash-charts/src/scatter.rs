//! Payload-vs-outcome scatter chart for the site dropdown and payload slider.

use spacex_dash_data::LaunchDataset;
use tracing::debug;

use crate::control::{PayloadRange, SiteSelection};
use crate::spec::{ChartSpec, MarkerStyle, ScatterChart, ScatterPoint, ScatterSeries};

pub const X_LABEL: &str = "Payload Mass (kg)";
pub const Y_LABEL: &str = "Outcome";
pub const COLOR_LABEL: &str = "Booster Version Category";

/// Launches with payload in `range` (and at `site`, unless `All`),
/// one series per booster version category.
pub fn payload_scatter(dataset: &LaunchDataset, site: &SiteSelection, range: &PayloadRange) -> ChartSpec {
    let mut series: Vec<ScatterSeries> = Vec::new();

    for record in dataset
        .records()
        .iter()
        .filter(|r| range.contains(r.payload_mass_kg))
        .filter(|r| site.matches(&r.launch_site))
    {
        let point = ScatterPoint {
            payload_mass_kg: record.payload_mass_kg,
            outcome: record.outcome,
            launch_site: record.launch_site.clone(),
        };
        match series.iter_mut().find(|s| s.name == record.booster_version_category) {
            Some(existing) => existing.points.push(point),
            None => series.push(ScatterSeries {
                name: record.booster_version_category.clone(),
                points: vec![point],
            }),
        }
    }

    let title = match site {
        SiteSelection::All => "Correlation between Payload and Success for all Sites".to_string(),
        SiteSelection::Site(name) => format!("Correlation between Payload and Success for {}", name),
    };

    let chart = ScatterChart {
        title,
        x_label: X_LABEL.to_string(),
        y_label: Y_LABEL.to_string(),
        color_label: COLOR_LABEL.to_string(),
        series,
        marker: MarkerStyle::default(),
    };
    debug!(
        site = %site,
        lower = range.lower,
        upper = range.upper,
        points = chart.point_count(),
        "Computed payload scatter"
    );
    ChartSpec::Scatter(chart)
}

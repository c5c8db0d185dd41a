//! Proportion (pie) chart for the site dropdown.

use spacex_dash_data::{LaunchDataset, Outcome};
use tracing::debug;

use crate::control::SiteSelection;
use crate::spec::{ChartSpec, PieChart, PieSlice};

pub const ALL_SITES_TITLE: &str = "Total Successful Launches By Site";

/// Successes per site for `All`, otherwise the outcome split of one site.
pub fn success_pie(dataset: &LaunchDataset, site: &SiteSelection) -> ChartSpec {
    let chart = match site {
        SiteSelection::All => successes_by_site(dataset),
        SiteSelection::Site(name) => outcomes_for_site(dataset, name),
    };
    debug!(site = %site, slices = chart.slices.len(), total = chart.total(), "Computed success pie");
    ChartSpec::Pie(chart)
}

fn successes_by_site(dataset: &LaunchDataset) -> PieChart {
    let slices = dataset
        .sites()
        .into_iter()
        .map(|site| PieSlice {
            label: site.to_string(),
            value: dataset
                .records_for_site(site)
                .filter(|r| r.outcome.is_success())
                .count() as u64,
        })
        .collect();

    PieChart {
        title: ALL_SITES_TITLE.to_string(),
        names_label: "Launch Site".to_string(),
        values_label: "Success".to_string(),
        slices,
    }
}

fn outcomes_for_site(dataset: &LaunchDataset, site: &str) -> PieChart {
    let mut counts = [0u64; 2];
    for record in dataset.records_for_site(site) {
        match record.outcome {
            Outcome::Failure => counts[0] += 1,
            Outcome::Success => counts[1] += 1,
        }
    }

    let mut slices: Vec<PieSlice> = Outcome::ALL
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(outcome, count)| PieSlice { label: outcome.label().to_string(), value: count })
        .collect();
    // Stable sort keeps Failure ahead of Success on ties.
    slices.sort_by(|a, b| b.value.cmp(&a.value));

    PieChart {
        title: format!("Success vs Failure for {}", site),
        names_label: "Outcome".to_string(),
        values_label: "Total".to_string(),
        slices,
    }
}

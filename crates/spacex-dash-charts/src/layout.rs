//! Static page description, built once from the loaded dataset.

use serde::Serialize;
use serde_json::Value;
use spacex_dash_data::LaunchDataset;

use crate::control::{PayloadRange, SiteSelection, ALL_SITES_LABEL};
use crate::proportion::success_pie;
use crate::scatter::payload_scatter;

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";

pub const SITE_DROPDOWN_ID: &str = "site-dropdown";
pub const PAYLOAD_SLIDER_ID: &str = "payload-slider";
pub const SUCCESS_PIE_CHART_ID: &str = "success-pie-chart";
pub const SUCCESS_PAYLOAD_SCATTER_CHART_ID: &str = "success-payload-scatter-chart";

/// Slider bounds are fixed round numbers, not the observed payload extremes.
pub const PAYLOAD_SLIDER_MIN: f64 = 0.0;
pub const PAYLOAD_SLIDER_MAX: f64 = 10000.0;
pub const PAYLOAD_SLIDER_STEP: f64 = 1000.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardLayout {
    pub title: Heading,
    pub site_dropdown: Dropdown,
    pub success_pie_chart: Graph,
    pub payload_slider: RangeSlider,
    pub success_payload_scatter_chart: Graph,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heading {
    pub text: String,
    pub text_align: String,
    pub color: String,
    pub font_size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dropdown {
    pub id: String,
    pub options: Vec<DropdownOption>,
    pub value: SiteSelection,
    pub placeholder: String,
    pub searchable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: SiteSelection,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeSlider {
    pub id: String,
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub value: PayloadRange,
}

/// A chart placeholder with its initial Plotly figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Graph {
    pub id: String,
    pub figure: Value,
}

impl DashboardLayout {
    pub fn build(dataset: &LaunchDataset) -> Self {
        let (min_payload, max_payload) = dataset.payload_bounds();
        let initial_site = SiteSelection::All;
        let initial_range = PayloadRange::new(min_payload, max_payload);

        let options = std::iter::once(DropdownOption {
            label: ALL_SITES_LABEL.to_string(),
            value: SiteSelection::All,
        })
        .chain(dataset.sites().into_iter().map(|site| DropdownOption {
            label: site.to_string(),
            value: SiteSelection::site(site),
        }))
        .collect();

        Self {
            title: Heading {
                text: DASHBOARD_TITLE.to_string(),
                text_align: "center".to_string(),
                color: "#503D36".to_string(),
                font_size: 40,
            },
            site_dropdown: Dropdown {
                id: SITE_DROPDOWN_ID.to_string(),
                options,
                value: initial_site.clone(),
                placeholder: "Select a Launch Site here".to_string(),
                searchable: true,
            },
            success_pie_chart: Graph {
                id: SUCCESS_PIE_CHART_ID.to_string(),
                figure: success_pie(dataset, &initial_site).to_figure(),
            },
            payload_slider: RangeSlider {
                id: PAYLOAD_SLIDER_ID.to_string(),
                label: "Payload range (Kg):".to_string(),
                min: PAYLOAD_SLIDER_MIN,
                max: PAYLOAD_SLIDER_MAX,
                step: PAYLOAD_SLIDER_STEP,
                value: initial_range,
            },
            success_payload_scatter_chart: Graph {
                id: SUCCESS_PAYLOAD_SCATTER_CHART_ID.to_string(),
                figure: payload_scatter(dataset, &initial_site, &initial_range).to_figure(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use spacex_dash_test_utils::{sample_dataset, SAMPLE_ROWS, SAMPLE_SITES};

    #[test]
    fn test_dropdown_options() {
        let layout = DashboardLayout::build(&sample_dataset());
        let dropdown = &layout.site_dropdown;

        assert_eq!(dropdown.value, SiteSelection::All);
        assert_eq!(dropdown.options.len(), SAMPLE_SITES.len() + 1);
        assert_eq!(dropdown.options[0].label, "All sites");
        assert_eq!(dropdown.options[0].value, SiteSelection::All);

        let labels: Vec<&str> = dropdown.options[1..].iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, SAMPLE_SITES.to_vec());
        assert!(dropdown.searchable);
    }

    #[test]
    fn test_slider_fixed_bounds_with_data_initial_value() {
        let layout = DashboardLayout::build(&sample_dataset());
        let slider = &layout.payload_slider;

        assert_eq!(slider.min, 0.0);
        assert_eq!(slider.max, 10000.0);
        assert_eq!(slider.step, 1000.0);
        assert_eq!(slider.value, PayloadRange::new(0.0, 9600.0));
    }

    #[test]
    fn test_initial_charts_are_unfiltered() {
        let ds = sample_dataset();
        let layout = DashboardLayout::build(&ds);

        let pie = &layout.success_pie_chart.figure;
        assert_eq!(pie["layout"]["title"]["text"], "Total Successful Launches By Site");
        assert_eq!(pie["data"][0]["labels"].as_array().map(Vec::len), Some(SAMPLE_SITES.len()));

        let scatter = &layout.success_payload_scatter_chart.figure;
        let points: usize = scatter["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|trace| trace["x"].as_array().map(Vec::len).unwrap_or(0))
            .sum();
        assert_eq!(points, SAMPLE_ROWS);
    }

    #[test]
    fn test_serialized_ids() {
        let value = serde_json::to_value(DashboardLayout::build(&sample_dataset())).unwrap();
        assert_eq!(value["site_dropdown"]["id"], "site-dropdown");
        assert_eq!(value["site_dropdown"]["options"][0]["value"], "All");
        assert_eq!(value["payload_slider"]["id"], "payload-slider");
        assert_eq!(value["payload_slider"]["value"], serde_json::json!([0.0, 9600.0]));
        assert_eq!(value["success_pie_chart"]["id"], "success-pie-chart");
        assert_eq!(value["success_payload_scatter_chart"]["id"], "success-payload-scatter-chart");
        assert_eq!(value["title"]["color"], "#503D36");
    }
}

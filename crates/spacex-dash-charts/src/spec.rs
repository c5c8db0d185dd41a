//! Chart specifications and their Plotly figure encoding.

use serde::Serialize;
use serde_json::{json, Value};
use spacex_dash_data::Outcome;

/// Renderer-independent description of one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartSpec {
    Pie(PieChart),
    Scatter(ScatterChart),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    /// Hover label for slice names.
    pub names_label: String,
    /// Hover label for slice values.
    pub values_label: String,
    pub slices: Vec<PieSlice>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Legend title; one series per distinct value of this field.
    pub color_label: String,
    pub series: Vec<ScatterSeries>,
    pub marker: MarkerStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub name: String,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub launch_site: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerStyle {
    pub size: u32,
    pub line_width: u32,
    pub line_color: String,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self { size: 20, line_width: 1, line_color: "white".to_string() }
    }
}

impl PieChart {
    pub fn total(&self) -> u64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

impl ScatterChart {
    pub fn point_count(&self) -> usize {
        self.points().count()
    }

    pub fn points(&self) -> impl Iterator<Item = &ScatterPoint> {
        self.series.iter().flat_map(|s| s.points.iter())
    }
}

impl ChartSpec {
    /// Encode as a Plotly figure: `{"data": [...], "layout": {...}}`.
    pub fn to_figure(&self) -> Value {
        match self {
            ChartSpec::Pie(pie) => pie_figure(pie),
            ChartSpec::Scatter(scatter) => scatter_figure(scatter),
        }
    }
}

fn pie_figure(pie: &PieChart) -> Value {
    let labels: Vec<&str> = pie.slices.iter().map(|s| s.label.as_str()).collect();
    let values: Vec<u64> = pie.slices.iter().map(|s| s.value).collect();

    json!({
        "data": [{
            "type": "pie",
            "labels": labels,
            "values": values,
            "hovertemplate": format!(
                "{}=%{{label}}<br>{}=%{{value}}<extra></extra>",
                pie.names_label, pie.values_label
            ),
        }],
        "layout": {
            "title": { "text": pie.title },
            "legend": { "tracegroupgap": 0 },
        },
    })
}

fn scatter_figure(scatter: &ScatterChart) -> Value {
    let categories: Vec<&str> = Outcome::ALL.iter().map(|o| o.label()).collect();
    let traces: Vec<Value> = scatter
        .series
        .iter()
        .map(|series| {
            let x: Vec<f64> = series.points.iter().map(|p| p.payload_mass_kg).collect();
            let y: Vec<&str> = series.points.iter().map(|p| p.outcome.label()).collect();
            let sites: Vec<&str> = series.points.iter().map(|p| p.launch_site.as_str()).collect();
            json!({
                "type": "scatter",
                "mode": "markers",
                "name": series.name,
                "legendgroup": series.name,
                "showlegend": true,
                "x": x,
                "y": y,
                "customdata": sites,
                "marker": {
                    "size": scatter.marker.size,
                    "line": {
                        "width": scatter.marker.line_width,
                        "color": scatter.marker.line_color,
                    },
                },
                "hovertemplate": format!(
                    "{}={}<br>{}=%{{x}}<br>{}=%{{y}}<br>Launch Site=%{{customdata}}<extra></extra>",
                    scatter.color_label, series.name, scatter.x_label, scatter.y_label
                ),
            })
        })
        .collect();

    json!({
        "data": traces,
        "layout": {
            "title": { "text": scatter.title },
            "xaxis": { "title": { "text": scatter.x_label } },
            "yaxis": {
                "title": { "text": scatter.y_label },
                "type": "category",
                "categoryorder": "array",
                "categoryarray": categories,
            },
            "legend": {
                "title": { "text": scatter.color_label },
                "tracegroupgap": 0,
            },
        },
    })
}

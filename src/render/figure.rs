use serde_json::{Value, json};

use crate::chart::ChartSpec;
use crate::constants::{DEFAULT_CHART_TITLE, DEFAULT_PAGE_TITLE};
use crate::scoring::Relevance;

const MARKER_SIZE: u32 = 12;

const HOVER_TEMPLATE: &str = "<b>FileName1:</b> %{customdata[0]}<br>\
<b>FileName2:</b> %{customdata[1]}<br>\
<b>Domain:</b> %{customdata[2]}<br>\
<b>Similarity Score:</b> %{customdata[3]:.2f}<extra></extra>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FigureOptions {
    /// Title drawn above the chart.
    pub title: String,
    /// `<title>` of the HTML page.
    pub page_title: String,
}

impl Default for FigureOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_CHART_TITLE.to_string(),
            page_title: DEFAULT_PAGE_TITLE.to_string(),
        }
    }
}

impl FigureOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Builds a Plotly figure (`{data, layout}`) for `spec`.
///
/// Emits one scatter trace per relevance category, ordered by first appearance in
/// `spec.points`, and one dashed line shape per threshold marker.
pub fn figure(spec: &ChartSpec, options: &FigureOptions) -> Value {
    let mut categories: Vec<Relevance> = Vec::with_capacity(2);
    for point in &spec.points {
        if !categories.contains(&point.relevance) {
            categories.push(point.relevance);
        }
    }

    let data: Vec<Value> = categories
        .iter()
        .map(|&relevance| {
            let points: Vec<_> = spec
                .points
                .iter()
                .filter(|p| p.relevance == relevance)
                .collect();

            json!({
                "type": "scatter",
                "mode": "markers",
                "name": relevance.as_str(),
                "legendgroup": relevance.as_str(),
                "x": points.iter().map(|p| p.axis_position()).collect::<Vec<_>>(),
                "y": points.iter().map(|p| p.score()).collect::<Vec<_>>(),
                "customdata": points
                    .iter()
                    .map(|p| json!([
                        p.source_document(),
                        p.comparison_document(),
                        p.domain().display_name(),
                        p.score(),
                    ]))
                    .collect::<Vec<_>>(),
                "hovertemplate": HOVER_TEMPLATE,
                "marker": { "size": MARKER_SIZE },
            })
        })
        .collect();

    let shapes: Vec<Value> = spec
        .markers
        .iter()
        .map(|marker| {
            json!({
                "type": "line",
                "xref": "x",
                "yref": "y",
                "x0": marker.x0,
                "x1": marker.x1,
                "y0": marker.y,
                "y1": marker.y,
                "name": marker.name,
                "line": { "color": marker.color, "dash": "dash" },
            })
        })
        .collect();

    json!({
        "data": data,
        "layout": {
            "title": { "text": options.title },
            "xaxis": {
                "title": { "text": "Domain" },
                "tickmode": "array",
                "tickvals": spec.axis_labels.keys().collect::<Vec<_>>(),
                "ticktext": spec.axis_labels.values().collect::<Vec<_>>(),
            },
            "yaxis": { "title": { "text": "Similarity Score" } },
            "legend": { "title": { "text": "Relevance and Thresholds" } },
            "showlegend": true,
            "shapes": shapes,
        },
    })
}

use crate::chart::ChartSpec;
use crate::constants::PLOTLY_CDN_URL;

use super::figure::{FigureOptions, figure};

const CHART_ELEMENT_ID: &str = "similarity-chart";

/// Renders `spec` as a standalone HTML page that draws the chart with Plotly.js.
pub fn html_page(spec: &ChartSpec, options: &FigureOptions) -> String {
    let figure_json = script_safe(&figure(spec, options).to_string());

    format!(
        r#"<!DOCTYPE html>
<html>
    <head>
        <meta charset="utf-8">
        <title>{title}</title>
        <script src="{cdn}"></script>
    </head>
    <body>
        <div id="{id}" style="width:100%;height:90vh;"></div>
        <script>
            const figure = {figure_json};
            Plotly.newPlot("{id}", figure.data, figure.layout, {{responsive: true}});
        </script>
    </body>
</html>
"#,
        title = escape_html(&options.page_title),
        cdn = PLOTLY_CDN_URL,
        id = CHART_ELEMENT_ID,
    )
}

/// `</` inside an inline script would close the element early.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}

pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

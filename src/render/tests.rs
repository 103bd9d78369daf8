use super::*;
use crate::chart::assemble;
use crate::model::SimilarityRecord;
use crate::scoring::PolicyTable;

fn sample_spec() -> crate::chart::ChartSpec {
    let records = vec![
        SimilarityRecord::new("JobProfileCDeveloper", "JobRequirement", "jobvacancy", 0.6864),
        SimilarityRecord::new("JobProfileCDeveloper", "Aspirin", "jobvacancy", -0.0161),
        SimilarityRecord::new("MSDhoni", "SachinTendulkarNewsArticle", "Unknown", 0.5416),
    ];
    assemble(&records, &PolicyTable::with_defaults()).unwrap()
}

#[test]
fn test_figure_has_trace_per_category_in_first_seen_order() {
    let fig = figure(&sample_spec(), &FigureOptions::default());
    let data = fig["data"].as_array().unwrap();

    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["name"], "Relevant");
    assert_eq!(data[1]["name"], "Irrelevant");
    assert_eq!(data[0]["x"], serde_json::json!([1]));
    assert_eq!(data[1]["x"], serde_json::json!([1, 3]));
    assert_eq!(data[1]["y"][1], 0.5416);
}

#[test]
fn test_figure_single_category() {
    let records = vec![SimilarityRecord::new("A", "B", "jobvacancy", 0.9)];
    let spec = assemble(&records, &PolicyTable::with_defaults()).unwrap();
    let fig = figure(&spec, &FigureOptions::default());

    assert_eq!(fig["data"].as_array().unwrap().len(), 1);
}

#[test]
fn test_figure_customdata_carries_hover_fields() {
    let fig = figure(&sample_spec(), &FigureOptions::default());
    let custom = &fig["data"][0]["customdata"][0];

    assert_eq!(custom[0], "JobProfileCDeveloper");
    assert_eq!(custom[1], "JobRequirement");
    assert_eq!(custom[2], "Job Matching");
    assert_eq!(custom[3], 0.6864);

    let template = fig["data"][0]["hovertemplate"].as_str().unwrap();
    assert!(template.contains("<b>FileName1:</b> %{customdata[0]}"));
    assert!(template.contains("<b>FileName2:</b> %{customdata[1]}"));
    assert!(template.contains("<b>Domain:</b> %{customdata[2]}"));
    assert!(template.contains("%{customdata[3]:.2f}"));
}

#[test]
fn test_figure_shapes_match_markers() {
    let spec = sample_spec();
    let fig = figure(&spec, &FigureOptions::default());
    let shapes = fig["layout"]["shapes"].as_array().unwrap();

    assert_eq!(shapes.len(), spec.markers.len());
    assert_eq!(shapes[1]["y0"], 0.7);
    assert_eq!(shapes[1]["y1"], 0.7);
    assert_eq!(shapes[1]["line"]["color"], "blue");
    assert_eq!(shapes[1]["line"]["dash"], "dash");
    assert_eq!(shapes[1]["x0"], spec.markers[1].x0);
}

#[test]
fn test_figure_axis_ticks() {
    let fig = figure(&sample_spec(), &FigureOptions::new("Custom"));
    let xaxis = &fig["layout"]["xaxis"];

    assert_eq!(xaxis["tickmode"], "array");
    assert_eq!(xaxis["tickvals"], serde_json::json!([1, 3]));
    assert_eq!(
        xaxis["ticktext"],
        serde_json::json!(["Job Matching", "Sports Insights"])
    );
    assert_eq!(fig["layout"]["title"]["text"], "Custom");
    assert_eq!(
        fig["layout"]["legend"]["title"]["text"],
        "Relevance and Thresholds"
    );
}

#[test]
fn test_html_page_embeds_figure() {
    let page = html_page(&sample_spec(), &FigureOptions::default());

    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("<title>Phrase Similarity</title>"));
    assert!(page.contains(crate::constants::PLOTLY_CDN_URL));
    assert!(page.contains("Plotly.newPlot"));
    assert!(page.contains("Job Matching"));
}

#[test]
fn test_html_page_escapes_script_terminator() {
    let records = vec![SimilarityRecord::new("</script><b>", "B", "jobvacancy", 0.9)];
    let spec = assemble(&records, &PolicyTable::with_defaults()).unwrap();
    let page = html_page(&spec, &FigureOptions::default());

    assert!(!page.contains("</script><b>"));
    assert!(page.contains("<\\/script><b>"));
}

#[test]
fn test_html_page_escapes_title() {
    let options = FigureOptions {
        page_title: "A & <B>".to_string(),
        ..FigureOptions::default()
    };
    let page = html_page(&sample_spec(), &options);

    assert!(page.contains("<title>A &amp; &lt;B&gt;</title>"));
}

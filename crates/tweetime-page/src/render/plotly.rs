//! Plotly.js chart rendering.
//!
//! A `ChartSpec` is turned into a Plotly figure (`data` + `layout`) and embedded
//! as an inline script that draws into a fixed `<div>`.

use serde_json::{json, Value};
use tweetime_models::{Band, BandPosition, ChartSpec};

use super::html::escape_html;
use super::ChartRenderer;

/// CDN location of the plotly.js bundle.
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.27.0.min.js";

/// Annotation font size for band labels.
const ANNOTATION_FONT_SIZE: u32 = 15;

/// Renders charts with plotly.js.
#[derive(Debug, Clone)]
pub struct PlotlyRenderer {
    /// Id of the element the chart is drawn into.
    pub div_id: String,
    /// Script URL loaded in the document head.
    pub script_src: String,
}

impl Default for PlotlyRenderer {
    fn default() -> Self {
        Self {
            div_id: "history-chart".to_string(),
            script_src: PLOTLY_CDN.to_string(),
        }
    }
}

impl PlotlyRenderer {
    /// Builds the Plotly figure for a chart spec.
    pub fn figure(&self, spec: &ChartSpec) -> Value {
        let x: Vec<String> = spec.points.iter().map(|p| p.date.to_string()).collect();
        let y: Vec<f64> = spec.points.iter().map(|p| p.minutes_spent).collect();

        let shapes: Vec<Value> = spec.bands.iter().map(band_shape).collect();
        let annotations: Vec<Value> = spec.bands.iter().map(band_annotation).collect();

        let mut layout = json!({
            "title": { "text": spec.title },
            "height": spec.height,
            "xaxis": { "title": { "text": spec.x_title } },
            "yaxis": {
                "title": { "text": spec.y_title },
                "range": spec.y_axis_range.as_array(),
            },
            "shapes": shapes,
            "annotations": annotations,
        });
        merge(&mut layout, template_layout(&spec.template));

        json!({
            "data": [{
                "type": "scatter",
                "mode": "lines",
                "name": spec.y_title,
                "x": x,
                "y": y,
            }],
            "layout": layout,
        })
    }
}

impl ChartRenderer for PlotlyRenderer {
    fn render_chart(&self, spec: &ChartSpec) -> String {
        // "</" would close the surrounding script element.
        let figure = self.figure(spec).to_string().replace("</", "<\\/");
        let id = escape_html(&self.div_id);
        format!(
            r#"<div id="{id}" class="chart"></div>
<script>
(function() {{
  var fig = {figure};
  Plotly.newPlot("{id}", fig.data, fig.layout, {{"responsive": true}});
}})();
</script>"#,
            id = id,
            figure = figure,
        )
    }

    fn head_markup(&self) -> String {
        format!(
            r#"<script src="{}" charset="utf-8"></script>"#,
            escape_html(&self.script_src)
        )
    }
}

fn band_shape(band: &Band) -> Value {
    json!({
        "type": "rect",
        "xref": "paper",
        "yref": "y",
        "x0": 0,
        "x1": 1,
        "y0": band.y0,
        "y1": band.y1,
        "fillcolor": band.color,
        "opacity": band.opacity,
        "line": { "width": 0 },
        "layer": "below",
    })
}

fn band_annotation(band: &Band) -> Value {
    let y = match band.position {
        BandPosition::Bottom => band.y0,
        BandPosition::Top => band.y1,
    };
    json!({
        "xref": "paper",
        "yref": "y",
        "x": 0.5,
        "y": y,
        "xanchor": "center",
        "yanchor": band.position.as_str(),
        "showarrow": false,
        "text": format!("<b>{}</b>", escape_html(&band.label)),
        "font": { "size": ANNOTATION_FONT_SIZE, "color": band.color },
    })
}

/// Layout overrides approximating a named style template.
fn template_layout(name: &str) -> Value {
    match name {
        "ggplot2" => json!({
            "paper_bgcolor": "white",
            "plot_bgcolor": "rgb(237,237,237)",
            "font": { "color": "rgb(51,51,51)" },
            "xaxis": { "gridcolor": "white", "linecolor": "white", "zeroline": false },
            "yaxis": { "gridcolor": "white", "linecolor": "white", "zeroline": false },
        }),
        _ => json!({}),
    }
}

/// Deep-merges `overlay` into `base`; existing leaf values win.
fn merge(base: &mut Value, overlay: Value) {
    if let (Value::Object(base), Value::Object(overlay)) = (base, overlay) {
        for (key, value) in overlay {
            match base.get_mut(&key) {
                Some(existing) if existing.is_object() && value.is_object() => {
                    merge(existing, value)
                }
                Some(_) => {}
                None => {
                    base.insert(key, value);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::build_chart;
    use chrono::NaiveDate;
    use tweetime_models::TimeSeriesPoint;

    fn spec() -> ChartSpec {
        let d = |n| NaiveDate::from_ymd_opt(2020, 1, n).unwrap();
        build_chart(&[
            TimeSeriesPoint::new(d(1), 2.0),
            TimeSeriesPoint::new(d(2), 6.0),
            TimeSeriesPoint::new(d(3), 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_figure_series_and_range() {
        let fig = PlotlyRenderer::default().figure(&spec());

        assert_eq!(fig["data"][0]["mode"], "lines");
        assert_eq!(fig["data"][0]["x"], json!(["2020-01-01", "2020-01-02", "2020-01-03"]));
        assert_eq!(fig["data"][0]["y"], json!([2.0, 6.0, 1.0]));
        assert_eq!(fig["layout"]["yaxis"]["range"], json!([-0.8, 30.0]));
        assert_eq!(fig["layout"]["height"], 600);
    }

    #[test]
    fn test_figure_bands() {
        let fig = PlotlyRenderer::default().figure(&spec());

        let shapes = fig["layout"]["shapes"].as_array().unwrap();
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0]["fillcolor"], "navy");
        assert_eq!(shapes[0]["opacity"], 0.2);
        assert_eq!(shapes[1]["y1"], 30.0);
        assert_eq!(shapes[1]["line"]["width"], 0);

        let notes = fig["layout"]["annotations"].as_array().unwrap();
        assert_eq!(notes[0]["yanchor"], "bottom");
        assert_eq!(notes[0]["y"], -0.8);
        assert_eq!(notes[1]["yanchor"], "top");
        assert_eq!(notes[1]["font"]["color"], "purple");
        assert_eq!(notes[1]["font"]["size"], 15);
        assert_eq!(notes[1]["text"], "<b>Usage above 15 mins: 25 days</b>");
    }

    #[test]
    fn test_template_does_not_override_range() {
        let fig = PlotlyRenderer::default().figure(&spec());

        assert_eq!(fig["layout"]["plot_bgcolor"], "rgb(237,237,237)");
        assert_eq!(fig["layout"]["yaxis"]["gridcolor"], "white");
        assert_eq!(fig["layout"]["yaxis"]["range"], json!([-0.8, 30.0]));
    }

    #[test]
    fn test_render_chart_escapes_script_close() {
        let mut spec = spec();
        spec.title = "</script><b>x</b>".to_string();

        let html = PlotlyRenderer::default().render_chart(&spec);
        assert!(!html.contains("</script><b>"));
        assert!(html.contains(r#"<div id="history-chart""#));
        assert!(html.contains("Plotly.newPlot"));
    }

    #[test]
    fn test_head_markup() {
        let head = PlotlyRenderer::default().head_markup();
        assert!(head.contains(PLOTLY_CDN));
    }
}

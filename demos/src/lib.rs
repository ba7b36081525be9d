// Copyright 2026 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the sunburst demos.

use kurbo::BezPath;
use sunburst_chart::{ArcRenderer, ArcState, ChartOptions, RingLayout, SunburstChart, TreeNode};

/// Source files of a small Flask checkout, weighted by size.
pub const FLASK_JSON: &str = include_str!("../data/flask.json");

/// Parses a tree in the `{ name, description, value, children }` format.
pub fn load_tree(json: &str) -> Result<TreeNode, serde_json::Error> {
    serde_json::from_str(json)
}

/// Builds a validated chart from JSON data, reporting either failure as a string.
pub fn chart_from_json(json: &str, options: ChartOptions) -> Result<SunburstChart, String> {
    let tree = load_tree(json).map_err(|e| format!("invalid tree JSON: {e}"))?;
    SunburstChart::try_new(&tree, options).map_err(|e| format!("invalid tree: {e}"))
}

/// Renders arcs as SVG path data using a [`RingLayout`].
#[derive(Copy, Clone, Debug)]
pub struct SvgPathRenderer {
    pub layout: RingLayout,
}

impl ArcRenderer for SvgPathRenderer {
    type Path = String;

    fn build_arc(&self, arc: &ArcState) -> String {
        let path: BezPath = self.layout.build_arc(arc);
        path.to_svg()
    }
}

/// Wraps path data in a minimal SVG document sized to the chart.
pub fn svg_document<'a>(chart: &SunburstChart, paths: impl IntoIterator<Item = &'a str>) -> String {
    let opts = chart.options();
    let mut out = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}">"#,
        w = opts.plot_width,
        h = opts.height(),
    );
    for d in paths {
        out.push_str(&format!(r#"<path d="{d}"/>"#));
    }
    out.push_str("</svg>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_data_loads() {
        let chart = chart_from_json(FLASK_JSON, ChartOptions::default()).unwrap();
        assert_eq!(chart.arcs().len(), 5);
        assert_eq!(chart.max_depth(), 2);
        assert_eq!(chart.arcs()[1].name, "docs");
    }

    #[test]
    fn bad_json_is_reported() {
        let err = chart_from_json("{ \"name\": 1 }", ChartOptions::default()).unwrap_err();
        assert!(err.starts_with("invalid tree JSON"));

        let hollow = r#"{ "name": "r", "value": 0, "children": [{ "name": "c", "value": 1 }] }"#;
        let err = chart_from_json(hollow, ChartOptions::default()).unwrap_err();
        assert!(err.starts_with("invalid tree:"));
    }

    #[test]
    fn svg_paths_for_every_visible_arc() {
        let chart = chart_from_json(FLASK_JSON, ChartOptions::default()).unwrap();
        let renderer = SvgPathRenderer {
            layout: chart.layout(),
        };
        let paths = chart.render_resting(&renderer);
        assert_eq!(paths.len(), 5);
        assert!(paths.iter().all(|(_, d)| d.starts_with('M')));

        let doc = svg_document(&chart, paths.iter().map(|(_, d)| d.as_str()));
        assert!(doc.starts_with("<svg"));
        assert_eq!(doc.matches("<path").count(), 5);
    }
}

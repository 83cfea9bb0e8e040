//! Graphviz DOT exporter
//!
//! Heat color goes to `color`, thickness (split out of the composite fill)
//! to `penwidth`, the raw call count to `label`.

use crate::adapters::sink::render_graph::RenderGraph;
use crate::domain::style::StyleDescriptor;

/// Graphviz renders a `penwidth` of 0 as invisible; keep cold edges visible.
const MIN_PENWIDTH: f64 = 0.1;

pub struct DotExporter;

impl DotExporter {
    pub fn to_dot(graph: &RenderGraph) -> String {
        let mut lines = Vec::new();

        lines.push("digraph CallGraph {".to_string());
        lines.push("    rankdir=TB;".to_string());
        lines.push("    node [shape=box, fontname=\"Helvetica\", fontsize=12];".to_string());
        lines.push("    edge [fontname=\"Helvetica\", fontsize=10];".to_string());
        lines.push(String::new());

        // Declare nodes in layout order so dot sees callers before callees
        for idx in graph.ordered_nodes() {
            let name = escape_label(&graph.graph[idx]);
            lines.push(format!("    \"{}\";", name));
        }

        lines.push(String::new());

        for (from, to, style) in graph.edges() {
            lines.push(format!(
                "    \"{}\" -> \"{}\" [{}];",
                escape_label(from),
                escape_label(to),
                edge_attributes(style)
            ));
        }

        lines.push("}".to_string());
        lines.join("\n")
    }
}

fn edge_attributes(style: &StyleDescriptor) -> String {
    let (color, thickness) = style
        .split_fill()
        .unwrap_or((style.stroke.as_str(), 0.0));
    format!(
        "color=\"{}\", fontcolor=\"{}\", penwidth={}, label=\"{}\"",
        color,
        style.stroke,
        thickness.max(MIN_PENWIDTH),
        escape_label(&style.label)
    )
}

fn escape_label(label: &str) -> String {
    label
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

use crate::adapters::sink::render_graph::RenderGraph;
use crate::app::dto::{GraphEdge, GraphResponse};
use crate::domain::populator::DrawSummary;

/// Serializes a populated graph as the `GraphResponse` document.
pub struct JsonExporter;

impl JsonExporter {
    pub fn to_response(graph: &RenderGraph, summary: DrawSummary) -> GraphResponse {
        let nodes = graph
            .ordered_nodes()
            .into_iter()
            .map(|idx| graph.graph[idx].clone())
            .collect();

        let edges = graph
            .edges()
            .map(|(from, to, style)| GraphEdge {
                from: from.to_string(),
                to: to.to_string(),
                thickness: style.split_fill().map(|(_, t)| t).unwrap_or(0.0),
                style: style.clone(),
            })
            .collect();

        GraphResponse {
            summary,
            nodes,
            edges,
        }
    }

    pub fn to_json(graph: &RenderGraph, summary: DrawSummary) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&Self::to_response(graph, summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::GraphSink;
    use crate::domain::style::StyleDescriptor;

    #[test]
    fn test_to_json_carries_style_and_thickness() {
        let mut g = RenderGraph::new();
        g.add_edge(
            "a",
            "b",
            &StyleDescriptor {
                stroke: "#1a0000".into(),
                fill: "#1a0000|0.4".into(),
                label: "10".into(),
            },
        );
        let summary = DrawSummary {
            total_edges: 1,
            emitted_edges: 1,
            hidden_edges: 0,
            count_max: 10,
        };

        let json = JsonExporter::to_json(&g, summary).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["nodes"], serde_json::json!(["a", "b"]));
        assert_eq!(value["edges"][0]["style"]["fill"], "#1a0000|0.4");
        assert_eq!(value["edges"][0]["thickness"], 0.4);
        assert_eq!(value["summary"]["count_max"], 10);
    }
}

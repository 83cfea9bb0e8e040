use crate::domain::ports::GraphSink;
use crate::domain::style::StyleDescriptor;
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// Directed graph handed to the exporters: one node per function name,
/// one edge per emitted (styled) call edge.
#[derive(Debug, Default)]
pub struct RenderGraph {
    pub graph: DiGraph<String, StyleDescriptor>,

    /// Mapping from function name to node index
    pub name_to_node: HashMap<String, NodeIndex>,
}

impl RenderGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn get_or_create_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.name_to_node.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(name.to_string());
        self.name_to_node.insert(name.to_string(), idx);
        idx
    }

    pub fn get_node_by_name(&self, name: &str) -> Option<NodeIndex> {
        self.name_to_node.get(name).copied()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Nodes in topological order, or insertion order when the call graph
    /// has a cycle (recursion is common in profiles).
    pub fn ordered_nodes(&self) -> Vec<NodeIndex> {
        toposort(&self.graph, None).unwrap_or_else(|_| self.graph.node_indices().collect())
    }

    /// Edges in emission order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, &StyleDescriptor)> {
        self.graph.edge_indices().filter_map(move |e| {
            let (from, to) = self.graph.edge_endpoints(e)?;
            Some((
                self.graph[from].as_str(),
                self.graph[to].as_str(),
                &self.graph[e],
            ))
        })
    }
}

impl GraphSink for RenderGraph {
    fn add_edge(&mut self, from: &str, to: &str, style: &StyleDescriptor) {
        let source = self.get_or_create_node(from);
        let target = self.get_or_create_node(to);
        self.graph.add_edge(source, target, style.clone());
    }
}

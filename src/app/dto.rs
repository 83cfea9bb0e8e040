use crate::domain::filter::VisibilityThreshold;
use crate::domain::populator::DrawSummary;
use crate::domain::style::{HeatScale, StyleDescriptor};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub source: String,
    pub loaded: bool,
    pub edge_count: usize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Dot,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub edge_count: usize,
    pub count_max: u64,
    /// Edges below the cold cutoff, whether or not they are currently shown.
    pub cold_edges: usize,
    pub threshold: VisibilityThreshold,
    pub scale: HeatScale,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphResponse {
    pub summary: DrawSummary,
    /// Node names in layout (topological) order.
    pub nodes: Vec<String>,
    pub edges: Vec<GraphEdge>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    pub style: StyleDescriptor,
    /// Thickness decoded from `style.fill`, for consumers that don't split it.
    pub thickness: f64,
}

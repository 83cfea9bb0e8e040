use crate::domain::edge::{EdgeRecord, EdgeSet};
use crate::domain::filter::{HotnessFilter, VisibilityThreshold};
use crate::domain::ports::GraphSink;
use crate::domain::stats::Stats;
use crate::domain::style::{StyleDescriptor, StyleMapper};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Everything one draw cycle reads, built fresh per trigger.
///
/// Stats are computed exactly once here, so the filter and the mapper can
/// never observe stats that belong to another edge set.
#[derive(Debug, Clone)]
pub struct DrawCycle<'a> {
    edges: &'a EdgeSet,
    stats: Stats,
    threshold: VisibilityThreshold,
}

impl<'a> DrawCycle<'a> {
    pub fn prepare(edges: &'a EdgeSet, threshold: VisibilityThreshold) -> Self {
        let stats = Stats::compute(edges.iter());
        debug!(edges = edges.len(), count_max = stats.count_max, "stats computed");
        Self {
            edges,
            stats,
            threshold,
        }
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }
}

/// An accepted edge, ready for the sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyledEdge {
    pub from: String,
    pub to: String,
    pub style: StyleDescriptor,
}

/// Outcome of emitting one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawSummary {
    pub total_edges: usize,
    pub emitted_edges: usize,
    pub hidden_edges: usize,
    pub count_max: u64,
}

/// Runs filter then mapper over every record of a draw cycle.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphPopulator {
    mapper: StyleMapper,
}

impl GraphPopulator {
    pub fn new(mapper: StyleMapper) -> Self {
        Self { mapper }
    }

    pub fn mapper(&self) -> &StyleMapper {
        &self.mapper
    }

    /// Accepted edges in input order.
    pub fn populate(&self, cycle: &DrawCycle<'_>) -> Vec<StyledEdge> {
        let filter = HotnessFilter::new(cycle.threshold);
        cycle
            .edges
            .iter()
            .filter(|record| filter.accepts(record, &cycle.stats))
            .map(|record| self.styled(record, &cycle.stats))
            .collect()
    }

    /// Populate the cycle straight into a sink.
    pub fn emit(&self, cycle: &DrawCycle<'_>, sink: &mut dyn GraphSink) -> DrawSummary {
        info!("creating nodes and edges");

        let edges = self.populate(cycle);
        for edge in &edges {
            debug!(
                "adding edge {} -> {} with style {}",
                edge.from,
                edge.to,
                serde_json::to_string(&edge.style).unwrap_or_default()
            );
            sink.add_edge(&edge.from, &edge.to, &edge.style);
        }

        let total_edges = cycle.edges.len();
        DrawSummary {
            total_edges,
            emitted_edges: edges.len(),
            hidden_edges: total_edges - edges.len(),
            count_max: cycle.stats.count_max,
        }
    }

    fn styled(&self, record: &EdgeRecord, stats: &Stats) -> StyledEdge {
        StyledEdge {
            from: record.calling.clone(),
            to: record.callee.clone(),
            style: self.mapper.style(record, stats),
        }
    }
}

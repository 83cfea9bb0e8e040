use crate::adapters::sink::{DotExporter, JsonExporter, RenderGraph};
use crate::app::dto::*;
use crate::domain::edge::{EdgeRecord, EdgeSet};
use crate::domain::error::VizError;
use crate::domain::filter::{HotnessFilter, VisibilityThreshold};
use crate::domain::populator::{DrawCycle, DrawSummary, GraphPopulator};
use crate::domain::ports::{EdgeSource, GraphSink};
use crate::domain::stats::Stats;
use crate::domain::style::{HeatScale, StyleDescriptor, StyleMapper};
use anyhow::{Context as _, Result};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::info;

/// Result of a redraw request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    /// Nothing has been loaded yet; expected before the first load.
    NoDataYet,
    Drawn(DrawSummary),
}

/// Owns the current edge set and visibility configuration and runs draw cycles.
///
/// Cloning shares the same state. Each load swaps the edge set wholesale and
/// drops the stats of the previous set.
#[derive(Clone)]
pub struct VizEngine {
    inner: Arc<RwLock<EngineData>>,
}

struct EngineData {
    source: Arc<dyn EdgeSource>,
    edges: Option<Arc<EdgeSet>>,
    /// Stats of `edges`, present once a draw cycle ran for the current set.
    stats: Option<Stats>,
    threshold: VisibilityThreshold,
    populator: GraphPopulator,
}

impl VizEngine {
    pub fn new(
        source: Arc<dyn EdgeSource>,
        threshold: VisibilityThreshold,
        scale: HeatScale,
    ) -> Self {
        Self {
            inner: Arc::new(RwLock::new(EngineData {
                source,
                edges: None,
                stats: None,
                threshold,
                populator: GraphPopulator::new(StyleMapper::new(scale)),
            })),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, EngineData> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, EngineData> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Load a fresh edge set from the configured source.
    pub fn load(&self) -> Result<HealthResponse> {
        let source = self.read().source.clone();
        let edges = source
            .load()
            .with_context(|| format!("Failed to load edges from {}", source.describe()))?;
        self.replace_edges(edges);
        Ok(self.health())
    }

    /// Replace the edge set with an already-parsed one.
    pub fn replace_edges(&self, edges: EdgeSet) {
        info!("loaded {} edges", edges.len());
        let mut data = self.write();
        data.edges = Some(Arc::new(edges));
        data.stats = None;
    }

    pub fn health(&self) -> HealthResponse {
        let data = self.read();
        HealthResponse {
            source: data.source.describe(),
            loaded: data.edges.is_some(),
            edge_count: data.edges.as_ref().map_or(0, |e| e.len()),
        }
    }

    pub fn threshold(&self) -> VisibilityThreshold {
        self.read().threshold
    }

    /// Toggling leaves the edge set and stats untouched; it only changes what
    /// the next draw cycle emits.
    pub fn set_show_cold_edges(&self, show_cold_edges: bool) {
        let mut data = self.write();
        data.threshold = data.threshold.with_show_cold_edges(show_cold_edges);
    }

    /// Run a full draw cycle with the engine's threshold.
    pub fn redraw(&self, sink: &mut dyn GraphSink) -> Redraw {
        let threshold = self.threshold();
        self.redraw_with(threshold, sink)
    }

    /// Run a full draw cycle with an explicit threshold, without changing the
    /// engine's configuration.
    pub fn redraw_with(&self, threshold: VisibilityThreshold, sink: &mut dyn GraphSink) -> Redraw {
        let (edges, populator) = {
            let data = self.read();
            match &data.edges {
                Some(edges) => (edges.clone(), data.populator),
                None => return Redraw::NoDataYet,
            }
        };

        info!("drawing");
        let cycle = DrawCycle::prepare(&edges, threshold);
        let summary = populator.emit(&cycle, sink);
        self.remember_stats(&edges, cycle.stats());
        info!(
            emitted = summary.emitted_edges,
            hidden = summary.hidden_edges,
            count_max = summary.count_max,
            "draw complete"
        );
        Redraw::Drawn(summary)
    }

    /// Stats only apply to the edge set they were computed from; a load that
    /// raced the cycle keeps its own (absent) stats.
    fn remember_stats(&self, edges: &Arc<EdgeSet>, stats: Stats) {
        let mut data = self.write();
        if data.edges.as_ref().is_some_and(|cur| Arc::ptr_eq(cur, edges)) {
            data.stats = Some(stats);
        }
    }

    /// Style of a single record against the stats of the last draw cycle.
    pub fn style_of(&self, record: &EdgeRecord) -> Result<StyleDescriptor, VizError> {
        let data = self.read();
        let stats = data.stats.ok_or(VizError::UninitializedStats)?;
        Ok(data.populator.mapper().style(record, &stats))
    }

    /// Visibility of a single record against the stats of the last draw cycle.
    pub fn is_visible(&self, record: &EdgeRecord) -> Result<bool, VizError> {
        let data = self.read();
        let stats = data.stats.ok_or(VizError::UninitializedStats)?;
        Ok(HotnessFilter::new(data.threshold).accepts(record, &stats))
    }

    /// Draw into a fresh `RenderGraph`; `None` when nothing is loaded.
    pub fn draw_graph(
        &self,
        threshold: VisibilityThreshold,
    ) -> Option<(RenderGraph, DrawSummary)> {
        let mut graph = RenderGraph::new();
        match self.redraw_with(threshold, &mut graph) {
            Redraw::NoDataYet => None,
            Redraw::Drawn(summary) => Some((graph, summary)),
        }
    }

    pub fn graph(&self, threshold: VisibilityThreshold) -> Result<GraphResponse> {
        let (graph, summary) = self.draw_graph(threshold).context("No edges loaded yet")?;
        Ok(JsonExporter::to_response(&graph, summary))
    }

    pub fn render(&self, threshold: VisibilityThreshold, format: OutputFormat) -> Result<String> {
        let (graph, summary) = self.draw_graph(threshold).context("No edges loaded yet")?;
        match format {
            OutputFormat::Dot => Ok(DotExporter::to_dot(&graph)),
            OutputFormat::Json => {
                JsonExporter::to_json(&graph, summary).context("Failed to serialize graph")
            }
        }
    }

    pub fn stats(&self) -> Result<StatsResponse> {
        let (edges, threshold, scale) = {
            let data = self.read();
            let edges = data.edges.clone().context("No edges loaded yet")?;
            (edges, data.threshold, data.populator.mapper().scale())
        };

        let cycle = DrawCycle::prepare(&edges, threshold);
        let stats = cycle.stats();
        self.remember_stats(&edges, stats);

        let filter = HotnessFilter::new(threshold);
        let cold_edges = edges.iter().filter(|r| filter.is_cold(r, &stats)).count();

        Ok(StatsResponse {
            edge_count: edges.len(),
            count_max: stats.count_max,
            cold_edges,
            threshold,
            scale,
        })
    }
}

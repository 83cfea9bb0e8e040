//! Mock implementations for integration tests.
#![allow(dead_code)]

use std::sync::Mutex;

use anyhow::{Result, anyhow};
use hotspot_viz::domain::edge::EdgeSet;
use hotspot_viz::domain::ports::{EdgeSource, GraphSink};
use hotspot_viz::domain::style::StyleDescriptor;

/// Edge source whose next load result can be swapped between loads.
pub struct MockEdgeSource {
    next: Mutex<Option<EdgeSet>>,
}

impl MockEdgeSource {
    pub fn new(edges: EdgeSet) -> Self {
        Self {
            next: Mutex::new(Some(edges)),
        }
    }

    /// A source that fails to load.
    pub fn failing() -> Self {
        Self {
            next: Mutex::new(None),
        }
    }

    pub fn set_next(&self, edges: EdgeSet) {
        *self.next.lock().unwrap() = Some(edges);
    }
}

impl EdgeSource for MockEdgeSource {
    fn load(&self) -> Result<EdgeSet> {
        self.next
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| anyhow!("mock source has no data"))
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}

/// Sink that records every `add_edge` call in order.
#[derive(Default)]
pub struct RecordingSink {
    pub edges: Vec<(String, String, StyleDescriptor)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&self, from: &str, to: &str) -> Option<&StyleDescriptor> {
        self.edges
            .iter()
            .find(|(f, t, _)| f == from && t == to)
            .map(|(_, _, s)| s)
    }
}

impl GraphSink for RecordingSink {
    fn add_edge(&mut self, from: &str, to: &str, style: &StyleDescriptor) {
        self.edges
            .push((from.to_string(), to.to_string(), style.clone()));
    }
}

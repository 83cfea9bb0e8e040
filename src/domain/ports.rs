use crate::domain::edge::EdgeSet;
use crate::domain::style::StyleDescriptor;
use anyhow::Result;

/// Edge source port (implemented by Infrastructure): produces a complete edge set per load.
pub trait EdgeSource: Send + Sync {
    fn load(&self) -> Result<EdgeSet>;

    /// Human-readable origin, used in logs and health output
    fn describe(&self) -> String;
}

/// Table parser port: turns raw text into edge records.
pub trait TableParser: Send + Sync {
    fn parse(&self, text: &str) -> Result<EdgeSet>;
}

/// Graph sink port: accepts styled edges and owns layout/rendering.
pub trait GraphSink {
    fn add_edge(&mut self, from: &str, to: &str, style: &StyleDescriptor);
}

impl GraphSink for Vec<(String, String, StyleDescriptor)> {
    fn add_edge(&mut self, from: &str, to: &str, style: &StyleDescriptor) {
        self.push((from.to_string(), to.to_string(), style.clone()));
    }
}

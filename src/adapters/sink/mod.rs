//! Graph sink adapters
//!
//! `RenderGraph` receives styled edges from the populator; the exporters turn
//! it into something a renderer can consume.

pub mod dot;
pub mod json;
pub mod render_graph;

pub use dot::DotExporter;
pub use json::JsonExporter;
pub use render_graph::RenderGraph;

//! hotspot-viz library — turns profiler call-edge counts into a styled call graph.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;
pub mod server;

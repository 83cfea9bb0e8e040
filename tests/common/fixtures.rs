//! Test fixture generators for integration tests.
#![allow(dead_code)]

use hotspot_viz::domain::edge::{EdgeRecord, EdgeSet};
use std::io::Write;
use tempfile::NamedTempFile;

pub fn edge(calling: &str, callee: &str, count: u64) -> EdgeRecord {
    EdgeRecord::new(calling, callee, count).unwrap()
}

pub fn edge_set(rows: &[(&str, &str, u64)]) -> EdgeSet {
    rows.iter().map(|&(f, t, c)| edge(f, t, c)).collect()
}

/// a→b (10) and b→c (100): one warm edge, one hottest edge.
pub fn two_hot_edges() -> EdgeSet {
    edge_set(&[("a", "b", 10), ("b", "c", 100)])
}

/// `two_hot_edges` plus a cold c→d (2).
pub fn with_cold_edge() -> EdgeSet {
    edge_set(&[("a", "b", 10), ("b", "c", 100), ("c", "d", 2)])
}

/// Render rows as a profiler counter dump.
pub fn counters_csv(rows: &[(&str, &str, u64)]) -> String {
    let mut out = String::from("calling,callee,count\n");
    for (f, t, c) in rows {
        out.push_str(&format!("{},{},{}\n", f, t, c));
    }
    out
}

/// Write a counter dump to a temp file that lives as long as the handle.
pub fn counters_file(rows: &[(&str, &str, u64)]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(counters_csv(rows).as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

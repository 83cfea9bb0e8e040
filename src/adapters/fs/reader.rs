use crate::adapters::csv::parser::CsvTableParser;
use crate::domain::edge::EdgeSet;
use crate::domain::ports::{EdgeSource, TableParser};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Where the profiler writes its counters.
pub const DEFAULT_COUNTERS_PATH: &str = "./counters.out";

/// File system edge source: reads a counter table and parses it.
pub struct FileEdgeSource {
    path: PathBuf,
    parser: Box<dyn TableParser>,
}

impl FileEdgeSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_parser(path, Box::new(CsvTableParser::new()))
    }

    pub fn with_parser(path: impl Into<PathBuf>, parser: Box<dyn TableParser>) -> Self {
        Self {
            path: path.into(),
            parser,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileEdgeSource {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTERS_PATH)
    }
}

impl EdgeSource for FileEdgeSource {
    fn load(&self) -> Result<EdgeSet> {
        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read counters file: {}", self.path.display()))?;
        info!("read {} bytes from {}", text.len(), self.path.display());

        let edges = self
            .parser
            .parse(&text)
            .with_context(|| format!("Failed to parse counters file: {}", self.path.display()))?;
        info!("csv parsed: {} edges", edges.len());
        Ok(edges)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

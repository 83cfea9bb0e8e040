use crate::domain::edge::{EdgeRecord, EdgeSet};
use crate::domain::error::VizError;
use crate::domain::ports::TableParser;
use anyhow::Result;
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::warn;

/// Column names written by the profiler's counter dump.
pub const CALLING_COLUMN: &str = "calling";
pub const CALLEE_COLUMN: &str = "callee";
pub const COUNT_COLUMN: &str = "count";

/// Header-driven CSV parser for `calling,callee,count` tables.
///
/// The profiler writes calls without a known caller as a short `,<count>`
/// row; those rows are skipped with a warning and the rest of the table loads.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvTableParser;

/// Positions of the required columns in the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnProfile {
    calling: usize,
    callee: usize,
    count: usize,
}

impl ColumnProfile {
    fn from_headers(headers: &StringRecord) -> Result<Self, VizError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| VizError::MissingColumn(name.to_string()))
        };
        Ok(Self {
            calling: find(CALLING_COLUMN)?,
            callee: find(CALLEE_COLUMN)?,
            count: find(COUNT_COLUMN)?,
        })
    }
}

impl CsvTableParser {
    pub fn new() -> Self {
        Self
    }
}

impl TableParser for CsvTableParser {
    fn parse(&self, text: &str) -> Result<EdgeSet> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers = reader.headers().map_err(|e| VizError::MalformedRow {
            line: 1,
            reason: e.to_string(),
        })?;
        let profile = ColumnProfile::from_headers(headers)?;

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row.map_err(|e| VizError::MalformedRow {
                line: e.position().map(|p| p.line()).unwrap_or(0),
                reason: e.to_string(),
            })?;
            if let Some(record) = edge_from_row(&row, &profile)? {
                records.push(record);
            }
        }

        Ok(EdgeSet::new(records))
    }
}

fn edge_from_row(
    row: &StringRecord,
    profile: &ColumnProfile,
) -> Result<Option<EdgeRecord>, VizError> {
    let line = row.position().map(|p| p.line()).unwrap_or(0);
    let malformed = |reason: String| VizError::MalformedRow { line, reason };

    let (Some(calling), Some(callee), Some(raw_count)) = (
        row.get(profile.calling),
        row.get(profile.callee),
        row.get(profile.count),
    ) else {
        warn!(line, fields = row.len(), "skipping short row");
        return Ok(None);
    };
    if calling.is_empty() {
        warn!(line, "skipping row without a caller");
        return Ok(None);
    }

    let count = raw_count
        .parse::<u64>()
        .map_err(|e| malformed(format!("count {:?}: {}", raw_count, e)))?;

    EdgeRecord::new(calling, callee, count)
        .map(Some)
        .map_err(|e| malformed(e.to_string()))
}

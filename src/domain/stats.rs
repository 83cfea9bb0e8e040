use crate::domain::edge::EdgeRecord;
use serde::{Deserialize, Serialize};

/// Summary of an edge set used as the normalization reference for styling
/// and filtering. Recomputed from scratch on every draw cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub count_max: u64,
}

impl Stats {
    /// Single pass over the records; an empty input yields `count_max = 0`.
    pub fn compute<'a>(records: impl IntoIterator<Item = &'a EdgeRecord>) -> Self {
        let count_max = records.into_iter().map(|r| r.count).max().unwrap_or(0);
        Self { count_max }
    }

    /// `count / count_max` clamped to `[0, 1]`; 0 when nothing was ever called.
    pub fn percentile(&self, count: u64) -> f64 {
        if self.count_max == 0 {
            return 0.0;
        }
        (count as f64 / self.count_max as f64).clamp(0.0, 1.0)
    }
}

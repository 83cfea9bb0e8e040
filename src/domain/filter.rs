use crate::domain::edge::EdgeRecord;
use crate::domain::stats::Stats;
use serde::{Deserialize, Serialize};

/// Default cold cutoff: edges below 5% of the hottest edge are cold.
pub const DEFAULT_COLD_FRACTION: f64 = 0.05;

/// Visibility configuration read on every draw cycle.
/// Changing it never touches the edge set or the stats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisibilityThreshold {
    pub show_cold_edges: bool,
    /// Fraction of `count_max` under which an edge counts as cold.
    pub cold_fraction: f64,
}

impl Default for VisibilityThreshold {
    fn default() -> Self {
        Self {
            show_cold_edges: false,
            cold_fraction: DEFAULT_COLD_FRACTION,
        }
    }
}

impl VisibilityThreshold {
    /// `cold_fraction` is clamped to `[0, 1]`; NaN falls back to the default.
    pub fn new(show_cold_edges: bool, cold_fraction: f64) -> Self {
        let cold_fraction = if cold_fraction.is_nan() {
            DEFAULT_COLD_FRACTION
        } else {
            cold_fraction.clamp(0.0, 1.0)
        };
        Self {
            show_cold_edges,
            cold_fraction,
        }
    }

    pub fn with_show_cold_edges(self, show_cold_edges: bool) -> Self {
        Self {
            show_cold_edges,
            ..self
        }
    }
}

/// Decides whether an edge reaches the graph sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct HotnessFilter {
    threshold: VisibilityThreshold,
}

impl HotnessFilter {
    pub fn new(threshold: VisibilityThreshold) -> Self {
        Self { threshold }
    }

    /// An edge is cold when `count < cold_fraction * count_max`.
    /// With `count_max == 0` nothing is cold.
    pub fn is_cold(&self, record: &EdgeRecord, stats: &Stats) -> bool {
        if stats.count_max == 0 {
            return false;
        }
        (record.count as f64) < self.threshold.cold_fraction * stats.count_max as f64
    }

    pub fn accepts(&self, record: &EdgeRecord, stats: &Stats) -> bool {
        self.threshold.show_cold_edges || !self.is_cold(record, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(count: u64) -> EdgeRecord {
        EdgeRecord::new("a", "b", count).unwrap()
    }

    #[test]
    fn test_cold_edge_hidden_by_default() {
        let stats = Stats { count_max: 100 };
        let filter = HotnessFilter::default();
        assert!(!filter.accepts(&edge(2), &stats));
        assert!(!filter.accepts(&edge(4), &stats));
    }

    #[test]
    fn test_cutoff_is_inclusive_of_boundary() {
        let stats = Stats { count_max: 100 };
        let filter = HotnessFilter::default();
        assert!(filter.accepts(&edge(5), &stats));
        assert!(filter.accepts(&edge(10), &stats));
        assert!(filter.accepts(&edge(100), &stats));
    }

    #[test]
    fn test_toggle_shows_cold_edges() {
        let stats = Stats { count_max: 100 };
        let filter = HotnessFilter::new(VisibilityThreshold::default().with_show_cold_edges(true));
        assert!(filter.accepts(&edge(0), &stats));
        assert!(filter.accepts(&edge(2), &stats));
    }

    #[test]
    fn test_zero_max_filters_nothing() {
        let stats = Stats { count_max: 0 };
        let filter = HotnessFilter::default();
        assert!(!filter.is_cold(&edge(0), &stats));
        assert!(filter.accepts(&edge(0), &stats));
    }

    #[test]
    fn test_cold_fraction_is_clamped() {
        let threshold = VisibilityThreshold::new(false, 3.0);
        assert_eq!(threshold.cold_fraction, 1.0);
        let threshold = VisibilityThreshold::new(false, -0.5);
        assert_eq!(threshold.cold_fraction, 0.0);
    }

    #[test]
    fn test_nan_fraction_keeps_default_cutoff() {
        let threshold = VisibilityThreshold::new(false, f64::NAN);
        assert_eq!(threshold.cold_fraction, DEFAULT_COLD_FRACTION);
        let stats = Stats { count_max: 100 };
        assert!(!HotnessFilter::new(threshold).accepts(&edge(2), &stats));
    }

    #[test]
    fn test_custom_fraction() {
        let stats = Stats { count_max: 100 };
        let filter = HotnessFilter::new(VisibilityThreshold::new(false, 0.5));
        assert!(!filter.accepts(&edge(49), &stats));
        assert!(filter.accepts(&edge(50), &stats));
    }
}

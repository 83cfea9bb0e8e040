use crate::domain::edge::EdgeRecord;
use crate::domain::stats::Stats;
use serde::{Deserialize, Serialize};

/// Visual encoding of one edge, in the shape the graph sink consumes.
///
/// `fill` is a composite `"<color>|<thickness>"` string: the sink's fill
/// attribute carries both the heat color and the stroke-width multiplier.
/// Thickness is written in plain decimal (shortest round-trip digits, never
/// exponent notation), so `4e-7` is written as `0.0000004`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleDescriptor {
    pub stroke: String,
    pub fill: String,
    pub label: String,
}

impl StyleDescriptor {
    /// Split the composite `fill` back into color and thickness.
    pub fn split_fill(&self) -> Option<(&str, f64)> {
        let (color, thickness) = self.fill.split_once('|')?;
        Some((color, thickness.parse().ok()?))
    }
}

/// Scale parameters for the heat encoding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatScale {
    /// Thickness reached by the hottest edge (`count == count_max`).
    pub max_thickness: f64,
}

impl Default for HeatScale {
    fn default() -> Self {
        Self { max_thickness: 4.0 }
    }
}

/// Maps an edge and the current stats to a deterministic style.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleMapper {
    scale: HeatScale,
}

impl StyleMapper {
    pub fn new(scale: HeatScale) -> Self {
        Self { scale }
    }

    pub fn scale(&self) -> HeatScale {
        self.scale
    }

    pub fn style(&self, record: &EdgeRecord, stats: &Stats) -> StyleDescriptor {
        let percentile = stats.percentile(record.count);
        let color = heat_color(percentile);
        let thickness = percentile * self.scale.max_thickness;

        StyleDescriptor {
            fill: format!("{}|{}", color, thickness),
            stroke: color,
            label: record.count.to_string(),
        }
    }
}

/// Pure red channel scaled by hotness: `#rr0000`.
pub fn heat_color(percentile: f64) -> String {
    let red = (percentile.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("#{:02x}0000", red)
}

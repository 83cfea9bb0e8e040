use crate::app::dto::OutputFormat;
use crate::app::engine::VizEngine;
use anyhow::{Context as _, Result};
use std::path::Path;

/// clap value parser for `--cold-fraction`: a finite number in `[0, 1]`.
pub fn parse_cold_fraction(raw: &str) -> Result<f64, String> {
    let value: f64 = raw.parse().map_err(|e| format!("{raw:?} is not a number: {e}"))?;
    if !(0.0..=1.0).contains(&value) {
        return Err(format!("{raw} is not between 0 and 1"));
    }
    Ok(value)
}

/// clap value parser for `--max-thickness`: a finite, non-negative number.
pub fn parse_max_thickness(raw: &str) -> Result<f64, String> {
    let value: f64 = raw.parse().map_err(|e| format!("{raw:?} is not a number: {e}"))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("{raw} must be a finite, non-negative number"));
    }
    Ok(value)
}

/// Render the loaded edges and write them to `output`, or stdout when absent.
pub fn render_graph(engine: &VizEngine, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    let rendered = engine.render(engine.threshold(), format)?;

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            println!("Graph written to {} ({:?})", path.display(), format);
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

pub fn display_stats(engine: &VizEngine) -> Result<()> {
    let stats = engine.stats()?;
    let threshold = stats.threshold;

    println!("Call edge hotness:");
    println!("  Edges:          {:>8}", stats.edge_count);
    println!("  Max count:      {:>8}", stats.count_max);
    println!(
        "  Cold edges:     {:>8} (below {}% of max)",
        stats.cold_edges,
        threshold.cold_fraction * 100.0
    );
    println!(
        "  Cold edges are {}",
        if threshold.show_cold_edges {
            "shown"
        } else {
            "hidden"
        }
    );
    println!("  Max thickness:  {:>8}", stats.scale.max_thickness);
    Ok(())
}

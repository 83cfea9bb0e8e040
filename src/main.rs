use anyhow::Result;
use clap::{Parser, Subcommand};
use hotspot_viz::adapters::fs::reader::FileEdgeSource;
use hotspot_viz::app::dto::OutputFormat;
use hotspot_viz::app::engine::VizEngine;
use hotspot_viz::cli;
use hotspot_viz::domain::filter::{DEFAULT_COLD_FRACTION, VisibilityThreshold};
use hotspot_viz::domain::style::HeatScale;
use hotspot_viz::server::http;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "hotviz", author, version, about, long_about = None)]
struct Cli {
    /// Counter table written by the profiler (calling,callee,count)
    counters: PathBuf,

    /// Include edges below the cold cutoff
    #[arg(long, global = true)]
    show_cold_edges: bool,

    /// Fraction of the hottest edge's count under which an edge is cold
    #[arg(long, global = true, default_value_t = DEFAULT_COLD_FRACTION, value_parser = cli::parse_cold_fraction)]
    cold_fraction: f64,

    /// Stroke thickness of the hottest edge
    #[arg(long, global = true, default_value_t = HeatScale::default().max_thickness, value_parser = cli::parse_max_thickness)]
    max_thickness: f64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the styled call graph
    Render {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Dot)]
        format: OutputFormat,

        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print edge count, max count and cold edge count
    Stats,
    /// Serve the graph over HTTP
    Serve {
        #[arg(long, default_value = "127.0.0.1:8080")]
        addr: SocketAddr,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    let engine = VizEngine::new(
        Arc::new(FileEdgeSource::new(args.counters.clone())),
        VisibilityThreshold::new(args.show_cold_edges, args.cold_fraction),
        HeatScale {
            max_thickness: args.max_thickness,
        },
    );
    engine.load()?;

    match args.command {
        Command::Render { format, output } => cli::render_graph(&engine, format, output.as_deref()),
        Command::Stats => cli::display_stats(&engine),
        Command::Serve { addr } => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(http::serve(engine, addr))
        }
    }
}

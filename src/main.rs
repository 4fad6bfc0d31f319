use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use route_graph_viewer::app::run_viewer;
use route_graph_viewer::layout::LayoutMode;
use route_graph_viewer::render::svg::write_svg;
use route_graph_viewer::state::AppState;
use route_graph_viewer::{pipeline, VizConfig};

/// Draw a sample of a weighted road graph with its edge weights.
#[derive(Debug, Parser)]
#[command(name = "route-graph-viewer", version, about)]
struct Cli {
    /// Adjacency-list graph file (`Node: <id>` blocks of `<neighbor> <weight>`)
    file: Option<PathBuf>,

    /// JSON config file; flags given here override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum number of nodes to draw
    #[arg(short = 'n', long)]
    max_nodes: Option<usize>,

    /// Layout algorithm
    #[arg(short, long, value_enum)]
    layout: Option<LayoutMode>,

    /// Write an SVG to this path instead of opening a window
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Seed for the random and spring layouts
    #[arg(long)]
    seed: Option<u64>,

    /// Relaxation passes for the spring layout
    #[arg(long)]
    spring_iterations: Option<usize>,

    /// Figure title
    #[arg(long)]
    title: Option<String>,

    /// Node colour name, e.g. `deepskyblue`
    #[arg(long)]
    node_color: Option<String>,
}

impl Cli {
    fn into_config(self) -> Result<VizConfig> {
        let mut config = match &self.config {
            Some(path) => VizConfig::from_json_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => VizConfig::default(),
        };
        if let Some(file) = self.file {
            config.file_path = file;
        }
        if let Some(n) = self.max_nodes {
            config.max_nodes_to_draw = n;
        }
        if let Some(mode) = self.layout {
            config.layout_mode = mode;
        }
        if let Some(output) = self.output {
            config.output = Some(output);
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(iterations) = self.spring_iterations {
            config.spring_iterations = iterations;
        }
        if let Some(title) = self.title {
            config.title = title;
        }
        if let Some(color) = self.node_color {
            config.node_color = color;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Cli::parse().into_config()?;
    let graph = pipeline::load(&config)
        .with_context(|| format!("loading graph {}", config.file_path.display()))?;
    let output = pipeline::run_graph(&graph, &config)?;

    if let Some(path) = &config.output {
        write_svg(&output.figure, path, config.width, config.height)?;
    } else {
        run_viewer(AppState::from_output(&config, output))
            .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))?;
    }
    Ok(())
}

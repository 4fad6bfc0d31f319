use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Write a synthetic street grid in the adjacency-list format.
#[derive(Debug, Parser)]
#[command(name = "generate_sample", about)]
struct Args {
    /// Blocks north to south
    #[arg(long, default_value_t = 20)]
    rows: usize,

    /// Blocks west to east
    #[arg(long, default_value_t = 20)]
    cols: usize,

    /// Seed for street lengths and diagonal shortcuts
    #[arg(long, default_value_t = 42)]
    seed: u64,

    #[arg(short, long, default_value = "nodes.txt")]
    output: PathBuf,
}

/// Typical block length in metres.
const BLOCK: f64 = 120.0;
/// Share of blocks that get a diagonal shortcut.
const SHORTCUT_RATE: f64 = 0.15;
/// Synthetic node ids start here, mimicking OSM-style numeric ids.
const FIRST_ID: u64 = 3_000_000_000;

fn node_id(cols: usize, r: usize, c: usize) -> u64 {
    FIRST_ID + (r * cols + c) as u64
}

/// Street length with ±20 % jitter.
fn street(rng: &mut StdRng, base: f64) -> f64 {
    base * rng.gen_range(0.8..1.2)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = StdRng::seed_from_u64(args.seed);

    // Adjacency per node, filled symmetrically so every block lists its
    // neighbours the way an exported road graph does.
    let n = args.rows * args.cols;
    let mut adjacency: Vec<Vec<(u64, f64)>> = vec![Vec::new(); n];
    let link = |adjacency: &mut [Vec<(u64, f64)>], a: (usize, usize), b: (usize, usize), d: f64| {
        adjacency[a.0 * args.cols + a.1].push((node_id(args.cols, b.0, b.1), d));
        adjacency[b.0 * args.cols + b.1].push((node_id(args.cols, a.0, a.1), d));
    };

    for r in 0..args.rows {
        for c in 0..args.cols {
            if c + 1 < args.cols {
                let d = street(&mut rng, BLOCK);
                link(&mut adjacency, (r, c), (r, c + 1), d);
            }
            if r + 1 < args.rows {
                let d = street(&mut rng, BLOCK);
                link(&mut adjacency, (r, c), (r + 1, c), d);
            }
            if r + 1 < args.rows && c + 1 < args.cols && rng.gen_bool(SHORTCUT_RATE) {
                let d = street(&mut rng, BLOCK * std::f64::consts::SQRT_2);
                link(&mut adjacency, (r, c), (r + 1, c + 1), d);
            }
        }
    }

    let file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let mut out = BufWriter::new(file);
    let mut edges = 0;
    for (i, neighbours) in adjacency.iter().enumerate() {
        writeln!(out, "Node: {}", node_id(args.cols, i / args.cols, i % args.cols))?;
        for (id, d) in neighbours {
            writeln!(out, "{id} {d:.3}")?;
        }
        edges += neighbours.len();
    }
    out.flush()?;

    println!(
        "Wrote {n} nodes ({} undirected edges) to {}",
        edges / 2,
        args.output.display()
    );
    Ok(())
}

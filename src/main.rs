// Builds a large tree from random data so it can be timed and profiled with external tools.

use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;

use ordered_tree::fixture::{self, DataConfig};
use ordered_tree::hook::Logged;
use ordered_tree::OrderedTree;

#[derive(Parser)]
#[command(name = "ordered-tree")]
#[command(about = "Build, time and optionally print a large unbalanced BST", long_about = None)]
struct Cli {
    /// Number of unique values to insert
    #[arg(short = 'n', long, default_value_t = 1_000_000)]
    count: usize,

    /// Smallest value that may be drawn
    #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
    low: i32,

    /// Largest value that may be drawn
    #[arg(long, default_value_t = 2_000_000, allow_hyphen_values = true)]
    high: i32,

    /// Seed for reproducible data
    #[arg(short, long)]
    seed: Option<u64>,

    /// Delete the value at this position of the generated data once the tree is built
    #[arg(short, long)]
    delete_index: Option<usize>,

    /// Write the whole tree to standard output
    #[arg(short, long)]
    print: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = DataConfig {
        count: cli.count,
        low: cli.low,
        high: cli.high,
        seed: cli.seed,
    };
    let data = fixture::generate(&config).context("generating tree data")?;

    // Removals are only logged at `debug` so the final drop stays quiet by default.
    let mut tree = OrderedTree::with_hook(Logged);
    let start = Instant::now();
    for value in &data {
        tree.insert(*value);
    }
    log::info!(
        "inserted {} values in {:?} (height {})",
        data.len(),
        start.elapsed(),
        tree.height()
    );

    if let Some(index) = cli.delete_index {
        let target = *data
            .get(index)
            .with_context(|| format!("no value at position {index} of {}", data.len()))?;
        let start = Instant::now();
        let deleted = tree.delete(&target);
        log::info!("deleted {target} ({deleted}) in {:?}", start.elapsed());
    }

    if cli.print {
        tree.print().context("writing tree to stdout")?;
    }

    println!("done");
    Ok(())
}

use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::{ensure, Result};
use clap::{ArgAction, Parser};
use indicatif::ProgressIterator;
use itertools::Itertools;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use skill_paths::{
    loader::load_network,
    search::dijkstra::{find_shortest_path, find_shortest_path_isolated},
    utility::{get_progressbar_long_jobs, init_tracing},
};

/// Times random shortest path queries on a network
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Network file with one JSON user record per line
    #[arg(short, long)]
    network: PathBuf,

    /// Number of random queries
    #[arg(short, long, default_value_t = 1_000)]
    queries: u64,

    /// Seed for drawing the query pairs
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Keep the search state apart from the loaded network
    #[arg(short, long)]
    isolated: bool,

    /// More log output, repeat for even more
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let (mut graph, _) = load_network(&args.network)?;
    let users = graph.vertices().map(|user| user.id()).collect_vec();
    ensure!(users.len() >= 2, "network needs at least two users");

    let mut rng = StdRng::seed_from_u64(args.seed);
    let pairs = (0..args.queries)
        .filter_map(|_| {
            let pair = users.choose_multiple(&mut rng, 2).copied().collect_vec();
            Some((*pair.first()?, *pair.get(1)?))
        })
        .collect_vec();

    let mut found = 0u64;
    let mut total = Duration::ZERO;
    let bar = get_progressbar_long_jobs("Running queries", pairs.len() as u64);
    for &(source, target) in pairs.iter().progress_with(bar) {
        let start = Instant::now();
        let path = if args.isolated {
            find_shortest_path_isolated(&graph, source, target)?
        } else {
            find_shortest_path(&mut graph, source, target)?
        };
        total += start.elapsed();

        if path.is_some() {
            found += 1;
        }
    }

    println!("{} of {} queries found a path", found, pairs.len());
    println!(
        "Average query duration is {:?}",
        total / pairs.len().max(1) as u32
    );

    Ok(())
}

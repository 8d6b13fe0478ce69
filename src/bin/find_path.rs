use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use skill_paths::{
    loader::load_network,
    search::dijkstra::{find_shortest_path, find_shortest_path_isolated},
    utility::init_tracing,
};

/// Finds the path between two users that passes through the most skilled people
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Network file with one JSON user record per line
    #[arg(short, long)]
    network: PathBuf,

    /// Id of the user the path starts at
    #[arg(short, long)]
    source: u64,

    /// Id of the user the path ends at
    #[arg(short, long)]
    target: u64,

    /// Keep the search state apart from the loaded network
    #[arg(short, long)]
    isolated: bool,

    /// Print the path as JSON
    #[arg(short, long)]
    json: bool,

    /// More log output, repeat for even more
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let (mut graph, report) = load_network(&args.network)?;
    println!(
        "{} users loaded, {} records skipped",
        graph.number_of_vertices(),
        report.skipped
    );

    let path = if args.isolated {
        find_shortest_path_isolated(&graph, args.source, args.target)
    } else {
        find_shortest_path(&mut graph, args.source, args.target)
    }
    .with_context(|| format!("cannot search from {} to {}", args.source, args.target))?;

    if args.json {
        println!("{}", serde_json::to_string(&path)?);
        return Ok(());
    }

    match path {
        Some(path) => println!("{} with distance {}", path, path.distance),
        None => println!("no path from {} to {}", args.source, args.target),
    }

    Ok(())
}

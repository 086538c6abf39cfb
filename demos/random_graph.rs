//! Example: all-pairs shortest paths on a random dense graph.
//!
//! Run with:
//! `cargo run --release --example random_graph -- [nodes] [arcs] [seed]`
//!
//! Defaults to 1000 nodes and 150000 arcs with costs drawn from `[0, 4)`,
//! then prints the seed, the wall-clock time of one computation and the
//! resident-memory delta.

use std::env;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use apsp_dp::{AdjacencyMatrix, FloydWarshall};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

const NODES: usize = 1_000;
const ARCS: usize = 150_000;
const MIN_WEIGHT: f64 = 0.0;
const MAX_WEIGHT: f64 = 4.0;

fn main() {
    let mut args = env::args().skip(1);
    let nodes = parse_or(args.next(), NODES);
    let arcs = parse_or(args.next(), ARCS);
    let seed = parse_or(
        args.next(),
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0),
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let graph = match random_adjacency_matrix(nodes, arcs, &mut rng) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("random_graph: {err}");
            std::process::exit(2);
        }
    };
    println!("Seed: {seed}");

    let mut sys = System::new();
    let rss_before = rss_kib(&mut sys);
    let start = Instant::now();
    let data = FloydWarshall::new().compute(&graph);
    let elapsed = start.elapsed();
    let rss_after = rss_kib(&mut sys);

    println!("Time elapsed: {} milliseconds.", elapsed.as_millis());
    println!("RSS delta: {} KiB", rss_after.saturating_sub(rss_before));
    println!("Negative cycle: {}", data.has_negative_cycle());

    if nodes > 1 {
        match data.path(0, nodes - 1) {
            Ok(path) if !path.is_empty() => println!(
                "Shortest path 0 -> {}: {:?} (cost {:.3})",
                nodes - 1,
                path,
                data.cost(0, nodes - 1).unwrap_or(f64::INFINITY)
            ),
            Ok(_) => println!("Node {} is unreachable from 0.", nodes - 1),
            Err(err) => println!("Path reconstruction failed: {err}"),
        }
    }
    if nodes <= 8 {
        println!("{}", data.cost_matrix());
        println!();
        println!("{}", data.parent_matrix());
    }
}

/// Graph over `nodes` nodes with *approximately* `arcs` arcs; duplicates
/// overwrite, self-loops are dropped.
fn random_adjacency_matrix(
    nodes: usize,
    arcs: usize,
    rng: &mut StdRng,
) -> apsp_dp::Result<AdjacencyMatrix> {
    let mut m = AdjacencyMatrix::new(nodes)?;
    if nodes == 0 {
        return Ok(m);
    }
    for _ in 0..arcs {
        let tail = rng.gen_range(0..nodes);
        let head = rng.gen_range(0..nodes);
        let weight = rng.gen_range(MIN_WEIGHT..MAX_WEIGHT);
        m.set_cost(tail, head, weight)?;
    }
    Ok(m)
}

fn parse_or<T: std::str::FromStr>(arg: Option<String>, default: T) -> T {
    arg.and_then(|a| a.parse().ok()).unwrap_or(default)
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}

use std::time::{Duration, Instant};

use anyhow::{ensure, Result};
use clap::Parser;

use minimax_2048::engine::Board;
use minimax_2048::search::{Minimax, SearchMode, SearchOutcome};

/// Fixed measurement corpus of mid-game positions with their running
/// scores. The sixth board reaches into the high word.
const CORPUS: [(u64, u64, u64); 10] = [
    (0x1001, 0x0, 0),
    (0x102081, 0x0, 1),
    (0x101101001, 0x0, 18_265_431),
    (0x11110001001, 0x0, 0),
    (0x12861001, 0x0, 0),
    (0x1991221001, 0x1, 9),
    (0x2002, 0x0, 98),
    (0x3003, 0x0, 1000),
    (0x4004000000004004, 0x0, 0),
    (0x1012345678901, 0x0, 10),
];

#[derive(Debug, Parser)]
#[command(name = "shootout", about = "Times the search modes over a fixed corpus")]
struct Args {
    /// Search depth for every position
    #[arg(long, default_value_t = 6)]
    depth: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let modes = [
        ("sequential", SearchMode::Sequential),
        ("parallel", SearchMode::Parallel),
        ("double-deep", SearchMode::ParallelDoubleDeep),
    ];

    let mut baseline: Option<Vec<SearchOutcome>> = None;
    for (label, mode) in modes {
        let minimax = Minimax::new(mode);
        let start = Instant::now();
        let outcomes: Vec<SearchOutcome> = CORPUS
            .iter()
            .map(|&(lo, hi, score)| minimax.search(Board::from_raw(lo, hi), score, args.depth))
            .collect();
        report(label, &outcomes, start.elapsed());
        match &baseline {
            None => baseline = Some(outcomes),
            Some(expected) => ensure!(
                *expected == outcomes,
                "{label} disagreed with the sequential baseline"
            ),
        }
    }
    println!("All modes agree on every position.");
    Ok(())
}

fn report(label: &str, outcomes: &[SearchOutcome], elapsed: Duration) {
    let nodes: u64 = outcomes.iter().map(|o| o.nodes).sum();
    let evaluation: i64 = outcomes.iter().map(|o| o.evaluation).sum();
    println!(
        "{label:>12}: evaluation sum {evaluation}, nodes {nodes}, {} ms",
        elapsed.as_millis()
    );
}

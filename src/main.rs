use std::time::{Duration, Instant};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;

use minimax_2048::engine::{tile_label, Board};
use minimax_2048::search::{Minimax, SearchMode};

#[derive(Debug, Parser)]
#[command(name = "minimax-2048", about = "Self-play runner for the worst-case searcher")]
struct Args {
    /// Search depth in plies (move and spawn plies both count)
    #[arg(long, default_value_t = 4)]
    depth: u32,

    /// Execution strategy for each search
    #[arg(long, value_enum, default_value_t = ModeArg::Parallel)]
    mode: ModeArg,

    /// Stop after this many moves
    #[arg(long)]
    steps: Option<u64>,

    /// Stop once the score reaches this value
    #[arg(long)]
    stop_score: Option<u64>,

    /// Seed for the spawn RNG (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Starting position as LOW:HIGH hex words (two random tiles when omitted)
    #[arg(long)]
    board: Option<Board>,

    /// Suppress the live status line
    #[arg(long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Sequential,
    Parallel,
    DoubleDeep,
}

impl From<ModeArg> for SearchMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Sequential => SearchMode::Sequential,
            ModeArg::Parallel => SearchMode::Parallel,
            ModeArg::DoubleDeep => SearchMode::ParallelDoubleDeep,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let minimax = Minimax::new(args.mode.into());

    let mut board = match args.board {
        Some(board) => board,
        None => Board::EMPTY
            .with_random_tile(&mut rng)
            .with_random_tile(&mut rng),
    };
    let mut score: u64 = 0;
    let mut moves: u64 = 0;
    let mut nodes: u64 = 0;

    let status = if args.quiet {
        None
    } else {
        Some(status_spinner()?)
    };
    let start = Instant::now();

    loop {
        if args.steps.is_some_and(|limit| moves >= limit) {
            break;
        }
        if args.stop_score.is_some_and(|target| score >= target) {
            break;
        }
        let outcome = minimax.search(board, score, args.depth);
        let Some(direction) = outcome.direction else {
            break;
        };
        nodes += outcome.nodes;
        let (shifted, gained) = board.shift(direction);
        board = shifted.with_random_tile(&mut rng);
        score += gained;
        moves += 1;
        if let Some(pb) = &status {
            pb.set_message(format!("moves: {moves} | score: {score} | nodes: {nodes}"));
        }
    }

    if let Some(pb) = status {
        pb.finish_and_clear();
    }
    let elapsed = start.elapsed().as_secs_f64().max(1e-6);
    println!("{board}");
    println!(
        "Moves: {} | Score: {} | Highest tile: {} | Nodes: {} | {:.1} moves/sec",
        moves,
        score,
        tile_label(board.highest_exponent()),
        nodes,
        moves as f64 / elapsed
    );
    Ok(())
}

fn status_spinner() -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template(
        "{spinner} {elapsed_precise} | {msg}",
    )?);
    pb.enable_steady_tick(Duration::from_millis(120));
    Ok(pb)
}

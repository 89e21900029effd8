//! Worst-case minimax move selection.
//!
//! The tree alternates strict plies: the player picks the move with the
//! best guaranteed outcome, and the spawn ply answers with the worst tile
//! placement for the player. There is no chance node; a position's value
//! is its floor, not its expectation. All execution modes walk the same
//! tree and return identical outcomes, parallelism only changes who walks
//! which subtree.

mod minimax;

pub use minimax::Minimax;

use crate::engine::{Board, Move, Score};

/// Signed position value. Scores are unsigned, but lost positions sit
/// below every reachable score, so evaluations carry a sign.
pub type Evaluation = i64;

/// Ceiling a spawn ply starts from before taking minima.
pub const EVAL_MAX: Evaluation = 100_000;

/// Value of a lost position: a player ply with no legal move.
pub const EVAL_MIN: Evaluation = -EVAL_MAX;

/// Scores a leaf position. Workers share one evaluator across subtrees,
/// hence the `Sync` bound.
pub trait Evaluator: Sync {
    fn evaluate(&self, board: Board, score: Score) -> Evaluation;
}

/// The stock strategy: chase the running score and nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScoreEvaluator;

impl Evaluator for ScoreEvaluator {
    #[inline]
    fn evaluate(&self, _board: Board, score: Score) -> Evaluation {
        score as Evaluation
    }
}

/// How a search divides its work. Every mode returns the same
/// [`SearchOutcome`] for the same arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// One thread walks the whole tree.
    Sequential,
    /// The root's moves fan out across the rayon pool.
    Parallel,
    /// The root's moves and each of their spawn replies fan out.
    ParallelDoubleDeep,
}

/// What a search found: the move to play, how many leaves it evaluated,
/// and the worst-case value of the best move. `direction` is `None` only
/// when the position has no legal move at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub direction: Option<Move>,
    pub nodes: u64,
    pub evaluation: Evaluation,
}

use rayon::prelude::*;

use crate::engine::{player_moves, tile_spawns, Board, Score};

use super::{Evaluation, Evaluator, ScoreEvaluator, SearchMode, SearchOutcome, EVAL_MAX, EVAL_MIN};

enum Node { Max, Min }

/// A minimax searcher over a fixed execution mode and evaluator.
///
/// ```
/// use minimax_2048::engine::Board;
/// use minimax_2048::search::{Minimax, SearchMode};
///
/// let minimax = Minimax::new(SearchMode::Sequential);
/// let outcome = minimax.search(Board::from_raw(0x1001, 0), 0, 3);
/// assert!(outcome.direction.is_some());
/// assert!(outcome.nodes > 0);
/// ```
pub struct Minimax<E = ScoreEvaluator> {
    mode: SearchMode,
    evaluator: E,
}

impl Minimax {
    /// A searcher with the stock score-chasing evaluator.
    pub fn new(mode: SearchMode) -> Self {
        Minimax::with_evaluator(mode, ScoreEvaluator)
    }
}

impl<E: Evaluator> Minimax<E> {
    pub fn with_evaluator(mode: SearchMode, evaluator: E) -> Self {
        Minimax { mode, evaluator }
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Search `depth` plies ahead and pick the move whose worst-case value
    /// is highest. Ties go to the earliest move in canonical order, and a
    /// position where every move loses still returns that earliest move.
    /// Only a position with no legal move yields `direction: None`.
    ///
    /// Panics if `depth` is zero; the root must have at least the player
    /// ply to pick a direction from.
    pub fn search(&self, board: Board, score: Score, depth: u32) -> SearchOutcome {
        assert!(depth >= 1, "search needs at least one ply");
        let moves = player_moves(board, score);
        if moves.is_empty() {
            return SearchOutcome {
                direction: None,
                nodes: 0,
                evaluation: EVAL_MIN,
            };
        }
        let results: Vec<(u64, Evaluation)> = match self.mode {
            SearchMode::Sequential => moves
                .iter()
                .map(|mv| self.evaluate_node(mv.board, mv.score, depth - 1, Node::Min))
                .collect(),
            SearchMode::Parallel => moves
                .par_iter()
                .map(|mv| self.evaluate_node(mv.board, mv.score, depth - 1, Node::Min))
                .collect(),
            SearchMode::ParallelDoubleDeep => moves
                .par_iter()
                .map(|mv| self.evaluate_min_fanned(mv.board, mv.score, depth - 1))
                .collect(),
        };
        // `collect` stores each result at its move's index, so the strict
        // `>` below sees candidates in canonical order no matter which
        // worker finished first.
        let mut nodes = 0;
        let mut best = EVAL_MIN;
        let mut direction = moves[0].direction;
        for (mv, &(subtree_nodes, evaluation)) in moves.iter().zip(&results) {
            nodes += subtree_nodes;
            if evaluation > best {
                best = evaluation;
                direction = mv.direction;
            }
        }
        SearchOutcome {
            direction: Some(direction),
            nodes,
            evaluation: best,
        }
    }

    fn evaluate_node(&self, board: Board, score: Score, depth: u32, node: Node) -> (u64, Evaluation) {
        if depth == 0 {
            return (1, self.evaluator.evaluate(board, score));
        }
        match node {
            Node::Max => self.evaluate_max(board, score, depth),
            Node::Min => self.evaluate_min(board, score, depth),
        }
    }

    fn evaluate_max(&self, board: Board, score: Score, depth: u32) -> (u64, Evaluation) {
        let moves = player_moves(board, score);
        if moves.is_empty() {
            // A lost position, not an evaluated leaf: zero nodes.
            return (0, EVAL_MIN);
        }
        let mut nodes = 0;
        let mut best = EVAL_MIN;
        for mv in &moves {
            let (subtree_nodes, evaluation) =
                self.evaluate_node(mv.board, mv.score, depth - 1, Node::Min);
            nodes += subtree_nodes;
            best = best.max(evaluation);
        }
        (nodes, best)
    }

    fn evaluate_min(&self, board: Board, score: Score, depth: u32) -> (u64, Evaluation) {
        let mut nodes = 0;
        let mut worst = EVAL_MAX;
        for spawn in tile_spawns(board, score) {
            let (subtree_nodes, evaluation) =
                self.evaluate_node(spawn.board, spawn.score, depth - 1, Node::Max);
            nodes += subtree_nodes;
            worst = worst.min(evaluation);
        }
        (nodes, worst)
    }

    /// A min ply whose spawns fan out across the pool. Same contract as
    /// `evaluate_node` at a min node, including the leaf cut at depth zero.
    fn evaluate_min_fanned(&self, board: Board, score: Score, depth: u32) -> (u64, Evaluation) {
        if depth == 0 {
            return (1, self.evaluator.evaluate(board, score));
        }
        let spawns = tile_spawns(board, score);
        let results: Vec<(u64, Evaluation)> = spawns
            .par_iter()
            .map(|spawn| self.evaluate_node(spawn.board, spawn.score, depth - 1, Node::Max))
            .collect();
        let mut nodes = 0;
        let mut worst = EVAL_MAX;
        for (subtree_nodes, evaluation) in results {
            nodes += subtree_nodes;
            worst = worst.min(evaluation);
        }
        (nodes, worst)
    }
}

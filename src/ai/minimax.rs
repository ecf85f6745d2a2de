//! Minimax search with alpha-beta pruning.
//!
//! The search is depth-bounded and scores non-terminal leaves with a
//! [`Heuristic`]. Columns are tried in ascending order and the root keeps the
//! first column with the strictly greatest score, so results are
//! deterministic for a given board and depth.
//!
//! [`SearchEngine::best_move`] adds the Easy-tier policy: at depth 1 a coin
//! flip (drawn from the caller's RNG) may replace the search with a uniformly
//! random legal column.

use std::thread;

use rand::Rng;
use tracing::{debug, trace};

use super::heuristic::{Heuristic, WindowHeuristic};
use crate::config::SearchConfig;
use crate::game::{check_winner, Board, Player};

/// Score of a won position. Dominates any heuristic total.
pub const WIN_SCORE: i32 = 1_000_000;

/// Search depth at which the Easy-tier coin flip applies.
pub const EASY_DEPTH: u32 = 1;

/// Default chance that the Easy tier plays a random column.
pub const DEFAULT_EASY_RANDOM_PROBABILITY: f64 = 0.5;

/// Classification of a node before expanding it.
enum Node {
    Win,
    Loss,
    Draw,
    DepthExhausted,
    Continue(Vec<usize>),
}

impl Node {
    fn classify(board: &Board, depth: u32, ai: Player) -> Node {
        match check_winner(board) {
            Some(win) if win.winner == ai => return Node::Win,
            Some(_) => return Node::Loss,
            None => {}
        }

        let columns = board.valid_columns();
        if columns.is_empty() {
            Node::Draw
        } else if depth == 0 {
            Node::DepthExhausted
        } else {
            Node::Continue(columns)
        }
    }
}

/// Minimax searcher parameterized by a heuristic and the Easy-tier policy.
pub struct SearchEngine {
    heuristic: Box<dyn Heuristic>,
    easy_random_probability: f64,
    parallel: bool,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self::with_heuristic(Box::new(WindowHeuristic))
    }

    pub fn with_heuristic(heuristic: Box<dyn Heuristic>) -> Self {
        SearchEngine {
            heuristic,
            easy_random_probability: DEFAULT_EASY_RANDOM_PROBABILITY,
            parallel: false,
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new()
            .with_easy_random_probability(config.easy_random_probability)
            .with_parallel(config.parallel)
    }

    /// Set the Easy-tier coin bias, clamped to `[0, 1]`.
    pub fn with_easy_random_probability(mut self, probability: f64) -> Self {
        self.easy_random_probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        self
    }

    /// Score root columns on separate threads.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn easy_random_probability(&self) -> f64 {
        self.easy_random_probability
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Value of `board` for `ai`. `maximizing` is true when `ai` is to move.
    pub fn minimax(
        &self,
        board: &Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        ai: Player,
    ) -> i32 {
        let columns = match Node::classify(board, depth, ai) {
            Node::Win => return WIN_SCORE,
            Node::Loss => return -WIN_SCORE,
            Node::Draw | Node::DepthExhausted => return self.heuristic.evaluate(board, ai),
            Node::Continue(columns) => columns,
        };

        let mover = if maximizing { ai } else { ai.other() };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for col in columns {
            let Ok(child) = board.make_move(col, mover) else {
                continue;
            };
            let score = self.minimax(&child, depth - 1, alpha, beta, !maximizing, ai);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if beta <= alpha {
                break;
            }
        }

        best
    }

    /// Full search for the best column, or `None` if the board is full.
    pub fn search(&self, board: &Board, ai: Player, depth: u32) -> Option<usize> {
        let scored = board.valid_columns().into_iter().filter_map(|col| {
            let child = board.make_move(col, ai).ok()?;
            Some((col, self.score_root_child(&child, ai, depth)))
        });
        select_best(scored, depth)
    }

    /// Same result as [`search`](Self::search), with each root column scored
    /// on its own scoped thread.
    pub fn search_parallel(&self, board: &Board, ai: Player, depth: u32) -> Option<usize> {
        let scored: Vec<(usize, i32)> = thread::scope(|scope| {
            let handles: Vec<_> = board
                .valid_columns()
                .into_iter()
                .filter_map(|col| board.make_move(col, ai).ok().map(|child| (col, child)))
                .map(|(col, child)| {
                    scope.spawn(move || (col, self.score_root_child(&child, ai, depth)))
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
                .collect()
        });
        select_best(scored, depth)
    }

    /// Pick a column for `ai`, applying the Easy-tier coin flip at depth 1.
    pub fn best_move<R: Rng>(
        &self,
        board: &Board,
        ai: Player,
        depth: u32,
        rng: &mut R,
    ) -> Option<usize> {
        if depth == EASY_DEPTH && rng.random_bool(self.easy_random_probability) {
            let columns = board.valid_columns();
            if columns.is_empty() {
                return None;
            }
            let column = columns[rng.random_range(0..columns.len())];
            debug!(column, "easy tier played a random column");
            return Some(column);
        }

        if self.parallel {
            self.search_parallel(board, ai, depth)
        } else {
            self.search(board, ai, depth)
        }
    }

    // The root move consumed one ply, so the opponent replies next.
    fn score_root_child(&self, child: &Board, ai: Player, depth: u32) -> i32 {
        self.minimax(child, depth.saturating_sub(1), i32::MIN, i32::MAX, false, ai)
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// First column with the strictly greatest score.
fn select_best(scored: impl IntoIterator<Item = (usize, i32)>, depth: u32) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;
    for (column, score) in scored {
        trace!(column, score, "root candidate");
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((column, score));
        }
    }

    let (column, score) = best?;
    debug!(column, score, depth, "search selected column");
    Some(column)
}

/// [`SearchEngine::minimax`] with the default heuristic.
pub fn minimax(
    board: &Board,
    depth: u32,
    alpha: i32,
    beta: i32,
    maximizing: bool,
    ai: Player,
) -> i32 {
    SearchEngine::new().minimax(board, depth, alpha, beta, maximizing, ai)
}

/// Deterministic best column for `ai` with the default heuristic.
pub fn search_best_move(board: &Board, ai: Player, depth: u32) -> Option<usize> {
    SearchEngine::new().search(board, ai, depth)
}

/// Best column for `ai` with the default heuristic and Easy-tier policy.
pub fn best_move<R: Rng>(board: &Board, ai: Player, depth: u32, rng: &mut R) -> Option<usize> {
    SearchEngine::new().best_move(board, ai, depth, rng)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::game::GameState;
    use proptest::prelude::*;

    fn open_state(moves: &[usize]) -> GameState {
        let mut state = GameState::initial();
        for &col in moves {
            if state.is_game_over() {
                break;
            }
            if let Ok(next) = state.apply_move(col) {
                state = next;
            }
        }
        state
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn chosen_column_is_legal(
            moves in prop::collection::vec(0usize..7, 0..40),
            depth in 1u32..=3,
        ) {
            let state = open_state(&moves);
            let board = state.board();
            let ai = state.current_player();
            match search_best_move(board, ai, depth) {
                Some(col) => prop_assert!(!board.is_column_full(col)),
                None => prop_assert!(board.is_full()),
            }
        }
    }
}

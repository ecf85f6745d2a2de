use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::heuristic::Heuristic;
use super::minimax::SearchEngine;
use crate::game::GameState;

/// Universal interface for computer players.
pub trait Agent {
    /// Select a column for the player to move, or `None` if the game is over
    /// or no column is open.
    fn select_column(&mut self, state: &GameState) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// Minimax agent with alpha-beta pruning and a seedable RNG for the
/// Easy-tier coin flip.
pub struct MinimaxAgent {
    depth: u32,
    engine: SearchEngine,
    rng: StdRng,
}

impl MinimaxAgent {
    pub fn new(depth: u32) -> Self {
        Self::with_engine(depth, SearchEngine::new(), StdRng::from_os_rng())
    }

    pub fn with_seed(depth: u32, seed: u64) -> Self {
        Self::with_engine(depth, SearchEngine::new(), StdRng::seed_from_u64(seed))
    }

    pub fn with_heuristic(depth: u32, heuristic: Box<dyn Heuristic>) -> Self {
        Self::with_engine(
            depth,
            SearchEngine::with_heuristic(heuristic),
            StdRng::from_os_rng(),
        )
    }

    pub fn with_engine(depth: u32, engine: SearchEngine, rng: StdRng) -> Self {
        MinimaxAgent { depth, engine, rng }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl Agent for MinimaxAgent {
    fn select_column(&mut self, state: &GameState) -> Option<usize> {
        if state.is_game_over() {
            return None;
        }
        self.engine
            .best_move(state.board(), state.current_player(), self.depth, &mut self.rng)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}

/// An agent that selects uniformly at random from legal columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_column(&mut self, state: &GameState) -> Option<usize> {
        let columns = state.valid_columns();
        if columns.is_empty() {
            return None;
        }
        Some(columns[self.rng.random_range(0..columns.len())])
    }

    fn name(&self) -> &str {
        "Random"
    }
}

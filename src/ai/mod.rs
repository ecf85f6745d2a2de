//! Computer opponent: board heuristic, minimax search and agents.

mod agent;
mod heuristic;
mod minimax;

pub use agent::{Agent, MinimaxAgent, RandomAgent};
pub use heuristic::{Heuristic, WindowHeuristic};
pub use minimax::{
    best_move, minimax, search_best_move, SearchEngine, DEFAULT_EASY_RANDOM_PROBABILITY,
    EASY_DEPTH, WIN_SCORE,
};

//! Core Connect Four game logic: board, player, win detection, scoring and a
//! game state machine with immutable transitions.

mod board;
mod player;
mod score;
mod state;
mod win;

pub use crate::error::MoveError;
pub use board::{Board, Cell, Position, COLS, ROWS};
pub use player::Player;
pub use score::{calculate_score, Difficulty};
pub use state::{GameState, GameStatus};
pub use win::{check_winner, windows, Win, WIN_LENGTH};

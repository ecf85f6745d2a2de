use super::board::{Board, Position};
use super::player::Player;
use super::win::{check_winner, Win, WIN_LENGTH};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress(Player),
    Won(Player, [Position; WIN_LENGTH]),
    Draw,
}

/// Controller-side game record. Every transition produces a new value and
/// only a successful move advances it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    win: Option<Win>,
    move_count: usize,
}

impl GameState {
    /// Create initial game state. Player One (the human) starts.
    pub fn initial() -> Self {
        Self::new(Player::One)
    }

    /// Create an empty game with `first` to move.
    pub fn new(first: Player) -> Self {
        GameState {
            board: Board::new(),
            current_player: first,
            win: None,
            move_count: 0,
        }
    }

    /// Start a fresh game with `first` to move.
    pub fn reset(&self, first: Player) -> Self {
        Self::new(first)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn winner(&self) -> Option<Player> {
        self.win.map(|win| win.winner)
    }

    /// The four winning cells, empty unless someone has won.
    pub fn winning_cells(&self) -> &[Position] {
        match &self.win {
            Some(win) => &win.cells[..],
            None => &[],
        }
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn is_game_over(&self) -> bool {
        self.win.is_some() || self.board.is_full()
    }

    pub fn status(&self) -> GameStatus {
        match self.win {
            Some(win) => GameStatus::Won(win.winner, win.cells),
            None if self.board.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress(self.current_player),
        }
    }

    /// Get list of legal columns (not full)
    pub fn valid_columns(&self) -> Vec<usize> {
        if self.is_game_over() {
            return Vec::new();
        }
        self.board.valid_columns()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }

        let board = self.board.make_move(column, self.current_player)?;

        Ok(GameState {
            board,
            current_player: self.current_player.other(),
            win: check_winner(&board),
            move_count: self.move_count + 1,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

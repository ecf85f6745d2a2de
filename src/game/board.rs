use std::fmt;

use super::player::Player;
use crate::error::{BoardError, MoveError};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    /// The player occupying this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerOne => Some(Player::One),
            Cell::PlayerTwo => Some(Player::Two),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::PlayerOne => 'X',
            Cell::PlayerTwo => 'O',
        }
    }

    fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            '.' => Some(Cell::Empty),
            'X' => Some(Cell::PlayerOne),
            'O' => Some(Cell::PlayerTwo),
            _ => None,
        }
    }
}

/// A (row, column) pair. Row 0 is the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

/// A gravity-filled 6x7 grid. `Copy`, so every move yields an independent
/// value and search branches never share cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Build a board from text rows, top row first. `.` is empty, `X` is
    /// Player One and `O` is Player Two.
    pub fn from_rows(rows: [&str; ROWS]) -> Result<Self, BoardError> {
        let mut board = Board::new();
        for (row, text) in rows.iter().enumerate() {
            let len = text.chars().count();
            if len != COLS {
                return Err(BoardError::RowLength {
                    row,
                    len,
                    expected: COLS,
                });
            }
            for (col, symbol) in text.chars().enumerate() {
                board.cells[row][col] =
                    Cell::from_symbol(symbol).ok_or(BoardError::InvalidCell { row, col, symbol })?;
            }
        }

        for col in 0..COLS {
            for row in 0..ROWS - 1 {
                if board.cells[row][col] != Cell::Empty && board.cells[row + 1][col] == Cell::Empty {
                    return Err(BoardError::FloatingPiece { row, col });
                }
            }
        }

        Ok(board)
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Get the cell at a position
    pub fn at(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Lowest empty row in a column, or `None` if the column is full.
    pub fn next_available_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Columns that can still take a piece, in ascending order.
    pub fn valid_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Drop a piece for `player` into `col`, returning the resulting board.
    /// `self` is left untouched.
    pub fn make_move(&self, col: usize, player: Player) -> Result<Board, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }
        let row = self.next_available_row(col).ok_or(MoveError::ColumnFull)?;

        let mut next = *self;
        next.cells[row][col] = player.to_cell();
        Ok(next)
    }

    /// Number of occupied cells.
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.piece_count(), 0);
        assert_eq!(board.valid_columns(), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_make_move_stacks_pieces() {
        let board = Board::new();

        let board = board.make_move(3, Player::One).unwrap();
        assert_eq!(board.get(5, 3), Cell::PlayerOne);

        let board = board.make_move(3, Player::Two).unwrap();
        assert_eq!(board.get(4, 3), Cell::PlayerTwo);
        assert_eq!(board.next_available_row(3), Some(3));
        assert_eq!(board.piece_count(), 2);
    }

    #[test]
    fn test_make_move_leaves_original_untouched() {
        let original = Board::new().make_move(2, Player::One).unwrap();
        let snapshot = original;

        let _child = original.make_move(2, Player::Two).unwrap();
        let _other = original.make_move(5, Player::Two).unwrap();

        assert_eq!(original, snapshot);
        assert_eq!(original.get(4, 2), Cell::Empty);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();
        for i in 0..ROWS {
            let player = if i % 2 == 0 { Player::One } else { Player::Two };
            board = board.make_move(0, player).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.next_available_row(0), None);
        assert_eq!(board.make_move(0, Player::One), Err(MoveError::ColumnFull));
        assert_eq!(board.valid_columns(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_invalid_column() {
        let board = Board::new();
        assert_eq!(board.make_move(7, Player::One), Err(MoveError::InvalidColumn));
        assert!(board.is_column_full(7));
        assert_eq!(board.next_available_row(7), None);
    }

    #[test]
    fn test_from_rows_and_display() {
        let rows = [
            ".......",
            ".......",
            ".......",
            ".......",
            "...O...",
            "..XXO..",
        ];
        let board = Board::from_rows(rows).unwrap();
        assert_eq!(board.get(5, 2), Cell::PlayerOne);
        assert_eq!(board.get(4, 3), Cell::PlayerTwo);
        assert_eq!(board.piece_count(), 4);
        assert_eq!(board.to_string(), rows.join("\n"));
    }

    #[test]
    fn test_from_rows_rejects_floating_piece() {
        let result = Board::from_rows([
            ".......",
            ".......",
            ".......",
            "...X...",
            ".......",
            "...O...",
        ]);
        assert_eq!(result, Err(BoardError::FloatingPiece { row: 3, col: 3 }));
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        let short = Board::from_rows(["......", ".......", ".......", ".......", ".......", "......."]);
        assert_eq!(
            short,
            Err(BoardError::RowLength {
                row: 0,
                len: 6,
                expected: COLS
            })
        );

        let bad = Board::from_rows([".......", ".......", ".......", ".......", ".......", "...Z..."]);
        assert_eq!(
            bad,
            Err(BoardError::InvalidCell {
                row: 5,
                col: 3,
                symbol: 'Z'
            })
        );
    }
}

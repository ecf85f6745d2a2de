use super::board::{Board, Cell, Position, COLS, ROWS};
use super::player::Player;

/// Number of pieces in a row needed to win.
pub const WIN_LENGTH: usize = 4;

/// A completed four-in-a-row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Win {
    pub winner: Player,
    /// The run's cells, ordered from its anchor outward.
    pub cells: [Position; WIN_LENGTH],
}

/// Every 4-cell window on the board, in win-scan priority order:
/// horizontal (row-major), vertical (column-major, each run anchored at its
/// bottom cell and extending upward), then down-right and down-left diagonals
/// (anchored at their top cell, row-major).
pub fn windows() -> impl Iterator<Item = [Position; WIN_LENGTH]> {
    let horizontal = (0..ROWS)
        .flat_map(|row| (0..=COLS - WIN_LENGTH).map(move |col| line(row, col, 0, 1)));
    let vertical = (0..COLS)
        .flat_map(|col| (WIN_LENGTH - 1..ROWS).map(move |row| line(row, col, -1, 0)));
    let down_right = (0..=ROWS - WIN_LENGTH)
        .flat_map(|row| (0..=COLS - WIN_LENGTH).map(move |col| line(row, col, 1, 1)));
    let down_left = (0..=ROWS - WIN_LENGTH)
        .flat_map(|row| (WIN_LENGTH - 1..COLS).map(move |col| line(row, col, 1, -1)));

    horizontal.chain(vertical).chain(down_right).chain(down_left)
}

/// Callers keep every step inside the grid.
fn line(row: usize, col: usize, dr: isize, dc: isize) -> [Position; WIN_LENGTH] {
    std::array::from_fn(|i| {
        let i = i as isize;
        Position::new(
            (row as isize + i * dr) as usize,
            (col as isize + i * dc) as usize,
        )
    })
}

/// Scan for a four-in-a-row, returning the first run found.
pub fn check_winner(board: &Board) -> Option<Win> {
    windows().find_map(|cells| {
        let first = board.at(cells[0]);
        let winner = first.player()?;
        cells[1..]
            .iter()
            .all(|&pos| board.at(pos) == first)
            .then_some(Win { winner, cells })
    })
}

impl Board {
    /// A full top row means a full board under gravity.
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.get(0, col) != Cell::Empty)
    }
}

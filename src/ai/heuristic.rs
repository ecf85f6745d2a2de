use crate::game::{windows, Board, Cell, Player};

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send + Sync {
    fn evaluate(&self, board: &Board, player: Player) -> i32;
}

/// Default heuristic: sums a score over every 4-cell window, with a penalty
/// for each open opponent three.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowHeuristic;

impl WindowHeuristic {
    pub const FOUR: i32 = 100;
    pub const THREE: i32 = 5;
    pub const TWO: i32 = 2;
    pub const OPPONENT_THREE: i32 = -4;

    fn score_window(own: usize, opp: usize, empty: usize) -> i32 {
        match (own, opp, empty) {
            (4, _, _) => Self::FOUR,
            (3, _, 1) => Self::THREE,
            (2, _, 2) => Self::TWO,
            (_, 3, 1) => Self::OPPONENT_THREE,
            _ => 0,
        }
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        let own_cell = player.to_cell();

        windows()
            .map(|window| {
                let (mut own, mut opp, mut empty) = (0, 0, 0);
                for pos in window {
                    match board.at(pos) {
                        Cell::Empty => empty += 1,
                        c if c == own_cell => own += 1,
                        _ => opp += 1,
                    }
                }
                Self::score_window(own, opp, empty)
            })
            .sum()
    }
}

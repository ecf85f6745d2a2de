use std::fmt;
use std::str::FromStr;

use super::board::{COLS, ROWS};
use super::player::Player;
use crate::error::ParseDifficultyError;

const BASE_SCORE: u32 = 100;
const SPEED_BONUS_PER_MOVE: u32 = 5;
const TOTAL_CELLS: usize = ROWS * COLS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn score_multiplier(self) -> f64 {
        f64::from(self.multiplier_halves()) / 2.0
    }

    // Multipliers are all multiples of 0.5, so scoring stays in integers.
    fn multiplier_halves(self) -> u32 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

/// Score for a finished game. Only a human (Player One) win scores; fewer
/// moves and harder difficulty score more.
pub fn calculate_score(winner: Option<Player>, move_count: usize, difficulty: Difficulty) -> u32 {
    if winner != Some(Player::HUMAN) {
        return 0;
    }

    let moves_saved = TOTAL_CELLS.saturating_sub(move_count) as u32;
    let raw = BASE_SCORE + moves_saved * SPEED_BONUS_PER_MOVE;
    raw * difficulty.multiplier_halves() / 2
}

use serde::{Deserialize, Serialize};

use super::board::Cell;
use super::settings::{Difficulty, GameMode};

/// The two seats. Red always drops first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Red,
    Blue,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }

    /// Piece this seat leaves on the board
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Red => Cell::Red,
            Player::Blue => Cell::Blue,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Blue => "Blue",
        }
    }

    /// Who sits in this seat, as shown to the local player. In single-player
    /// games Red is the human and Blue the computer.
    pub fn seat_label(self, game_mode: GameMode, difficulty: Option<Difficulty>) -> String {
        match (self, game_mode) {
            (Player::Red, GameMode::Single) => "You (Red)".to_string(),
            (Player::Blue, GameMode::Single) => match difficulty {
                Some(level) => format!("Computer (Blue) - {}", level.label()),
                None => "Computer (Blue)".to_string(),
            },
            (Player::Red, GameMode::Multi) => "Player 1 (Red)".to_string(),
            (Player::Blue, GameMode::Multi) => "Player 2 (Blue)".to_string(),
        }
    }
}

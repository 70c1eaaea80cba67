use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::scoring::{clamp_quickfire_target, ScoringMode, QUICKFIRE_DEFAULT};

/// Who sits in the Blue seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Human plays Red against the computer
    Single,
    /// Two humans (or a remote peer)
    #[default]
    Multi,
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "single" => Ok(GameMode::Single),
            "multi" => Ok(GameMode::Multi),
            other => Err(format!("unknown game mode '{other}' (expected 'single' or 'multi')")),
        }
    }
}

/// Computer opponent strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
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

    /// Capitalized name for labels
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!(
                "unknown difficulty '{other}' (expected 'easy', 'medium', or 'hard')"
            )),
        }
    }
}

/// Selections made before a game starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub game_mode: GameMode,
    pub scoring_mode: ScoringMode,
    pub difficulty: Option<Difficulty>,
    pub quickfire_target: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        GameSettings {
            game_mode: GameMode::Multi,
            scoring_mode: ScoringMode::Classic,
            difficulty: None,
            quickfire_target: QUICKFIRE_DEFAULT,
        }
    }
}

impl GameSettings {
    pub fn single(difficulty: Difficulty, scoring_mode: ScoringMode) -> Self {
        GameSettings {
            game_mode: GameMode::Single,
            scoring_mode,
            difficulty: Some(difficulty),
            ..Default::default()
        }
    }

    pub fn multi(scoring_mode: ScoringMode) -> Self {
        GameSettings {
            scoring_mode,
            ..Default::default()
        }
    }

    pub fn with_quickfire_target(mut self, target: u32) -> Self {
        self.quickfire_target = clamp_quickfire_target(target);
        self
    }

    /// Difficulty the computer plays at; single-player games default to medium.
    pub fn opponent_difficulty(&self) -> Difficulty {
        self.difficulty.unwrap_or(Difficulty::Medium)
    }
}

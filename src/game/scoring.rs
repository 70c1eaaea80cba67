use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::board::Coord;
use super::capture::CapturedRegion;
use super::player::Player;

pub const QUICKFIRE_MIN: u32 = 1;
pub const QUICKFIRE_MAX: u32 = 10;
pub const QUICKFIRE_DEFAULT: u32 = 5;

/// How captures turn into points, and what besides a full board ends a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMode {
    /// One point per capture
    #[default]
    Classic,
    /// One point per boxed cell, with steals on overlap
    Territory,
    /// One point per capture; first to the target ends the game
    #[serde(alias = "quick-fire")]
    QuickFire,
}

impl ScoringMode {
    pub fn name(self) -> &'static str {
        match self {
            ScoringMode::Classic => "classic",
            ScoringMode::Territory => "territory",
            ScoringMode::QuickFire => "quickfire",
        }
    }
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScoringMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "classic" => Ok(ScoringMode::Classic),
            "territory" | "area" => Ok(ScoringMode::Territory),
            "quickfire" | "quick-fire" => Ok(ScoringMode::QuickFire),
            other => Err(format!(
                "unknown scoring mode '{other}' (expected 'classic', 'territory', or 'quickfire')"
            )),
        }
    }
}

/// Clamp a Quick-Fire target into its accepted range.
pub fn clamp_quickfire_target(target: u32) -> u32 {
    target.clamp(QUICKFIRE_MIN, QUICKFIRE_MAX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scores {
    pub red: u32,
    pub blue: u32,
}

impl Scores {
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::Red => self.red,
            Player::Blue => self.blue,
        }
    }

    fn get_mut(&mut self, player: Player) -> &mut u32 {
        match player {
            Player::Red => &mut self.red,
            Player::Blue => &mut self.blue,
        }
    }

    /// `player`'s score minus the opponent's
    pub fn margin(&self, player: Player) -> i64 {
        i64::from(self.get(player)) - i64::from(self.get(player.other()))
    }

    /// Strictly higher score wins; equal scores are a tie.
    pub fn leader(&self) -> Option<Player> {
        match self.red.cmp(&self.blue) {
            std::cmp::Ordering::Greater => Some(Player::Red),
            std::cmp::Ordering::Less => Some(Player::Blue),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Territory credit per cell: who last boxed it in.
pub type Ownership = HashMap<Coord, Player>;

/// Points moved by a single capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreDelta {
    /// Points gained by the capturing player
    pub gained: u32,
    /// Points taken back from the opponent (Territory steals)
    pub stolen: u32,
}

/// Apply a capture's effect on the scores.
pub fn score_capture(
    mode: ScoringMode,
    scores: &mut Scores,
    ownership: &mut Ownership,
    region: &CapturedRegion,
    player: Player,
) -> ScoreDelta {
    match mode {
        ScoringMode::Classic | ScoringMode::QuickFire => {
            *scores.get_mut(player) += 1;
            ScoreDelta {
                gained: 1,
                stolen: 0,
            }
        }
        ScoringMode::Territory => {
            let mut delta = ScoreDelta::default();
            for coord in region.cells() {
                let previous = ownership.insert(coord, player);
                if previous == Some(player) {
                    continue;
                }
                if previous == Some(player.other()) {
                    let other = scores.get_mut(player.other());
                    *other = other.saturating_sub(1);
                    delta.stolen += 1;
                }
                *scores.get_mut(player) += 1;
                delta.gained += 1;
            }
            delta
        }
    }
}

/// Score-based end condition. A board with no legal drop ends the game in every mode.
pub fn target_reached(mode: ScoringMode, scores: &Scores, quickfire_target: u32) -> bool {
    mode == ScoringMode::QuickFire
        && (scores.red >= quickfire_target || scores.blue >= quickfire_target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(min_row: usize, max_row: usize, min_col: usize, max_col: usize) -> CapturedRegion {
        CapturedRegion {
            min_row,
            max_row,
            min_col,
            max_col,
        }
    }

    #[test]
    fn test_classic_awards_one_per_capture() {
        let mut scores = Scores::default();
        let mut ownership = Ownership::new();
        let delta = score_capture(
            ScoringMode::Classic,
            &mut scores,
            &mut ownership,
            &rect(2, 5, 0, 3),
            Player::Blue,
        );
        assert_eq!(delta.gained, 1);
        assert_eq!(scores, Scores { red: 0, blue: 1 });
        assert!(ownership.is_empty());
    }

    #[test]
    fn test_territory_counts_rectangle_cells() {
        let mut scores = Scores::default();
        let mut ownership = Ownership::new();
        score_capture(
            ScoringMode::Territory,
            &mut scores,
            &mut ownership,
            &rect(4, 5, 0, 3),
            Player::Red,
        );
        assert_eq!(scores.red, 8);
        assert_eq!(ownership.len(), 8);
    }

    #[test]
    fn test_territory_steal_moves_overlap() {
        let mut scores = Scores::default();
        let mut ownership = Ownership::new();
        score_capture(
            ScoringMode::Territory,
            &mut scores,
            &mut ownership,
            &rect(5, 5, 0, 3),
            Player::Red,
        );
        assert_eq!(scores, Scores { red: 4, blue: 0 });

        // Overlaps (5, 2) and (5, 3)
        let delta = score_capture(
            ScoringMode::Territory,
            &mut scores,
            &mut ownership,
            &rect(2, 5, 2, 3),
            Player::Blue,
        );
        assert_eq!(delta.stolen, 2);
        assert_eq!(delta.gained, 8);
        assert_eq!(scores, Scores { red: 2, blue: 8 });
        assert_eq!(ownership[&Coord::new(5, 3)], Player::Blue);
        assert_eq!(ownership[&Coord::new(5, 0)], Player::Red);
    }

    #[test]
    fn test_territory_own_cells_not_recounted() {
        let mut scores = Scores::default();
        let mut ownership = Ownership::new();
        score_capture(
            ScoringMode::Territory,
            &mut scores,
            &mut ownership,
            &rect(5, 5, 0, 3),
            Player::Red,
        );
        let delta = score_capture(
            ScoringMode::Territory,
            &mut scores,
            &mut ownership,
            &rect(4, 5, 0, 3),
            Player::Red,
        );
        assert_eq!(delta.gained, 4);
        assert_eq!(scores.red, 8);
    }

    #[test]
    fn test_quickfire_target() {
        let scores = Scores { red: 2, blue: 3 };
        assert!(target_reached(ScoringMode::QuickFire, &scores, 3));
        assert!(!target_reached(ScoringMode::QuickFire, &scores, 4));
        assert!(!target_reached(ScoringMode::Classic, &scores, 3));
    }

    #[test]
    fn test_leader() {
        assert_eq!(Scores { red: 3, blue: 1 }.leader(), Some(Player::Red));
        assert_eq!(Scores { red: 0, blue: 1 }.leader(), Some(Player::Blue));
        assert_eq!(Scores { red: 2, blue: 2 }.leader(), None);
        assert_eq!(Scores { red: 1, blue: 4 }.margin(Player::Red), -3);
    }

    #[test]
    fn test_clamp_target() {
        assert_eq!(clamp_quickfire_target(0), 1);
        assert_eq!(clamp_quickfire_target(7), 7);
        assert_eq!(clamp_quickfire_target(42), 10);
    }

    #[test]
    fn test_parse_scoring_mode() {
        assert_eq!("Territory".parse::<ScoringMode>(), Ok(ScoringMode::Territory));
        assert_eq!("area".parse::<ScoringMode>(), Ok(ScoringMode::Territory));
        assert_eq!("quick-fire".parse::<ScoringMode>(), Ok(ScoringMode::QuickFire));
        assert!("blitz".parse::<ScoringMode>().is_err());
    }
}

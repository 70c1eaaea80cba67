use crate::game::{GameOutcome, Player, Scores};

/// Result of a single simulated game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    pub outcome: GameOutcome,
    pub scores: Scores,
    pub moves: usize,
}

impl GameRecord {
    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            GameOutcome::Winner(player) => Some(player),
            GameOutcome::Tie => None,
        }
    }
}

/// Win/loss/tie tally for one agent across many games.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArenaStats {
    pub wins: usize,
    pub losses: usize,
    pub ties: usize,
    total_moves: usize,
}

impl ArenaStats {
    /// Record a game from the point of view of `seat`.
    pub fn record(&mut self, record: &GameRecord, seat: Player) {
        match record.winner() {
            Some(winner) if winner == seat => self.wins += 1,
            Some(_) => self.losses += 1,
            None => self.ties += 1,
        }
        self.total_moves += record.moves;
    }

    pub fn games(&self) -> usize {
        self.wins + self.losses + self.ties
    }

    pub fn win_rate(&self) -> f32 {
        let n = self.games();
        if n == 0 {
            return 0.0;
        }
        self.wins as f32 / n as f32
    }

    pub fn tie_rate(&self) -> f32 {
        let n = self.games();
        if n == 0 {
            return 0.0;
        }
        self.ties as f32 / n as f32
    }

    pub fn average_length(&self) -> f32 {
        let n = self.games();
        if n == 0 {
            return 0.0;
        }
        self.total_moves as f32 / n as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(outcome: GameOutcome, moves: usize) -> GameRecord {
        GameRecord {
            outcome,
            scores: Scores::default(),
            moves,
        }
    }

    #[test]
    fn test_empty_stats() {
        let stats = ArenaStats::default();
        assert_eq!(stats.win_rate(), 0.0);
        assert_eq!(stats.tie_rate(), 0.0);
        assert_eq!(stats.average_length(), 0.0);
    }

    #[test]
    fn test_record_from_each_seat() {
        let mut stats = ArenaStats::default();
        stats.record(&game(GameOutcome::Winner(Player::Red), 20), Player::Red);
        stats.record(&game(GameOutcome::Winner(Player::Red), 30), Player::Blue);
        stats.record(&game(GameOutcome::Tie, 40), Player::Blue);
        stats.record(&game(GameOutcome::Winner(Player::Blue), 10), Player::Blue);

        assert_eq!(stats.wins, 2);
        assert_eq!(stats.losses, 1);
        assert_eq!(stats.ties, 1);
        assert!((stats.win_rate() - 0.5).abs() < 1e-6);
        assert!((stats.tie_rate() - 0.25).abs() < 1e-6);
        assert!((stats.average_length() - 25.0).abs() < 1e-6);
    }
}

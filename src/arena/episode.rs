use tracing::debug;

use crate::ai::{agent_for, Agent, RandomAgent};
use crate::error::ArenaError;
use crate::game::{Difficulty, GameSettings, GameState, Player, DEFAULT_COLS, DEFAULT_ROWS};

use super::metrics::{ArenaStats, GameRecord};

/// Parameters shared by every game in an evaluation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaSetup {
    pub games_per_color: usize,
    pub seed: u64,
    pub rows: usize,
    pub cols: usize,
    pub settings: GameSettings,
}

impl Default for ArenaSetup {
    fn default() -> Self {
        ArenaSetup {
            games_per_color: 10,
            seed: 0,
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            settings: GameSettings::default(),
        }
    }
}

/// Play one game to completion. Red moves first.
pub fn play_game(
    red: &mut dyn Agent,
    blue: &mut dyn Agent,
    settings: GameSettings,
    rows: usize,
    cols: usize,
) -> Result<GameRecord, ArenaError> {
    let mut state = GameState::new(settings, rows, cols);
    let mut moves = 0;

    while !state.is_terminal() {
        let agent: &mut dyn Agent = match state.current_player() {
            Player::Red => &mut *red,
            Player::Blue => &mut *blue,
        };
        let action = agent.select_action(&state).ok_or_else(|| ArenaError::NoMove {
            agent: agent.name().to_string(),
        })?;
        if state.apply_move_mut(action).is_err() {
            return Err(ArenaError::IllegalAction {
                agent: agent.name().to_string(),
                action,
                legal: state.legal_actions(),
            });
        }
        moves += 1;
    }

    let outcome = state.outcome().ok_or_else(|| ArenaError::NoMove {
        agent: "arena".to_string(),
    })?;
    Ok(GameRecord {
        outcome,
        scores: state.scores(),
        moves,
    })
}

/// Pit a difficulty level against the seeded random baseline, alternating
/// colors. Stats are from the difficulty's point of view.
pub fn evaluate(difficulty: Difficulty, setup: &ArenaSetup) -> Result<ArenaStats, ArenaError> {
    let mut stats = ArenaStats::default();

    for game in 0..setup.games_per_color {
        for seat in [Player::Red, Player::Blue] {
            let game_seed = setup.seed.wrapping_add(game as u64);
            let mut candidate = agent_for(difficulty, game_seed.wrapping_add(1_000_003));
            let mut baseline = RandomAgent::with_seed(game_seed);

            let record = match seat {
                Player::Red => play_game(
                    candidate.as_mut(),
                    &mut baseline,
                    setup.settings,
                    setup.rows,
                    setup.cols,
                )?,
                Player::Blue => play_game(
                    &mut baseline,
                    candidate.as_mut(),
                    setup.settings,
                    setup.rows,
                    setup.cols,
                )?,
            };
            debug!(
                %difficulty,
                seat = seat.name(),
                game,
                red = record.scores.red,
                blue = record.scores.blue,
                moves = record.moves,
                "arena game finished"
            );
            stats.record(&record, seat);
        }
    }

    Ok(stats)
}

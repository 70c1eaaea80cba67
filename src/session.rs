//! One logical game session: owns the [`GameState`], the computer opponent,
//! and the bookkeeping that keeps a delayed opponent move from landing in
//! the wrong game.

use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use crate::ai::{agent_for, Agent};
use crate::error::SnapshotError;
use crate::game::{
    GameMode, GameOutcome, GameSettings, GameState, MoveError, MoveReport, Player, Snapshot,
};

/// The computer always plays Blue in single-player games.
pub const COMPUTER: Player = Player::Blue;

/// A computer move waiting to be played. The caller waits `delay` and then
/// hands the ticket back to [`Session::play_opponent`]; tickets issued before
/// a reset, reconfigure, or restore are refused at that point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpponentTicket {
    epoch: u64,
    player: Player,
    pub delay: Duration,
}

/// Outcome of a local move: what happened, and whether the computer is due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalMove {
    pub report: MoveReport,
    pub opponent: Option<OpponentTicket>,
}

pub struct Session {
    state: GameState,
    rows: usize,
    cols: usize,
    epoch: u64,
    think_delay: Duration,
    seed: u64,
    opponent: Box<dyn Agent>,
}

impl Session {
    pub fn new(
        settings: GameSettings,
        rows: usize,
        cols: usize,
        think_delay: Duration,
        seed: u64,
    ) -> Self {
        let opponent = agent_for(settings.opponent_difficulty(), seed);
        Session {
            state: GameState::new(settings, rows, cols),
            rows,
            cols,
            epoch: 0,
            think_delay,
            seed,
            opponent,
        }
    }

    /// Full game state, for redrawing after any call.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &GameSettings {
        self.state.settings()
    }

    /// Increments whenever the game is replaced; outstanding tickets die with it.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Start a new game with the same settings.
    pub fn reset(&mut self) {
        let settings = *self.state.settings();
        self.start(settings);
        info!(epoch = self.epoch, "game reset");
    }

    /// Change modes; this always starts a new game.
    #[instrument(skip(self))]
    pub fn configure(&mut self, settings: GameSettings) {
        self.start(settings);
        let settings = self.state.settings();
        info!(
            epoch = self.epoch,
            game_mode = ?settings.game_mode,
            scoring_mode = %settings.scoring_mode,
            difficulty = ?settings.difficulty,
            quickfire_target = settings.quickfire_target,
            "game configured"
        );
    }

    fn start(&mut self, settings: GameSettings) {
        self.state = GameState::new(settings, self.rows, self.cols);
        self.bump_epoch();
    }

    fn bump_epoch(&mut self) {
        self.epoch += 1;
        let difficulty = self.state.settings().opponent_difficulty();
        self.opponent = agent_for(difficulty, self.seed.wrapping_add(self.epoch));
    }

    /// A move from the local player. In single-player games only Red is
    /// human, so drops on the computer's turn are refused.
    pub fn drop_piece(&mut self, column: usize) -> Result<LocalMove, MoveError> {
        if self.state.settings().game_mode == GameMode::Single
            && self.state.is_active()
            && self.state.current_player() == COMPUTER
        {
            return Err(MoveError::ComputerTurn);
        }

        let report = self.apply(column)?;
        Ok(LocalMove {
            report,
            opponent: self.pending_opponent(),
        })
    }

    /// Ticket for the computer's move if it is the computer's turn right now.
    pub fn pending_opponent(&self) -> Option<OpponentTicket> {
        let due = self.state.settings().game_mode == GameMode::Single
            && self.state.is_active()
            && self.state.current_player() == COMPUTER;
        due.then_some(OpponentTicket {
            epoch: self.epoch,
            player: COMPUTER,
            delay: self.think_delay,
        })
    }

    /// Play a scheduled computer move. Everything is re-checked here rather
    /// than when the ticket was issued; a stale ticket is dropped.
    #[instrument(level = "debug", skip(self), fields(epoch = self.epoch))]
    pub fn play_opponent(&mut self, ticket: OpponentTicket) -> Option<MoveReport> {
        let still_due = ticket.epoch == self.epoch
            && self.state.is_active()
            && self.state.settings().game_mode == GameMode::Single
            && self.state.current_player() == ticket.player;
        if !still_due {
            debug!(
                ticket_epoch = ticket.epoch,
                epoch = self.epoch,
                "discarding stale opponent move"
            );
            return None;
        }

        let column = self.opponent.select_action(&self.state)?;
        match self.apply(column) {
            Ok(report) => Some(report),
            Err(err) => {
                warn!(column, %err, agent = self.opponent.name(), "opponent chose an illegal move");
                None
            }
        }
    }

    /// Replay a peer's move for whoever is to play. Never schedules a
    /// computer reply.
    pub fn apply_remote_move(&mut self, column: usize) -> bool {
        self.apply(column).is_ok()
    }

    fn apply(&mut self, column: usize) -> Result<MoveReport, MoveError> {
        let report = self.state.apply_move_mut(column).inspect_err(|err| {
            debug!(column, %err, "move rejected");
        })?;

        debug!(
            player = report.player.name(),
            row = report.coord.row,
            col = report.coord.col,
            "piece dropped"
        );
        if let Some(capture) = &report.capture {
            debug!(
                player = report.player.name(),
                region = ?capture.region,
                flooded = capture.flooded.len(),
                gained = capture.delta.gained,
                stolen = capture.delta.stolen,
                "area captured"
            );
        }
        if let Some(outcome) = report.outcome {
            let scores = self.state.scores();
            info!(?outcome, red = scores.red, blue = scores.blue, "game over");
        }
        Ok(report)
    }

    /// JSON snapshot of the whole game.
    pub fn serialize(&self) -> Result<String, SnapshotError> {
        Snapshot::from_state(&self.state).to_json()
    }

    /// Replace the game with a peer's snapshot. Missing fields are filled
    /// with defaults; only unparsable input is an error.
    #[instrument(skip_all)]
    pub fn restore(&mut self, json: &str) -> Result<(), SnapshotError> {
        let (state, defaulted) = Snapshot::from_json(json)?.into_state();
        if !defaulted.is_empty() {
            warn!(fields = ?defaulted, "snapshot incomplete, using defaults");
        }
        self.rows = state.board().rows();
        self.cols = state.board().cols();
        self.state = state;
        self.bump_epoch();
        Ok(())
    }

    /// Label for the player currently ahead, phrased for the game mode.
    pub fn winner_label(&self) -> String {
        let settings = self.state.settings();
        match self.state.scores().leader() {
            Some(player) => player.seat_label(settings.game_mode, settings.difficulty),
            None => "Tie".to_string(),
        }
    }

    /// Final outcome, once the game is over.
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.state.outcome()
    }
}

use super::board::{Board, Coord, DropError, DEFAULT_COLS, DEFAULT_ROWS};
use super::capture::{capture, CapturedRegion};
use super::player::Player;
use super::scoring::{
    clamp_quickfire_target, score_capture, target_reached, Ownership, ScoreDelta, Scores,
};
use super::settings::GameSettings;
use super::win::{find_winning_run, WinningRun};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Tie,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range")]
    InvalidColumn(usize),

    #[error("column {0} has no open cell")]
    ColumnUnavailable(usize),

    #[error("game is over")]
    GameOver,

    #[error("waiting for the computer to move")]
    ComputerTurn,
}

/// Everything a capture changed, for callers that draw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureEvent {
    pub run: WinningRun,
    pub region: CapturedRegion,
    pub flooded: Vec<Coord>,
    pub delta: ScoreDelta,
}

/// Result of one successful drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub player: Player,
    pub coord: Coord,
    pub capture: Option<CaptureEvent>,
    pub outcome: Option<GameOutcome>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    ownership: Ownership,
    current_player: Player,
    scores: Scores,
    active: bool,
    last_move: Option<Coord>,
    settings: GameSettings,
}

impl GameState {
    /// Create initial game state on the default 6x7 grid
    pub fn initial() -> Self {
        Self::new(GameSettings::default(), DEFAULT_ROWS, DEFAULT_COLS)
    }

    /// Fresh game. An out-of-range Quick-Fire target is clamped into [1, 10].
    pub fn new(settings: GameSettings, rows: usize, cols: usize) -> Self {
        let settings = GameSettings {
            quickfire_target: clamp_quickfire_target(settings.quickfire_target),
            ..settings
        };
        GameState {
            board: Board::new(rows, cols),
            ownership: Ownership::new(),
            current_player: Player::Red, // Red starts
            scores: Scores::default(),
            active: true,
            last_move: None,
            settings,
        }
    }

    pub(crate) fn from_parts(
        board: Board,
        ownership: Ownership,
        current_player: Player,
        scores: Scores,
        active: bool,
        last_move: Option<Coord>,
        settings: GameSettings,
    ) -> Self {
        GameState {
            board,
            ownership,
            current_player,
            scores,
            active,
            last_move,
            settings,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn ownership(&self) -> &Ownership {
        &self.ownership
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn last_move(&self) -> Option<Coord> {
        self.last_move
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        !self.active
    }

    /// Final result once the game has ended
    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.active {
            return None;
        }
        Some(match self.scores.leader() {
            Some(player) => GameOutcome::Winner(player),
            None => GameOutcome::Tie,
        })
    }

    /// Get list of playable columns
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.playable_columns()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Drop the current player's piece and run the capture cascade. On error
    /// the state is left exactly as it was.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<MoveReport, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        let row = self
            .board
            .drop_piece(column, player.to_cell())
            .map_err(|e| match e {
                DropError::InvalidColumn => MoveError::InvalidColumn(column),
                DropError::ColumnUnavailable => MoveError::ColumnUnavailable(column),
            })?;
        let coord = Coord { row, col: column };
        self.last_move = Some(coord);

        let capture = find_winning_run(&self.board, coord).and_then(|run| {
            let captured = capture(&mut self.board, &run, player)?;
            let delta = score_capture(
                self.settings.scoring_mode,
                &mut self.scores,
                &mut self.ownership,
                &captured.region,
                player,
            );
            Some(CaptureEvent {
                run,
                region: captured.region,
                flooded: captured.flooded,
                delta,
            })
        });

        self.current_player = player.other();
        self.check_end_of_game();

        Ok(MoveReport {
            player,
            coord,
            capture,
            outcome: self.outcome(),
        })
    }

    /// End the game when the Quick-Fire target is hit or no drop remains.
    fn check_end_of_game(&mut self) {
        let target_hit = target_reached(
            self.settings.scoring_mode,
            &self.scores,
            self.settings.quickfire_target,
        );
        if target_hit || !self.board.has_legal_move() {
            self.active = false;
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

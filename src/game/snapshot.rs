//! Serializable picture of a whole game, used to hand state to a remote peer
//! and to rebuild it on the other side.

use serde::{Deserialize, Serialize};

use super::board::{Board, Cell, Coord, DEFAULT_COLS, DEFAULT_ROWS};
use super::player::Player;
use super::scoring::{clamp_quickfire_target, Ownership, ScoringMode, Scores, QUICKFIRE_DEFAULT};
use super::settings::{Difficulty, GameMode, GameSettings};
use super::state::GameState;
use crate::error::SnapshotError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnershipEntry {
    pub row: usize,
    pub col: usize,
    pub owner: Player,
}

/// Every field is optional on the way in so that partial snapshots from a
/// peer still restore; see [`Snapshot::into_state`] for the fallbacks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Snapshot {
    pub grid: Option<Vec<Vec<Cell>>>,
    pub current_player: Option<Player>,
    pub blocked_cells: Option<Vec<Coord>>,
    pub red_score: Option<u32>,
    pub blue_score: Option<u32>,
    pub game_active: Option<bool>,
    pub last_move: Option<Coord>,
    pub game_mode: Option<GameMode>,
    pub scoring_mode: Option<ScoringMode>,
    pub ai_difficulty: Option<Difficulty>,
    #[serde(alias = "quickFireTarget")]
    pub quickfire_target: Option<u32>,
    pub ownership: Option<Vec<OwnershipEntry>>,
}

impl Snapshot {
    pub fn from_state(state: &GameState) -> Self {
        let board = state.board();
        let grid = (0..board.rows())
            .map(|row| (0..board.cols()).map(|col| board.get(row, col)).collect())
            .collect();

        let mut ownership: Vec<OwnershipEntry> = state
            .ownership()
            .iter()
            .map(|(coord, &owner)| OwnershipEntry {
                row: coord.row,
                col: coord.col,
                owner,
            })
            .collect();
        ownership.sort_by_key(|e| (e.row, e.col));

        let settings = state.settings();
        let scores = state.scores();
        Snapshot {
            grid: Some(grid),
            current_player: Some(state.current_player()),
            blocked_cells: Some(board.blocked_sorted()),
            red_score: Some(scores.red),
            blue_score: Some(scores.blue),
            game_active: Some(state.is_active()),
            last_move: state.last_move(),
            game_mode: Some(settings.game_mode),
            scoring_mode: Some(settings.scoring_mode),
            ai_difficulty: settings.difficulty,
            quickfire_target: Some(settings.quickfire_target),
            ownership: Some(ownership),
        }
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(SnapshotError::Encode)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(SnapshotError::Parse)
    }

    /// Rebuild a game. Missing fields fall back to defaults instead of
    /// failing; their names are returned alongside the state.
    pub fn into_state(self) -> (GameState, Vec<&'static str>) {
        let mut defaulted = Vec::new();
        let d = &mut defaulted;

        let grid = noted(self.grid, "grid", d).unwrap_or_default();
        let current_player = noted(self.current_player, "currentPlayer", d).unwrap_or(Player::Red);
        let blocked_cells = noted(self.blocked_cells, "blockedCells", d).unwrap_or_default();
        let red = noted(self.red_score, "redScore", d).unwrap_or(0);
        let blue = noted(self.blue_score, "blueScore", d).unwrap_or(0);
        let active = noted(self.game_active, "gameActive", d).unwrap_or(false);
        let game_mode = noted(self.game_mode, "gameMode", d).unwrap_or(GameMode::Multi);
        let scoring_mode = noted(self.scoring_mode, "scoringMode", d).unwrap_or(ScoringMode::Classic);
        let target = match noted(self.quickfire_target, "quickfireTarget", d) {
            Some(0) | None => QUICKFIRE_DEFAULT,
            Some(t) => t,
        };
        let entries = noted(self.ownership, "ownership", d).unwrap_or_default();

        let mut board = board_from_grid(&grid);
        for coord in blocked_cells {
            if board.contains(coord) {
                board.block(coord);
            }
        }

        let ownership: Ownership = entries
            .into_iter()
            .map(|e| (Coord::new(e.row, e.col), e.owner))
            .filter(|(coord, _)| board.contains(*coord))
            .collect();

        let last_move = self.last_move.filter(|&c| board.contains(c));
        let settings = GameSettings {
            game_mode,
            scoring_mode,
            difficulty: self.ai_difficulty,
            quickfire_target: clamp_quickfire_target(target),
        };

        let state = GameState::from_parts(
            board,
            ownership,
            current_player,
            Scores { red, blue },
            active,
            last_move,
            settings,
        );
        (state, defaulted)
    }
}

/// Pass a field through, recording its name when it was absent.
fn noted<T>(value: Option<T>, name: &'static str, defaulted: &mut Vec<&'static str>) -> Option<T> {
    if value.is_none() {
        defaulted.push(name);
    }
    value
}

/// Ragged rows are padded with empty cells; an empty grid gives the default board.
fn board_from_grid(grid: &[Vec<Cell>]) -> Board {
    let rows = grid.len();
    let cols = grid.iter().map(Vec::len).max().unwrap_or(0);
    if rows == 0 || cols == 0 {
        return Board::new(DEFAULT_ROWS, DEFAULT_COLS);
    }

    let mut board = Board::new(rows, cols);
    for (row, cells) in grid.iter().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            board.set(Coord { row, col }, cell);
        }
    }
    board
}

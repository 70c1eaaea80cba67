//! Core rules engine: board and blocked cells, the drop/capture cascade,
//! scoring modes, and state snapshots.

mod board;
mod capture;
mod player;
mod scoring;
mod settings;
mod snapshot;
mod state;
mod win;

pub use board::{Board, Cell, Coord, DropError, DEFAULT_COLS, DEFAULT_ROWS};
pub use capture::{capture, flood, Capture, CapturedRegion};
pub use player::Player;
pub use scoring::{
    clamp_quickfire_target, score_capture, target_reached, Ownership, ScoreDelta, Scores,
    ScoringMode, QUICKFIRE_DEFAULT, QUICKFIRE_MAX, QUICKFIRE_MIN,
};
pub use settings::{Difficulty, GameMode, GameSettings};
pub use snapshot::{OwnershipEntry, Snapshot};
pub use state::{CaptureEvent, GameOutcome, GameState, MoveError, MoveReport};
pub use win::{find_winning_run, Direction, WinningRun, RUN_LENGTH};

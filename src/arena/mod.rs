//! Agent-vs-agent simulation, used to check that stronger difficulty levels
//! actually play better.

mod episode;
mod metrics;

pub use episode::{evaluate, play_game, ArenaSetup};
pub use metrics::{ArenaStats, GameRecord};

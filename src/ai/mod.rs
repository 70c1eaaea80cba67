//! Computer opponents: the [`Agent`] trait, a seeded random player, and a
//! negamax searcher, plus the mapping from [`Difficulty`] to an agent.

mod agent;
mod negamax;
mod random;

pub use agent::Agent;
pub use negamax::{CaptureHeuristic, Heuristic, NegamaxAgent};
pub use random::RandomAgent;

use crate::game::{Difficulty, GameState};

/// Search depth used for a difficulty, or `None` for the random player.
pub fn search_depth(difficulty: Difficulty) -> Option<usize> {
    match difficulty {
        Difficulty::Easy => None,
        Difficulty::Medium => Some(2),
        Difficulty::Hard => Some(4),
    }
}

/// Build the opponent for a difficulty. `seed` only matters to the random player.
pub fn agent_for(difficulty: Difficulty, seed: u64) -> Box<dyn Agent> {
    match search_depth(difficulty) {
        None => Box::new(RandomAgent::with_seed(seed)),
        Some(depth) => Box::new(NegamaxAgent::new(depth)),
    }
}

/// Pick a column for the current player, or `None` if nothing is playable.
pub fn choose_move(state: &GameState, difficulty: Difficulty, seed: u64) -> Option<usize> {
    agent_for(difficulty, seed).select_action(state)
}

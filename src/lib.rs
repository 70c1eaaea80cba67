//! # Square Wars
//!
//! Rules and scoring engine for a Connect Four variant where every run of
//! four boxes off territory instead of ending the game. Boxed cells are
//! blocked for the rest of the game, and the game runs until the board
//! has no legal move left (or a Quick-Fire target is reached).
//!
//! ## Modules
//!
//! - [`game`]: Board, blocked cells, win/capture cascade, scoring modes, snapshots
//! - [`ai`]: Agent trait, random and negamax opponents, difficulty mapping
//! - [`session`]: One game with its computer opponent and cancellable replies
//! - [`arena`]: Agent-vs-agent games and win-rate statistics
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
pub mod session;

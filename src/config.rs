use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::arena::ArenaSetup;
use crate::error::ConfigError;
use crate::game::{GameSettings, DEFAULT_COLS, DEFAULT_ROWS, QUICKFIRE_MAX, QUICKFIRE_MIN};
use crate::session::Session;

/// Smallest and largest accepted board side. Four is the run length.
pub const MIN_BOARD_SIDE: usize = 4;
pub const MAX_BOARD_SIDE: usize = 32;

/// Board dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

/// Computer opponent pacing and randomness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpponentConfig {
    /// Pause before the computer's reply, in milliseconds
    pub think_delay_ms: u64,
    pub seed: u64,
}

impl Default for OpponentConfig {
    fn default() -> Self {
        OpponentConfig {
            think_delay_ms: 600,
            seed: 0,
        }
    }
}

/// Difficulty evaluation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub games_per_color: usize,
    pub seed: u64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            games_per_color: 10,
            seed: 0,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub game: GameSettings,
    pub opponent: OpponentConfig,
    pub arena: ArenaConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sides = MIN_BOARD_SIDE..=MAX_BOARD_SIDE;
        if !sides.contains(&self.board.rows) {
            return Err(ConfigError::Validation(format!(
                "board.rows must be in [{MIN_BOARD_SIDE}, {MAX_BOARD_SIDE}]"
            )));
        }
        if !sides.contains(&self.board.cols) {
            return Err(ConfigError::Validation(format!(
                "board.cols must be in [{MIN_BOARD_SIDE}, {MAX_BOARD_SIDE}]"
            )));
        }
        if !(QUICKFIRE_MIN..=QUICKFIRE_MAX).contains(&self.game.quickfire_target) {
            return Err(ConfigError::Validation(format!(
                "game.quickfire_target must be in [{QUICKFIRE_MIN}, {QUICKFIRE_MAX}]"
            )));
        }
        if self.arena.games_per_color == 0 {
            return Err(ConfigError::Validation(
                "arena.games_per_color must be > 0".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }

    /// Fresh session with the configured board, settings, and opponent.
    pub fn session(&self) -> Session {
        Session::new(
            self.game,
            self.board.rows,
            self.board.cols,
            Duration::from_millis(self.opponent.think_delay_ms),
            self.opponent.seed,
        )
    }

    /// Arena parameters with the configured board and scoring.
    pub fn arena_setup(&self) -> ArenaSetup {
        ArenaSetup {
            games_per_color: self.arena.games_per_color,
            seed: self.arena.seed,
            rows: self.board.rows,
            cols: self.board.cols,
            settings: self.game,
        }
    }
}

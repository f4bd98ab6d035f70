use std::path::PathBuf;

use crate::board::{Pit, Side};

/// A move that breaks the sowing preconditions. The board is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("pit {pit} does not belong to {side}")]
    NotOwned { side: Side, pit: Pit },

    #[error("pit {pit} is empty")]
    EmptyPit { pit: Pit },
}

/// Errors raised by the turn controller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid move: {0}")]
    Move(#[from] MoveError),

    #[error("it is not {side}'s turn")]
    NotYourTurn { side: Side },

    #[error("the game is over")]
    GameOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

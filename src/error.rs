use std::path::PathBuf;

use crate::board::Pos;
use crate::session::GameStatus;

/// Rejected placements at the board boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("position ({x}, {y}) is outside the {size}x{size} board")]
    OutOfBounds { x: i32, y: i32, size: u8 },

    #[error("position {0} is already occupied")]
    Occupied(Pos),

    #[error("cannot place an empty stone")]
    EmptyStone,
}

/// Errors surfaced by a game session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid move: {0}")]
    Board(#[from] BoardError),

    #[error("game is already over ({0:?})")]
    GameOver(GameStatus),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

use std::path::PathBuf;

/// Reasons a column drop can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is full")]
    ColumnFull,

    #[error("column index out of range")]
    InvalidColumn,

    #[error("game is already over")]
    GameOver,
}

/// Errors that can occur when building a board from text rows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("row {row} has {len} cells (expected {expected})")]
    RowLength {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("unrecognized cell '{symbol}' at ({row}, {col})")]
    InvalidCell { row: usize, col: usize, symbol: char },

    #[error("piece at ({row}, {col}) is floating above an empty cell")]
    FloatingPiece { row: usize, col: usize },
}

/// Error returned when a difficulty name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty '{0}' (expected 'easy', 'medium', or 'hard')")]
pub struct ParseDifficultyError(pub String);

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

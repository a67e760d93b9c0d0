use std::path::PathBuf;

/// Errors from bounds-checked board access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("cell ({row}, {col}) is outside the board")]
    OutOfRange { row: usize, col: usize },

    #[error("column {0} is outside the board")]
    ColumnOutOfRange(usize),
}

/// Reasons a move request is rejected. None of these end the session; the
/// front end reports them and waits for the next input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} does not exist (board has {cols} columns)")]
    InvalidColumn { column: usize, cols: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("move submitted after the game ended")]
    GameOver,

    #[error("waiting for the computer to move")]
    NotYourTurn,

    #[error("turn ticket belongs to a finished turn or an earlier game")]
    StaleTurn,
}

/// Errors from the score tally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoreError {
    #[error("no participant named '{0}' is being scored")]
    UnknownParticipant(String),
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

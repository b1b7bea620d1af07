use std::path::PathBuf;

/// Errors raised while building or parsing a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board dimensions {rows}x{cols} (each side must be in 1..={max})")]
    InvalidDimensions { rows: usize, cols: usize, max: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("unknown cell glyph '{glyph}' at row {row}, column {col}")]
    UnknownGlyph { glyph: char, row: usize, col: usize },

    #[error("piece at row {row}, column {col} has an empty cell beneath it")]
    FloatingPiece { row: usize, col: usize },

    #[error("both players already have four in a row")]
    MultipleWinners,
}

/// Errors raised when a move cannot be applied to a position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("column {column} is out of range (board has {cols} columns)")]
    InvalidColumn { column: usize, cols: usize },

    #[error("the game is already over")]
    GameOver,
}

/// Errors surfaced by the search engines.
///
/// `E` is the error type of the game adapter being searched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError<E: std::error::Error + 'static> {
    #[error("root position has no legal actions")]
    NoLegalActions,

    #[error("game adapter failed: {0}")]
    Adapter(#[source] E),
}

/// Errors an agent can report when asked for a move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AgentError {
    #[error("no legal actions available")]
    NoLegalActions,

    #[error("search failed: {0}")]
    Search(#[from] SearchError<MoveError>),
}

/// Errors that can occur while playing a match.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    #[error("{agent} selected illegal action {action} (legal: {legal:?})")]
    IllegalAction {
        agent: String,
        action: usize,
        legal: Vec<usize>,
    },

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),
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

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AutomataError {
    #[error("invalid grid dimensions {width}x{height}, both sides must be at least 1 and the cell count must fit in isize")]
    InvalidDimensions { width: usize, height: usize },

    #[error("cell count mismatch: expected {expected} cells, got {found}")]
    CellCountMismatch { expected: usize, found: usize },

    #[error("invalid live percentage {0}")]
    InvalidPercentage(f64),

    #[error("requested {requested} live cells but the grid only has {available}")]
    TooManyLiveCells { requested: usize, available: usize },

    #[error("invalid cell state {0}, expected 0 (dead), 1 (alive) or 2 (dying)")]
    InvalidCellState(u8),

    #[error("invalid pattern character {0:?}, expected '.', 'O', '#', '*' or '~'")]
    InvalidPatternChar(char),

    #[error("pattern {0:?} has no cells")]
    EmptyPattern(String),

    #[error("pattern {name:?} row {row} has {found} cells, expected {expected}")]
    RaggedPattern {
        name: String,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown pattern {0:?}")]
    UnknownPattern(String),

    #[error("couldn't load pattern {name:?}: {reason}")]
    PatternLoad { name: String, reason: String },

    #[error("invalid rule notation {0:?}, expected something like B3/S23")]
    InvalidRuleNotation(String),

    #[error("invalid zoom level {0}")]
    InvalidZoom(usize),
}

pub type Result<T> = std::result::Result<T, AutomataError>;

use thiserror::Error;

/// Why a tile grid cannot be turned into a level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("malformed level: {0}")]
    MalformedLevel(Malformed),
    #[error("level has no goal tile ('G')")]
    MissingGoal,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Malformed {
    #[error("grid is empty")]
    Empty,
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },
    #[error("unknown symbol {symbol:?} at row {row}, column {col}")]
    UnknownSymbol { row: usize, col: usize, symbol: char },
    #[error("second goal at {second:?}, first was at {first:?}")]
    MultipleGoals { first: (usize, usize), second: (usize, usize) },
}

impl From<Malformed> for LevelError {
    fn from(m: Malformed) -> Self {
        LevelError::MalformedLevel(m)
    }
}

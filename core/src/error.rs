use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Cell is already revealed")]
    CellRevealed,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;

/// Reasons a board configuration is rejected. All of them end the process the same way; the
/// variant only feeds the log.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("configuration file must have the `.{expected}` extension")]
    WrongExtension { expected: &'static str },
    #[error("configuration is empty")]
    Empty,
    #[error("configuration does not end with a line terminator")]
    MissingTrailingNewline,
    #[error("row {row} is empty")]
    EmptyRow { row: usize },
    #[error("row {row} has {found} columns, expected {expected}")]
    NotRectangular {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("{0} rows exceed the limit of {max}", max = crate::config::MAX_ROWS)]
    TooManyRows(usize),
    #[error("{0} columns exceed the limit of {max}", max = crate::config::MAX_COLS)]
    TooManyColumns(usize),
    #[error("unexpected symbol {symbol:?} at row {row}, column {col}")]
    InvalidSymbol { row: usize, col: usize, symbol: char },
    #[error("a board needs more than one cell")]
    SingleCell,
    #[error("a board needs at least one safe cell")]
    NoSafeCell,
}

/// A rejected command line. The `Display` text is exactly what the message box shows.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Not enough inputs!")]
    NotEnoughInputs,
    #[error("The provided input is not valid!")]
    InvalidInput,
}

impl From<GameError> for CommandError {
    fn from(_: GameError) -> Self {
        Self::InvalidInput
    }
}

use super::basic_types::SizeType;
use std::fmt;

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Error {
    /// The mine count does not leave at least one safe field, or the size is unusable.
    InvalidConfiguration {
        size: SizeType,
        mine_count: SizeType,
    },
    OutOfBounds {
        row: SizeType,
        col: SizeType,
        size: SizeType,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfiguration { size, mine_count } => write!(
                f,
                "Invalid configuration: {} mines do not fit a {}x{} board!",
                mine_count, size, size
            ),
            Error::OutOfBounds { row, col, size } => write!(
                f,
                "Invalid index: ({}, {}) is outside of the {}x{} board!",
                row, col, size, size
            ),
        }
    }
}

impl std::error::Error for Error {}

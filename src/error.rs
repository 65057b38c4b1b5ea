use std::io;
use std::num::ParseIntError;

use thiserror::Error;

pub type LifeResult<T> = Result<T, LifeError>;

#[derive(Debug, Error)]
pub enum LifeError {
    #[error("I/O error")]
    Io(#[from] io::Error),
    /// Standard input ended before a grid size was given.
    #[error("no grid size on standard input")]
    MissingSize,
    #[error("grid size {input:?} is not an integer")]
    InvalidSize {
        input: String,
        #[source]
        source: ParseIntError,
    },
    #[error("grid size must be positive, got {0}")]
    NonPositiveSize(i64),
    #[error("a universe needs at least one cell")]
    EmptyGrid,
    #[error("row {row} has {len} cells, expected {size}")]
    MalformedGrid { row: usize, len: usize, size: usize },
}

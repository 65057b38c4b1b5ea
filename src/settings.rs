use std::io::BufRead;
use std::time::Duration;

use crate::error::{LifeError, LifeResult};

const GENERATIONS: u64 = 1000;
const MASTER_SEED: u64 = 99;
const FRAME_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub size: usize,
    pub generations: u64,
    /// Only used to draw the universe seed.
    pub master_seed: u64,
    pub frame_delay: Duration,
}

impl Settings {
    pub fn new(size: usize) -> Settings {
        Settings {
            size,
            generations: GENERATIONS,
            master_seed: MASTER_SEED,
            frame_delay: FRAME_DELAY,
        }
    }

    /// Reads the grid size from the first token of `input`.
    pub fn from_reader<R: BufRead>(input: R) -> LifeResult<Settings> {
        for line in input.lines() {
            let line = line?;
            if let Some(token) = line.split_whitespace().next() {
                return parse_size(token).map(Settings::new);
            }
        }
        Err(LifeError::MissingSize)
    }
}

pub fn parse_size(token: &str) -> LifeResult<usize> {
    let size: i64 = token.trim().parse().map_err(|source| LifeError::InvalidSize {
        input: token.to_string(),
        source,
    })?;
    if size <= 0 {
        return Err(LifeError::NonPositiveSize(size));
    }
    usize::try_from(size).map_err(|_| LifeError::NonPositiveSize(size))
}

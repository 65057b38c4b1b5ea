pub(crate) mod cell;

use std::fmt::{self, Display, Formatter};

use randomize::PCG32;

pub use crate::life::cell::{Cell, CellState};
use crate::error::{LifeError, LifeResult};

/// PCG stream selector shared by every generator in the crate.
const PCG_STREAM: u64 = 1442695040888963407;

/// Source of the coin flips used to populate a fresh universe.
pub trait RandomSource {
    fn next_bit(&mut self) -> bool;
}

impl RandomSource for PCG32 {
    fn next_bit(&mut self) -> bool {
        self.next_u32() >> 31 == 1
    }
}

/// Seeded generator for a universe.
pub fn seeded_rng(seed: u64) -> PCG32 {
    (seed, PCG_STREAM).into()
}

/// Draw a universe seed from the master seed. The master seed itself is never
/// handed to a universe.
pub fn derive_seed(master_seed: u64) -> u64 {
    let mut rng = seeded_rng(master_seed);
    u64::from(rng.next_u32())
}

/// One generation of a toroidal Game of Life grid. Successors are produced
/// with [`Universe::next_generation`]; a universe is never modified after
/// construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Universe {
    cells: Vec<Vec<Cell>>,
    size: usize,
    seed: u64,
    alive_cells: usize,
    generations_passed: u64,
}

impl Universe {
    /// Seeds a `size` x `size` grid from `seed`. Equal arguments always give
    /// equal universes.
    pub fn create(size: usize, seed: u64) -> LifeResult<Self> {
        let mut rng = seeded_rng(seed);
        Self::initialize(size, seed, &mut rng)
    }

    /// Fills the grid with one draw per cell, row by row.
    pub fn initialize<R: RandomSource>(size: usize, seed: u64, rng: &mut R) -> LifeResult<Self> {
        if size == 0 {
            return Err(LifeError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(size);
        let mut alive_cells = 0;
        for x in 0..size {
            let mut row = Vec::with_capacity(size);
            for y in 0..size {
                let state = if rng.next_bit() {
                    alive_cells += 1;
                    CellState::Alive
                } else {
                    CellState::Dead
                };
                row.push(Cell::new(x, y, state));
            }
            cells.push(row);
        }

        Ok(Self {
            cells,
            size,
            seed,
            alive_cells,
            generations_passed: 1,
        })
    }

    /// Builds a first generation from explicit states, `rows[x][y]`.
    pub fn from_states(rows: Vec<Vec<CellState>>) -> LifeResult<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(LifeError::EmptyGrid);
        }
        if let Some((row, states)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(LifeError::MalformedGrid { row, len: states.len(), size });
        }

        let cells: Vec<Vec<Cell>> = rows
            .into_iter()
            .enumerate()
            .map(|(x, row)| {
                row.into_iter()
                    .enumerate()
                    .map(|(y, state)| Cell::new(x, y, state))
                    .collect()
            })
            .collect();
        let alive_cells = cells.iter().flatten().filter(|c| c.is_alive()).count();

        Ok(Self {
            cells,
            size,
            seed: 0,
            alive_cells,
            generations_passed: 1,
        })
    }

    pub fn size(&self) -> usize { self.size }
    pub fn seed(&self) -> u64 { self.seed }
    pub fn alive_cells(&self) -> usize { self.alive_cells }
    pub fn generations_passed(&self) -> u64 { self.generations_passed }

    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.cells.get(x).and_then(|row| row.get(y))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    pub fn states(&self) -> Vec<Vec<CellState>> {
        self.rows()
            .map(|row| row.iter().map(Cell::state).collect())
            .collect()
    }

    /// Computes the following generation. Every cell reads its neighbours
    /// from `self`, never from the grid being built.
    #[must_use]
    pub fn next_generation(&self) -> Universe {
        let mut cells = Vec::with_capacity(self.size);
        let mut alive_cells = 0;
        for row in &self.cells {
            let mut next_row = Vec::with_capacity(self.size);
            for cell in row {
                let next = cell.next_state(self);
                if next.is_alive() {
                    alive_cells += 1;
                }
                next_row.push(next);
            }
            cells.push(next_row);
        }

        Universe {
            cells,
            size: self.size,
            seed: self.seed,
            alive_cells,
            generations_passed: self.generations_passed + 1,
        }
    }
}

pub fn create_next_generation(universe: &Universe) -> Universe {
    universe.next_generation()
}

impl Display for Universe {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generation #{}", self.generations_passed)?;
        writeln!(f, "Alive: {}", self.alive_cells)?;
        for row in self.rows() {
            let line: String = row.iter().map(|c| c.state().symbol()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

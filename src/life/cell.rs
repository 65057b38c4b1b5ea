use crate::life::Universe;

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CellState {
    Alive,
    Dead,
}

impl CellState {
    pub fn symbol(self) -> char {
        match self {
            CellState::Alive => 'O',
            CellState::Dead => ' ',
        }
    }

    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    /// B3/S23: survive on 2 or 3 live neighbours, birth on exactly 3.
    pub fn next(self, alive_neighbours: usize) -> CellState {
        match (self, alive_neighbours) {
            (CellState::Alive, 2) | (CellState::Alive, 3) => CellState::Alive,
            (CellState::Dead, 3) => CellState::Alive,
            _ => CellState::Dead,
        }
    }
}

/// Neighbour offsets shifted by +1 so they stay unsigned.
const OFFSETS: [(usize, usize); 8] = [
    (0, 0), (0, 1), (0, 2),
    (1, 0),         (1, 2),
    (2, 0), (2, 1), (2, 2),
];

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub struct Cell {
    x: usize,
    y: usize,
    state: CellState,
}

impl Cell {
    pub fn new(x: usize, y: usize, state: CellState) -> Self {
        Self { x, y, state }
    }

    pub fn x(&self) -> usize { self.x }
    pub fn y(&self) -> usize { self.y }
    pub fn state(&self) -> CellState { self.state }
    pub fn is_alive(&self) -> bool { self.state.is_alive() }

    /// Coordinates of the eight neighbours on a torus of side `size`.
    /// `size` must be non-zero and the cell must lie inside the grid.
    pub(crate) fn neighbour_coordinates(&self, size: usize) -> [(usize, usize); 8] {
        debug_assert!(size > 0 && self.x < size && self.y < size);
        OFFSETS.map(|(dx, dy)| {
            ((self.x + size + dx - 1) % size, (self.y + size + dy - 1) % size)
        })
    }

    /// Every offset is counted, so on a grid smaller than 3 the same cell
    /// may be seen more than once.
    pub fn alive_neighbours(&self, universe: &Universe) -> usize {
        self.neighbour_coordinates(universe.size())
            .iter()
            .filter(|&&(x, y)| universe.cell(x, y).is_some_and(Cell::is_alive))
            .count()
    }

    #[must_use]
    pub fn next_state(&self, universe: &Universe) -> Cell {
        let alive_neighbours = self.alive_neighbours(universe);
        Cell {
            x: self.x,
            y: self.y,
            state: self.state.next(alive_neighbours),
        }
    }
}

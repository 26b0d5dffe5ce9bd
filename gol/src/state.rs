use log::{debug, trace};
use rayon::prelude::*;

use crate::{
    Grid,
    neighbours::{count_at, count_neighbours},
    rule::{Fate, next_state},
};

/// The working grid plus the number of generations computed so far.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationState {
    grid: Grid,
    generation: u64,
}

impl SimulationState {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Computes the next generation from the current snapshot only.
    pub fn advance(self) -> Self {
        let counts = count_neighbours(&self.grid);
        let (rows, columns) = (self.grid.row_count(), self.grid.column_count());
        let mut cells = Vec::with_capacity(rows * columns);
        let (mut births, mut deaths) = (0usize, 0usize);
        for row in 0..rows {
            for col in 0..columns {
                let fate = Fate::of(self.grid.is_alive(row, col), counts.get(row, col));
                match fate {
                    Fate::Birth => births += 1,
                    Fate::Underpopulation | Fate::Overpopulation => deaths += 1,
                    Fate::Survival | Fate::Stasis => (),
                }
                cells.push(fate.is_alive());
            }
        }
        trace!("generation {}: {births} births, {deaths} deaths", self.generation + 1);
        self.replace(Grid::from_cells(rows, columns, cells))
    }

    /// Same result as [`SimulationState::advance`], one row per rayon task.
    pub fn advance_parallel(self) -> Self {
        let (rows, columns) = (self.grid.row_count(), self.grid.column_count());
        let mut cells = vec![false; rows * columns];
        let snapshot = &self.grid;
        cells
            .par_chunks_mut(columns)
            .enumerate()
            .for_each(|(row, out)| {
                for (col, cell) in out.iter_mut().enumerate() {
                    let alive = snapshot.is_alive(row, col);
                    *cell = next_state(alive, count_at(snapshot, (row, col)));
                }
            });
        self.replace(Grid::from_cells(rows, columns, cells))
    }

    pub fn is_extinct(&self) -> bool {
        self.grid.all_dead()
    }
}

impl SimulationState {
    fn replace(self, grid: Grid) -> Self {
        let generation = self.generation + 1;
        debug!(
            "advanced to generation {generation}, population {}",
            grid.population()
        );
        Self { grid, generation }
    }
}

impl From<Grid> for SimulationState {
    fn from(grid: Grid) -> Self {
        Self::new(grid)
    }
}

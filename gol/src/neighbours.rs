use itertools::Itertools;

use crate::Grid;

/// Live-neighbour count for every cell of one grid snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighborCounts {
    rows: usize,
    columns: usize,
    counts: Vec<u8>,
}

impl NeighborCounts {
    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.counts[row * self.columns + col]
    }

    /// Number of in-bounds neighbour positions of `(row, col)`, alive or not.
    pub fn candidates(&self, row: usize, col: usize) -> usize {
        neighbours((row, col), (self.rows, self.columns)).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.counts.iter().copied()
    }
}

/// Counts the live 8-connected neighbours of every cell. Positions past the
/// edge do not exist, so corners see at most 3 neighbours and edges 5.
pub fn count_neighbours(grid: &Grid) -> NeighborCounts {
    let (rows, columns) = (grid.row_count(), grid.column_count());
    let counts = (0..rows)
        .cartesian_product(0..columns)
        .map(|p| count_at(grid, p))
        .collect();
    NeighborCounts {
        rows,
        columns,
        counts,
    }
}

pub(crate) fn count_at(grid: &Grid, p: (usize, usize)) -> u8 {
    let bounds = (grid.row_count(), grid.column_count());
    neighbours(p, bounds)
        .filter(|&(y, x)| grid.is_alive(y, x))
        .count() as u8
}

fn neighbours(
    (y, x): (usize, usize),
    (rows, columns): (usize, usize),
) -> impl Iterator<Item = (usize, usize)> {
    (-1..=1isize)
        .cartesian_product(-1..=1isize)
        .filter(|&d| d != (0, 0))
        .filter_map(move |(dy, dx)| {
            let y = y.checked_add_signed(dy)?;
            let x = x.checked_add_signed(dx)?;
            (y < rows && x < columns).then_some((y, x))
        })
}

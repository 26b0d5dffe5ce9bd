use std::str::FromStr;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::MalformedGridError;

/// A rectangular field of cells, stored row-major.
///
/// A grid is never mutated after construction. Advancing the simulation
/// builds a new one from the old snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Builds a grid from a row-major liveness table.
    pub fn new<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, MalformedGridError>
    where
        R: AsRef<[bool]>,
    {
        let mut rows = rows.into_iter();
        let first = rows.next().ok_or(MalformedGridError::NoRows)?;
        let first = first.as_ref();
        let columns = first.len();
        if columns == 0 {
            return Err(MalformedGridError::NoColumns);
        }
        let mut cells = first.to_vec();
        for (i, row) in rows.enumerate() {
            let row = row.as_ref();
            if row.len() != columns {
                return Err(MalformedGridError::Ragged {
                    row: i + 1,
                    expected: columns,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            rows: cells.len() / columns,
            columns,
            cells,
        })
    }

    /// An all-dead grid.
    pub fn dead(rows: usize, columns: usize) -> Result<Self, MalformedGridError> {
        Self::from_fn(rows, columns, |_, _| false)
    }

    /// Each cell is alive with probability one half.
    pub fn random(
        rows: usize,
        columns: usize,
        rng: &mut impl Rng,
    ) -> Result<Self, MalformedGridError> {
        Self::from_fn(rows, columns, |_, _| rng.gen_bool(0.5))
    }

    /// Same as [`Grid::random`], reproducible from `seed`.
    pub fn seeded(rows: usize, columns: usize, seed: u64) -> Result<Self, MalformedGridError> {
        Self::random(rows, columns, &mut StdRng::seed_from_u64(seed))
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// Panics if `(row, col)` lies outside the grid.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        assert!(
            row < self.rows && col < self.columns,
            "cell ({row}, {col}) outside {}x{} grid",
            self.rows,
            self.columns
        );
        self.cells[row * self.columns + col]
    }

    pub fn all_dead(&self) -> bool {
        !self.cells.contains(&true)
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.columns)
    }
}

impl Grid {
    pub(crate) fn from_fn(
        rows: usize,
        columns: usize,
        mut f: impl FnMut(usize, usize) -> bool,
    ) -> Result<Self, MalformedGridError> {
        if rows == 0 {
            return Err(MalformedGridError::NoRows);
        }
        if columns == 0 {
            return Err(MalformedGridError::NoColumns);
        }
        let mut cells = Vec::with_capacity(rows * columns);
        for row in 0..rows {
            for col in 0..columns {
                cells.push(f(row, col));
            }
        }
        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    /// Takes an already-validated row-major buffer.
    pub(crate) fn from_cells(rows: usize, columns: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), rows * columns);
        Self {
            rows,
            columns,
            cells,
        }
    }
}

impl FromStr for Grid {
    type Err = MalformedGridError;

    /// One row per line: `'1'` is alive, `'0'` is dead, anything else is
    /// skipped and does not count as a column.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s.lines().map(|line| {
            line.chars()
                .filter_map(|c| match c {
                    '0' => Some(false),
                    '1' => Some(true),
                    _ => None,
                })
                .collect::<Vec<_>>()
        });
        Grid::new(rows)
    }
}

use thiserror::Error;

/// Raised when a row table cannot form a rectangular, non-empty grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedGridError {
    #[error("grid has no rows")]
    NoRows,

    #[error("grid has no columns")]
    NoColumns,

    /// Row `row` has `found` cells but the first row has `expected`.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

//! Conway's Game of Life on a bounded grid.
//!
//! Cells outside the grid do not exist: there is no wraparound, so edge and
//! corner cells simply have fewer neighbours.

mod error;
mod grid;
mod neighbours;
pub mod render;
mod rule;
mod state;


pub use crate::{
    error::MalformedGridError,
    grid::Grid,
    neighbours::{NeighborCounts, count_neighbours},
    rule::{Fate, next_state},
    state::SimulationState,
};

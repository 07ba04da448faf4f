//! Core domain types for the swap puzzle
//!
//! Pure data: word lengths, grid topologies, letter grids and the error
//! taxonomy. Nothing in here touches randomness or I/O.

mod error;
mod grid;
mod topology;

pub use error::PuzzleError;
pub use grid::{AnswerGrid, CellStatus, Coord, PlayGrid, UnresolvedCells};
pub use topology::{
    Constraint, GridTopology, MAX_WORD_LENGTH, MIN_WORD_LENGTH, Orientation, Placement,
    WordLength, grid_size,
};

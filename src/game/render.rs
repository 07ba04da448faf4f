//! Board snapshots handed to the presentation layer

use super::state::Outcome;
use crate::core::{CellStatus, Coord};
use thiserror::Error;

/// A presentation layer failed to draw a board
#[derive(Error, Debug)]
#[error("render failed: {0}")]
pub struct RenderError(pub String);

impl From<std::io::Error> for RenderError {
    fn from(e: std::io::Error) -> Self {
        Self(e.to_string())
    }
}

/// One occupied cell as the player sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardCell {
    pub letter: char,
    pub status: CellStatus,
}

/// Full snapshot of the play grid with per-cell status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub size: usize,
    /// Row-major, `None` for cells outside every word
    pub cells: Vec<Option<BoardCell>>,
    pub remaining_swaps: u32,
    pub outcome: Outcome,
}

impl BoardView {
    #[must_use]
    pub fn cell(&self, coord: Coord) -> Option<BoardCell> {
        if coord.row < self.size && coord.col < self.size {
            self.cells[coord.row * self.size + coord.col]
        } else {
            None
        }
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: usize) -> impl Iterator<Item = Option<BoardCell>> + '_ {
        self.cells
            .iter()
            .skip(row * self.size)
            .take(self.size)
            .copied()
    }

    /// Number of occupied cells with the given status
    #[must_use]
    pub fn count(&self, status: CellStatus) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.status == status)
            .count()
    }
}

/// Receives a board after setup and after every successful swap
pub trait RenderSink {
    /// Draw `board`
    ///
    /// # Errors
    /// A failed draw is reported to the game, which logs it and carries on.
    fn render(&mut self, board: &BoardView) -> Result<(), RenderError>;
}

/// Keeps only the most recent board
#[derive(Debug, Default)]
pub struct LatestBoard(pub Option<BoardView>);

impl RenderSink for LatestBoard {
    fn render(&mut self, board: &BoardView) -> Result<(), RenderError> {
        self.0 = Some(board.clone());
        Ok(())
    }
}

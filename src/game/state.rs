//! Swap budget and win/loss tracking
//!
//! `InProgress` moves to `Won` or `Lost` exactly once; both are terminal.

use crate::core::{AnswerGrid, Coord, PlayGrid, PuzzleError, UnresolvedCells};
use std::fmt;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// What one swap did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapReport {
    /// Cells that became correct with this swap
    pub resolved: Vec<Coord>,
    pub remaining_swaps: u32,
    pub outcome: Outcome,
}

/// Remaining budget, unresolved cells and outcome of one puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleState {
    remaining_swaps: u32,
    unresolved: UnresolvedCells,
    outcome: Outcome,
}

impl PuzzleState {
    #[must_use]
    pub const fn new(swap_budget: u32, unresolved: UnresolvedCells) -> Self {
        Self {
            remaining_swaps: swap_budget,
            unresolved,
            outcome: Outcome::InProgress,
        }
    }

    #[inline]
    #[must_use]
    pub const fn remaining_swaps(&self) -> u32 {
        self.remaining_swaps
    }

    #[inline]
    #[must_use]
    pub const fn unresolved(&self) -> &UnresolvedCells {
        &self.unresolved
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Swap two cells of `play` and update budget, resolution and outcome
    ///
    /// The caller is expected to have checked the swap with the session's
    /// validity gate; this only refuses to act once the game is over.
    /// Each swap costs exactly one unit of budget, resolving something or not.
    /// A resolved cell is never marked unresolved again.
    ///
    /// # Errors
    /// Returns `PuzzleError::GameOver` if the outcome is already terminal.
    pub fn apply_swap(
        &mut self,
        play: &mut PlayGrid,
        answer: &AnswerGrid,
        a: Coord,
        b: Coord,
    ) -> Result<SwapReport, PuzzleError> {
        if self.outcome.is_terminal() {
            return Err(PuzzleError::GameOver);
        }

        play.swap(a, b);

        let mut resolved = Vec::with_capacity(2);
        for cell in [a, b] {
            if play.get(cell).is_some()
                && play.get(cell) == answer.get(cell)
                && self.unresolved.resolve(cell)
            {
                resolved.push(cell);
            }
        }

        self.remaining_swaps = self.remaining_swaps.saturating_sub(1);

        self.outcome = if self.unresolved.is_empty() {
            Outcome::Won
        } else if self.remaining_swaps == 0 {
            Outcome::Lost
        } else {
            Outcome::InProgress
        };

        Ok(SwapReport {
            resolved,
            remaining_swaps: self.remaining_swaps,
            outcome: self.outcome,
        })
    }
}

//! Pick-up-and-drop input gesture
//!
//! A `SwapSession` lives in the input layer for the span of one gesture: a
//! tile is picked up, moved over a target, then dropped or put back. The
//! game itself never sees it.

use super::render::RenderSink;
use super::session::Game;
use super::state::SwapReport;
use crate::core::{Coord, PuzzleError};

/// One pick-up-and-drop gesture
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwapSession {
    origin: Option<Coord>,
    hovered: Option<Coord>,
}

impl SwapSession {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            origin: None,
            hovered: None,
        }
    }

    /// Pick up the tile at `coord`, replacing any gesture in flight
    pub const fn begin(&mut self, coord: Coord) {
        self.origin = Some(coord);
        self.hovered = None;
    }

    /// Move the held tile over `coord`; ignored when nothing is held
    pub const fn target(&mut self, coord: Coord) {
        if self.origin.is_some() {
            self.hovered = Some(coord);
        }
    }

    /// Put the tile back without swapping
    pub const fn cancel(&mut self) {
        self.origin = None;
        self.hovered = None;
    }

    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn origin(&self) -> Option<Coord> {
        self.origin
    }

    #[inline]
    #[must_use]
    pub const fn hovered(&self) -> Option<Coord> {
        self.hovered
    }

    /// Whether dropping now would be accepted by `game`
    #[must_use]
    pub fn can_drop(&self, game: &Game) -> bool {
        match (self.origin, self.hovered) {
            (Some(a), Some(b)) => game.is_swap_allowed(a, b),
            _ => false,
        }
    }

    /// Drop the held tile on the hovered cell
    ///
    /// The gesture ends either way. Returns `Ok(None)` when there was no
    /// complete gesture or the tile was dropped back on its origin.
    ///
    /// # Errors
    /// Propagates `SwapRejected` and `GameOver` from the game.
    pub fn finish<S: RenderSink + ?Sized>(
        &mut self,
        game: &mut Game,
        sink: &mut S,
    ) -> Result<Option<SwapReport>, PuzzleError> {
        let (origin, hovered) = (self.origin.take(), self.hovered.take());
        match (origin, hovered) {
            (Some(a), Some(b)) if a != b => game.swap(a, b, sink).map(Some),
            _ => Ok(None),
        }
    }
}

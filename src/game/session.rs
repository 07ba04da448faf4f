//! A game in play
//!
//! Owns the answer, the play grid and the puzzle state, gates swaps, and
//! pushes a fresh board to a render sink whenever the grid changes.

use super::render::{BoardCell, BoardView, RenderSink};
use super::state::{Outcome, PuzzleState, SwapReport};
use crate::core::{AnswerGrid, CellStatus, Coord, PlayGrid, PuzzleError};
use crate::generator::Puzzle;
use log::{info, warn};

/// One puzzle from first board to win or loss
#[derive(Debug, Clone)]
pub struct Game {
    words: Vec<String>,
    answer: AnswerGrid,
    play: PlayGrid,
    state: PuzzleState,
    swap_budget: u32,
}

impl Game {
    /// Start a game on a generated puzzle with `swap_budget` swaps
    #[must_use]
    pub fn new(puzzle: Puzzle, swap_budget: u32) -> Self {
        Self {
            words: puzzle.words,
            answer: puzzle.answer,
            play: puzzle.play,
            state: PuzzleState::new(swap_budget, puzzle.unresolved),
            swap_budget,
        }
    }

    /// Words hidden in the grid, horizontal slots first
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub const fn answer(&self) -> &AnswerGrid {
        &self.answer
    }

    #[must_use]
    pub const fn play(&self) -> &PlayGrid {
        &self.play
    }

    #[must_use]
    pub const fn state(&self) -> &PuzzleState {
        &self.state
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    #[must_use]
    pub const fn remaining_swaps(&self) -> u32 {
        self.state.remaining_swaps()
    }

    /// Swaps used so far
    #[must_use]
    pub const fn swaps_used(&self) -> u32 {
        self.swap_budget - self.state.remaining_swaps()
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.answer.size()
    }

    #[must_use]
    pub fn cell_status(&self, coord: Coord) -> Option<CellStatus> {
        CellStatus::evaluate(&self.play, &self.answer, coord)
    }

    /// Whether a cell may take part in a swap
    #[must_use]
    pub fn is_swappable(&self, coord: Coord) -> bool {
        !self.state.outcome().is_terminal()
            && self.cell_status(coord).is_some_and(CellStatus::is_swappable)
    }

    /// Whether the input layer may swap `a` and `b`
    ///
    /// Both cells must hold letters that are not yet correct, and the letters
    /// must differ. Always false once the game is over.
    #[must_use]
    pub fn is_swap_allowed(&self, a: Coord, b: Coord) -> bool {
        self.is_swappable(a) && self.is_swappable(b) && self.play.get(a) != self.play.get(b)
    }

    /// Snapshot of the board for rendering
    #[must_use]
    pub fn board(&self) -> BoardView {
        let size = self.size();
        let cells = (0..size)
            .flat_map(|row| (0..size).map(move |col| Coord::new(row, col)))
            .map(|coord| {
                let letter = self.play.get(coord)?;
                let status = self.cell_status(coord)?;
                Some(BoardCell { letter, status })
            })
            .collect();

        BoardView {
            size,
            cells,
            remaining_swaps: self.state.remaining_swaps(),
            outcome: self.state.outcome(),
        }
    }

    /// Emit the initial board
    pub fn start<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        info!(
            "game started: {} unresolved cells, {} swaps",
            self.state.unresolved().len(),
            self.state.remaining_swaps()
        );
        self.emit(sink);
    }

    /// Swap two cells and emit the new board
    ///
    /// # Errors
    /// Returns `GameOver` once the game has ended and `SwapRejected` when the
    /// swap fails the validity gate. Neither changes any state.
    pub fn swap<S: RenderSink + ?Sized>(
        &mut self,
        a: Coord,
        b: Coord,
        sink: &mut S,
    ) -> Result<SwapReport, PuzzleError> {
        if self.state.outcome().is_terminal() {
            return Err(PuzzleError::GameOver);
        }
        if !self.is_swap_allowed(a, b) {
            return Err(PuzzleError::SwapRejected { a, b });
        }

        let report = self.state.apply_swap(&mut self.play, &self.answer, a, b)?;
        if report.outcome.is_terminal() {
            info!(
                "game {} with {} swaps remaining",
                report.outcome, report.remaining_swaps
            );
        }

        self.emit(sink);
        Ok(report)
    }

    fn emit<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        if let Err(e) = sink.render(&self.board()) {
            warn!("{e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GridTopology;
    use crate::game::render::{LatestBoard, RenderError};

    struct FailingSink(usize);

    impl RenderSink for FailingSink {
        fn render(&mut self, _board: &BoardView) -> Result<(), RenderError> {
            self.0 += 1;
            Err(RenderError("display went away".into()))
        }
    }

    fn game(budget: u32) -> Game {
        let answer = AnswerGrid::from_rows(&["cat", "o.i", "toe"]).unwrap();
        let play = PlayGrid::from_rows(&["eot", "o.i", "tac"]).unwrap();
        let unresolved = [
            Coord::new(0, 0),
            Coord::new(2, 2),
            Coord::new(0, 1),
            Coord::new(2, 1),
        ]
        .into_iter()
        .collect();
        let puzzle = Puzzle {
            topology: GridTopology::lookup(3).unwrap(),
            words: vec!["cat".into(), "toe".into(), "cot".into(), "tie".into()],
            answer,
            play,
            unresolved,
            scramble_swaps: 2,
        };
        Game::new(puzzle, budget)
    }

    #[test]
    fn swap_gate() {
        let game = game(15);
        // both unresolved, different letters
        assert!(game.is_swap_allowed(Coord::new(0, 0), Coord::new(2, 2)));
        // (0,2) 't' is correct
        assert!(!game.is_swap_allowed(Coord::new(0, 0), Coord::new(0, 2)));
        // empty cell
        assert!(!game.is_swap_allowed(Coord::new(0, 0), Coord::new(1, 1)));
        // same cell, same letter
        assert!(!game.is_swap_allowed(Coord::new(0, 0), Coord::new(0, 0)));
        // out of range
        assert!(!game.is_swap_allowed(Coord::new(0, 0), Coord::new(5, 5)));
    }

    #[test]
    fn rejected_swap_changes_nothing() {
        let mut game = game(15);
        let mut sink = LatestBoard::default();
        let err = game
            .swap(Coord::new(0, 0), Coord::new(0, 2), &mut sink)
            .unwrap_err();

        assert!(matches!(err, PuzzleError::SwapRejected { .. }));
        assert_eq!(game.remaining_swaps(), 15);
        assert!(sink.0.is_none());
    }

    #[test]
    fn successful_swap_emits_board() {
        let mut game = game(15);
        let mut sink = LatestBoard::default();
        game.start(&mut sink);
        let initial = sink.0.clone().unwrap();
        assert_eq!(initial.count(CellStatus::Correct), 4);

        game.swap(Coord::new(0, 0), Coord::new(2, 2), &mut sink)
            .unwrap();
        let board = sink.0.unwrap();
        assert_eq!(board.remaining_swaps, 14);
        assert_eq!(board.count(CellStatus::Correct), 6);
        assert_eq!(board.cell(Coord::new(0, 0)).map(|c| c.letter), Some('c'));
        assert_eq!(game.swaps_used(), 1);
    }

    #[test]
    fn render_failure_does_not_corrupt_state() {
        let mut game = game(15);
        let mut sink = FailingSink(0);
        game.start(&mut sink);
        let report = game
            .swap(Coord::new(0, 0), Coord::new(2, 2), &mut sink)
            .unwrap();

        assert_eq!(sink.0, 2);
        assert_eq!(report.remaining_swaps, 14);
        assert_eq!(game.state().unresolved().len(), 2);
    }

    #[test]
    fn finished_game_refuses_swaps() {
        let mut game = game(15);
        let mut sink = LatestBoard::default();
        game.swap(Coord::new(0, 0), Coord::new(2, 2), &mut sink)
            .unwrap();
        let report = game
            .swap(Coord::new(0, 1), Coord::new(2, 1), &mut sink)
            .unwrap();
        assert_eq!(report.outcome, Outcome::Won);

        assert!(!game.is_swappable(Coord::new(0, 0)));
        assert_eq!(
            game.swap(Coord::new(0, 0), Coord::new(2, 2), &mut sink),
            Err(PuzzleError::GameOver)
        );
        assert_eq!(game.remaining_swaps(), 13);
    }

    #[test]
    fn board_marks_statuses() {
        let game = game(15);
        let board = game.board();
        assert_eq!(board.size, 3);
        assert!(board.cell(Coord::new(1, 1)).is_none());
        // 'o' at (0,1): row 0 of the answer is c,a,t, column 1 is a,_,o
        assert_eq!(
            board.cell(Coord::new(0, 1)).map(|c| c.status),
            Some(CellStatus::Misplaced)
        );
        let row: Vec<Option<char>> = board.row(2).map(|c| c.map(|c| c.letter)).collect();
        assert_eq!(row, vec![Some('t'), Some('a'), Some('c')]);
    }
}

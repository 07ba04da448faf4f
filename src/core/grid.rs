//! Letter grids and per-cell status
//!
//! Two grid types share one storage layout: [`AnswerGrid`] is the solved
//! grid and never changes after projection, [`PlayGrid`] is the copy the
//! player rearranges. Cells not covered by any word are `None`.

use rustc_hash::FxHashSet;
use std::fmt;

/// Zero-indexed (row, column) position in a grid, row 0 at the top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Cells {
    size: usize,
    letters: Vec<Option<char>>,
}

impl Cells {
    fn empty(size: usize) -> Self {
        Self {
            size,
            letters: vec![None; size * size],
        }
    }

    fn from_rows<S: AsRef<str>>(rows: &[S]) -> Option<Self> {
        let size = rows.len();
        let mut cells = Self::empty(size);
        for (r, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.as_ref().chars().collect();
            if chars.len() != size {
                return None;
            }
            for (c, ch) in chars.into_iter().enumerate() {
                if ch != '.' {
                    cells.letters[r * size + c] = Some(ch);
                }
            }
        }
        Some(cells)
    }

    #[inline]
    fn index(&self, coord: Coord) -> Option<usize> {
        (coord.row < self.size && coord.col < self.size).then_some(coord.row * self.size + coord.col)
    }

    #[inline]
    fn get(&self, coord: Coord) -> Option<char> {
        self.index(coord).and_then(|i| self.letters[i])
    }

    fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.size).flat_map(move |r| (0..self.size).map(move |c| Coord::new(r, c)))
    }

    fn occupied(&self) -> Vec<Coord> {
        self.coords().filter(|&c| self.get(c).is_some()).collect()
    }

    fn write_rows(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.size {
            if r > 0 {
                writeln!(f)?;
            }
            for c in 0..self.size {
                match self.get(Coord::new(r, c)) {
                    Some(ch) => write!(f, "{}", ch.to_uppercase())?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}

/// The solved grid, ground truth for win detection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerGrid(Cells);

impl AnswerGrid {
    pub(crate) fn empty(size: usize) -> Self {
        Self(Cells::empty(size))
    }

    /// Build a grid from row strings, `.` marking an empty cell
    ///
    /// Returns `None` unless every row is as long as there are rows.
    ///
    /// # Examples
    /// ```
    /// use wordswap::core::{AnswerGrid, Coord};
    ///
    /// let grid = AnswerGrid::from_rows(&["cat", "o.i", "toe"]).unwrap();
    /// assert_eq!(grid.get(Coord::new(1, 2)), Some('i'));
    /// assert_eq!(grid.get(Coord::new(1, 1)), None);
    /// ```
    #[must_use]
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Option<Self> {
        Cells::from_rows(rows).map(Self)
    }

    pub(crate) fn set(&mut self, coord: Coord, letter: char) {
        if let Some(i) = self.0.index(coord) {
            self.0.letters[i] = Some(letter);
        }
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.0.size
    }

    /// Letter at `coord`, `None` for empty or out-of-range cells
    #[inline]
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<char> {
        self.0.get(coord)
    }

    /// Every coordinate holding a letter, in row-major order
    #[must_use]
    pub fn occupied(&self) -> Vec<Coord> {
        self.0.occupied()
    }

    /// Whether `letter` appears anywhere in the row or column of `coord`
    #[must_use]
    pub fn line_contains(&self, coord: Coord, letter: char) -> bool {
        (0..self.size()).any(|i| {
            self.get(Coord::new(coord.row, i)) == Some(letter)
                || self.get(Coord::new(i, coord.col)) == Some(letter)
        })
    }
}

impl fmt::Display for AnswerGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_rows(f)
    }
}

/// The grid the player rearranges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayGrid(Cells);

impl PlayGrid {
    /// Start from an exact copy of the answer
    #[must_use]
    pub fn from_answer(answer: &AnswerGrid) -> Self {
        Self(answer.0.clone())
    }

    /// Build a grid from row strings, `.` marking an empty cell
    #[must_use]
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Option<Self> {
        Cells::from_rows(rows).map(Self)
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.0.size
    }

    #[inline]
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<char> {
        self.0.get(coord)
    }

    #[must_use]
    pub fn occupied(&self) -> Vec<Coord> {
        self.0.occupied()
    }

    /// Exchange the contents of two cells
    ///
    /// Out-of-range coordinates leave the grid untouched.
    pub fn swap(&mut self, a: Coord, b: Coord) {
        if let (Some(i), Some(j)) = (self.0.index(a), self.0.index(b)) {
            self.0.letters.swap(i, j);
        }
    }

    /// Whether every cell matches the answer
    #[must_use]
    pub fn matches(&self, answer: &AnswerGrid) -> bool {
        self.0 == answer.0
    }
}

impl fmt::Display for PlayGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_rows(f)
    }
}

/// Coordinates whose play letter does not yet match the answer
///
/// Only ever holds occupied coordinates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnresolvedCells(FxHashSet<Coord>);

impl UnresolvedCells {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn mark(&mut self, coord: Coord) {
        self.0.insert(coord);
    }

    /// Remove `coord`, returning whether it was present
    pub(crate) fn resolve(&mut self, coord: Coord) -> bool {
        self.0.remove(&coord)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.0.contains(&coord)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Coordinates in row-major order
    #[must_use]
    pub fn sorted(&self) -> Vec<Coord> {
        let mut coords: Vec<Coord> = self.0.iter().copied().collect();
        coords.sort_unstable();
        coords
    }
}

impl FromIterator<Coord> for UnresolvedCells {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Display label for one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellStatus {
    /// Letter matches the answer at this coordinate
    Correct,
    /// Letter belongs somewhere in this row or column
    Misplaced,
    Wrong,
}

impl CellStatus {
    /// Status of the play letter at `coord`, `None` for empty cells
    ///
    /// # Examples
    /// ```
    /// use wordswap::core::{AnswerGrid, CellStatus, Coord, PlayGrid};
    ///
    /// let answer = AnswerGrid::from_rows(&["cat", "o.i", "toe"]).unwrap();
    /// let mut play = PlayGrid::from_answer(&answer);
    /// play.swap(Coord::new(0, 0), Coord::new(2, 2));
    ///
    /// // 'e' is not in row 0 or column 0 of the answer
    /// assert_eq!(CellStatus::evaluate(&play, &answer, Coord::new(0, 0)), Some(CellStatus::Wrong));
    /// // 'c' is not in row 2 or column 2 either
    /// assert_eq!(CellStatus::evaluate(&play, &answer, Coord::new(2, 2)), Some(CellStatus::Wrong));
    /// assert_eq!(CellStatus::evaluate(&play, &answer, Coord::new(0, 1)), Some(CellStatus::Correct));
    /// ```
    #[must_use]
    pub fn evaluate(play: &PlayGrid, answer: &AnswerGrid, coord: Coord) -> Option<Self> {
        let letter = play.get(coord)?;
        if answer.get(coord) == Some(letter) {
            Some(Self::Correct)
        } else if answer.line_contains(coord, letter) {
            Some(Self::Misplaced)
        } else {
            Some(Self::Wrong)
        }
    }

    /// Correct cells are locked in place
    #[inline]
    #[must_use]
    pub const fn is_swappable(self) -> bool {
        !matches!(self, Self::Correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AnswerGrid {
        AnswerGrid::from_rows(&["cart", "u.u.", "toes", "e.s."]).unwrap()
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        assert!(AnswerGrid::from_rows(&["abc", "de"]).is_none());
        assert!(AnswerGrid::from_rows(&["abcd", "efgh", "ijkl"]).is_none());
    }

    #[test]
    fn occupied_skips_empty_cells() {
        let grid = sample();
        let occupied = grid.occupied();
        assert_eq!(occupied.len(), 12);
        assert!(!occupied.contains(&Coord::new(1, 1)));
        assert!(!occupied.contains(&Coord::new(3, 3)));
    }

    #[test]
    fn out_of_range_reads_are_empty() {
        let grid = sample();
        assert_eq!(grid.get(Coord::new(4, 0)), None);
        assert_eq!(grid.get(Coord::new(0, 9)), None);
    }

    #[test]
    fn play_grid_swap_and_match() {
        let answer = sample();
        let mut play = PlayGrid::from_answer(&answer);
        assert!(play.matches(&answer));

        play.swap(Coord::new(0, 0), Coord::new(2, 3));
        assert_eq!(play.get(Coord::new(0, 0)), Some('s'));
        assert_eq!(play.get(Coord::new(2, 3)), Some('c'));
        assert!(!play.matches(&answer));

        play.swap(Coord::new(0, 0), Coord::new(2, 3));
        assert!(play.matches(&answer));
    }

    #[test]
    fn status_misplaced_via_column() {
        let answer = sample();
        let mut play = PlayGrid::from_answer(&answer);
        // 'u' moves to (2,0); column 0 of the answer holds c,u,t,e
        play.swap(Coord::new(1, 0), Coord::new(2, 0));
        assert_eq!(
            CellStatus::evaluate(&play, &answer, Coord::new(2, 0)),
            Some(CellStatus::Misplaced)
        );
    }

    #[test]
    fn status_misplaced_via_row() {
        let answer = sample();
        let mut play = PlayGrid::from_answer(&answer);
        play.swap(Coord::new(0, 0), Coord::new(0, 3));
        assert_eq!(
            CellStatus::evaluate(&play, &answer, Coord::new(0, 3)),
            Some(CellStatus::Misplaced)
        );
    }

    #[test]
    fn status_wrong_and_empty() {
        let answer = sample();
        let mut play = PlayGrid::from_answer(&answer);
        // 'o' (2,1) goes to (0,0): row 0 is c,a,r,t and column 0 is c,u,t,e
        play.swap(Coord::new(0, 0), Coord::new(2, 1));
        assert_eq!(
            CellStatus::evaluate(&play, &answer, Coord::new(0, 0)),
            Some(CellStatus::Wrong)
        );
        assert_eq!(CellStatus::evaluate(&play, &answer, Coord::new(1, 1)), None);
    }

    #[test]
    fn unresolved_cells_sorted() {
        let cells: UnresolvedCells = [Coord::new(2, 0), Coord::new(0, 3), Coord::new(0, 1)]
            .into_iter()
            .collect();
        assert_eq!(
            cells.sorted(),
            vec![Coord::new(0, 1), Coord::new(0, 3), Coord::new(2, 0)]
        );
    }

    #[test]
    fn display_uses_dots_for_gaps() {
        let grid = AnswerGrid::from_rows(&["cat", "o.i", "toe"]).unwrap();
        assert_eq!(grid.to_string(), "CAT\nO.I\nTOE");
    }
}

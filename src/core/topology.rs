//! Grid topology lookup tables
//!
//! A topology describes, for one word length, how many word slots the grid has,
//! where each slot lies and which letters of which slots must coincide.
//!
//! Slots `0..slot_count / 2` are horizontal words placed top to bottom, the rest
//! are vertical words placed left to right. Both the placement rule and the
//! constraint tables below are keyed by the same [`WordLength`], and
//! [`GridTopology::constraint_cells`] maps a constraint back onto grid
//! coordinates so the two can be checked against each other.

use super::error::PuzzleError;
use super::grid::Coord;
use std::fmt;

/// Smallest supported word length
pub const MIN_WORD_LENGTH: usize = 3;

/// Largest supported word length
pub const MAX_WORD_LENGTH: usize = 7;

/// A validated word length in `MIN_WORD_LENGTH..=MAX_WORD_LENGTH`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordLength(usize);

impl WordLength {
    /// Validate a raw word length
    ///
    /// # Errors
    /// Returns `PuzzleError::InvalidWordLength` for any value outside 3..=7.
    ///
    /// # Examples
    /// ```
    /// use wordswap::core::WordLength;
    ///
    /// assert!(WordLength::new(5).is_ok());
    /// assert!(WordLength::new(8).is_err());
    /// ```
    pub fn new(value: usize) -> Result<Self, PuzzleError> {
        if (MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&value) {
            Ok(Self(value))
        } else {
            Err(PuzzleError::InvalidWordLength(value))
        }
    }

    /// The raw length
    #[inline]
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Iterate over every supported word length
    pub fn all() -> impl Iterator<Item = Self> {
        (MIN_WORD_LENGTH..=MAX_WORD_LENGTH).map(Self)
    }
}

impl Default for WordLength {
    fn default() -> Self {
        Self(5)
    }
}

impl fmt::Display for WordLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for WordLength {
    type Error = PuzzleError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Required letter equality between two slots
///
/// The letter at `pos_a` of the word in `slot_a` must equal the letter at
/// `pos_b` of the word in `slot_b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Constraint {
    pub slot_a: usize,
    pub slot_b: usize,
    pub pos_a: usize,
    pub pos_b: usize,
}

impl Constraint {
    const fn new(slot_a: usize, slot_b: usize, pos_a: usize, pos_b: usize) -> Self {
        Self {
            slot_a,
            slot_b,
            pos_a,
            pos_b,
        }
    }

    /// Whether this constraint involves `slot`
    #[inline]
    #[must_use]
    pub const fn references(&self, slot: usize) -> bool {
        self.slot_a == slot || self.slot_b == slot
    }
}

// Lengths 3 and 4: two rows and two columns, crossing at offsets 0 and 2.
const CROSS_4: [Constraint; 4] = [
    Constraint::new(0, 2, 0, 0),
    Constraint::new(0, 3, 2, 0),
    Constraint::new(1, 2, 0, 2),
    Constraint::new(1, 3, 2, 2),
];

// Lengths 5 and 6: three rows and three columns, crossing at offsets 0, 2 and 4.
const CROSS_6_GAP_2: [Constraint; 9] = [
    Constraint::new(0, 3, 0, 0),
    Constraint::new(0, 4, 2, 0),
    Constraint::new(0, 5, 4, 0),
    Constraint::new(1, 3, 0, 2),
    Constraint::new(1, 4, 2, 2),
    Constraint::new(1, 5, 4, 2),
    Constraint::new(2, 3, 0, 4),
    Constraint::new(2, 4, 2, 4),
    Constraint::new(2, 5, 4, 4),
];

// Length 7: three rows and three columns, crossing at offsets 0, 3 and 6.
const CROSS_6_GAP_3: [Constraint; 9] = [
    Constraint::new(0, 3, 0, 0),
    Constraint::new(0, 4, 3, 0),
    Constraint::new(0, 5, 6, 0),
    Constraint::new(1, 3, 0, 3),
    Constraint::new(1, 4, 3, 3),
    Constraint::new(1, 5, 6, 3),
    Constraint::new(2, 3, 0, 6),
    Constraint::new(2, 4, 3, 6),
    Constraint::new(2, 5, 6, 6),
];

/// Direction a slot's word runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Where a slot lies in the grid
///
/// `line` is the row for a horizontal slot and the column for a vertical one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub orientation: Orientation,
    pub line: usize,
}

impl Placement {
    /// Grid coordinate of the letter at `position` within this slot
    #[inline]
    #[must_use]
    pub const fn cell(self, position: usize) -> Coord {
        match self.orientation {
            Orientation::Horizontal => Coord::new(self.line, position),
            Orientation::Vertical => Coord::new(position, self.line),
        }
    }
}

/// Fixed slot layout and intersection table for one word length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridTopology {
    word_length: WordLength,
    slot_count: usize,
    word_gap: usize,
    constraints: &'static [Constraint],
}

impl GridTopology {
    /// Look up the topology for a validated word length
    #[must_use]
    pub const fn for_length(word_length: WordLength) -> Self {
        let (slot_count, word_gap, constraints): (usize, usize, &'static [Constraint]) =
            match word_length.get() {
                3 | 4 => (4, 2, &CROSS_4),
                5 | 6 => (6, 2, &CROSS_6_GAP_2),
                _ => (6, 3, &CROSS_6_GAP_3),
            };

        Self {
            word_length,
            slot_count,
            word_gap,
            constraints,
        }
    }

    /// Look up the topology for a raw word length
    ///
    /// # Errors
    /// Returns `PuzzleError::InvalidWordLength` for any value outside 3..=7.
    pub fn lookup(word_length: usize) -> Result<Self, PuzzleError> {
        WordLength::new(word_length).map(Self::for_length)
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> WordLength {
        self.word_length
    }

    /// Number of word slots (4 for lengths 3-4, 6 for lengths 5-7)
    #[inline]
    #[must_use]
    pub const fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// Side length of the square grid
    #[inline]
    #[must_use]
    pub const fn grid_size(&self) -> usize {
        self.word_length.get()
    }

    /// Row/column stride between parallel words
    #[inline]
    #[must_use]
    pub const fn word_gap(&self) -> usize {
        self.word_gap
    }

    /// Number of slots running in each direction
    #[inline]
    #[must_use]
    pub const fn slots_per_axis(&self) -> usize {
        self.slot_count / 2
    }

    #[inline]
    #[must_use]
    pub const fn constraints(&self) -> &'static [Constraint] {
        self.constraints
    }

    /// Placement of `slot` in the grid
    ///
    /// # Panics
    /// Panics in debug mode if `slot >= slot_count`
    #[must_use]
    pub const fn placement(&self, slot: usize) -> Placement {
        debug_assert!(slot < self.slot_count, "slot index out of range");
        let per_axis = self.slots_per_axis();
        if slot < per_axis {
            Placement {
                orientation: Orientation::Horizontal,
                line: slot * self.word_gap,
            }
        } else {
            Placement {
                orientation: Orientation::Vertical,
                line: (slot - per_axis) * self.word_gap,
            }
        }
    }

    /// Iterate over every slot placement in slot order
    pub fn placements(&self) -> impl Iterator<Item = Placement> + '_ {
        (0..self.slot_count).map(|slot| self.placement(slot))
    }

    /// The two grid cells a constraint talks about
    ///
    /// For a consistent topology both coordinates are the same cell.
    #[must_use]
    pub const fn constraint_cells(&self, constraint: &Constraint) -> (Coord, Coord) {
        (
            self.placement(constraint.slot_a).cell(constraint.pos_a),
            self.placement(constraint.slot_b).cell(constraint.pos_b),
        )
    }
}

/// Side length of the grid for a raw word length
///
/// # Errors
/// Returns `PuzzleError::InvalidWordLength` for any value outside 3..=7.
pub fn grid_size(word_length: usize) -> Result<usize, PuzzleError> {
    GridTopology::lookup(word_length).map(|topology| topology.grid_size())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_length_bounds() {
        for n in 3..=7 {
            assert_eq!(WordLength::new(n).unwrap().get(), n);
        }
        assert_eq!(WordLength::new(2), Err(PuzzleError::InvalidWordLength(2)));
        assert_eq!(WordLength::new(8), Err(PuzzleError::InvalidWordLength(8)));
        assert!(WordLength::new(0).is_err());
    }

    #[test]
    fn slot_counts_per_length() {
        let counts: Vec<usize> = WordLength::all()
            .map(|len| GridTopology::for_length(len).slot_count())
            .collect();
        assert_eq!(counts, vec![4, 4, 6, 6, 6]);
    }

    #[test]
    fn word_gap_per_length() {
        let gaps: Vec<usize> = WordLength::all()
            .map(|len| GridTopology::for_length(len).word_gap())
            .collect();
        assert_eq!(gaps, vec![2, 2, 2, 2, 3]);
    }

    #[test]
    fn grid_size_reuses_validation() {
        assert_eq!(grid_size(6), Ok(6));
        assert_eq!(grid_size(9), Err(PuzzleError::InvalidWordLength(9)));
    }

    #[test]
    fn constraints_reference_existing_slots() {
        for len in WordLength::all() {
            let topology = GridTopology::for_length(len);
            for c in topology.constraints() {
                assert!(c.slot_a < topology.slot_count());
                assert!(c.slot_b < topology.slot_count());
                assert!(c.pos_a < topology.grid_size());
                assert!(c.pos_b < topology.grid_size());
            }
        }
    }

    #[test]
    fn constraints_agree_with_placement() {
        for len in WordLength::all() {
            let topology = GridTopology::for_length(len);
            for c in topology.constraints() {
                let (a, b) = topology.constraint_cells(c);
                assert_eq!(a, b, "length {len}: constraint {c:?} points at two cells");
            }
        }
    }

    #[test]
    fn every_crossing_is_constrained() {
        // Each horizontal/vertical pair crosses exactly once
        for len in WordLength::all() {
            let topology = GridTopology::for_length(len);
            let per_axis = topology.slots_per_axis();
            assert_eq!(topology.constraints().len(), per_axis * per_axis);
        }
    }

    #[test]
    fn placements_split_rows_then_columns() {
        let topology = GridTopology::lookup(7).unwrap();
        let placements: Vec<Placement> = topology.placements().collect();

        assert_eq!(placements[0].orientation, Orientation::Horizontal);
        assert_eq!(placements[2].line, 6);
        assert_eq!(placements[3].orientation, Orientation::Vertical);
        assert_eq!(placements[4].line, 3);
        assert_eq!(placements[5].cell(2), Coord::new(2, 6));
    }
}

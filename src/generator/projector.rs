//! Projection of assigned words onto the answer grid

use crate::core::{AnswerGrid, GridTopology, Orientation};

/// Lay the assigned words out on a `grid_size × grid_size` grid
///
/// Horizontal words fill their whole row left to right. Vertical words fill
/// their column top to bottom from row 1; row 0 of a vertical slot already
/// belongs to the first horizontal word. Cells outside every word stay empty.
///
/// Words shorter than the grid leave their tail cells empty, extra letters
/// are ignored.
///
/// # Examples
/// ```
/// use wordswap::core::GridTopology;
/// use wordswap::generator::project;
///
/// let topology = GridTopology::lookup(3).unwrap();
/// let grid = project(&["cat", "toe", "cot", "tie"], &topology);
/// assert_eq!(grid.to_string(), "CAT\nO.I\nTOE");
/// ```
#[must_use]
pub fn project<S: AsRef<str>>(words: &[S], topology: &GridTopology) -> AnswerGrid {
    let size = topology.grid_size();
    let mut grid = AnswerGrid::empty(size);

    for (slot, word) in words.iter().enumerate().take(topology.slot_count()) {
        let placement = topology.placement(slot);
        let skip = match placement.orientation {
            Orientation::Horizontal => 0,
            Orientation::Vertical => 1,
        };

        for (position, letter) in word.as_ref().chars().enumerate().take(size).skip(skip) {
            grid.set(placement.cell(position), letter);
        }
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Coord, WordLength};
    use crate::generator::test_support;

    #[test]
    fn projects_four_letter_grid() {
        let topology = GridTopology::lookup(4).unwrap();
        let grid = project(&["cart", "toes", "cute", "rues"], &topology);
        assert_eq!(grid.to_string(), "CART\nU.U.\nTOES\nE.S.");
    }

    #[test]
    fn vertical_words_do_not_overwrite_row_zero() {
        let topology = GridTopology::lookup(3).unwrap();
        // Vertical words disagree with the top row at their first letter
        let grid = project(&["cat", "toe", "xot", "xie"], &topology);
        assert_eq!(grid.get(Coord::new(0, 0)), Some('c'));
        assert_eq!(grid.get(Coord::new(0, 2)), Some('t'));
        assert_eq!(grid.get(Coord::new(1, 0)), Some('o'));
    }

    #[test]
    fn seven_letter_layout_uses_gap_three() {
        let topology = GridTopology::lookup(7).unwrap();
        let words = test_support::slot_words(topology.word_length());
        let grid = project(&words, &topology);

        let occupied = grid.occupied();
        // 3 full rows + 3 columns × 4 non-row cells
        assert_eq!(occupied.len(), 3 * 7 + 3 * 4);
        for coord in occupied {
            assert!(coord.row % 3 == 0 || coord.col % 3 == 0, "{coord} should be empty");
        }
    }

    #[test]
    fn six_letter_layout_leaves_last_row_partial() {
        let topology = GridTopology::lookup(6).unwrap();
        let words = test_support::slot_words(topology.word_length());
        let grid = project(&words, &topology);

        // Rows 0, 2, 4 are words; row 5 only holds the three column tails
        let row5: Vec<Coord> = grid.occupied().into_iter().filter(|c| c.row == 5).collect();
        assert_eq!(row5, vec![Coord::new(5, 0), Coord::new(5, 2), Coord::new(5, 4)]);
        assert_eq!(grid.get(Coord::new(0, 5)), words[0].chars().nth(5));
    }

    #[test]
    fn projected_grid_satisfies_every_constraint() {
        for length in WordLength::all() {
            let topology = GridTopology::for_length(length);
            let words = test_support::slot_words(length);
            let grid = project(&words, &topology);

            for constraint in topology.constraints() {
                let (cell, _) = topology.constraint_cells(constraint);
                let a = words[constraint.slot_a].chars().nth(constraint.pos_a);
                let b = words[constraint.slot_b].chars().nth(constraint.pos_b);
                assert_eq!(grid.get(cell), a);
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn short_word_list_leaves_gaps() {
        let topology = GridTopology::lookup(3).unwrap();
        let grid = project(&["cat"], &topology);
        assert_eq!(grid.occupied().len(), 3);
    }
}

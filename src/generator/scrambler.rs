//! Scrambling the answer grid into a starting position
//!
//! Random pairs of occupied cells are swapped, but only when the swap is
//! guaranteed to leave both cells looking wrong: the two letters must differ,
//! and neither letter may equal the answer letter at the cell it moves to.

use crate::core::{AnswerGrid, Coord, PlayGrid, UnresolvedCells};
use log::warn;
use rand::Rng;
use rand::seq::IndexedRandom;

/// A scrambled grid plus the cells that were disturbed
#[derive(Debug, Clone)]
pub struct Scramble {
    pub grid: PlayGrid,
    pub unresolved: UnresolvedCells,
    /// Accepted swaps, at most the number requested
    pub swaps_made: u32,
    /// Random pair draws used
    pub attempts: u32,
}

/// Whether swapping `a` and `b` in `grid` is an acceptable scrambling move
fn acceptable(grid: &PlayGrid, answer: &AnswerGrid, a: Coord, b: Coord) -> bool {
    match (grid.get(a), grid.get(b)) {
        (Some(x), Some(y)) => x != y && Some(x) != answer.get(b) && Some(y) != answer.get(a),
        _ => false,
    }
}

/// Scramble a copy of `answer` with up to `swap_count` accepted swaps
///
/// Draws at most `max_attempts` random coordinate pairs. Running out of
/// attempts is not an error: the result simply holds fewer swaps and a
/// warning is logged.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordswap::core::AnswerGrid;
/// use wordswap::generator::scramble;
///
/// let answer = AnswerGrid::from_rows(&["cart", "u.u.", "toes", "e.s."]).unwrap();
/// let mut rng = StdRng::seed_from_u64(7);
/// let result = scramble(&answer, 6, 1000, &mut rng);
///
/// assert!(result.swaps_made > 0);
/// assert!(!result.unresolved.is_empty());
/// ```
pub fn scramble<R: Rng + ?Sized>(
    answer: &AnswerGrid,
    swap_count: u32,
    max_attempts: u32,
    rng: &mut R,
) -> Scramble {
    let mut grid = PlayGrid::from_answer(answer);
    let mut unresolved = UnresolvedCells::new();
    let occupied = answer.occupied();

    let mut swaps_made = 0;
    let mut attempts = 0;

    while swaps_made < swap_count && attempts < max_attempts {
        attempts += 1;

        let (Some(&a), Some(&b)) = (occupied.choose(rng), occupied.choose(rng)) else {
            break;
        };

        if acceptable(&grid, answer, a, b) {
            grid.swap(a, b);
            unresolved.mark(a);
            unresolved.mark(b);
            swaps_made += 1;
        }
    }

    if swaps_made < swap_count {
        warn!(
            "scramble stopped after {attempts} attempts with {swaps_made} of {swap_count} swaps made"
        );
    }

    Scramble {
        grid,
        unresolved,
        swaps_made,
        attempts,
    }
}

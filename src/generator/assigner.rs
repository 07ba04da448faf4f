//! Word-to-slot assignment
//!
//! Depth-first search over slots `0..slot_count`, trying candidates in pool
//! order. The search runs as a loop over an explicit cursor stack rather than
//! through recursion: `cursors[slot]` is the next pool index to try for that
//! slot and `chosen[slot]` the pool index currently placed there. Backing out
//! of a slot clears its entry and frees its word again.

use crate::core::GridTopology;
use log::debug;
use rustc_hash::FxHashSet;

/// Result of an assignment search
///
/// `success == false` is an ordinary outcome meaning the pool holds no
/// combination satisfying the topology; `words` is then empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub words: Vec<String>,
    pub success: bool,
}

impl Assignment {
    const fn exhausted() -> Self {
        Self {
            words: Vec::new(),
            success: false,
        }
    }
}

/// Pick one word per slot such that every intersection constraint holds
///
/// Words within one assignment are pairwise distinct. Candidates whose length
/// differs from the topology's word length can never fit and are skipped.
/// The first complete assignment in pool order wins.
///
/// # Examples
/// ```
/// use wordswap::core::GridTopology;
/// use wordswap::generator::assign;
///
/// let topology = GridTopology::lookup(3).unwrap();
/// let pool = ["cat", "toe", "cot", "tie"];
/// let assignment = assign(&pool, &topology);
///
/// assert!(assignment.success);
/// assert_eq!(assignment.words, vec!["cat", "toe", "cot", "tie"]);
/// ```
#[must_use]
pub fn assign<S: AsRef<str>>(candidates: &[S], topology: &GridTopology) -> Assignment {
    let slot_count = topology.slot_count();
    let length = topology.word_length().get();

    let pool: Vec<(&str, Vec<char>)> = candidates
        .iter()
        .map(AsRef::as_ref)
        .map(|word| (word, word.chars().collect::<Vec<char>>()))
        .collect();

    let mut cursors = vec![0usize; slot_count];
    let mut chosen: Vec<Option<usize>> = vec![None; slot_count];
    let mut used: FxHashSet<&str> = FxHashSet::default();
    let mut slot = 0usize;
    let mut placements_tried = 0usize;
    let mut backtracks = 0usize;

    loop {
        if slot == slot_count {
            debug!(
                "assigned {slot_count} words from a pool of {} ({placements_tried} placements, {backtracks} backtracks)",
                pool.len()
            );
            let words = chosen
                .iter()
                .flatten()
                .map(|&i| pool[i].0.to_string())
                .collect();
            return Assignment {
                words,
                success: true,
            };
        }

        // Undo whatever this slot held before trying its next candidate
        if let Some(previous) = chosen[slot].take() {
            used.remove(pool[previous].0);
        }

        let mut placed = false;
        while cursors[slot] < pool.len() {
            let index = cursors[slot];
            cursors[slot] += 1;

            let (word, letters) = &pool[index];
            if letters.len() != length || used.contains(word) {
                continue;
            }

            placements_tried += 1;
            if fits(slot, letters, &chosen, &pool, topology) {
                chosen[slot] = Some(index);
                used.insert(word);
                placed = true;
                break;
            }
        }

        if placed {
            slot += 1;
            if slot < slot_count {
                cursors[slot] = 0;
            }
        } else if slot == 0 {
            debug!(
                "pool of {} exhausted after {placements_tried} placements, {backtracks} backtracks",
                pool.len()
            );
            return Assignment::exhausted();
        } else {
            backtracks += 1;
            slot -= 1;
        }
    }
}

/// Check the constraints touching `slot` against slots that are already filled
fn fits(
    slot: usize,
    letters: &[char],
    chosen: &[Option<usize>],
    pool: &[(&str, Vec<char>)],
    topology: &GridTopology,
) -> bool {
    topology
        .constraints()
        .iter()
        .filter(|c| c.references(slot))
        .all(|c| {
            let (own_pos, other_slot, other_pos) = if c.slot_a == slot {
                (c.pos_a, c.slot_b, c.pos_b)
            } else {
                (c.pos_b, c.slot_a, c.pos_a)
            };

            match chosen.get(other_slot).copied().flatten() {
                Some(other) => letters.get(own_pos) == pool[other].1.get(other_pos),
                None => true,
            }
        })
}

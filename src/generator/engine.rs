//! Puzzle generation pipeline
//!
//! Chains the stages: topology lookup, word assignment, projection and
//! scrambling. Each stage hands an owned value to the next.

use super::{assign, project, scramble};
use crate::config::GameConfig;
use crate::core::{AnswerGrid, GridTopology, PlayGrid, PuzzleError, UnresolvedCells};
use crate::sources::WordSource;
use log::info;
use rand::Rng;

/// A freshly generated puzzle, ready to be played
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub topology: GridTopology,
    pub words: Vec<String>,
    pub answer: AnswerGrid,
    pub play: PlayGrid,
    pub unresolved: UnresolvedCells,
    /// Scrambling swaps actually made, may fall short of the difficulty's count
    pub scramble_swaps: u32,
}

/// Generates puzzles for one configuration
pub struct PuzzleGenerator {
    config: GameConfig,
    topology: GridTopology,
}

impl PuzzleGenerator {
    #[must_use]
    pub const fn new(config: GameConfig) -> Self {
        Self {
            topology: GridTopology::for_length(config.word_length),
            config,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn topology(&self) -> &GridTopology {
        &self.topology
    }

    /// Build a puzzle from an already fetched candidate pool
    ///
    /// # Errors
    /// Returns `PuzzleError::AssignmentExhausted` when the pool holds no
    /// combination of words that fits the grid.
    pub fn generate<S: AsRef<str>, R: Rng + ?Sized>(
        &self,
        candidates: &[S],
        rng: &mut R,
    ) -> Result<Puzzle, PuzzleError> {
        let assignment = assign(candidates, &self.topology);
        if !assignment.success {
            return Err(PuzzleError::AssignmentExhausted {
                word_length: self.topology.word_length().get(),
                pool_size: candidates.len(),
            });
        }

        let words = assignment.words;
        let answer = project(&words, &self.topology);
        let scrambled = scramble(
            &answer,
            self.config.scramble_swaps(),
            self.config.max_scramble_attempts,
            rng,
        );

        info!(
            "generated {}x{} puzzle: {} scramble swaps, {} unresolved cells",
            answer.size(),
            answer.size(),
            scrambled.swaps_made,
            scrambled.unresolved.len()
        );

        Ok(Puzzle {
            topology: self.topology,
            words,
            answer,
            play: scrambled.grid,
            unresolved: scrambled.unresolved,
            scramble_swaps: scrambled.swaps_made,
        })
    }

    /// Fetch candidates from `source` and build a puzzle from them
    ///
    /// # Errors
    /// Propagates `CandidateFetchFailed` from the source and
    /// `AssignmentExhausted` from generation. Nothing is built on failure.
    pub fn generate_from<W: WordSource + ?Sized, R: Rng + ?Sized>(
        &self,
        source: &mut W,
        rng: &mut R,
    ) -> Result<Puzzle, PuzzleError> {
        let candidates = source.fetch_candidates(self.config.word_length)?;
        info!(
            "fetched {} candidate words of length {}",
            candidates.len(),
            self.config.word_length
        );
        self.generate(&candidates, rng)
    }
}

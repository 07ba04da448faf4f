//! Error types for puzzle setup and play

use super::grid::Coord;
use thiserror::Error;

/// Everything that can stop a puzzle from being set up or a move from being made
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("invalid word length {0}: must be between 3 and 7")]
    InvalidWordLength(usize),

    #[error("unrecognised difficulty '{0}': expected easy, medium or hard")]
    UnrecognizedDifficulty(String),

    #[error("no combination of {pool_size} candidate words of length {word_length} fits the grid")]
    AssignmentExhausted { word_length: usize, pool_size: usize },

    #[error("could not fetch candidate words: {0}")]
    CandidateFetchFailed(String),

    #[error("could not fetch definitions: {0}")]
    DefinitionFetchFailed(String),

    #[error("cells {a} and {b} cannot be swapped")]
    SwapRejected { a: Coord, b: Coord },

    #[error("the game is already over")]
    GameOver,
}

impl PuzzleError {
    /// Whether starting a fresh puzzle might succeed where this one failed
    ///
    /// Configuration errors are not retryable; an unlucky word pool or a
    /// flaky collaborator is.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::AssignmentExhausted { .. }
                | Self::CandidateFetchFailed(_)
                | Self::DefinitionFetchFailed(_)
        )
    }

    /// Whether this error came from invalid configuration
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidWordLength(_) | Self::UnrecognizedDifficulty(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_classification() {
        assert!(
            PuzzleError::AssignmentExhausted {
                word_length: 5,
                pool_size: 10
            }
            .is_retryable()
        );
        assert!(PuzzleError::CandidateFetchFailed("offline".into()).is_retryable());
        assert!(!PuzzleError::InvalidWordLength(9).is_retryable());
        assert!(!PuzzleError::UnrecognizedDifficulty("x".into()).is_retryable());
        assert!(!PuzzleError::GameOver.is_retryable());
    }

    #[test]
    fn config_errors() {
        assert!(PuzzleError::InvalidWordLength(2).is_config_error());
        assert!(PuzzleError::UnrecognizedDifficulty("brutal".into()).is_config_error());
        assert!(!PuzzleError::GameOver.is_config_error());
    }

    #[test]
    fn messages_mention_the_bad_value() {
        let msg = PuzzleError::UnrecognizedDifficulty("brutal".into()).to_string();
        assert!(msg.contains("brutal"));

        let msg = PuzzleError::SwapRejected {
            a: Coord::new(0, 1),
            b: Coord::new(2, 3),
        }
        .to_string();
        assert!(msg.contains("(0, 1)"));
        assert!(msg.contains("(2, 3)"));
    }
}

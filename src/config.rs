//! Game configuration
//!
//! Validated settings for starting a puzzle. Everything here is checked up
//! front so a bad setting never leaves a half-built puzzle behind.

use crate::core::{PuzzleError, WordLength};
use std::fmt;
use std::str::FromStr;

/// Swaps the player gets unless configured otherwise
pub const DEFAULT_SWAP_BUDGET: u32 = 15;

/// Random draws the scrambler may make before settling for fewer swaps
pub const DEFAULT_MAX_SCRAMBLE_ATTEMPTS: u32 = 1000;

/// How thoroughly the answer grid gets scrambled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Number of scrambling swaps for this difficulty
    #[must_use]
    pub const fn scramble_swaps(self) -> u32 {
        match self {
            Self::Easy => 6,
            Self::Medium => 8,
            Self::Hard => 10,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(PuzzleError::UnrecognizedDifficulty(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Settings for one puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: WordLength,
    pub difficulty: Difficulty,
    pub swap_budget: u32,
    pub max_scramble_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: WordLength::default(),
            difficulty: Difficulty::default(),
            swap_budget: DEFAULT_SWAP_BUDGET,
            max_scramble_attempts: DEFAULT_MAX_SCRAMBLE_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Validate raw settings as they arrive from the command line
    ///
    /// # Errors
    /// Returns `InvalidWordLength` or `UnrecognizedDifficulty` before any
    /// puzzle state is created.
    ///
    /// # Examples
    /// ```
    /// use wordswap::config::{Difficulty, GameConfig};
    ///
    /// let config = GameConfig::from_raw(4, "HARD", 12).unwrap();
    /// assert_eq!(config.difficulty, Difficulty::Hard);
    /// assert_eq!(config.scramble_swaps(), 10);
    ///
    /// assert!(GameConfig::from_raw(4, "brutal", 12).is_err());
    /// ```
    pub fn from_raw(
        word_length: usize,
        difficulty: &str,
        swap_budget: u32,
    ) -> Result<Self, PuzzleError> {
        Ok(Self {
            word_length: WordLength::new(word_length)?,
            difficulty: difficulty.parse()?,
            swap_budget,
            max_scramble_attempts: DEFAULT_MAX_SCRAMBLE_ATTEMPTS,
        })
    }

    #[must_use]
    pub const fn scramble_swaps(&self) -> u32 {
        self.difficulty.scramble_swaps()
    }
}

//! Generate command
//!
//! Builds a ready-to-play game, retrying with a fresh candidate pool when an
//! attempt fails for a reason a new pool might fix.

use crate::config::GameConfig;
use crate::core::PuzzleError;
use crate::game::Game;
use crate::generator::{Puzzle, PuzzleGenerator};
use crate::sources::WordSource;
use log::warn;
use rand::Rng;

/// Generation attempts made before giving up on a word source
pub const DEFAULT_GENERATION_ATTEMPTS: u32 = 5;

/// Generate a puzzle, retrying retryable failures up to `attempts` times
///
/// # Errors
/// Returns the last retryable error once attempts run out, or the first
/// non-retryable one straight away.
pub fn new_puzzle<W: WordSource + ?Sized, R: Rng + ?Sized>(
    generator: &PuzzleGenerator,
    source: &mut W,
    rng: &mut R,
    attempts: u32,
) -> Result<Puzzle, PuzzleError> {
    let attempts = attempts.max(1);
    let mut attempt = 1;
    loop {
        match generator.generate_from(source, rng) {
            Ok(puzzle) => return Ok(puzzle),
            Err(e) if e.is_retryable() && attempt < attempts => {
                warn!("generation attempt {attempt}/{attempts} failed: {e}");
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Generate a puzzle for `config` and start a game on it
///
/// # Errors
/// See [`new_puzzle`].
pub fn generate_game<W: WordSource + ?Sized, R: Rng + ?Sized>(
    config: &GameConfig,
    source: &mut W,
    rng: &mut R,
    attempts: u32,
) -> Result<Game, PuzzleError> {
    let generator = PuzzleGenerator::new(*config);
    let puzzle = new_puzzle(&generator, source, rng, attempts)?;
    Ok(Game::new(puzzle, config.swap_budget))
}

//! Puzzle generation
//!
//! Word assignment, grid projection and scrambling, plus the pipeline that
//! runs them in order.

mod assigner;
mod engine;
mod projector;
mod scrambler;

pub use assigner::{Assignment, assign};
pub use engine::{Puzzle, PuzzleGenerator};
pub use projector::project;
pub use scrambler::{Scramble, scramble};

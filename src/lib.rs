//! Word Swap
//!
//! A word-grid swap puzzle. Interlocking words are laid across a square grid,
//! the grid is scrambled with random letter swaps, and the player swaps tiles
//! back within a limited budget.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordswap::config::GameConfig;
//! use wordswap::game::{Game, LatestBoard};
//! use wordswap::generator::PuzzleGenerator;
//! use wordswap::sources::WordListSource;
//!
//! let config = GameConfig::from_raw(5, "medium", 15).unwrap();
//! let mut source = WordListSource::embedded(StdRng::seed_from_u64(7));
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let puzzle = PuzzleGenerator::new(config)
//!     .generate_from(&mut source, &mut rng)
//!     .unwrap();
//! let mut game = Game::new(puzzle, config.swap_budget);
//!
//! let mut board = LatestBoard::default();
//! game.start(&mut board);
//! println!("{} swaps left", game.remaining_swaps());
//! ```

// Core domain types
pub mod core;

// Validated settings
pub mod config;

// Puzzle generation pipeline
pub mod generator;

// Swap rules and play state
pub mod game;

// Word and definition sources
pub mod sources;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod logging;

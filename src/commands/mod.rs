//! Command implementations

pub mod benchmark;
pub mod define;
pub mod generate;
pub mod simple;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use define::define_words;
pub use generate::{DEFAULT_GENERATION_ATTEMPTS, generate_game, new_puzzle};
pub use simple::{SimpleCommand, parse_command, run_simple};

//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    TerminalSink, print_benchmark_result, print_definitions, print_generated, print_summary,
    write_board, write_plain_board,
};

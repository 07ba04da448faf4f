//! Display functions for boards and command results

use super::formatters::{answer_to_plain, board_to_plain, colored_cell, create_progress_bar};
use crate::commands::BenchmarkResult;
use crate::game::{BoardView, Game, Outcome, RenderError, RenderSink};
use crate::sources::DefinitionEntry;
use colored::Colorize;
use std::io::{self, Write};

/// Write a colored board with row and column numbers
///
/// # Errors
/// Returns any I/O error from `out`.
pub fn write_board<W: Write>(out: &mut W, board: &BoardView) -> io::Result<()> {
    let header: String = (1..=board.size).map(|col| format!(" {col} ")).collect();
    writeln!(out, "\n    {}", header.bright_black())?;
    for row in 0..board.size {
        let tiles: String = board.row(row).map(|cell| colored_cell(cell).to_string()).collect();
        writeln!(out, "  {} {tiles}", (row + 1).to_string().bright_black())?;
    }

    let swaps = board.remaining_swaps.to_string();
    let swaps = if board.remaining_swaps <= 3 {
        swaps.red().bold()
    } else {
        swaps.bright_cyan().bold()
    };
    writeln!(out, "\n  Swaps left: {swaps}\n")
}

/// Write a board without colors, marking statuses with `=` and `~`
///
/// # Errors
/// Returns any I/O error from `out`.
pub fn write_plain_board<W: Write>(out: &mut W, board: &BoardView) -> io::Result<()> {
    let header: String = (1..=board.size).map(|col| format!("{col} ")).collect();
    writeln!(out, "\n    {}", header.trim_end())?;
    for (row, line) in board_to_plain(board).lines().enumerate() {
        writeln!(out, "  {} {line}", row + 1)?;
    }
    writeln!(out, "\n  Swaps left: {}  (= in place, ~ wrong spot)\n", board.remaining_swaps)
}

/// Prints each board to stdout, plain when colors are turned off
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalSink;

impl RenderSink for TerminalSink {
    fn render(&mut self, board: &BoardView) -> Result<(), RenderError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if colored::control::SHOULD_COLORIZE.should_colorize() {
            write_board(&mut out, board)?;
        } else {
            write_plain_board(&mut out, board)?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Print a freshly generated puzzle with its solution
pub fn print_generated(game: &Game) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {}",
        "GENERATED PUZZLE".bright_cyan().bold(),
        format!("{0}x{0}", game.size()).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Words:".bright_cyan().bold());
    for (slot, word) in game.words().iter().enumerate() {
        println!("  {}. {}", slot + 1, word.to_uppercase().bright_white().bold());
    }

    println!("\n{}", "Answer:".bright_cyan().bold());
    for line in answer_to_plain(game.answer()).lines() {
        println!("  {line}");
    }

    println!(
        "\n{} {} unresolved cells",
        "Scrambled:".bright_cyan().bold(),
        game.state().unresolved().len()
    );
    let mut out = io::stdout().lock();
    if let Err(e) = write_board(&mut out, &game.board()) {
        log::warn!("failed to print board: {e}");
    }
}

/// Print the end-of-game summary
pub fn print_summary(game: &Game) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    match game.outcome() {
        Outcome::Won => {
            println!(
                "{}",
                "    ✨  G R I D   S O L V E D !  ✨    ".bright_green().bold()
            );
            println!(
                "\n  Solved with {} {} to spare",
                game.remaining_swaps().to_string().bright_cyan().bold(),
                if game.remaining_swaps() == 1 {
                    "swap"
                } else {
                    "swaps"
                }
            );
        }
        Outcome::Lost => {
            println!("{}", "    Out of swaps!    ".red().bold());
            println!(
                "\n  {} tiles were still out of place",
                game.state().unresolved().len().to_string().yellow()
            );
        }
        Outcome::InProgress => println!("  Game abandoned"),
    }

    println!("\n  Words:");
    for word in game.words() {
        println!("    • {}", word.to_uppercase().bright_white().bold());
    }
    println!("\n{}", "═".repeat(60).bright_cyan());
}

/// Print definitions for the words of a game
pub fn print_definitions(entries: &[DefinitionEntry]) {
    println!("\n{}", "Definitions".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());
    for entry in entries {
        println!("{}", entry.word.to_uppercase().bright_yellow().bold());
        if let Some(audio) = &entry.audio_url {
            println!("  {} {}", "♪".bright_black(), audio.bright_black());
        }
        for meaning in &entry.meanings {
            if meaning.part_of_speech.is_empty() {
                println!("  {}", meaning.definition);
            } else {
                println!(
                    "  {} {}",
                    format!("({})", meaning.part_of_speech).italic(),
                    meaning.definition
                );
            }
        }
    }
    println!();
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Generation:".bright_cyan().bold());
    println!("   Puzzles attempted: {}", result.total_puzzles);
    println!(
        "   Success rate:      {}",
        format!("{:.1}%", result.success_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Exhausted pools:   {}",
        if result.exhausted == 0 {
            result.exhausted.to_string().green()
        } else {
            result.exhausted.to_string().yellow()
        }
    );
    println!("   Avg unresolved:    {:.2}", result.average_unresolved);
    println!("   Avg scramble:      {:.2} swaps", result.average_scramble_swaps);
    println!("   Short scrambles:   {}", result.short_scrambles);
    println!("   Time taken:        {:.2}s", result.duration.as_secs_f64());
    println!("   Puzzles/second:    {:.1}", result.puzzles_per_second);

    if result.generated == 0 {
        return;
    }

    println!("\n📈 {}", "Unresolved cells:".bright_cyan().bold());
    for (&cells, &count) in &result.unresolved_distribution {
        let pct = (count as f64 / result.generated as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {cells:3}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
}

//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: each swap is typed as four numbers.

use super::generate::{DEFAULT_GENERATION_ATTEMPTS, generate_game};
use crate::config::GameConfig;
use crate::core::Coord;
use crate::game::Outcome;
use crate::output::{TerminalSink, print_definitions, print_summary};
use crate::sources::{DefinitionSource, WordSource, fetch_definitions};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// One line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleCommand {
    Swap(Coord, Coord),
    New,
    Help,
    Quit,
}

/// Parse a line of input for a grid of `size`
///
/// Swaps are `r1 c1 r2 c2` with 1-based rows and columns, separated by spaces
/// or commas.
///
/// # Errors
/// Returns a message for the player when the line is not understood.
pub fn parse_command(input: &str, size: usize) -> Result<SimpleCommand, String> {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "q" | "quit" | "exit" => return Ok(SimpleCommand::Quit),
        "n" | "new" => return Ok(SimpleCommand::New),
        "h" | "help" | "?" => return Ok(SimpleCommand::Help),
        _ => {}
    }

    let numbers = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<usize>()
                .map_err(|_| format!("'{part}' is not a number"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let [r1, c1, r2, c2] = numbers[..] else {
        return Err("Enter a swap as four numbers: r1 c1 r2 c2".to_string());
    };
    if [r1, c1, r2, c2].iter().any(|&n| n == 0 || n > size) {
        return Err(format!("Rows and columns run from 1 to {size}"));
    }

    Ok(SimpleCommand::Swap(
        Coord::new(r1 - 1, c1 - 1),
        Coord::new(r2 - 1, c2 - 1),
    ))
}

fn print_help(size: usize) {
    println!("Swap two tiles by typing their positions: row column row column");
    println!("  e.g. '1 1 {size} {size}' swaps the top-left and bottom-right tiles");
    println!(
        "  {} correct   {} wrong place   {} wrong",
        " A ".black().on_green().bold(),
        " A ".black().on_yellow(),
        " A ".white().on_bright_black()
    );
    println!("Commands: 'new' for a new puzzle, 'quit' to exit\n");
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error on I/O failure reading input, or when no puzzle can be
/// generated from the word source.
pub fn run_simple<W: WordSource + ?Sized, R: Rng + ?Sized>(
    config: &GameConfig,
    source: &mut W,
    rng: &mut R,
    definitions: Option<&dyn DefinitionSource>,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Word Swap - Interactive Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!(
        "Unscramble the {} grid in {} swaps ({} difficulty).\n",
        format!("{0}x{0}", config.word_length),
        config.swap_budget,
        config.difficulty
    );
    print_help(config.word_length.get());

    let mut sink = TerminalSink;

    'games: loop {
        let mut game = generate_game(config, source, rng, DEFAULT_GENERATION_ATTEMPTS)?;
        game.start(&mut sink);

        while !game.outcome().is_terminal() {
            let Some(input) = get_user_input("Swap")? else {
                return Ok(());
            };

            match parse_command(&input, game.size()) {
                Ok(SimpleCommand::Quit) => {
                    println!("\nThanks for playing!\n");
                    return Ok(());
                }
                Ok(SimpleCommand::New) => {
                    println!("\nNew puzzle!\n");
                    continue 'games;
                }
                Ok(SimpleCommand::Help) => print_help(game.size()),
                Ok(SimpleCommand::Swap(a, b)) => match game.swap(a, b, &mut sink) {
                    Ok(report) if !report.resolved.is_empty() => {
                        println!(
                            "{}",
                            format!("✓ {} tile(s) in place", report.resolved.len()).green()
                        );
                    }
                    Ok(_) => {}
                    Err(e) => println!("{} {e}", "✗".red()),
                },
                Err(message) => println!("{} {message}", "✗".red()),
            }
        }

        print_summary(&game);
        if let Some(definitions) = definitions {
            match fetch_definitions(definitions, game.words()) {
                Ok(entries) => print_definitions(&entries),
                Err(e) => println!("{} Unable to fetch definitions: {e}", "✗".red()),
            }
        }

        let again = get_user_input(match game.outcome() {
            Outcome::Won => "Play again? (yes/no)",
            _ => "Try another? (yes/no)",
        })?;
        match again.as_deref().map(str::to_lowercase).as_deref() {
            Some("yes" | "y") => println!("\nNew puzzle!\n"),
            _ => {
                println!("\nThanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Get user input with a prompt, `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

//! Formatting utilities for terminal output

use crate::core::{AnswerGrid, CellStatus, Coord};
use crate::game::{BoardCell, BoardView};
use colored::{ColoredString, Colorize};

/// Marker printed after a letter in plain boards
#[must_use]
pub const fn status_marker(status: CellStatus) -> char {
    match status {
        CellStatus::Correct => '=',
        CellStatus::Misplaced => '~',
        CellStatus::Wrong => ' ',
    }
}

/// A board cell as a three-column colored tile
#[must_use]
pub fn colored_cell(cell: Option<BoardCell>) -> ColoredString {
    let Some(cell) = cell else {
        return "   ".normal();
    };
    let text = format!(" {} ", cell.letter.to_ascii_uppercase());
    match cell.status {
        CellStatus::Correct => text.black().on_green().bold(),
        CellStatus::Misplaced => text.black().on_yellow(),
        CellStatus::Wrong => text.white().on_bright_black(),
    }
}

/// Board as uncolored text, one row per line
///
/// Each cell takes two columns: the letter and its status marker. Cells outside
/// every word print as `. `.
#[must_use]
pub fn board_to_plain(board: &BoardView) -> String {
    (0..board.size)
        .map(|row| {
            board
                .row(row)
                .map(|cell| match cell {
                    Some(c) => {
                        format!("{}{}", c.letter.to_ascii_uppercase(), status_marker(c.status))
                    }
                    None => ". ".to_string(),
                })
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Answer grid with letters spaced out like the board
#[must_use]
pub fn answer_to_plain(answer: &AnswerGrid) -> String {
    let size = answer.size();
    (0..size)
        .map(|row| {
            (0..size)
                .map(|col| {
                    answer
                        .get(Coord::new(row, col))
                        .map_or('.', |ch| ch.to_ascii_uppercase())
                        .to_string()
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

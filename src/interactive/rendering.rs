//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::{CellStatus, Coord};
use crate::game::{BoardCell, BoardView, Outcome};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// How a tile is emphasised on top of its status color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    None,
    Cursor,
    /// The picked-up tile
    Held,
    /// Cursor over a cell the held tile may be dropped on
    DropAllowed,
    DropBlocked,
}

/// Highlight for the tile at `coord`
#[must_use]
pub fn highlight_for(app: &App, coord: Coord) -> Highlight {
    if app.session.origin() == Some(coord) {
        return Highlight::Held;
    }
    if coord != app.cursor {
        return Highlight::None;
    }
    match (&app.game, app.session.is_active()) {
        (Some(game), true) if app.session.can_drop(game) => Highlight::DropAllowed,
        (Some(_), true) => Highlight::DropBlocked,
        _ => Highlight::Cursor,
    }
}

/// Style of one tile
#[must_use]
pub fn tile_style(cell: Option<BoardCell>, highlight: Highlight) -> Style {
    let base = match cell.map(|c| c.status) {
        Some(CellStatus::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(CellStatus::Misplaced) => Style::default().fg(Color::Black).bg(Color::Yellow),
        Some(CellStatus::Wrong) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default(),
    };

    match highlight {
        Highlight::None => base,
        Highlight::Cursor => base.add_modifier(Modifier::REVERSED),
        Highlight::Held => base
            .bg(Color::Blue)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        Highlight::DropAllowed => base.bg(Color::Cyan).fg(Color::Black),
        Highlight::DropBlocked => base.bg(Color::Red).fg(Color::White),
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let size = app.config.word_length.get();
    let header = Paragraph::new(format!(
        "🔀 WORD SWAP - {size}x{size} {}",
        app.config.difficulty
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn board_lines(app: &App, board: &BoardView) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];
    for row in 0..board.size {
        let mut spans = vec![Span::raw("  ")];
        for col in 0..board.size {
            let coord = Coord::new(row, col);
            let cell = board.cell(coord);
            let text = cell.map_or_else(
                || "   ".to_string(),
                |c| format!(" {} ", c.letter.to_ascii_uppercase()),
            );
            spans.push(Span::styled(text, tile_style(cell, highlight_for(app, coord))));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }
    lines
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let (title, lines) = match &app.board.0 {
        Some(board) => {
            let title = match board.outcome {
                Outcome::InProgress => " Grid ",
                Outcome::Won => " Grid - solved! ",
                Outcome::Lost => " Grid - out of swaps ",
            };
            (title, board_lines(app, board))
        }
        None => (" Grid ", vec![Line::from("No puzzle. Press 'n' to try again.")]),
    };

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Swaps gauge
            Constraint::Percentage(40), // Messages
            Constraint::Min(5),         // Words and definitions
        ])
        .split(area);

    render_swaps(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
    render_words(f, app, chunks[2]);
}

fn render_swaps(f: &mut Frame, app: &App, area: Rect) {
    let budget = app.config.swap_budget.max(1);
    let remaining = app.board.0.as_ref().map_or(0, |b| b.remaining_swaps);
    let color = if remaining <= 3 { Color::Red } else { Color::Cyan };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Swaps ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .ratio((f64::from(remaining) / f64::from(budget)).clamp(0.0, 1.0))
        .label(format!("{remaining}/{budget} swaps left"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_words(f: &mut Frame, app: &App, area: Rect) {
    let finished = app
        .game
        .as_ref()
        .is_some_and(|g| g.outcome().is_terminal());

    let lines: Vec<Line> = match &app.game {
        Some(game) if finished => {
            let mut lines = Vec::new();
            for word in game.words() {
                lines.push(Line::from(Span::styled(
                    word.to_uppercase(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )));
                if let Some(entry) = app.definition_entries.iter().find(|e| &e.word == word) {
                    for meaning in &entry.meanings {
                        let pos = if meaning.part_of_speech.is_empty() {
                            String::new()
                        } else {
                            format!("({}) ", meaning.part_of_speech)
                        };
                        lines.push(Line::from(vec![
                            Span::styled(
                                format!("  {pos}"),
                                Style::default().add_modifier(Modifier::ITALIC),
                            ),
                            Span::raw(meaning.definition.clone()),
                        ]));
                    }
                }
            }
            lines
        }
        Some(_) => {
            let board = app.board.0.as_ref();
            let count = |status: CellStatus| board.map_or(0, |b| b.count(status));
            vec![
                Line::from("Solve the grid to reveal the words."),
                Line::from(""),
                Line::from(vec![
                    Span::styled(" A ", tile_style(sample(CellStatus::Correct), Highlight::None)),
                    Span::raw(format!(" in place: {}", count(CellStatus::Correct))),
                ]),
                Line::from(vec![
                    Span::styled(" A ", tile_style(sample(CellStatus::Misplaced), Highlight::None)),
                    Span::raw(format!(" wrong spot: {}", count(CellStatus::Misplaced))),
                ]),
                Line::from(vec![
                    Span::styled(" A ", tile_style(sample(CellStatus::Wrong), Highlight::None)),
                    Span::raw(format!(" wrong: {}", count(CellStatus::Wrong))),
                ]),
            ]
        }
        None => Vec::new(),
    };

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(if finished { " Words " } else { " Legend " })
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

const fn sample(status: CellStatus) -> Option<BoardCell> {
    Some(BoardCell { letter: 'a', status })
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let best = app
        .stats
        .best_remaining
        .map_or_else(String::new, |b| format!(" | Best: {b} left"));
    let stats_text = format!(
        "Games: {} | Won: {}{best}",
        app.stats.total_games, app.stats.games_won
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = if app.session.is_active() {
        "Arrows: Move | Space: Drop | Esc: Put back"
    } else {
        "Arrows: Move | Space: Pick up | n: New | q: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

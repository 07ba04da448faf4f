//! TUI application state and logic

use crate::commands::{DEFAULT_GENERATION_ATTEMPTS, generate_game};
use crate::config::GameConfig;
use crate::core::Coord;
use crate::game::{Game, LatestBoard, Outcome, SwapReport, SwapSession};
use crate::sources::{DefinitionEntry, DefinitionSource, WordSource, fetch_definitions};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub config: GameConfig,
    source: Box<dyn WordSource>,
    rng: StdRng,
    definitions: Option<Box<dyn DefinitionSource>>,
    pub game: Option<Game>,
    /// Latest board emitted by the game
    pub board: LatestBoard,
    pub cursor: Coord,
    pub session: SwapSession,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub definition_entries: Vec<DefinitionEntry>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Most swaps left over in a won game
    pub best_remaining: Option<u32>,
}

impl App {
    #[must_use]
    pub fn new(
        config: GameConfig,
        source: Box<dyn WordSource>,
        rng: StdRng,
        definitions: Option<Box<dyn DefinitionSource>>,
    ) -> Self {
        Self {
            config,
            source,
            rng,
            definitions,
            game: None,
            board: LatestBoard::default(),
            cursor: Coord::new(0, 0),
            session: SwapSession::new(),
            messages: vec![Message {
                text: "Welcome! Swap tiles until every row and column spells a word.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            definition_entries: Vec::new(),
            should_quit: false,
        }
    }

    /// Start a fresh puzzle; on failure the current game is kept as it was
    pub fn new_game(&mut self) {
        match generate_game(
            &self.config,
            self.source.as_mut(),
            &mut self.rng,
            DEFAULT_GENERATION_ATTEMPTS,
        ) {
            Ok(game) => {
                self.session.cancel();
                self.definition_entries.clear();
                self.cursor = Coord::new(0, 0);
                self.board = LatestBoard::default();
                game.start(&mut self.board);
                self.game = Some(game);
                self.add_message(
                    "New puzzle! Space picks up a tile, Space again drops it.",
                    MessageStyle::Info,
                );
            }
            Err(e) => {
                self.add_message(
                    &format!("Unable to build grid ({e}). Press 'n' to try again."),
                    MessageStyle::Error,
                );
            }
        }
    }

    /// Move the cursor, clamped to the grid; a held tile follows it
    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let Some(size) = self.game.as_ref().map(Game::size) else {
            return;
        };
        let last = size.saturating_sub(1);
        self.cursor = Coord::new(
            self.cursor.row.saturating_add_signed(d_row).min(last),
            self.cursor.col.saturating_add_signed(d_col).min(last),
        );
        if self.session.is_active() {
            self.session.target(self.cursor);
        }
    }

    /// Pick up the tile under the cursor, or drop the held one there
    pub fn select(&mut self) {
        let cursor = self.cursor;
        let Some(game) = self.game.as_mut() else {
            return;
        };
        if game.outcome().is_terminal() {
            return;
        }

        let result = match self.session.origin() {
            None if game.is_swappable(cursor) => {
                self.session.begin(cursor);
                return;
            }
            None if game.cell_status(cursor).is_none() => Err("No tile there".to_string()),
            None => Err("That tile is already in place".to_string()),
            Some(origin) if origin == cursor => {
                self.session.cancel();
                return;
            }
            Some(_) => {
                self.session.target(cursor);
                self.session
                    .finish(game, &mut self.board)
                    .map_err(|e| e.to_string())
            }
        };

        match result {
            Ok(Some(report)) => self.after_swap(&report),
            Ok(None) => {}
            Err(message) => self.add_message(&message, MessageStyle::Error),
        }
    }

    pub fn cancel(&mut self) {
        self.session.cancel();
    }

    fn after_swap(&mut self, report: &SwapReport) {
        match report.resolved.len() {
            0 => self.add_message(
                &format!("{} swaps left", report.remaining_swaps),
                MessageStyle::Info,
            ),
            n => self.add_message(
                &format!("{n} tile(s) in place, {} swaps left", report.remaining_swaps),
                MessageStyle::Success,
            ),
        }

        match report.outcome {
            Outcome::Won => self.finish_game(true, report.remaining_swaps),
            Outcome::Lost => self.finish_game(false, report.remaining_swaps),
            Outcome::InProgress => {}
        }
    }

    fn finish_game(&mut self, won: bool, remaining: u32) {
        self.stats.total_games += 1;
        if won {
            self.stats.games_won += 1;
            self.stats.best_remaining = self.stats.best_remaining.max(Some(remaining));
            self.add_message(
                "🎉 SOLVED! Press 'n' for a new game or 'q' to quit.",
                MessageStyle::Success,
            );
        } else {
            self.add_message(
                "Out of swaps! Press 'n' for a new game or 'q' to quit.",
                MessageStyle::Error,
            );
        }

        let fetched = match (&self.definitions, &self.game) {
            (Some(source), Some(game)) => Some(fetch_definitions(source.as_ref(), game.words())),
            _ => None,
        };
        match fetched {
            Some(Ok(entries)) => self.definition_entries = entries,
            Some(Err(e)) => self.add_message(
                &format!("Unable to fetch definitions: {e}"),
                MessageStyle::Error,
            ),
            None => {}
        }
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Up => self.move_cursor(-1, 0),
            KeyCode::Down => self.move_cursor(1, 0),
            KeyCode::Left => self.move_cursor(0, -1),
            KeyCode::Right => self.move_cursor(0, 1),
            KeyCode::Char(' ') | KeyCode::Enter => self.select(),
            KeyCode::Esc => self.cancel(),
            _ => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.new_game();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PuzzleError, WordLength};
    use crate::sources::WordListSource;
    use rand::SeedableRng;

    /// Serves a solvable pool once, then fails every fetch
    struct FailsAfterFirst {
        served: bool,
    }

    impl WordSource for FailsAfterFirst {
        fn fetch_candidates(&mut self, _: WordLength) -> Result<Vec<String>, PuzzleError> {
            if self.served {
                return Err(PuzzleError::CandidateFetchFailed("connection reset".into()));
            }
            self.served = true;
            Ok(["cat", "toe", "cot", "tie"].map(String::from).to_vec())
        }
    }

    fn new_app() -> App {
        let config = GameConfig::from_raw(3, "easy", 15).unwrap();
        let source = WordListSource::new(&["cat", "toe", "cot", "tie"], StdRng::seed_from_u64(1));
        let mut app = App::new(config, Box::new(source), StdRng::seed_from_u64(2), None);
        app.new_game();
        app
    }

    /// A swap that puts the right letter into some unresolved cell
    fn improving_swap(game: &Game) -> (Coord, Coord) {
        let cells = game.answer().occupied();
        for &a in &cells {
            let want = game.answer().get(a);
            if game.play().get(a) == want {
                continue;
            }
            for &b in &cells {
                if game.play().get(b) == want && game.is_swap_allowed(a, b) {
                    return (a, b);
                }
            }
        }
        panic!("no improving swap");
    }

    #[test]
    fn new_game_emits_board() {
        let app = new_app();
        assert!(app.game.is_some());
        let board = app.board.0.as_ref().unwrap();
        assert_eq!(board.size, 3);
        assert_eq!(board.remaining_swaps, 15);
    }

    #[test]
    fn cursor_is_clamped() {
        let mut app = new_app();
        app.handle_key(KeyCode::Up, KeyModifiers::NONE);
        app.handle_key(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(app.cursor, Coord::new(0, 0));
        for _ in 0..5 {
            app.handle_key(KeyCode::Down, KeyModifiers::NONE);
            app.handle_key(KeyCode::Right, KeyModifiers::NONE);
        }
        assert_eq!(app.cursor, Coord::new(2, 2));
    }

    #[test]
    fn empty_cell_cannot_be_picked_up() {
        let mut app = new_app();
        app.cursor = Coord::new(1, 1);
        app.select();
        assert!(!app.session.is_active());
        assert_eq!(app.messages.last().map(|m| m.style), Some(MessageStyle::Error));
    }

    #[test]
    fn selecting_twice_puts_tile_back() {
        let mut app = new_app();
        let (a, _) = improving_swap(app.game.as_ref().unwrap());
        app.cursor = a;
        app.select();
        assert!(app.session.is_active());
        app.select();
        assert!(!app.session.is_active());
        assert_eq!(app.game.as_ref().unwrap().remaining_swaps(), 15);
    }

    #[test]
    fn escape_cancels_held_tile() {
        let mut app = new_app();
        let (a, _) = improving_swap(app.game.as_ref().unwrap());
        app.cursor = a;
        app.select();
        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert!(!app.session.is_active());
    }

    #[test]
    fn solving_through_keys_wins() {
        let mut app = new_app();
        while app
            .game
            .as_ref()
            .is_some_and(|g| g.outcome() == Outcome::InProgress)
        {
            let (a, b) = improving_swap(app.game.as_ref().unwrap());
            app.cursor = a;
            app.handle_key(KeyCode::Char(' '), KeyModifiers::NONE);
            app.cursor = b;
            app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        }

        let game = app.game.as_ref().unwrap();
        assert_eq!(game.outcome(), Outcome::Won);
        assert!(game.play().matches(game.answer()));
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(
            app.board.0.as_ref().map(|b| b.outcome),
            Some(Outcome::Won)
        );
    }

    #[test]
    fn failed_new_game_keeps_current_game() {
        let config = GameConfig::from_raw(3, "easy", 15).unwrap();
        let source = FailsAfterFirst { served: false };
        let mut app = App::new(config, Box::new(source), StdRng::seed_from_u64(3), None);
        app.new_game();

        let (a, b) = improving_swap(app.game.as_ref().unwrap());
        app.cursor = a;
        app.select();
        app.cursor = b;
        app.select();
        let words = app.game.as_ref().unwrap().words().to_vec();
        let board = app.board.0.clone();
        assert_eq!(board.as_ref().map(|b| b.remaining_swaps), Some(14));

        app.cursor = Coord::new(2, 2);
        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);

        let game = app.game.as_ref().unwrap();
        assert_eq!(game.words(), words.as_slice());
        assert_eq!(game.remaining_swaps(), 14);
        assert_eq!(app.board.0, board);
        assert_eq!(app.cursor, Coord::new(2, 2));
        assert_eq!(app.messages.last().map(|m| m.style), Some(MessageStyle::Error));
    }

    #[test]
    fn quit_keys() {
        let mut app = new_app();
        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);

        let mut app = new_app();
        app.handle_key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(app.should_quit);
    }
}

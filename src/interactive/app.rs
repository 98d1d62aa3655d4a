//! TUI application state and logic

use crate::core::WordLength;
use crate::dictionary::Dictionary;
use crate::engine::{Difficulty, GameError, GameOptions, GameState, Resolution, Session};
use crate::store::{ScoreReport, ScoreSink, Settings, SettingsStore};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::warn;

/// A transient status line message
#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App<'a> {
    pub session: Session<'a>,
    pub settings: Settings,
    store: &'a mut dyn SettingsStore,
    sink: &'a mut dyn ScoreSink,
    /// Total score folded across resolved games this run
    pub total: i64,
    /// Resolution of the most recently finished game, for the overlay
    pub last_resolution: Option<Resolution>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    /// Create the app and start the first game.
    ///
    /// # Errors
    /// Returns an error when no target can be drawn.
    pub fn new(
        dictionary: &'a Dictionary,
        store: &'a mut dyn SettingsStore,
        sink: &'a mut dyn ScoreSink,
        settings: Settings,
        difficulty: Difficulty,
        word_length: WordLength,
    ) -> Result<Self> {
        let mut session = Session::new(dictionary, difficulty, word_length);
        session.new_game(GameOptions::default())?;

        let mut app = Self {
            session,
            settings,
            store,
            sink,
            total: 0,
            last_resolution: None,
            messages: Vec::new(),
            should_quit: false,
        };
        app.add_message("Guess the hidden Danish word!", MessageStyle::Info);
        Ok(app)
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });
        // Keep only the last few messages
        if self.messages.len() > 4 {
            self.messages.remove(0);
        }
    }

    pub fn type_letter(&mut self, letter: char) {
        match self.session.add_letter(letter) {
            Ok(()) => {}
            Err(GameError::InvalidLetter(ch)) => {
                self.add_message(&format!("'{ch}' is not a playable letter"), MessageStyle::Error);
            }
            Err(GameError::ForbiddenLetter(ch)) => {
                self.add_message(
                    &format!("'{ch}' is ruled out at this position"),
                    MessageStyle::Error,
                );
            }
            Err(GameError::RowFull) => {
                self.add_message("The row is full, press Enter to submit", MessageStyle::Info);
            }
            Err(_) => {}
        }
    }

    pub fn backspace(&mut self) {
        let _ = self.session.backspace();
    }

    /// Move the in-row cursor left.
    pub fn cursor_left(&mut self) {
        let cursor = self
            .session
            .edit_index()
            .unwrap_or_else(|| self.session.current_guess().len());
        if cursor > 0 {
            self.session.set_edit_index(Some(cursor - 1));
        }
    }

    /// Move the in-row cursor right; past the last letter clears edit mode.
    pub fn cursor_right(&mut self) {
        if let Some(cursor) = self.session.edit_index() {
            let next = cursor + 1;
            if next >= self.session.current_guess().len() {
                self.session.set_edit_index(None);
            } else {
                self.session.set_edit_index(Some(next));
            }
        }
    }

    pub fn submit(&mut self) {
        match self.session.submit_guess() {
            Ok(outcome) => {
                if let Some(resolution) = outcome.resolution {
                    self.finish_game(resolution);
                }
            }
            Err(GameError::Rejected(reason)) => {
                self.add_message(&reason.to_string(), MessageStyle::Error);
            }
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Give up the current game and show the resolution overlay.
    pub fn give_up(&mut self) {
        if let Ok(resolution) = self.session.give_up() {
            self.finish_game(resolution);
        }
    }

    /// Start a new game, optionally changing difficulty or word length.
    pub fn new_game(&mut self, difficulty: Option<Difficulty>, word_length: Option<WordLength>) {
        if self.session.state() == GameState::Ongoing {
            self.give_up();
        }
        match self.session.new_game(GameOptions {
            difficulty,
            word_length,
            target: None,
        }) {
            Ok(()) => {
                self.last_resolution = None;
                self.add_message("New word!", MessageStyle::Info);
            }
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Fold a finished game into the run total and report it.
    fn finish_game(&mut self, resolution: Resolution) {
        self.total += resolution.tally.total();
        self.last_resolution = Some(resolution);

        self.sink.report(&ScoreReport {
            outcome: self.session.state(),
            difficulty: self.session.difficulty(),
            word_length: self.session.word_length(),
            guesses: self.session.records().len(),
            tally: resolution.tally,
            wins_in_a_row: resolution.wins_in_a_row,
        });

        if self.settings.record_total(self.total) {
            self.add_message(
                &format!("New high score: {}!", self.total),
                MessageStyle::Success,
            );
        }
        self.save_settings();

        match self.session.state() {
            GameState::Won => self.add_message("You won! 🎉", MessageStyle::Success),
            GameState::Lost => self.add_message("Out of guesses.", MessageStyle::Error),
            GameState::GaveUp => self.add_message("Better luck next time.", MessageStyle::Info),
            GameState::None | GameState::Ongoing => {}
        }
    }

    fn save_settings(&mut self) {
        self.settings.difficulty = self.session.difficulty();
        self.settings.word_length = self.session.word_length();
        if let Err(err) = self.store.save(&self.settings) {
            warn!(%err, "failed to save settings");
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            } else if app.session.state() == GameState::Ongoing {
                handle_game_key(&mut app, key.code);
            } else {
                handle_overlay_key(&mut app, key.code);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_game_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc => app.give_up(),
        KeyCode::Enter => app.submit(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Left => app.cursor_left(),
        KeyCode::Right => app.cursor_right(),
        KeyCode::Char(c) => app.type_letter(c),
        _ => {}
    }
}

fn handle_overlay_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('n') | KeyCode::Enter => app.new_game(None, None),
        KeyCode::Char('1') => app.new_game(Some(Difficulty::Normal), None),
        KeyCode::Char('2') => app.new_game(Some(Difficulty::Hard), None),
        KeyCode::Char('3') => app.new_game(Some(Difficulty::Expert), None),
        KeyCode::Char('5') => app.new_game(None, Some(WordLength::Five)),
        KeyCode::Char('6') => app.new_game(None, Some(WordLength::Six)),
        KeyCode::Char('7') => app.new_game(None, Some(WordLength::Seven)),
        _ => {}
    }
}

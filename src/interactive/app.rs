//! TUI application state and logic

use crate::commands::Session;
use crate::core::{Word, tokenize};
use crate::game::Outcome;
use crate::share::{ShareOutcome, ShareTarget, deliver};
use crate::stats::GameStats;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 5;
const SHARE_FILE: &str = "share.txt";

/// Application state
pub struct App {
    pub session: Session,
    /// Raw typed text of the current guess, tokenized for display
    pub input: String,
    pub messages: Vec<Message>,
    /// Statistics shown once the game is over
    pub stats: Option<GameStats>,
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

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        let mut app = Self {
            session,
            input: String::new(),
            messages: Vec::new(),
            stats: None,
            should_quit: false,
        };
        app.add_message(
            "Írd be a tippet, Enter a beküldés. Ctrl-N: véletlen feladvány, ←/→: másik nap",
            MessageStyle::Info,
        );
        app.on_game_loaded();
        app
    }

    /// Letter units typed so far
    #[must_use]
    pub fn input_units(&self) -> Vec<&'static str> {
        Word::from_text(&self.input).units()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => {
                self.session.new_random_game();
                self.on_game_loaded();
            }
            KeyCode::Char('g') if ctrl => self.give_up(),
            KeyCode::Char('s') if ctrl => self.share(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Left => self.shift_day(-1),
            KeyCode::Right => self.shift_day(1),
            KeyCode::Char(c) if !ctrl => self.type_char(c),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    /// Append a character unless the guess is already full
    ///
    /// Typing "Z" after "S" joins the two into "SZ", so the limit is checked
    /// on the tokenized text.
    pub fn type_char(&mut self, c: char) {
        if self.session.game().is_over() || !c.is_alphabetic() {
            return;
        }
        let mut candidate = self.input.clone();
        candidate.push(c);
        if tokenize(&candidate).len() <= self.session.difficulty().word_length() {
            self.input = candidate;
        }
    }

    pub fn submit(&mut self) {
        match self.session.submit(&self.input) {
            Ok(_) => {
                self.input.clear();
                self.save();
                if let Some(message) = self.session.game().end_message() {
                    let style = match self.session.game().outcome() {
                        Outcome::Won => MessageStyle::Success,
                        _ => MessageStyle::Error,
                    };
                    self.add_message(&message, style);
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn give_up(&mut self) {
        if self.session.give_up() {
            self.input.clear();
            self.save();
            if let Some(message) = self.session.game().end_message() {
                self.add_message(&message, MessageStyle::Error);
            }
        } else {
            self.add_message("Nincs mit feladni", MessageStyle::Error);
        }
    }

    /// Write the share text next to the saved games
    pub fn share(&mut self) {
        if !self.session.game().is_over() {
            self.add_message("Megosztani a játék végén lehet", MessageStyle::Error);
            return;
        }
        let path = self.session.config().data_dir.join(SHARE_FILE);
        match deliver(&self.session.share_text(), &ShareTarget::File(path)) {
            Ok(ShareOutcome::Saved(path)) => {
                self.add_message(&format!("Mentve: {}", path.display()), MessageStyle::Success);
            }
            Ok(ShareOutcome::Printed) => {}
            Err(e) => {
                tracing::warn!(error = %e, "share failed");
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    fn shift_day(&mut self, offset: i64) {
        self.session.shift_day(offset);
        self.on_game_loaded();
    }

    /// Persist the board and pick up the statistics of a finished game
    fn save(&mut self) {
        match self.session.persist() {
            Ok(Some(stats)) => self.stats = Some(stats),
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(error = %e, "could not save game");
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    fn on_game_loaded(&mut self) {
        self.input.clear();
        self.stats = None;
        if !self.session.game().puzzle().is_ready() {
            self.add_message("A feladvány nem érhető el", MessageStyle::Error);
            return;
        }
        if self.session.game().is_over() {
            match self.session.stats() {
                Ok(stats) => self.stats = Some(stats),
                Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
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
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }
    Ok(())
}

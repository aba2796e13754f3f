//! TUI application state and logic

use crate::game::{Game, GameEvent, Input, Outcome};
use crate::hints::HintProvider;
use crate::storage;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::warn;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;

/// Application state
pub struct App {
    pub game: Game,
    hints: Box<dyn HintProvider>,
    stats_path: Option<PathBuf>,
    pub hint: Option<String>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(game: Game, hints: Box<dyn HintProvider>, stats_path: Option<PathBuf>) -> Self {
        Self {
            game,
            hints,
            stats_path,
            hint: None,
            messages: Vec::new(),
            should_quit: false,
        }
    }

    /// Start the first round and resolve the hint gate
    pub fn start_round(&mut self) {
        let events = self.game.start_round();
        self.process_events(events);
    }

    fn process_events(&mut self, events: Vec<GameEvent>) {
        for event in events {
            match event {
                GameEvent::HintRequested { target } => {
                    // Synchronous lookup; the gate stays closed until it resolves
                    self.hint = self.hints.definition(&target);
                    let ready = self.game.hint_ready();
                    self.process_events(ready);
                }
                GameEvent::Status { text, .. } => {
                    self.add_message(&text, MessageStyle::Info);
                }
                GameEvent::RoundOver { outcome, target } => {
                    match outcome {
                        Outcome::Won => {
                            self.add_message("🎉 You win!", MessageStyle::Success);
                        }
                        Outcome::Lost => {
                            self.add_message(
                                &format!("❌ Out of attempts. The word was {target}"),
                                MessageStyle::Error,
                            );
                        }
                        Outcome::InProgress => {}
                    }
                    self.add_message("Press 'n' for the next round or 'q' to quit.", MessageStyle::Info);
                    self.persist_stats();
                }
                // Rendering reads board, keyboard, and revealed rows directly
                GameEvent::TileUpdated { .. }
                | GameEvent::RowRevealed { .. }
                | GameEvent::KeyUpdated { .. }
                | GameEvent::StatsChanged { .. } => {}
            }
        }
    }

    fn persist_stats(&self) {
        if let Some(path) = &self.stats_path
            && let Err(e) = storage::save_stats(path, self.game.stats())
        {
            warn!("could not save stats to {}: {e}", path.display());
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

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.game.is_over() {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => {
                    let events = self.game.next_round();
                    self.process_events(events);
                }
                _ => {}
            }
            return;
        }

        // Letters are game input while a round runs, so only Esc quits here
        let events = match code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                self.game.key(Input::Letter(c.to_ascii_uppercase()))
            }
            KeyCode::Backspace => self.game.key(Input::Backspace),
            KeyCode::Enter => self.game.key(Input::Submit),
            _ => Vec::new(),
        };
        self.process_events(events);
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

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
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
    use crate::core::Word;
    use crate::game::{DifficultyPolicy, Phase, SessionStats};
    use crate::hints::NoHints;
    use crate::words::WordSource;

    fn app_with(target: &str) -> App {
        let word = Word::new(target).unwrap();
        let source = WordSource::with_pools(vec![word.clone()], vec![word.clone()], vec![word]);
        let game = Game::new(source, DifficultyPolicy::Auto, SessionStats::default());
        App::new(game, Box::new(NoHints), None)
    }

    fn type_word(app: &mut App, word: &str) {
        for ch in word.chars() {
            app.handle_key(KeyCode::Char(ch), KeyModifiers::NONE);
        }
    }

    #[test]
    fn start_round_clears_the_hint_gate() {
        let mut app = app_with("CRANE");
        app.start_round();

        // NoHints resolves immediately, so input is open
        assert_eq!(app.game.phase(), Phase::InProgress);
        assert_eq!(app.hint, None);
        assert!(!app.messages.is_empty());
    }

    #[test]
    fn typed_letters_reach_the_board() {
        let mut app = app_with("CRANE");
        app.start_round();
        type_word(&mut app, "cra");

        assert_eq!(app.game.board().current_guess(), "CRA");

        app.handle_key(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(app.game.board().current_guess(), "CR");
    }

    #[test]
    fn winning_round_posts_messages() {
        let mut app = app_with("CRANE");
        app.start_round();
        type_word(&mut app, "CRANE");
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);

        assert_eq!(app.game.phase(), Phase::Won);
        assert!(
            app.messages
                .iter()
                .any(|m| matches!(m.style, MessageStyle::Success))
        );
    }

    #[test]
    fn next_round_key_after_terminal_phase() {
        let mut app = app_with("CRANE");
        app.start_round();
        type_word(&mut app, "CRANE");
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert!(app.game.is_over());

        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);
        assert_eq!(app.game.phase(), Phase::InProgress);
        assert_eq!(app.game.stats().score, 1);
    }

    #[test]
    fn quit_key_only_acts_when_round_is_over() {
        let mut app = app_with("CRANE");
        app.start_round();

        // 'q' is a guess letter mid-round
        app.handle_key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(!app.should_quit);
        assert_eq!(app.game.board().current_guess(), "Q");

        type_word(&mut app, "UIET");
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);

        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert!(app.should_quit);
    }

    #[test]
    fn message_ring_is_bounded() {
        let mut app = app_with("CRANE");
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages.last().unwrap().text, "message 9");
    }
}

//! Round state machine
//!
//! Drives a full round: accepts key input, mutates the board, scores
//! completed rows, and determines win/loss together with the session stats.
//!
//! A round moves through `AwaitingHint -> InProgress -> Won | Lost`. Input
//! is only accepted while in progress; everything else is a silent no-op,
//! so a stray key press during the hint phase or after the round ended can
//! never corrupt state.

use crate::core::{Board, Feedback, MAX_ATTEMPTS, WORD_LEN, Word};
use crate::game::events::GameEvent;
use crate::game::keyboard::Keyboard;
use crate::game::session::{Difficulty, DifficultyPolicy, SessionStats};
use crate::words::WordSource;
use log::debug;

/// Phase of the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Round set up, waiting for the hint collaborator; input is ignored
    AwaitingHint,
    /// Accepting letters, backspace, and submissions
    InProgress,
    /// Terminal: the target was guessed
    Won,
    /// Terminal: attempts ran out
    Lost,
}

/// Round outcome as exposed to collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// A logical input key; no payload beyond the key itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Letter(char),
    Backspace,
    Submit,
}

/// One scored row of the current round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealedRow {
    pub guess: String,
    pub feedback: Feedback,
}

/// Round orchestrator
///
/// Owns the board, the keyboard verdict map, and the session stats. Every
/// operation returns the [`GameEvent`]s a surface needs to render the
/// change; operations in the wrong phase return no events and mutate
/// nothing.
pub struct Game {
    source: WordSource,
    policy: DifficultyPolicy,
    stats: SessionStats,
    keyboard: Keyboard,
    board: Board,
    revealed: Vec<RevealedRow>,
    target: Word,
    level: Difficulty,
    phase: Phase,
}

impl Game {
    /// Create a game with its first round set up and awaiting the hint
    #[must_use]
    pub fn new(source: WordSource, policy: DifficultyPolicy, stats: SessionStats) -> Self {
        let level = policy.pick(stats.score);
        let target = source.select_target(level);

        Self {
            source,
            policy,
            stats,
            keyboard: Keyboard::new(),
            board: Board::new(),
            revealed: Vec::new(),
            target,
            level,
            phase: Phase::AwaitingHint,
        }
    }

    /// Start a fresh round
    ///
    /// Picks the tier from the policy, draws a new target, resets board and
    /// keyboard, and enters `AwaitingHint`. The emitted [`GameEvent::HintRequested`]
    /// asks the collaborator to look up the target and call [`Self::hint_ready`].
    pub fn start_round(&mut self) -> Vec<GameEvent> {
        self.level = self.policy.pick(self.stats.score);
        self.target = self.source.select_target(self.level);
        self.board.reset();
        self.keyboard.reset();
        self.revealed.clear();
        self.phase = Phase::AwaitingHint;

        debug!("round start: level={}", self.level);

        vec![
            self.stats_event(),
            GameEvent::Status {
                text: "Fetching hint...".to_string(),
                transient: false,
            },
            GameEvent::HintRequested {
                target: self.target.text().to_string(),
            },
        ]
    }

    /// Clear the hint gate and begin accepting input
    ///
    /// No-op outside `AwaitingHint`: calling it twice, or after the round
    /// ended, changes nothing.
    pub fn hint_ready(&mut self) -> Vec<GameEvent> {
        if self.phase != Phase::AwaitingHint {
            return Vec::new();
        }

        self.phase = Phase::InProgress;
        debug!("hint gate cleared, input open");

        vec![GameEvent::Status {
            text: format!("Guess the {WORD_LEN}-letter word! You have {MAX_ATTEMPTS} attempts."),
            transient: false,
        }]
    }

    /// Process one input key
    ///
    /// Ignored while awaiting the hint or once the round is over.
    pub fn key(&mut self, input: Input) -> Vec<GameEvent> {
        if self.phase != Phase::InProgress {
            return Vec::new();
        }

        match input {
            Input::Letter(ch) => match self.board.push_letter(ch) {
                Some(col) => vec![GameEvent::TileUpdated {
                    row: self.board.row(),
                    col,
                    letter: self.board.letter(self.board.row(), col),
                }],
                None => Vec::new(),
            },
            Input::Backspace => match self.board.pop_letter() {
                Some(col) => vec![GameEvent::TileUpdated {
                    row: self.board.row(),
                    col,
                    letter: None,
                }],
                None => Vec::new(),
            },
            Input::Submit => self.submit(),
        }
    }

    /// Start the next round after a win or loss
    ///
    /// No-op while a round is still running; session stats carry forward.
    pub fn next_round(&mut self) -> Vec<GameEvent> {
        if !self.is_over() {
            return Vec::new();
        }
        self.start_round()
    }

    fn submit(&mut self) -> Vec<GameEvent> {
        if !self.board.is_row_full() {
            return vec![GameEvent::Status {
                text: "Not enough letters".to_string(),
                transient: true,
            }];
        }

        // Board invariants make a full row a valid word; still validated
        // before scoring
        let Ok(guess) = Word::new(self.board.current_guess()) else {
            return vec![GameEvent::Status {
                text: "Invalid guess".to_string(),
                transient: true,
            }];
        };

        let feedback = Feedback::score(&guess, &self.target);
        let row = self.board.row();

        self.revealed.push(RevealedRow {
            guess: guess.text().to_string(),
            feedback,
        });

        let mut events = vec![GameEvent::RowRevealed {
            row,
            guess: guess.text().to_string(),
            feedback,
        }];
        for (letter, status) in self.keyboard.apply(&guess, &feedback) {
            events.push(GameEvent::KeyUpdated { letter, status });
        }

        if feedback.is_win() {
            self.stats.record_win();
            self.phase = Phase::Won;
            debug!("round won on attempt {} of {MAX_ATTEMPTS}", row + 1);

            events.push(self.stats_event());
            events.push(GameEvent::RoundOver {
                outcome: Outcome::Won,
                target: self.target.text().to_string(),
            });
        } else if row + 1 == MAX_ATTEMPTS {
            self.stats.record_loss();
            self.phase = Phase::Lost;
            debug!("round lost, target was not found");

            events.push(self.stats_event());
            events.push(GameEvent::RoundOver {
                outcome: Outcome::Lost,
                target: self.target.text().to_string(),
            });
        } else {
            self.board.advance_row();
            events.push(GameEvent::Status {
                text: format!("Attempt {} of {MAX_ATTEMPTS}", row + 2),
                transient: true,
            });
        }

        events
    }

    fn stats_event(&self) -> GameEvent {
        GameEvent::StatsChanged {
            score: self.stats.score,
            streak: self.stats.streak,
            level: self.level,
        }
    }

    /// Current phase of the round
    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Round outcome: `InProgress` until a terminal phase is reached
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        match self.phase {
            Phase::AwaitingHint | Phase::InProgress => Outcome::InProgress,
            Phase::Won => Outcome::Won,
            Phase::Lost => Outcome::Lost,
        }
    }

    /// Whether the round reached a terminal phase
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Won | Phase::Lost)
    }

    /// Session stats (score, wins, streak)
    #[inline]
    #[must_use]
    pub const fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Tier of the current round
    #[inline]
    #[must_use]
    pub const fn level(&self) -> Difficulty {
        self.level
    }

    /// The attempt grid
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Rows scored so far this round, oldest first
    #[inline]
    #[must_use]
    pub fn revealed(&self) -> &[RevealedRow] {
        &self.revealed
    }

    /// The keyboard verdict map
    #[inline]
    #[must_use]
    pub const fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }
}

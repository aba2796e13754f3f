//! Events emitted by the round controller
//!
//! Every controller operation returns the events describing what changed.
//! Surfaces (TUI, CLI) render from these instead of reaching into the board,
//! and collaborators (hint lookup, persistence) react to them.

use crate::core::Feedback;
use crate::game::keyboard::KeyStatus;
use crate::game::round::Outcome;
use crate::game::session::Difficulty;

/// A state change the UI or a collaborator should react to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A cell of the active row was written or cleared
    TileUpdated {
        row: usize,
        col: usize,
        letter: Option<char>,
    },

    /// A completed row was scored
    RowRevealed {
        row: usize,
        guess: String,
        feedback: Feedback,
    },

    /// A keyboard key reached a new best state
    KeyUpdated { letter: char, status: KeyStatus },

    /// A status line for the player; transient messages may be auto-cleared
    Status { text: String, transient: bool },

    /// Score, streak, or level changed
    StatsChanged {
        score: u32,
        streak: u32,
        level: Difficulty,
    },

    /// A new round started: the hint collaborator should look up `target`
    /// and call `hint_ready` once done (or immediately when it has nothing)
    HintRequested { target: String },

    /// The round ended; `target` is revealed either way
    RoundOver { outcome: Outcome, target: String },
}

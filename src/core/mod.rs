//! Core domain types for the word game
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear invariants.

mod board;
mod feedback;
mod word;

pub use board::Board;
pub use feedback::{Feedback, Verdict};
pub use word::{Word, WordError};

/// Number of letters in a target word (board columns)
pub const WORD_LEN: usize = 5;

/// Number of guesses a player gets per round (board rows)
pub const MAX_ATTEMPTS: usize = 6;

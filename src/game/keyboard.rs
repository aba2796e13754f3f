//! On-screen keyboard state
//!
//! Tracks the best verdict seen for each letter across a round, keyed by the
//! logical letter rather than any rendering representation.

use crate::core::{Feedback, Verdict, Word};
use rustc_hash::FxHashMap;

/// Best-known state of a keyboard key
///
/// Ordered so that later rows only ever upgrade a key: a letter shown green
/// once stays green even if a later guess places it wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum KeyStatus {
    Absent,
    Present,
    Exact,
}

impl From<Verdict> for KeyStatus {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Absent => Self::Absent,
            Verdict::Present => Self::Present,
            Verdict::Exact => Self::Exact,
        }
    }
}

/// Per-letter verdict map for the current round
#[derive(Debug, Default, Clone)]
pub struct Keyboard {
    keys: FxHashMap<char, KeyStatus>,
}

impl Keyboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a scored row into the map
    ///
    /// Returns the keys whose state changed, in guess order. Existing states
    /// are only upgraded, never downgraded.
    pub fn apply(&mut self, guess: &Word, feedback: &Feedback) -> Vec<(char, KeyStatus)> {
        let mut changed = Vec::new();

        for (&byte, &verdict) in guess.chars().iter().zip(feedback.verdicts()) {
            let letter = byte as char;
            let status = KeyStatus::from(verdict);

            let upgrade = self.keys.get(&letter).is_none_or(|&current| status > current);
            if upgrade {
                self.keys.insert(letter, status);
                changed.push((letter, status));
            }
        }

        changed
    }

    /// Best-known status for a letter, `None` while unused
    #[must_use]
    pub fn status(&self, letter: char) -> Option<KeyStatus> {
        self.keys.get(&letter.to_ascii_uppercase()).copied()
    }

    /// Clear all key states for a new round
    pub fn reset(&mut self) {
        self.keys.clear();
    }
}

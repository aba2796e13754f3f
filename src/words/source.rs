//! Target word selection
//!
//! Resolves the pool for a difficulty tier and draws uniformly from it.
//! Selection never fails: an empty or unavailable pool degrades to a
//! hardcoded fallback list.

use super::embedded::{EASY_WORDS, HARD_WORDS, MEDIUM_WORDS};
use super::loader::words_from_slice;
use crate::core::Word;
use crate::game::Difficulty;
use log::warn;
use rand::prelude::IndexedRandom;

/// Fallback pools used when a tier resolves to no words at all
const FALLBACK_EASY: &[&str] = &["APPLE", "WATER", "LIGHT", "HOUSE", "BREAD"];
const FALLBACK_MEDIUM: &[&str] = &["BRAVE", "QUIET", "STORM", "CLOUD", "NIGHT"];
const FALLBACK_HARD: &[&str] = &["CRYPT", "RHYME", "PIXEL", "GHOST", "QUARK"];

/// Supplies round targets per difficulty tier
///
/// Pools are shared read-only data from the source's point of view; they
/// are populated once (embedded lists, optionally overridden from files)
/// before the session's first round.
#[derive(Debug, Clone)]
pub struct WordSource {
    easy: Vec<Word>,
    medium: Vec<Word>,
    hard: Vec<Word>,
}

impl Default for WordSource {
    fn default() -> Self {
        Self::embedded()
    }
}

impl WordSource {
    /// Source backed by the embedded per-tier pools
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            easy: words_from_slice(EASY_WORDS),
            medium: words_from_slice(MEDIUM_WORDS),
            hard: words_from_slice(HARD_WORDS),
        }
    }

    /// Source with explicit pools
    ///
    /// An empty pool is tolerated; it falls back at selection time.
    #[must_use]
    pub const fn with_pools(easy: Vec<Word>, medium: Vec<Word>, hard: Vec<Word>) -> Self {
        Self { easy, medium, hard }
    }

    /// Replace one tier's pool with externally supplied words
    ///
    /// An empty replacement is ignored so a failed external fetch can never
    /// leave a tier without words.
    pub fn set_pool(&mut self, tier: Difficulty, words: Vec<Word>) {
        if words.is_empty() {
            warn!("ignoring empty {tier} pool, keeping current words");
            return;
        }

        match tier {
            Difficulty::Easy => self.easy = words,
            Difficulty::Medium => self.medium = words,
            Difficulty::Hard => self.hard = words,
        }
    }

    /// Words available for a tier
    #[must_use]
    pub fn pool(&self, tier: Difficulty) -> &[Word] {
        match tier {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    const fn fallback(tier: Difficulty) -> &'static [&'static str] {
        match tier {
            Difficulty::Easy => FALLBACK_EASY,
            Difficulty::Medium => FALLBACK_MEDIUM,
            Difficulty::Hard => FALLBACK_HARD,
        }
    }

    /// Draw a uniform-random target for the tier
    ///
    /// Falls back to the built-in list when the tier's pool is empty; the
    /// caller never sees the degradation beyond a log line.
    ///
    /// # Panics
    /// Will not panic - the fallback pools are non-empty constants.
    #[must_use]
    pub fn select_target(&self, tier: Difficulty) -> Word {
        if let Some(word) = self.pool(tier).choose(&mut rand::rng()) {
            return word.clone();
        }

        warn!("empty {tier} pool, selecting from the fallback list");
        words_from_slice(Self::fallback(tier))
            .choose(&mut rand::rng())
            .cloned()
            .expect("fallback pools are non-empty")
    }
}

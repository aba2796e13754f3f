//! Word pools for round targets
//!
//! Per-tier pools compiled into the binary, file-loaded overrides, and the
//! source that draws a target word for a round.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{
    EASY_WORDS, EASY_WORDS_COUNT, HARD_WORDS, HARD_WORDS_COUNT, MEDIUM_WORDS, MEDIUM_WORDS_COUNT,
};
pub use source::WordSource;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn pool_counts_match_consts() {
        assert_eq!(EASY_WORDS.len(), EASY_WORDS_COUNT);
        assert_eq!(MEDIUM_WORDS.len(), MEDIUM_WORDS_COUNT);
        assert_eq!(HARD_WORDS.len(), HARD_WORDS_COUNT);
    }

    #[test]
    fn pools_are_non_empty() {
        assert!(!EASY_WORDS.is_empty());
        assert!(!MEDIUM_WORDS.is_empty());
        assert!(!HARD_WORDS.is_empty());
    }

    #[test]
    fn pools_hold_valid_words() {
        for pool in [EASY_WORDS, MEDIUM_WORDS, HARD_WORDS] {
            for &entry in pool {
                let word = Word::new(entry)
                    .unwrap_or_else(|e| panic!("Pool entry '{entry}' is invalid: {e}"));
                assert_eq!(word.text(), entry, "Pool entry '{entry}' is not uppercase");
            }
        }
    }

    #[test]
    fn pools_are_disjoint_across_tiers() {
        use std::collections::HashSet;

        let easy: HashSet<_> = EASY_WORDS.iter().collect();
        let medium: HashSet<_> = MEDIUM_WORDS.iter().collect();
        let hard: HashSet<_> = HARD_WORDS.iter().collect();

        assert!(easy.is_disjoint(&medium));
        assert!(easy.is_disjoint(&hard));
        assert!(medium.is_disjoint(&hard));
    }
}

//! Guess feedback calculation and representation
//!
//! A feedback row holds one verdict per board column:
//! - Exact: letter in the correct position (green)
//! - Present: letter in the word, wrong position (yellow)
//! - Absent: letter not in the word (gray)

use super::{WORD_LEN, Word};

/// Verdict for one letter of a submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Absent,
    Present,
    Exact,
}

/// Feedback for one submitted guess row
///
/// One verdict per column, produced once per submitted attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback([Verdict; WORD_LEN]);

impl Feedback {
    /// Score `guess` against `target`
    ///
    /// This implements the classic feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark all exact matches and remove them from the
    ///    available letter pool
    /// 2. Second pass: mark present-but-wrong-position letters from the
    ///    remaining pool; everything else is absent
    ///
    /// For any letter, the total of exact and present marks never exceeds
    /// that letter's occurrence count in the target.
    ///
    /// # Examples
    /// ```
    /// use wordle_tiers::core::{Feedback, Verdict, Word};
    ///
    /// let guess = Word::new("BRAVE").unwrap();
    /// let target = Word::new("CRANE").unwrap();
    /// let feedback = Feedback::score(&guess, &target);
    ///
    /// // B(gray) R(green) A(green) V(gray) E(green)
    /// assert_eq!(
    ///     *feedback.verdicts(),
    ///     [
    ///         Verdict::Absent,
    ///         Verdict::Exact,
    ///         Verdict::Exact,
    ///         Verdict::Absent,
    ///         Verdict::Exact,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn score(guess: &Word, target: &Word) -> Self {
        let mut result = [Verdict::Absent; WORD_LEN];
        let mut available = target.char_counts();

        // First pass: exact matches consume their target letter
        // Allow: Index needed to access guess[i], target[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if guess.chars()[i] == target.chars()[i] {
                result[i] = Verdict::Exact;

                let letter = guess.chars()[i];
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: present letters consume one remaining occurrence
        // Allow: Index needed to access guess[i] and check/set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if result[i] == Verdict::Absent {
                let letter = guess.chars()[i];
                if let Some(count) = available.get_mut(&letter)
                    && *count > 0
                {
                    result[i] = Verdict::Present;
                    *count -= 1;
                }
            }
        }

        Self(result)
    }

    /// Check whether every verdict is exact (the round-winning row)
    #[inline]
    #[must_use]
    pub fn is_win(self) -> bool {
        self.0 == [Verdict::Exact; WORD_LEN]
    }

    /// Get the per-column verdicts
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LEN] {
        &self.0
    }

    /// Count occurrences of one verdict in the row
    #[must_use]
    pub fn count(self, verdict: Verdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Verdict::{Absent, Exact, Present};

    fn score(guess: &str, target: &str) -> Feedback {
        Feedback::score(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn all_absent() {
        let feedback = score("ABCDE", "FGHIJ");
        assert_eq!(*feedback.verdicts(), [Absent; WORD_LEN]);
        assert!(!feedback.is_win());
    }

    #[test]
    fn all_exact() {
        let feedback = score("CRANE", "CRANE");
        assert_eq!(*feedback.verdicts(), [Exact; WORD_LEN]);
        assert!(feedback.is_win());
    }

    #[test]
    fn self_score_is_always_win() {
        for word in ["CRANE", "SLATE", "AUDIO", "ZZZZZ", "AAAAA"] {
            assert!(score(word, word).is_win());
        }
    }

    #[test]
    fn duplicate_letters_single_consumption() {
        // ERASE vs SPEED: target has E twice, S once, D once
        // E(present) R(absent) A(absent) S(present) E(present)
        // Both guessed E's consume the two target E's; a third E would be absent
        let feedback = score("ERASE", "SPEED");
        assert_eq!(
            *feedback.verdicts(),
            [Present, Absent, Absent, Present, Present]
        );
    }

    #[test]
    fn duplicate_letters_green_takes_priority() {
        // SPEED vs ERASE
        // S(present) P(absent) E(present) E(present) D(absent)
        let feedback = score("SPEED", "ERASE");
        assert_eq!(
            *feedback.verdicts(),
            [Present, Absent, Present, Present, Absent]
        );
        assert_eq!(feedback.count(Present), 3);
        assert_eq!(feedback.count(Exact), 0);
    }

    #[test]
    fn duplicate_letters_complex() {
        // ROBOT vs FLOOR
        // R(present) O(present) B(absent) O(exact) T(absent)
        // The second O is exact; the first consumes the remaining target O
        let feedback = score("ROBOT", "FLOOR");
        assert_eq!(
            *feedback.verdicts(),
            [Present, Present, Absent, Exact, Absent]
        );
    }

    #[test]
    fn repeated_guess_letter_beyond_target_count() {
        // EEEEE vs SPEED: target has exactly two E's
        // Positions 2 and 3 are exact; every other E is absent, not present
        let feedback = score("EEEEE", "SPEED");
        assert_eq!(*feedback.verdicts(), [Absent, Absent, Exact, Exact, Absent]);
    }

    #[test]
    fn marks_never_exceed_target_counts() {
        // For each letter, exact + present marks are bounded by the letter's
        // count in the target
        let pairs = [
            ("ERASE", "SPEED"),
            ("SPEED", "ERASE"),
            ("ROBOT", "FLOOR"),
            ("EEEEE", "SPEED"),
            ("AABBA", "ABABA"),
            ("LLAMA", "ALLAY"),
            ("CRANE", "SLATE"),
        ];

        for (guess_text, target_text) in pairs {
            let guess = Word::new(guess_text).unwrap();
            let target = Word::new(target_text).unwrap();
            let feedback = Feedback::score(&guess, &target);
            let target_counts = target.char_counts();

            for letter in b'A'..=b'Z' {
                let marks = guess
                    .chars()
                    .iter()
                    .zip(feedback.verdicts())
                    .filter(|&(&ch, &v)| ch == letter && v != Absent)
                    .count();
                let in_target = usize::from(*target_counts.get(&letter).unwrap_or(&0));

                assert!(
                    marks <= in_target,
                    "{guess_text} vs {target_text}: letter {} marked {marks} times, target has {in_target}",
                    letter as char
                );
            }
        }
    }

    #[test]
    fn classic_example() {
        // CRANE vs SLATE
        // C(absent) R(absent) A(exact) N(absent) E(exact)
        let feedback = score("CRANE", "SLATE");
        assert_eq!(*feedback.verdicts(), [Absent, Absent, Exact, Absent, Exact]);
        assert_eq!(feedback.count(Exact), 2);
        assert_eq!(feedback.count(Present), 0);
    }
}

//! Score a single guess against a target word

use crate::core::{Feedback, Word, WordError};
use crate::output::display::print_eval_result;

/// Evaluate `guess` against `target` and print the verdict row
///
/// # Errors
///
/// Returns `WordError` when either word does not have the right shape.
pub fn run_eval(guess: &str, target: &str) -> Result<(), WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;

    let feedback = Feedback::score(&guess, &target);
    print_eval_result(guess.text(), target.text(), &feedback);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_accepts_valid_pair() {
        assert!(run_eval("crane", "slate").is_ok());
    }

    #[test]
    fn eval_rejects_malformed_words() {
        assert!(matches!(
            run_eval("cranes", "slate"),
            Err(WordError::InvalidLength(6))
        ));
        assert!(run_eval("crane", "sl4te").is_err());
    }
}

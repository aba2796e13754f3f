//! Display functions for command results

use super::formatters::{colored_row, feedback_to_emoji};
use crate::core::Feedback;
use crate::game::{Outcome, SessionStats};
use colored::Colorize;

/// Print the result of scoring one guess against a target
pub fn print_eval_result(guess: &str, target: &str, feedback: &Feedback) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess:  {}  vs  Target: {}",
        guess.bright_white().bold(),
        target.bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\n  {}", colored_row(guess, feedback));
    println!("  {}\n", feedback_to_emoji(feedback));
}

/// Print the round-end banner with the revealed target and session stats
pub fn print_round_over(outcome: Outcome, target: &str, stats: &SessionStats) {
    println!();
    match outcome {
        Outcome::Won => {
            println!("{}", "🎉 You win!".bright_green().bold());
        }
        Outcome::Lost => {
            println!(
                "{}",
                format!("❌ Out of attempts. The word was {target}")
                    .bright_red()
                    .bold()
            );
        }
        Outcome::InProgress => {}
    }
    println!(
        "Score: {} | Wins: {} | Streak: {}\n",
        stats.score.to_string().bright_cyan(),
        stats.wins.to_string().bright_cyan(),
        stats.streak.to_string().bright_cyan()
    );
}

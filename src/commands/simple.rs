//! Simple interactive CLI mode
//!
//! Line-based game loop without the TUI. Each line is a full guess; the
//! loop drives the same round state machine the TUI uses and renders from
//! its events.

use crate::core::WORD_LEN;
use crate::game::{Game, GameEvent, Input};
use crate::hints::HintProvider;
use crate::output::display::print_round_over;
use crate::output::formatters::colored_row;
use crate::storage;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Run the line-based game loop, reading guesses from `reader`
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<R: BufRead>(
    game: &mut Game,
    hints: &dyn HintProvider,
    stats_path: Option<&Path>,
    mut reader: R,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Wordle Tiers - Simple Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Type a {WORD_LEN}-letter guess and press Enter.");
    println!("Commands: 'new' for the next round after a win or loss, 'quit' to exit.\n");

    start_round(game, hints);

    loop {
        let Some(line) = read_line(&mut reader, "Guess")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };
        let input = line.trim().to_uppercase();

        match input.as_str() {
            "QUIT" | "Q" | "EXIT" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "NEW" | "NEXT" => {
                if game.is_over() {
                    start_round(game, hints);
                } else {
                    println!("Round still in progress; finish it or 'quit'.");
                }
                continue;
            }
            "" => continue,
            _ => {}
        }

        if input.len() != WORD_LEN || !input.chars().all(|c| c.is_ascii_alphabetic()) {
            println!("Invalid guess. Please enter {WORD_LEN} letters.");
            continue;
        }

        let events = submit_guess(game, &input);
        render_events(game, &events, stats_path);

        if game.is_over() {
            match read_line(&mut reader, "Play again? (yes/no)")? {
                Some(answer) if matches!(answer.trim().to_lowercase().as_str(), "yes" | "y") => {
                    start_round(game, hints);
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

/// Start a round and resolve the hint gate synchronously
fn start_round(game: &mut Game, hints: &dyn HintProvider) {
    for event in game.start_round() {
        match event {
            GameEvent::StatsChanged {
                score,
                streak,
                level,
            } => {
                println!(
                    "Score: {score} | Level: {} | Streak: {streak}",
                    level.to_string().to_uppercase()
                );
            }
            GameEvent::HintRequested { target } => {
                if let Some(definition) = hints.definition(&target) {
                    println!("Hint: {definition}");
                }
            }
            _ => {}
        }
    }

    for event in game.hint_ready() {
        if let GameEvent::Status { text, .. } = event {
            println!("{text}");
        }
    }
    println!();
}

/// Feed a full line as letter inputs plus a submission
fn submit_guess(game: &mut Game, guess: &str) -> Vec<GameEvent> {
    for ch in guess.chars() {
        game.key(Input::Letter(ch));
    }
    game.key(Input::Submit)
}

fn render_events(game: &Game, events: &[GameEvent], stats_path: Option<&Path>) {
    for event in events {
        match event {
            GameEvent::RowRevealed {
                guess, feedback, ..
            } => {
                println!("  {}", colored_row(guess, feedback));
            }
            GameEvent::Status { text, .. } => println!("{text}"),
            GameEvent::RoundOver { outcome, target } => {
                print_round_over(*outcome, target, game.stats());

                if let Some(path) = stats_path
                    && let Err(e) = storage::save_stats(path, game.stats())
                {
                    log::warn!("could not save stats to {}: {e}", path.display());
                }
            }
            _ => {}
        }
    }
}

/// Prompt and read one line; `None` on end of input
fn read_line<R: BufRead>(reader: &mut R, prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let bytes = reader.read_line(&mut input).map_err(|e| e.to_string())?;

    if bytes == 0 {
        Ok(None)
    } else {
        Ok(Some(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{DifficultyPolicy, SessionStats};
    use crate::hints::NoHints;
    use crate::words::WordSource;
    use std::io::Cursor;

    fn game_with(target: &str) -> Game {
        let word = Word::new(target).unwrap();
        let source = WordSource::with_pools(vec![word.clone()], vec![word.clone()], vec![word]);
        Game::new(source, DifficultyPolicy::Auto, SessionStats::default())
    }

    #[test]
    fn quit_immediately() {
        let mut game = game_with("CRANE");
        let reader = Cursor::new("quit\n");

        assert!(run_simple(&mut game, &NoHints, None, reader).is_ok());
        assert!(!game.is_over());
    }

    #[test]
    fn end_of_input_exits_gracefully() {
        let mut game = game_with("CRANE");
        let reader = Cursor::new("");

        assert!(run_simple(&mut game, &NoHints, None, reader).is_ok());
    }

    #[test]
    fn invalid_guesses_do_not_consume_attempts() {
        let mut game = game_with("CRANE");
        let reader = Cursor::new("ABC\nCRANES\nCR4NE\nquit\n");

        assert!(run_simple(&mut game, &NoHints, None, reader).is_ok());
        assert_eq!(game.board().row(), 0);
        assert!(game.revealed().is_empty());
    }

    #[test]
    fn winning_round_updates_stats() {
        let mut game = game_with("CRANE");
        let reader = Cursor::new("BRAVE\nCRANE\nno\n");

        assert!(run_simple(&mut game, &NoHints, None, reader).is_ok());
        assert!(game.is_over());
        assert_eq!(game.stats().score, 1);
        assert_eq!(game.stats().streak, 1);
    }

    #[test]
    fn losing_round_resets_streak() {
        let mut game = game_with("CRANE");
        let reader = Cursor::new("SLATE\nSLATE\nSLATE\nSLATE\nSLATE\nSLATE\nno\n");

        assert!(run_simple(&mut game, &NoHints, None, reader).is_ok());
        assert!(game.is_over());
        assert_eq!(game.stats().score, 0);
        assert_eq!(game.stats().streak, 0);
    }

    #[test]
    fn play_again_starts_a_fresh_round() {
        let mut game = game_with("CRANE");
        let reader = Cursor::new("CRANE\nyes\nCRANE\nno\n");

        assert!(run_simple(&mut game, &NoHints, None, reader).is_ok());
        assert_eq!(game.stats().score, 2);
        assert_eq!(game.stats().streak, 2);
    }

    #[test]
    fn new_command_rejected_mid_round() {
        let mut game = game_with("CRANE");
        let reader = Cursor::new("BRAVE\nnew\nquit\n");

        assert!(run_simple(&mut game, &NoHints, None, reader).is_ok());
        // The round was not restarted: the first attempt is still on the board
        assert_eq!(game.revealed().len(), 1);
        assert_eq!(game.board().row(), 1);
    }
}

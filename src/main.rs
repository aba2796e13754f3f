//! Wordle Tiers - CLI
//!
//! Wordle-style word game with tiered difficulty, TUI and line modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::warn;
use std::io;
use std::path::{Path, PathBuf};
use wordle_tiers::{
    commands::{run_eval, run_simple},
    game::{Difficulty, DifficultyPolicy, Game, SessionStats},
    hints::{FileHints, HintProvider, NoHints},
    storage,
    words::{WordSource, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_tiers",
    about = "Wordle-style word game with tiered difficulty and definition hints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty: auto (default, follows your score), easy, medium, hard
    #[arg(short, long, global = true, default_value = "auto")]
    difficulty: String,

    /// Directory with easy.txt/medium.txt/hard.txt word pool overrides
    #[arg(short, long, global = true)]
    pools: Option<PathBuf>,

    /// Tab-separated glossary file used for definition hints
    #[arg(long, global = true)]
    hints: Option<PathBuf>,

    /// Start from zero instead of the persisted session stats
    #[arg(long, global = true)]
    fresh: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-based CLI mode without the TUI
    Simple,

    /// Score a guess against a target and print the verdict row
    Eval {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli),
        Commands::Simple => run_simple_command(&cli),
        Commands::Eval { guess, target } => {
            run_eval(&guess, &target)?;
            Ok(())
        }
    }
}

fn run_play_command(cli: &Cli) -> Result<()> {
    use wordle_tiers::interactive::{App, run_tui};

    let (game, hints, stats_path) = build_session(cli);
    let mut app = App::new(game, hints, stats_path);
    app.start_round();
    run_tui(app)
}

fn run_simple_command(cli: &Cli) -> Result<()> {
    let (mut game, hints, stats_path) = build_session(cli);

    run_simple(
        &mut game,
        hints.as_ref(),
        stats_path.as_deref(),
        io::stdin().lock(),
    )
    .map_err(|e| anyhow::anyhow!(e))
}

/// Wire up the word source, difficulty policy, persisted stats, and hints
fn build_session(cli: &Cli) -> (Game, Box<dyn HintProvider>, Option<PathBuf>) {
    let mut source = WordSource::embedded();
    if let Some(dir) = &cli.pools {
        overlay_pools(&mut source, dir);
    }

    let policy = DifficultyPolicy::from_name(&cli.difficulty);

    let stats_path = storage::default_stats_path();
    let stats = if cli.fresh {
        SessionStats::default()
    } else {
        stats_path
            .as_deref()
            .map(storage::load_stats)
            .unwrap_or_default()
    };

    let hints: Box<dyn HintProvider> = match &cli.hints {
        Some(path) => match FileHints::load(path) {
            Ok(glossary) => Box::new(glossary),
            Err(e) => {
                // A missing glossary skips hints, it never blocks the game
                warn!("could not load hints from {}: {e}", path.display());
                Box::new(NoHints)
            }
        },
        None => Box::new(NoHints),
    };

    let game = Game::new(source, policy, stats);
    (game, hints, stats_path)
}

/// Replace embedded pools with files from the override directory
///
/// Missing or unreadable tier files leave that tier's embedded pool in place.
fn overlay_pools(source: &mut WordSource, dir: &Path) {
    let tiers = [
        (Difficulty::Easy, "easy.txt"),
        (Difficulty::Medium, "medium.txt"),
        (Difficulty::Hard, "hard.txt"),
    ];

    for (tier, file) in tiers {
        let path = dir.join(file);
        match load_from_file(&path) {
            Ok(words) => source.set_pool(tier, words),
            Err(e) => warn!("could not load {} pool from {}: {e}", tier, path.display()),
        }
    }
}

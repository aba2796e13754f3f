//! Session stats persistence
//!
//! Stats live in a small `key=value` text file under the platform data
//! directory. Loading is best-effort: anything unreadable yields default
//! stats rather than failing the session.

use crate::game::SessionStats;
use log::warn;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default stats file location, `None` when the platform has no data dir
#[must_use]
pub fn default_stats_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("wordle_tiers").join("stats.txt"))
}

/// Load stats from a file, falling back to defaults on any failure
#[must_use]
pub fn load_stats(path: &Path) -> SessionStats {
    match fs::read_to_string(path) {
        Ok(content) => parse_stats(&content),
        Err(e) => {
            if e.kind() != io::ErrorKind::NotFound {
                warn!("could not read stats file {}: {e}", path.display());
            }
            SessionStats::default()
        }
    }
}

fn parse_stats(content: &str) -> SessionStats {
    let mut stats = SessionStats::default();

    for line in content.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let Ok(value) = value.trim().parse::<u32>() else {
            continue;
        };

        match key.trim() {
            "score" => stats.score = value,
            "wins" => stats.wins = value,
            "streak" => stats.streak = value,
            _ => {}
        }
    }

    stats
}

/// Write stats to a file, creating parent directories as needed
///
/// # Errors
///
/// Returns an I/O error if the directories or the file cannot be written.
pub fn save_stats(path: &Path, stats: &SessionStats) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(
        path,
        format!(
            "score={}\nwins={}\nstreak={}\n",
            stats.score, stats.wins, stats.streak
        ),
    )
}

//! Hint providers
//!
//! A round may show the target word's definition before play begins. The
//! lookup lives behind a trait: a provider that has nothing simply returns
//! `None` and the round proceeds without a hint.

use rustc_hash::FxHashMap;
use std::fs;
use std::io;
use std::path::Path;

/// Supplies an optional human-readable definition for a target word
pub trait HintProvider {
    /// Definition for `word` (uppercase), or `None` when unavailable
    fn definition(&self, word: &str) -> Option<String>;
}

/// Provider with no definitions; every round starts without a hint
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHints;

impl HintProvider for NoHints {
    fn definition(&self, _word: &str) -> Option<String> {
        None
    }
}

/// Definitions from a local glossary file
///
/// One entry per line, `WORD<TAB>definition`. Lines without a tab, or with
/// an empty side, are skipped.
#[derive(Debug, Default, Clone)]
pub struct FileHints {
    definitions: FxHashMap<String, String>,
}

impl FileHints {
    /// Load a glossary file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    fn parse(content: &str) -> Self {
        let definitions = content
            .lines()
            .filter_map(|line| {
                let (word, definition) = line.split_once('\t')?;
                let word = word.trim().to_uppercase();
                let definition = definition.trim();

                if word.is_empty() || definition.is_empty() {
                    None
                } else {
                    Some((word, definition.to_string()))
                }
            })
            .collect();

        Self { definitions }
    }

    /// Number of loaded definitions
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl HintProvider for FileHints {
    fn definition(&self, word: &str) -> Option<String> {
        self.definitions.get(&word.to_uppercase()).cloned()
    }
}

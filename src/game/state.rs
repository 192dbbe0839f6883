//! Accumulated state of one game

use std::collections::BTreeSet;

/// Everything a game remembers between turns
///
/// Only accepted guesses are recorded. The hint history is append-only and
/// the wrong-letter set only ever grows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    guess_count: usize,
    hint_history: Vec<String>,
    wrong_letters: BTreeSet<char>,
}

impl GameState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an accepted guess: its rendered hint and its absent letters
    pub fn record(&mut self, hint_line: String, wrong: &str) {
        self.guess_count += 1;
        self.hint_history.push(hint_line);
        self.wrong_letters.extend(wrong.chars());
    }

    #[inline]
    #[must_use]
    pub const fn guess_count(&self) -> usize {
        self.guess_count
    }

    #[inline]
    #[must_use]
    pub fn hint_history(&self) -> &[String] {
        &self.hint_history
    }

    #[inline]
    #[must_use]
    pub const fn wrong_letters(&self) -> &BTreeSet<char> {
        &self.wrong_letters
    }

    /// Wrong letters as one sorted string, e.g. `"ACN"`
    #[must_use]
    pub fn wrong_letters_text(&self) -> String {
        self.wrong_letters.iter().collect()
    }
}

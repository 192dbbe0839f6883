//! Per-letter feedback for a guess
//!
//! Each guess letter is judged on its own: an exact positional match is
//! `Correct`, a letter found anywhere else in the secret is `Present`, and
//! everything else is `Absent`. There is no letter counting; secrets are
//! always drawn from words with five distinct letters.

use super::word::WORD_LENGTH;

/// Feedback class for a single guess letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Right letter, right position
    Correct,
    /// Letter occurs in the secret at another position
    Present,
    /// Letter does not occur in the secret
    Absent,
}

/// Classified letters of one guess, uppercased, in guess order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    letters: Vec<(char, Classification)>,
}

impl Hint {
    /// Classify `guess` against `secret`, ignoring ASCII case
    ///
    /// Both words are expected to have passed validation. Positions beyond
    /// the end of the secret can only be `Present` or `Absent`.
    ///
    /// # Examples
    /// ```
    /// use words_virtuoso::core::{Classification, Hint};
    ///
    /// let hint = Hint::calculate("raise", "arise");
    /// assert_eq!(hint.classes()[0], Classification::Present);
    /// assert_eq!(hint.classes()[2], Classification::Correct);
    /// assert!(hint.wrong_letters().is_empty());
    /// ```
    #[must_use]
    pub fn calculate(guess: &str, secret: &str) -> Self {
        let secret: Vec<char> = secret.chars().map(|c| c.to_ascii_uppercase()).collect();

        let letters = guess
            .chars()
            .map(|c| c.to_ascii_uppercase())
            .enumerate()
            .map(|(i, letter)| {
                let class = if secret.get(i) == Some(&letter) {
                    Classification::Correct
                } else if secret.contains(&letter) {
                    Classification::Present
                } else {
                    Classification::Absent
                };
                (letter, class)
            })
            .collect();

        Self { letters }
    }

    /// Letters paired with their classification
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[(char, Classification)] {
        &self.letters
    }

    /// Just the classifications, in guess order
    #[must_use]
    pub fn classes(&self) -> Vec<Classification> {
        self.letters.iter().map(|&(_, class)| class).collect()
    }

    /// Uppercased `Absent` letters, in guess order
    #[must_use]
    pub fn wrong_letters(&self) -> String {
        self.letters
            .iter()
            .filter(|&&(_, class)| class == Classification::Absent)
            .map(|&(letter, _)| letter)
            .collect()
    }

    /// True when every letter is in its correct position
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.letters.len() == WORD_LENGTH
            && self
                .letters
                .iter()
                .all(|&(_, class)| class == Classification::Correct)
    }
}

//! Word validation
//!
//! A playable word is exactly 5 letters from `[A-Za-z]`, all distinct.
//! Guesses must additionally appear in the dictionary.

use rustc_hash::FxHashSet;
use std::fmt;

/// Number of letters in every playable word
pub const WORD_LENGTH: usize = 5;

/// Reason a string was rejected as a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    DuplicateLetters,
    InvalidCharacters,
    NotInWordList,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(_) => write!(f, "The input isn't a 5-letter word."),
            Self::DuplicateLetters => write!(f, "The input has duplicate letters."),
            Self::InvalidCharacters => {
                write!(f, "One or more letters of the input aren't valid.")
            }
            Self::NotInWordList => write!(f, "The input word isn't included in my words list."),
        }
    }
}

impl std::error::Error for WordError {}

/// The reference word list guesses are checked against
///
/// Keeps the lines as loaded and a lowercase index for case-insensitive
/// membership.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    index: FxHashSet<String>,
}

impl Dictionary {
    #[must_use]
    pub fn new(words: Vec<String>) -> Self {
        let index = words.iter().map(|w| w.to_lowercase()).collect();
        Self { words, index }
    }

    /// Case-insensitive membership test
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(&word.to_lowercase())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Dictionary {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Validate a candidate word, stopping at the first failed check
///
/// Checks run in this order: length, distinct letters, `[A-Za-z]` only,
/// and finally membership in `reference` when one is supplied.
///
/// # Errors
/// Returns the `WordError` for the first check that fails.
///
/// # Examples
/// ```
/// use words_virtuoso::core::{Dictionary, WordError, validate_word};
///
/// assert!(validate_word("crane", None).is_ok());
/// assert_eq!(validate_word("ab1de", None), Err(WordError::InvalidCharacters));
///
/// let words: Dictionary = ["GRAPE", "PLUMS"].into_iter().collect();
/// assert!(validate_word("grape", Some(&words)).is_ok());
/// assert_eq!(validate_word("MANGO", Some(&words)), Err(WordError::NotInWordList));
/// ```
pub fn validate_word(word: &str, reference: Option<&Dictionary>) -> Result<(), WordError> {
    let length = word.chars().count();
    if length != WORD_LENGTH {
        return Err(WordError::InvalidLength(length));
    }

    let distinct: FxHashSet<char> = word.chars().collect();
    if distinct.len() != WORD_LENGTH {
        return Err(WordError::DuplicateLetters);
    }

    if !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(WordError::InvalidCharacters);
    }

    match reference {
        Some(dictionary) if !dictionary.contains(word) => Err(WordError::NotInWordList),
        _ => Ok(()),
    }
}

//! Core domain types for the guessing game
//!
//! Pure word validation and hint calculation with no I/O.

mod hint;
mod word;

pub use hint::{Classification, Hint};
pub use word::{Dictionary, WORD_LENGTH, WordError, validate_word};

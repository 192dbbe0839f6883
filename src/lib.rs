//! Words Virtuoso
//!
//! A terminal word-guessing game: guess the secret 5-letter word and get
//! coloured per-letter hints after every try.
//!
//! # Quick Start
//!
//! ```rust
//! use words_virtuoso::core::Dictionary;
//! use words_virtuoso::game::{Game, Outcome, ScriptedInput};
//! use words_virtuoso::output::PlainRenderer;
//!
//! let words: Dictionary = ["crane", "mango"].into_iter().collect();
//! let mut game = Game::new("mango", &words, &PlainRenderer);
//! let mut input = ScriptedInput::new(["crane", "mango"]);
//! let mut out = Vec::new();
//!
//! let outcome = game.play(&mut input, &mut out).unwrap();
//! assert!(matches!(outcome, Outcome::Won { guesses: 2, .. }));
//! ```

// Word validation and hint calculation
pub mod core;

// Word list files
pub mod wordlists;

// Hint rendering
pub mod output;

// Turn loop and game state
pub mod game;

// Startup checks and secret selection
pub mod launcher;

pub mod logging;

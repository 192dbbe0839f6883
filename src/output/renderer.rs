//! Letter rendering for hint lines
//!
//! The game only ever asks a `Renderer` for styled strings, so the terminal
//! colours can be swapped for plain text in tests or non-ANSI front ends.

use crate::core::{Classification, Hint};
use colored::Colorize;

/// Turns classified letters into display strings
pub trait Renderer {
    /// Style a single hint letter
    fn letter(&self, letter: char, class: Classification) -> String;

    /// Style the accumulated "wrong letters so far" line
    fn wrong_letters(&self, letters: &str) -> String;

    /// Render a whole hint as concatenated glyphs with no separator
    fn hint(&self, hint: &Hint) -> String {
        hint.letters()
            .iter()
            .map(|&(letter, class)| self.letter(letter, class))
            .collect()
    }
}

/// Background-coloured letters via ANSI escapes
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiRenderer;

impl Renderer for AnsiRenderer {
    fn letter(&self, letter: char, class: Classification) -> String {
        let glyph = letter.to_string().black();
        let styled = match class {
            Classification::Correct => glyph.on_bright_green(),
            Classification::Present => glyph.on_bright_yellow(),
            Classification::Absent => glyph.on_white(),
        };
        styled.to_string()
    }

    fn wrong_letters(&self, letters: &str) -> String {
        letters.black().on_bright_cyan().to_string()
    }
}

/// Escape-free rendering: `[A]` correct, `(A)` present, ` A ` absent
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    fn letter(&self, letter: char, class: Classification) -> String {
        match class {
            Classification::Correct => format!("[{letter}]"),
            Classification::Present => format!("({letter})"),
            Classification::Absent => format!(" {letter} "),
        }
    }

    fn wrong_letters(&self, letters: &str) -> String {
        letters.to_string()
    }
}

/// Classify `guess` against `secret` and render it in one call
///
/// Returns the rendered hint line and the uppercased absent letters.
///
/// # Examples
/// ```
/// use words_virtuoso::output::{PlainRenderer, generate_hint};
///
/// let (line, wrong) = generate_hint("crane", "berry", &PlainRenderer);
/// assert_eq!(line, " C (R) A  N (E)");
/// assert_eq!(wrong, "CAN");
/// ```
pub fn generate_hint<R: Renderer + ?Sized>(
    guess: &str,
    secret: &str,
    renderer: &R,
) -> (String, String) {
    let hint = Hint::calculate(guess, secret);
    (renderer.hint(&hint), hint.wrong_letters())
}

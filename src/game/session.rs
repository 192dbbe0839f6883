//! The interactive guessing loop
//!
//! Prompts for a word, validates it against the dictionary, prints every
//! hint so far plus the wrong letters, and stops on a win or on `exit`.

use super::input::InputSource;
use super::state::GameState;
use crate::core::{Dictionary, Hint, validate_word};
use crate::output::Renderer;
use log::{debug, info};
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Typed by the player to leave the game
pub const EXIT_COMMAND: &str = "exit";

/// Shown before every guess
pub const PROMPT: &str = "Input a 5-letter word:";

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The last guess equalled the secret
    Won { guesses: usize, elapsed: Duration },
    /// The player typed `exit` or input ran out
    Aborted { guesses: usize },
}

/// One game against a fixed secret
pub struct Game<'a> {
    secret: String,
    dictionary: &'a Dictionary,
    renderer: &'a dyn Renderer,
    state: GameState,
}

impl<'a> Game<'a> {
    #[must_use]
    pub fn new(
        secret: impl Into<String>,
        dictionary: &'a Dictionary,
        renderer: &'a dyn Renderer,
    ) -> Self {
        Self {
            secret: secret.into(),
            dictionary,
            renderer,
            state: GameState::new(),
        }
    }

    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// State accumulated so far
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Run turns until the secret is guessed or the player leaves
    ///
    /// Rejected guesses print their reason and do not count as a turn.
    /// End of input is treated the same as `exit`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn play<I, W>(&mut self, input: &mut I, out: &mut W) -> io::Result<Outcome>
    where
        I: InputSource + ?Sized,
        W: Write + ?Sized,
    {
        let start = Instant::now();

        loop {
            writeln!(out, "{PROMPT}")?;
            out.flush()?;

            let Some(guess) = input.next_line()? else {
                debug!("Input closed");
                return self.abort(out);
            };

            if guess == EXIT_COMMAND {
                return self.abort(out);
            }

            if let Err(reason) = validate_word(&guess, Some(self.dictionary)) {
                debug!("Rejected guess {guess:?}: {reason:?}");
                writeln!(out, "{reason}")?;
                continue;
            }

            let hint = Hint::calculate(&guess, &self.secret);
            self.state
                .record(self.renderer.hint(&hint), &hint.wrong_letters());
            debug!(
                "Guess {} {guess:?}: {:?} (solved: {})",
                self.state.guess_count(),
                hint.classes(),
                hint.is_solved()
            );
            self.show_board(out)?;

            if guess == self.secret {
                let elapsed = start.elapsed();
                return self.win(elapsed, out);
            }
        }
    }

    fn show_board<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        for line in self.state.hint_history() {
            writeln!(out, "{line}")?;
        }

        if !self.state.wrong_letters().is_empty() {
            let letters = self.state.wrong_letters_text();
            writeln!(out, "\n{}\n", self.renderer.wrong_letters(&letters))?;
        }

        Ok(())
    }

    fn abort<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<Outcome> {
        writeln!(out, "\nThe game is over.")?;
        info!("Game aborted after {} guesses", self.state.guess_count());
        Ok(Outcome::Aborted {
            guesses: self.state.guess_count(),
        })
    }

    fn win<W: Write + ?Sized>(&self, elapsed: Duration, out: &mut W) -> io::Result<Outcome> {
        let guesses = self.state.guess_count();
        writeln!(out, "Correct!")?;
        if guesses == 1 {
            writeln!(out, "Amazing luck! The solution was found at once.")?;
        } else {
            writeln!(
                out,
                "The solution was found after {guesses} tries in {} seconds.",
                format_elapsed(elapsed)
            )?;
        }
        info!("Game won in {guesses} guesses ({} ms)", elapsed.as_millis());
        Ok(Outcome::Won { guesses, elapsed })
    }
}

/// Seconds with millisecond resolution, e.g. `12.034`
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let millis = elapsed.as_millis();
    format!("{}.{:03}", millis / 1000, millis % 1000)
}

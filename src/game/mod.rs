//! Game session
//!
//! Turn loop, accumulated state, and the input abstraction it reads from.

pub mod input;
pub mod session;
pub mod state;

pub use input::{InputSource, LineReader, ScriptedInput};
pub use session::{EXIT_COMMAND, Game, Outcome, PROMPT};
pub use state::GameState;

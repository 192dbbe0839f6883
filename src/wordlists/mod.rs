//! Word lists
//!
//! Loading and bulk validation of the dictionary and candidate files.

pub mod loader;

pub use loader::{ListError, ListKind, load_word_list};

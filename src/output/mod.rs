//! Terminal output formatting
//!
//! Hint rendering with or without ANSI colours.

pub mod renderer;

pub use renderer::{AnsiRenderer, PlainRenderer, Renderer, generate_hint};

//! Terminal input module.
//!
//! Maps `crossterm` key events into quiz commands and line edits, and holds
//! the guess line being typed. Independent of any UI framework.

pub mod line;
pub mod map;

pub use trader_quiz_types as types;

pub use line::GuessLine;
pub use map::{handle_key_event, should_quit, InputEvent};

//! Terminal front-end for the quiz.
//!
//! A small, game-oriented rendering layer: the controller pushes events into
//! a [`Screen`], [`GameView`] draws the screen into a framebuffer, and
//! [`TerminalRenderer`] flushes the framebuffer through crossterm.
//!
//! Goals:
//! - Keep `core` and `engine` free of terminal concerns
//! - Keep drawing pure so layout can be unit-tested
//! - Only write the cells that changed between frames

pub mod fb;
pub mod frame_clock;
pub mod game_view;
pub mod renderer;
pub mod screen;

pub use trader_quiz_core as core;
pub use trader_quiz_engine as engine;
pub use trader_quiz_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use frame_clock::FrameClock;
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screen::{Screen, ScreenToast, WalletView};

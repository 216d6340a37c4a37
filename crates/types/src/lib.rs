//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, tests).
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `STARTUP_DELAY_MS` | 1000 | Delay before the wallet panel is populated |
//! | `ADVANCE_DELAY_MS` | 2500 | Delay between a correct guess and the next level |
//! | `NOTIFICATION_VISIBLE_MS` | 3000 | How long a toast stays on screen |
//! | `NOTIFICATION_EXIT_MS` | 500 | Slide-out duration before a toast is removed |
//!
//! # Examples
//!
//! ```
//! use trader_quiz_types::{Command, Phase, Severity, MAX_LEVEL};
//!
//! // Stable names used in log fields
//! assert_eq!(Command::TogglePrivateKey.as_str(), "togglePrivateKey");
//!
//! // Only the AwaitingGuess phase accepts input
//! assert!(Phase::AwaitingGuess.is_playing());
//! assert!(!Phase::Resolved.is_playing());
//!
//! assert_eq!(Severity::Success.as_str(), "success");
//! assert_eq!(MAX_LEVEL, 500);
//! ```

/// Highest reachable level.
pub const MAX_LEVEL: u32 = 500;

/// Points awarded for a correct guess.
pub const CORRECT_GUESS_POINTS: u32 = 100;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// One-shot delay before the wallet panel is populated.
pub const STARTUP_DELAY_MS: u32 = 1000;

/// Delay between a correct guess and loading the next level.
pub const ADVANCE_DELAY_MS: u32 = 2500;

/// How long a notification stays fully visible.
pub const NOTIFICATION_VISIBLE_MS: u32 = 3000;

/// Exit animation length; the toast is removed afterwards.
pub const NOTIFICATION_EXIT_MS: u32 = 500;

/// Price shown on the help confirmation prompt.
pub const HELP_COST: &str = "0.005 AVAX";

/// Token suffix appended to leaderboard scores.
pub const SCORE_TOKEN: &str = "$ARTGA";

/// Maximum guess length accepted by the input line.
pub const MAX_GUESS_LEN: usize = 32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_parity_timing_defaults() {
        assert_eq!(STARTUP_DELAY_MS, 1000);
        assert_eq!(ADVANCE_DELAY_MS, 2500);
        assert_eq!(NOTIFICATION_VISIBLE_MS, 3000);
        assert_eq!(NOTIFICATION_EXIT_MS, 500);
        assert_eq!(CORRECT_GUESS_POINTS, 100);
    }
}

/// Lifecycle of a single level.
///
/// - **AwaitingGuess**: the level accepts guesses and help requests
/// - **Resolved**: answered correctly, waiting for the scheduled advance
/// - **Completed**: the last level was answered; no further input is accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    AwaitingGuess,
    Resolved,
    Completed,
}

impl Phase {
    /// True exactly while a level awaits a correct guess.
    pub fn is_playing(&self) -> bool {
        matches!(self, Phase::AwaitingGuess)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::AwaitingGuess => "awaiting_guess",
            Phase::Resolved => "resolved",
            Phase::Completed => "completed",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

/// User commands that drive the quiz.
///
/// Text entry itself is handled by the input line; these are the discrete
/// actions a key press can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Submit the current guess line
    Submit,
    /// Ask for the level hint (opens the confirmation prompt)
    Help,
    /// Accept the help prompt
    ConfirmHelp,
    /// Decline the help prompt
    CancelHelp,
    /// Show or hide the wallet private key
    TogglePrivateKey,
    /// "Login with X" placeholder; shows the wallet right away
    Login,
    /// Reset the session to defaults
    Restart,
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Submit => "submit",
            Command::Help => "help",
            Command::ConfirmHelp => "confirmHelp",
            Command::CancelHelp => "cancelHelp",
            Command::TogglePrivateKey => "togglePrivateKey",
            Command::Login => "login",
            Command::Restart => "restart",
        }
    }
}

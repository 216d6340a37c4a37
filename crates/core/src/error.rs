//! Rejections produced by the quiz state machine.
//!
//! None of these are fatal. Every variant describes a user action that was
//! refused while leaving the state untouched; the controller turns each one
//! into a transient notification.

use thiserror::Error;

use crate::types::Phase;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuizError {
    /// Empty or whitespace-only guess.
    #[error("Please enter your guess!")]
    MissingGuess,

    /// Help was already revealed for the current level.
    #[error("You already used help for this level!")]
    HelpAlreadyUsed,

    /// Guess or help attempted outside `AwaitingGuess`.
    #[error("not accepting input while {phase}")]
    NotPlaying { phase: Phase },

    /// `advance` called when no correct guess is pending.
    #[error("nothing to advance while {phase}")]
    NothingToAdvance { phase: Phase },
}

pub type Result<T> = std::result::Result<T, QuizError>;

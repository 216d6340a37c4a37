//! Game state module - the level-progression state machine
//!
//! The state machine owns the level counter, the score and the once-per-level
//! help flag. It knows nothing about time: the controller schedules the
//! delayed `advance` after a correct guess and calls it when the delay fires.
//!
//! ```text
//!   start(level) ──► AwaitingGuess ──submit_guess(correct)──► Resolved
//!                        ▲    │                                 │
//!                        │    └─ wrong / help: stay             │ advance()
//!                        └──────── level < max ◄────────────────┤
//!                                               level == max ───► Completed
//! ```

use tracing::{debug, info};

use crate::content::{level_data, LevelData};
use crate::error::{QuizError, Result};
use crate::snapshot::QuizSnapshot;
use crate::types::{Phase, CORRECT_GUESS_POINTS, MAX_LEVEL};

/// Result of a guess that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess matched; the level is now `Resolved`.
    Correct { name: &'static str },
    /// The guess did not match; the level keeps awaiting a guess.
    Wrong,
}

/// Result of a successful `advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// A new level was loaded and awaits a guess.
    NextLevel(u32),
    /// The last level was answered; the game is over.
    Completed,
}

/// Complete quiz state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizState {
    level: u32,
    score: u32,
    help_used: bool,
    phase: Phase,
    max_level: u32,
}

impl Default for QuizState {
    fn default() -> Self {
        Self::new(MAX_LEVEL)
    }
}

impl QuizState {
    /// Create a fresh session at level 1 with a zero score.
    ///
    /// A `max_level` of zero is treated as one.
    pub fn new(max_level: u32) -> Self {
        let mut state = Self {
            level: 1,
            score: 0,
            help_used: false,
            phase: Phase::AwaitingGuess,
            max_level: max_level.max(1),
        };
        state.start(1);
        state
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn help_used(&self) -> bool {
        self.help_used
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase.is_playing()
    }

    pub fn max_level(&self) -> u32 {
        self.max_level
    }

    /// Trader data for the current level (with the level-1 fallback).
    pub fn level_data(&self) -> &'static LevelData {
        level_data(self.level)
    }

    /// Enter `AwaitingGuess` at `level`, clamped to `1..=max_level`.
    ///
    /// Resets the help flag. The score is left alone.
    pub fn start(&mut self, level: u32) {
        self.level = level.clamp(1, self.max_level);
        self.help_used = false;
        self.phase = Phase::AwaitingGuess;
        info!(level = self.level, "level started");
    }

    /// Back to session defaults: level 1, score 0.
    pub fn reset(&mut self) {
        self.score = 0;
        self.start(1);
    }

    /// Check a guess against the current level's trader.
    ///
    /// Surrounding whitespace and letter case are ignored. Blank input is
    /// rejected before any comparison.
    pub fn submit_guess(&mut self, text: &str) -> Result<GuessOutcome> {
        if !self.phase.is_playing() {
            return Err(QuizError::NotPlaying { phase: self.phase });
        }

        let guess = normalize_guess(text);
        if guess.is_empty() {
            return Err(QuizError::MissingGuess);
        }

        let data = self.level_data();
        if guess == data.name.to_lowercase() {
            self.score = self.score.saturating_add(CORRECT_GUESS_POINTS);
            self.phase = Phase::Resolved;
            info!(level = self.level, score = self.score, "correct guess");
            Ok(GuessOutcome::Correct { name: data.name })
        } else {
            debug!(level = self.level, "wrong guess");
            Ok(GuessOutcome::Wrong)
        }
    }

    /// Reveal the hint for the current level. Allowed once per level.
    pub fn request_help(&mut self) -> Result<&'static str> {
        if !self.phase.is_playing() {
            return Err(QuizError::NotPlaying { phase: self.phase });
        }
        if self.help_used {
            return Err(QuizError::HelpAlreadyUsed);
        }
        self.help_used = true;
        debug!(level = self.level, "help used");
        Ok(self.level_data().hint)
    }

    /// Move past a resolved level.
    ///
    /// Only valid in `Resolved`, so the terminal `Completed` outcome is
    /// reported exactly once.
    pub fn advance(&mut self) -> Result<AdvanceOutcome> {
        if self.phase != Phase::Resolved {
            return Err(QuizError::NothingToAdvance { phase: self.phase });
        }

        if self.level < self.max_level {
            self.start(self.level + 1);
            Ok(AdvanceOutcome::NextLevel(self.level))
        } else {
            self.phase = Phase::Completed;
            info!(score = self.score, "all levels completed");
            Ok(AdvanceOutcome::Completed)
        }
    }

    pub fn snapshot(&self) -> QuizSnapshot {
        let mut snap = QuizSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Write the current state into an existing snapshot.
    pub fn snapshot_into(&self, out: &mut QuizSnapshot) {
        out.level = self.level;
        out.max_level = self.max_level;
        out.score = self.score;
        out.help_used = self.help_used;
        out.phase = self.phase;
    }
}

/// Trim and case-fold a raw guess.
pub fn normalize_guess(text: &str) -> String {
    text.trim().to_lowercase()
}

use crate::types::{Phase, MAX_LEVEL};

/// Plain copy of the quiz state for renderers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuizSnapshot {
    pub level: u32,
    pub max_level: u32,
    pub score: u32,
    pub help_used: bool,
    pub phase: Phase,
}

impl QuizSnapshot {
    pub fn playable(&self) -> bool {
        self.phase.is_playing()
    }

    pub fn completed(&self) -> bool {
        self.phase == Phase::Completed
    }
}

impl Default for QuizSnapshot {
    fn default() -> Self {
        Self {
            level: 1,
            max_level: MAX_LEVEL,
            score: 0,
            help_used: false,
            phase: Phase::AwaitingGuess,
        }
    }
}

//! Rendering seam between the controller and any front-end.
//!
//! The controller never touches a screen. After each transition it hands the
//! presenter plain data describing what changed.

use trader_quiz_core::LeaderboardRow;
use trader_quiz_core::types::Severity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    /// A level is on the board; input and card flip are reset.
    LevelLoaded {
        level: u32,
        label: String,
        image_ref: String,
        image_alt: String,
    },
    ScoreChanged(u32),
    /// Correct guess: flip the card to show the result text.
    GuessAccepted { result_text: String },
    /// Clear the guess input.
    GuessCleared,
    HintRevealed(String),
    /// Ask the player to confirm paying for help.
    HelpPrompt { cost: &'static str },
    HelpPromptClosed,
    Notify {
        id: u64,
        message: String,
        severity: Severity,
    },
    NotificationLeaving(u64),
    NotificationRemoved(u64),
    WalletShown {
        address: &'static str,
        private_key: &'static str,
    },
    WalletHidden,
    PrivateKeyToggled { revealed: bool },
    LeaderboardLoaded(Vec<LeaderboardRow>),
    GameCompleted { score: u32 },
}

pub trait Presenter {
    fn present(&mut self, event: &QuizEvent);
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn present(&mut self, event: &QuizEvent) {
        (**self).present(event);
    }
}

/// Presenter that keeps every event, for tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    pub events: Vec<QuizEvent>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Vec<QuizEvent> {
        std::mem::take(&mut self.events)
    }

    /// Messages of every `Notify` event, in order.
    pub fn messages(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                QuizEvent::Notify { message, .. } => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Presenter for RecordingPresenter {
    fn present(&mut self, event: &QuizEvent) {
        self.events.push(event.clone());
    }
}

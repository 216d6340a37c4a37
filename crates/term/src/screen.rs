//! Screen: the display model the terminal view draws from.
//!
//! `Screen` implements [`Presenter`], so the controller keeps it current by
//! pushing events; it holds no game rules of its own.

use crate::core::LeaderboardRow;
use crate::engine::{Presenter, QuizEvent};
use crate::types::Severity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenToast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub leaving: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalletView {
    pub address: &'static str,
    pub private_key: &'static str,
    pub key_revealed: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Screen {
    pub level: u32,
    pub level_label: String,
    pub image_ref: String,
    pub image_alt: String,
    pub score: u32,
    /// Set while the card is flipped to its result side.
    pub result_text: Option<String>,
    pub hint: Option<String>,
    pub help_prompt: Option<&'static str>,
    pub toasts: Vec<ScreenToast>,
    pub wallet: Option<WalletView>,
    pub leaderboard: Vec<LeaderboardRow>,
    /// Final score once every level is answered.
    pub completed: Option<u32>,
    clear_guess: bool,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once after the controller asked for the guess input to be
    /// cleared.
    pub fn take_guess_clear(&mut self) -> bool {
        std::mem::take(&mut self.clear_guess)
    }

    pub fn card_flipped(&self) -> bool {
        self.result_text.is_some()
    }
}

impl Presenter for Screen {
    fn present(&mut self, event: &QuizEvent) {
        match event {
            QuizEvent::LevelLoaded {
                level,
                label,
                image_ref,
                image_alt,
            } => {
                self.level = *level;
                self.level_label = label.clone();
                self.image_ref = image_ref.clone();
                self.image_alt = image_alt.clone();
                self.result_text = None;
                self.hint = None;
                self.completed = None;
            }
            QuizEvent::ScoreChanged(score) => self.score = *score,
            QuizEvent::GuessAccepted { result_text } => {
                self.result_text = Some(result_text.clone());
                self.clear_guess = true;
            }
            QuizEvent::GuessCleared => self.clear_guess = true,
            QuizEvent::HintRevealed(hint) => self.hint = Some(hint.clone()),
            QuizEvent::HelpPrompt { cost } => self.help_prompt = Some(*cost),
            QuizEvent::HelpPromptClosed => self.help_prompt = None,
            QuizEvent::Notify {
                id,
                message,
                severity,
            } => self.toasts.push(ScreenToast {
                id: *id,
                message: message.clone(),
                severity: *severity,
                leaving: false,
            }),
            QuizEvent::NotificationLeaving(id) => {
                if let Some(t) = self.toasts.iter_mut().find(|t| t.id == *id) {
                    t.leaving = true;
                }
            }
            QuizEvent::NotificationRemoved(id) => self.toasts.retain(|t| t.id != *id),
            QuizEvent::WalletShown {
                address,
                private_key,
            } => {
                let key_revealed = self.wallet.is_some_and(|w| w.key_revealed);
                self.wallet = Some(WalletView {
                    address: *address,
                    private_key: *private_key,
                    key_revealed,
                });
            }
            QuizEvent::WalletHidden => self.wallet = None,
            QuizEvent::PrivateKeyToggled { revealed } => {
                if let Some(w) = self.wallet.as_mut() {
                    w.key_revealed = *revealed;
                }
            }
            QuizEvent::LeaderboardLoaded(rows) => self.leaderboard = rows.clone(),
            QuizEvent::GameCompleted { score } => self.completed = Some(*score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Quiz, QuizConfig};

    #[test]
    fn screen_follows_controller() {
        let mut quiz = Quiz::new(QuizConfig::default(), Screen::new());
        assert_eq!(quiz.presenter().level_label, "LEVEL 1");
        assert_eq!(quiz.presenter().leaderboard.len(), 10);
        assert!(quiz.presenter_mut().take_guess_clear());

        quiz.submit_guess("CryptoKing").unwrap();
        let screen = quiz.presenter_mut();
        assert_eq!(screen.result_text.as_deref(), Some("CORRECT! It's CryptoKing"));
        assert_eq!(screen.score, 100);
        assert_eq!(screen.toasts.len(), 1);
        assert!(screen.take_guess_clear());
        assert!(!screen.take_guess_clear());

        quiz.tick(2500);
        let screen = quiz.presenter();
        assert_eq!(screen.level, 2);
        assert!(!screen.card_flipped());
        assert!(screen.wallet.is_some());
    }

    #[test]
    fn toasts_leave_then_disappear() {
        let mut quiz = Quiz::new(QuizConfig::default(), Screen::new());
        quiz.submit_guess("nobody").unwrap();
        quiz.tick(3000);
        assert!(quiz.presenter().toasts[0].leaving);
        quiz.tick(500);
        assert!(quiz.presenter().toasts.is_empty());
    }
}

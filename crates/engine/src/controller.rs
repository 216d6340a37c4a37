//! Quiz controller: owns the single state object and drives it.
//!
//! User commands and scheduler tasks both end up here. Each one runs to
//! completion synchronously, mutates the state at most once, and reports the
//! result to the [`Presenter`].

use tracing::{debug, warn};

use trader_quiz_core::display::{image_alt, image_ref, level_label, result_text};
use trader_quiz_core::types::{
    Command, Phase, Severity, ADVANCE_DELAY_MS, HELP_COST, MAX_LEVEL, NOTIFICATION_EXIT_MS,
    NOTIFICATION_VISIBLE_MS, STARTUP_DELAY_MS,
};
use trader_quiz_core::{
    leaderboard_rows, AdvanceOutcome, GuessOutcome, Notifications, QuizError, QuizSnapshot,
    QuizState, Scheduler, Task, TimerHandle, DEMO_WALLET, LEADERBOARD,
};

use crate::presenter::{Presenter, QuizEvent};

const MSG_CORRECT: &str = "Correct! +100 points";
const MSG_WRONG: &str = "Wrong answer! Try again.";
const MSG_RESOLVED: &str = "Hold on, loading the next level...";
const MSG_COMPLETED: &str = "You completed all levels!";
const MSG_CONGRATS: &str = "Congratulations! You completed all levels!";
const MSG_LOGIN: &str = "Login with X feature coming soon!";

/// Tunables for a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizConfig {
    pub max_level: u32,
    pub advance_delay_ms: u32,
    pub startup_delay_ms: u32,
    pub notification_visible_ms: u32,
    pub notification_exit_ms: u32,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            max_level: MAX_LEVEL,
            advance_delay_ms: ADVANCE_DELAY_MS,
            startup_delay_ms: STARTUP_DELAY_MS,
            notification_visible_ms: NOTIFICATION_VISIBLE_MS,
            notification_exit_ms: NOTIFICATION_EXIT_MS,
        }
    }
}

pub struct Quiz<P: Presenter> {
    config: QuizConfig,
    state: QuizState,
    scheduler: Scheduler,
    notifications: Notifications,
    presenter: P,
    help_prompt_open: bool,
    wallet_shown: bool,
    private_key_revealed: bool,
    advance_timer: Option<TimerHandle>,
    wallet_timer: Option<TimerHandle>,
    /// Due time of the task being run, if any. Follow-up delays count from
    /// here rather than from the scheduler clock.
    firing_at: Option<u64>,
}

impl<P: Presenter> Quiz<P> {
    /// Load the first level and the leaderboard, and schedule the wallet.
    pub fn new(config: QuizConfig, presenter: P) -> Self {
        let mut quiz = Self {
            config,
            state: QuizState::new(config.max_level),
            scheduler: Scheduler::new(),
            notifications: Notifications::new(),
            presenter,
            help_prompt_open: false,
            wallet_shown: false,
            private_key_revealed: false,
            advance_timer: None,
            wallet_timer: None,
            firing_at: None,
        };
        quiz.presenter
            .present(&QuizEvent::LeaderboardLoaded(leaderboard_rows(&LEADERBOARD)));
        quiz.boot();
        quiz
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn snapshot(&self) -> QuizSnapshot {
        self.state.snapshot()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn help_prompt_open(&self) -> bool {
        self.help_prompt_open
    }

    pub fn wallet_shown(&self) -> bool {
        self.wallet_shown
    }

    pub fn private_key_revealed(&self) -> bool {
        self.private_key_revealed
    }

    /// True while a correct guess waits for its delayed advance.
    pub fn advance_pending(&self) -> bool {
        self.advance_timer
            .is_some_and(|h| self.scheduler.is_pending(h))
    }

    /// Dispatch a discrete command. `guess` is only read by `Submit`.
    pub fn apply_command(&mut self, command: Command, guess: &str) {
        debug!(command = command.as_str(), "command");
        match command {
            Command::Submit => {
                let _ = self.submit_guess(guess);
            }
            Command::Help => {
                let _ = self.request_help();
            }
            Command::ConfirmHelp => {
                let _ = self.confirm_help(true);
            }
            Command::CancelHelp => {
                let _ = self.confirm_help(false);
            }
            Command::TogglePrivateKey => {
                self.toggle_private_key();
            }
            Command::Login => self.login(),
            Command::Restart => self.restart(),
        }
    }

    pub fn submit_guess(&mut self, text: &str) -> Result<GuessOutcome, QuizError> {
        if self.help_prompt_open {
            self.close_help_prompt();
        }

        match self.state.submit_guess(text) {
            Ok(GuessOutcome::Correct { name }) => {
                self.presenter.present(&QuizEvent::GuessAccepted {
                    result_text: result_text(name),
                });
                self.presenter
                    .present(&QuizEvent::ScoreChanged(self.state.score()));
                self.notify(MSG_CORRECT, Severity::Success);
                self.advance_timer = Some(self.schedule(
                    self.config.advance_delay_ms,
                    Task::Advance {
                        level: self.state.level(),
                    },
                ));
                Ok(GuessOutcome::Correct { name })
            }
            Ok(GuessOutcome::Wrong) => {
                self.notify(MSG_WRONG, Severity::Error);
                self.presenter.present(&QuizEvent::GuessCleared);
                Ok(GuessOutcome::Wrong)
            }
            Err(e) => {
                self.reject(e);
                Err(e)
            }
        }
    }

    /// Open the paid-help confirmation prompt.
    ///
    /// The hint itself is only revealed by [`Quiz::confirm_help`].
    pub fn request_help(&mut self) -> Result<(), QuizError> {
        if self.help_prompt_open {
            return Ok(());
        }
        let check = if !self.state.is_playing() {
            Err(QuizError::NotPlaying {
                phase: self.state.phase(),
            })
        } else if self.state.help_used() {
            Err(QuizError::HelpAlreadyUsed)
        } else {
            Ok(())
        };

        match check {
            Ok(()) => {
                self.help_prompt_open = true;
                self.presenter
                    .present(&QuizEvent::HelpPrompt { cost: HELP_COST });
                Ok(())
            }
            Err(e) => {
                self.reject(e);
                Err(e)
            }
        }
    }

    /// Answer the help prompt. Returns the hint when it was revealed.
    pub fn confirm_help(&mut self, accept: bool) -> Result<Option<&'static str>, QuizError> {
        if !self.help_prompt_open {
            return Ok(None);
        }
        self.close_help_prompt();
        if !accept {
            return Ok(None);
        }

        match self.state.request_help() {
            Ok(hint) => {
                self.notify(format!("Hint: {hint}"), Severity::Info);
                self.presenter
                    .present(&QuizEvent::HintRevealed(hint.to_string()));
                Ok(Some(hint))
            }
            Err(e) => {
                self.reject(e);
                Err(e)
            }
        }
    }

    /// Placeholder login: announces the feature and shows the wallet now.
    pub fn login(&mut self) {
        self.notify(MSG_LOGIN, Severity::Info);
        if let Some(h) = self.wallet_timer.take() {
            self.scheduler.cancel(h);
        }
        self.show_wallet();
    }

    /// Flip private key visibility. No-op until the wallet is shown.
    pub fn toggle_private_key(&mut self) -> bool {
        if !self.wallet_shown {
            return false;
        }
        self.private_key_revealed = !self.private_key_revealed;
        self.presenter.present(&QuizEvent::PrivateKeyToggled {
            revealed: self.private_key_revealed,
        });
        true
    }

    /// Back to a fresh session, as if the page had been reloaded.
    ///
    /// Every pending task is cancelled first so nothing scheduled against the
    /// old session can fire against the new one.
    pub fn restart(&mut self) {
        let cancelled = self.scheduler.cancel_all();
        debug!(cancelled, "restart");
        self.advance_timer = None;
        self.wallet_timer = None;

        let ids: Vec<u64> = self.notifications.iter().map(|t| t.id).collect();
        self.notifications.clear();
        for id in ids {
            self.presenter.present(&QuizEvent::NotificationRemoved(id));
        }

        if self.help_prompt_open {
            self.close_help_prompt();
        }
        if self.wallet_shown {
            self.wallet_shown = false;
            self.private_key_revealed = false;
            self.presenter.present(&QuizEvent::WalletHidden);
        }

        self.state.reset();
        self.boot();
    }

    /// Cancel everything still scheduled. Returns how many tasks were dropped.
    pub fn shutdown(&mut self) -> usize {
        self.advance_timer = None;
        self.wallet_timer = None;
        self.scheduler.cancel_all()
    }

    /// Advance time and run whatever became due, including follow-ups that
    /// fall due within the same step.
    pub fn tick(&mut self, elapsed_ms: u32) {
        self.scheduler.advance(elapsed_ms);
        while let Some(fired) = self.scheduler.pop_due() {
            self.firing_at = Some(fired.due_ms);
            self.run_task(fired.task);
        }
        self.firing_at = None;
    }

    fn schedule(&mut self, delay_ms: u32, task: Task) -> TimerHandle {
        match self.firing_at {
            Some(due_ms) => self.scheduler.schedule_at(due_ms + delay_ms as u64, task),
            None => self.scheduler.schedule(delay_ms, task),
        }
    }

    fn boot(&mut self) {
        self.load_board();
        self.presenter
            .present(&QuizEvent::ScoreChanged(self.state.score()));
        self.wallet_timer = Some(self.schedule(self.config.startup_delay_ms, Task::RevealWallet));
    }

    fn load_board(&mut self) {
        let level = self.state.level();
        self.presenter.present(&QuizEvent::LevelLoaded {
            level,
            label: level_label(level),
            image_ref: image_ref(level),
            image_alt: image_alt(level),
        });
        self.presenter.present(&QuizEvent::GuessCleared);
    }

    fn run_task(&mut self, task: Task) {
        match task {
            Task::RevealWallet => {
                self.wallet_timer = None;
                self.show_wallet();
            }
            Task::Advance { level } => {
                self.advance_timer = None;
                if self.state.phase() != Phase::Resolved || self.state.level() != level {
                    warn!(level, current = self.state.level(), "dropping stale advance");
                    return;
                }
                match self.state.advance() {
                    Ok(AdvanceOutcome::NextLevel(_)) => self.load_board(),
                    Ok(AdvanceOutcome::Completed) => {
                        self.notify(MSG_CONGRATS, Severity::Success);
                        self.presenter.present(&QuizEvent::GameCompleted {
                            score: self.state.score(),
                        });
                    }
                    Err(e) => warn!(error = %e, "advance rejected"),
                }
            }
            Task::ExpireNotification { id } => {
                if self.notifications.begin_exit(id) {
                    self.presenter.present(&QuizEvent::NotificationLeaving(id));
                    self.schedule(
                        self.config.notification_exit_ms,
                        Task::RemoveNotification { id },
                    );
                }
            }
            Task::RemoveNotification { id } => {
                if self.notifications.remove(id) {
                    self.presenter.present(&QuizEvent::NotificationRemoved(id));
                }
            }
        }
    }

    fn show_wallet(&mut self) {
        self.wallet_shown = true;
        self.presenter.present(&QuizEvent::WalletShown {
            address: DEMO_WALLET.address,
            private_key: DEMO_WALLET.private_key,
        });
    }

    fn close_help_prompt(&mut self) {
        self.help_prompt_open = false;
        self.presenter.present(&QuizEvent::HelpPromptClosed);
    }

    fn notify(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        let message = message.into();
        let (id, evicted) = self.notifications.push(message.clone(), severity);
        debug!(id, severity = severity.as_str(), %message, "notify");
        if let Some(old) = evicted {
            self.presenter.present(&QuizEvent::NotificationRemoved(old));
        }
        self.presenter.present(&QuizEvent::Notify {
            id,
            message,
            severity,
        });
        self.schedule(
            self.config.notification_visible_ms,
            Task::ExpireNotification { id },
        );
        id
    }

    fn reject(&mut self, err: QuizError) {
        debug!(error = %err, "input rejected");
        match err {
            QuizError::MissingGuess | QuizError::HelpAlreadyUsed => {
                self.notify(err.to_string(), Severity::Error);
            }
            QuizError::NotPlaying {
                phase: Phase::Resolved,
            } => {
                self.notify(MSG_RESOLVED, Severity::Info);
            }
            QuizError::NotPlaying {
                phase: Phase::Completed,
            } => {
                self.notify(MSG_COMPLETED, Severity::Info);
            }
            QuizError::NotPlaying {
                phase: Phase::AwaitingGuess,
            }
            | QuizError::NothingToAdvance { .. } => {
                warn!(error = %err, "unexpected rejection");
            }
        }
    }
}

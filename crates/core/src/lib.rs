//! Core quiz logic - pure, deterministic, and testable
//!
//! This crate contains the level-progression state machine, the static trader
//! tables, the delayed-task scheduler and the display projections. It has
//! **no dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: time only moves when the scheduler is ticked
//! - **Testable**: every transition is a plain method call
//! - **Portable**: any front-end can drive it through the engine's `Presenter`
//!
//! # Module Structure
//!
//! - [`content`]: trader levels, leaderboard and the demo wallet
//! - [`game_state`]: the guess/help/advance state machine
//! - [`scheduler`]: one-shot delayed tasks with cancellation handles
//! - [`notify`]: transient toast bookkeeping
//! - [`display`]: pure string projections (labels, image refs, leaderboard rows)
//! - [`snapshot`]: plain copy of the state for renderers
//!
//! # Game Rules
//!
//! - A correct guess (case-insensitive, surrounding whitespace ignored) is
//!   worth 100 points and resolves the level
//! - A resolved level advances automatically after 2500ms
//! - Help reveals the level hint, once per level
//! - Answering the last level completes the game
//!
//! # Example
//!
//! ```
//! use trader_quiz_core::{GuessOutcome, QuizState};
//!
//! let mut quiz = QuizState::default();
//! assert_eq!(quiz.submit_guess("cryptoqueen").unwrap(), GuessOutcome::Wrong);
//! assert_eq!(
//!     quiz.submit_guess(" cryptoking ").unwrap(),
//!     GuessOutcome::Correct { name: "CryptoKing" }
//! );
//! assert_eq!(quiz.score(), 100);
//!
//! quiz.advance().unwrap();
//! assert_eq!(quiz.level(), 2);
//! ```

pub mod content;
pub mod display;
pub mod error;
pub mod game_state;
pub mod notify;
pub mod scheduler;
pub mod snapshot;

pub use trader_quiz_types as types;

// Re-export commonly used types for convenience
pub use content::{level_data, LeaderboardEntry, LevelData, Wallet, DEMO_WALLET, LEADERBOARD, LEVELS};
pub use display::{leaderboard_rows, LeaderboardRow, RankMarker};
pub use error::QuizError;
pub use game_state::{normalize_guess, AdvanceOutcome, GuessOutcome, QuizState};
pub use notify::{Notifications, Toast, ToastPhase};
pub use scheduler::{Fired, Scheduler, Task, TimerHandle};
pub use snapshot::QuizSnapshot;

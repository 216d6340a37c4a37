//! Quiz engine: the controller that owns the session.
//!
//! [`Quiz`] holds the one [`QuizState`](trader_quiz_core::QuizState), the
//! scheduler and the notification list. Front-ends feed it commands and ticks
//! and observe it through a [`Presenter`].
//!
//! ```
//! use trader_quiz_engine::{Quiz, QuizConfig, RecordingPresenter};
//!
//! let mut quiz = Quiz::new(QuizConfig::default(), RecordingPresenter::new());
//! quiz.submit_guess("CryptoKing").unwrap();
//! quiz.tick(2500);
//! assert_eq!(quiz.state().level(), 2);
//! ```

pub mod controller;
pub mod presenter;

pub use trader_quiz_core as core;
pub use trader_quiz_types as types;

pub use controller::{Quiz, QuizConfig};
pub use presenter::{Presenter, QuizEvent, RecordingPresenter};

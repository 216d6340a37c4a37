//! Trader Quiz (workspace facade crate).
//!
//! Re-exports the workspace crates as `trader_quiz::{core,engine,input,term,types}`
//! and hosts the binary's configuration and logging setup.

pub mod config;
pub mod logging;

pub use trader_quiz_core as core;
pub use trader_quiz_engine as engine;
pub use trader_quiz_input as input;
pub use trader_quiz_term as term;
pub use trader_quiz_types as types;

pub use config::{Config, ConfigError};

//! Runtime configuration.
//!
//! Settings come from built-in defaults, then an optional TOML file named by
//! `QUIZ_CONFIG`, then individual environment variables:
//!
//! - `QUIZ_MAX_LEVEL`: highest level (default: 500)
//! - `QUIZ_ADVANCE_DELAY_MS`: delay before the next level (default: 2500)
//! - `QUIZ_STARTUP_DELAY_MS`: delay before the wallet appears (default: 1000)
//! - `QUIZ_LOG`: tracing filter directive (default: "info")
//! - `QUIZ_LOG_FILE`: log file path (default: `trader-quiz.log` in the temp dir)
//!
//! ```toml
//! max_level = 5
//! advance_delay_ms = 1500
//! log_level = "trader_quiz_engine=debug"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::engine::QuizConfig;
use crate::types::{
    ADVANCE_DELAY_MS, MAX_LEVEL, NOTIFICATION_EXIT_MS, NOTIFICATION_VISIBLE_MS, STARTUP_DELAY_MS,
};

pub const ENV_CONFIG: &str = "QUIZ_CONFIG";
pub const ENV_MAX_LEVEL: &str = "QUIZ_MAX_LEVEL";
pub const ENV_ADVANCE_DELAY_MS: &str = "QUIZ_ADVANCE_DELAY_MS";
pub const ENV_STARTUP_DELAY_MS: &str = "QUIZ_STARTUP_DELAY_MS";
pub const ENV_LOG: &str = "QUIZ_LOG";
pub const ENV_LOG_FILE: &str = "QUIZ_LOG_FILE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {name}: {value:?}")]
    InvalidEnv { name: &'static str, value: String },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub max_level: u32,
    pub advance_delay_ms: u32,
    pub startup_delay_ms: u32,
    pub notification_visible_ms: u32,
    pub notification_exit_ms: u32,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_level: MAX_LEVEL,
            advance_delay_ms: ADVANCE_DELAY_MS,
            startup_delay_ms: STARTUP_DELAY_MS,
            notification_visible_ms: NOTIFICATION_VISIBLE_MS,
            notification_exit_ms: NOTIFICATION_EXIT_MS,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl Config {
    /// Load from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|name| std::env::var(name).ok())
    }

    /// Load using `env` as the variable lookup.
    ///
    /// Validation runs once, after environment overrides, so an env value
    /// can repair a bad file value.
    pub fn load_with(env: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match env(ENV_CONFIG) {
            Some(path) if !path.trim().is_empty() => Self::read_file(Path::new(path.trim()))?,
            _ => Self::default(),
        };
        config.apply_env(&env)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::read_file(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&text)?)
    }

    fn apply_env(&mut self, env: &impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(v) = parse_env_u32(env, ENV_MAX_LEVEL)? {
            self.max_level = v;
        }
        if let Some(v) = parse_env_u32(env, ENV_ADVANCE_DELAY_MS)? {
            self.advance_delay_ms = v;
        }
        if let Some(v) = parse_env_u32(env, ENV_STARTUP_DELAY_MS)? {
            self.startup_delay_ms = v;
        }
        if let Some(v) = env(ENV_LOG).filter(|v| !v.trim().is_empty()) {
            self.log_level = v.trim().to_string();
        }
        if let Some(v) = env(ENV_LOG_FILE).filter(|v| !v.trim().is_empty()) {
            self.log_file = Some(PathBuf::from(v.trim()));
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_level == 0 {
            return Err(ConfigError::Invalid("max_level must be at least 1".into()));
        }
        Ok(())
    }

    /// Where log lines go.
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("trader-quiz.log"))
    }

    pub fn quiz_config(&self) -> QuizConfig {
        QuizConfig {
            max_level: self.max_level,
            advance_delay_ms: self.advance_delay_ms,
            startup_delay_ms: self.startup_delay_ms,
            notification_visible_ms: self.notification_visible_ms,
            notification_exit_ms: self.notification_exit_ms,
        }
    }
}

fn parse_env_u32(
    env: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<u32>, ConfigError> {
    match env(name) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv { name, value: raw }),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = Config::load_with(env_of(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.quiz_config(), QuizConfig::default());
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = Config::load_with(env_of(&[
            (ENV_MAX_LEVEL, "5"),
            (ENV_ADVANCE_DELAY_MS, " 100 "),
            (ENV_LOG, "debug"),
        ]))
        .unwrap();
        assert_eq!(config.max_level, 5);
        assert_eq!(config.advance_delay_ms, 100);
        assert_eq!(config.startup_delay_ms, STARTUP_DELAY_MS);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn bad_numbers_are_reported() {
        let err = Config::load_with(env_of(&[(ENV_MAX_LEVEL, "lots")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnv {
                name: ENV_MAX_LEVEL,
                ..
            }
        ));
    }

    #[test]
    fn zero_max_level_is_invalid() {
        let err = Config::load_with(env_of(&[(ENV_MAX_LEVEL, "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn toml_fills_missing_fields_with_defaults() {
        let config = Config::from_toml_str("max_level = 5\nlog_level = \"warn\"\n").unwrap();
        assert_eq!(config.max_level, 5);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.advance_delay_ms, ADVANCE_DELAY_MS);
    }

    #[test]
    fn toml_rejects_unknown_keys() {
        assert!(matches!(
            Config::from_toml_str("max_levels = 5"),
            Err(ConfigError::Parse(_))
        ));
    }
}

use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_DATABASE_PATH: &str = "db.sqlite";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a boolean (true/false/1/0), got {value:?}")]
    InvalidBool { name: &'static str, value: String },

    #[error("{name} must not be empty")]
    Empty { name: &'static str },
}

/// Runtime settings. The bot token itself is read by teloxide from
/// `TELOXIDE_TOKEN`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// SQLite file holding dialogue state.
    pub database_path: PathBuf,
    /// Shuffle answer options before showing a question.
    pub shuffle_options: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            shuffle_options: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("QUIZ_BOT_DB") {
            if path.trim().is_empty() {
                return Err(ConfigError::Empty {
                    name: "QUIZ_BOT_DB",
                });
            }
            config.database_path = PathBuf::from(path.trim());
        }

        if let Some(value) = lookup("QUIZ_BOT_SHUFFLE_OPTIONS") {
            config.shuffle_options = parse_bool("QUIZ_BOT_SHUFFLE_OPTIONS", &value)?;
        }

        Ok(config)
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            name,
            value: value.to_string(),
        }),
    }
}

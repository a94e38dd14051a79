//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};
use versus_core::{
    DEFAULT_BOT_NAME, DEFAULT_PLAYER_NAME, DEFAULT_THINKING_DELAY, Difficulty, PlayerRegistry,
    SessionConfig,
};

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "versus.toml";

/// Settings for a Versus game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct VersusConfig {
    /// Bot difficulty.
    #[serde(default)]
    difficulty: Difficulty,

    /// Milliseconds the bot pretends to think.
    #[serde(default = "default_thinking_delay_ms")]
    thinking_delay_ms: u64,

    /// Display name for the human (X).
    #[serde(default = "default_player_name")]
    player_name: String,

    /// Display name for the bot (O).
    #[serde(default = "default_bot_name")]
    bot_name: String,

    /// Where the terminal UI writes its logs.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Seed for reproducible games.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_thinking_delay_ms() -> u64 {
    DEFAULT_THINKING_DELAY.as_millis() as u64
}

fn default_player_name() -> String {
    DEFAULT_PLAYER_NAME.to_string()
}

fn default_bot_name() -> String {
    DEFAULT_BOT_NAME.to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("versus.log")
}

impl Default for VersusConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            thinking_delay_ms: default_thinking_delay_ms(),
            player_name: default_player_name(),
            bot_name: default_bot_name(),
            log_file: default_log_file(),
            seed: None,
        }
    }
}

impl VersusConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_PATH`] if it exists, else
    /// defaults.
    ///
    /// An explicit path that cannot be read is an error.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_PATH);
                if default.exists() {
                    Self::from_file(default)
                } else {
                    debug!("No config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn apply_overrides(
        &mut self,
        difficulty: Option<Difficulty>,
        thinking_delay_ms: Option<u64>,
        seed: Option<u64>,
    ) {
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty;
        }
        if let Some(delay) = thinking_delay_ms {
            self.thinking_delay_ms = delay;
        }
        if seed.is_some() {
            self.seed = seed;
        }
    }

    /// Session settings derived from this config.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            difficulty: self.difficulty,
            thinking_delay: Duration::from_millis(self.thinking_delay_ms),
            seed: self.seed,
        }
    }

    /// Initial player names.
    pub fn players(&self) -> PlayerRegistry {
        PlayerRegistry::new(self.player_name.as_str(), self.bot_name.as_str())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

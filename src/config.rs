use std::path::{Path, PathBuf};

use tracing::warn;

use crate::ai::{OpponentConfig, Strategy};
use crate::error::ConfigError;
use crate::game::GameConfig;

/// Terminal front end settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Pause before the computer's move is shown, in milliseconds.
    pub computer_delay_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            computer_delay_ms: 500,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log output goes to this file so it does not corrupt the terminal UI.
    pub file: PathBuf,
    /// `EnvFilter` directive; `RUST_LOG` takes precedence.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            file: PathBuf::from("connect_four.log"),
            filter: "info".to_string(),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub opponent: OpponentConfig,
    pub ui: UiConfig,
    pub logging: LogConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.game.validate()?;

        if self.opponent.strategy == Strategy::Negamax && self.opponent.depth == 0 {
            return Err(ConfigError::Validation(
                "opponent.depth must be >= 1".into(),
            ));
        }
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.filter must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}

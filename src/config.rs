use std::path::Path;

use crate::board::Side;
use crate::engine::DEFAULT_DEPTH;
use crate::error::ConfigError;

/// Default config file looked up by the binaries
pub const DEFAULT_CONFIG_PATH: &str = "mancala.toml";

/// Deepest search accepted from configuration
pub const MAX_CONFIG_DEPTH: u8 = 12;

/// Who opens the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    Human,
    Computer,
}

/// Computer player settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Search depth in plies
    pub depth: u8,
    /// Minimum pause before the computer's move is shown, in milliseconds
    pub move_delay_ms: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            depth: DEFAULT_DEPTH,
            move_delay_ms: 500,
        }
    }
}

/// Match settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub first_player: FirstPlayer,
    /// Side the human plays; the computer takes the other one
    pub human_side: Side,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            first_player: FirstPlayer::Human,
            human_side: Side::North,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ai: AiConfig,
    pub game: GameConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ai.depth == 0 || self.ai.depth > MAX_CONFIG_DEPTH {
            return Err(ConfigError::Validation(format!(
                "ai.depth must be in 1..={MAX_CONFIG_DEPTH}"
            )));
        }
        if self.ai.move_delay_ms > 10_000 {
            return Err(ConfigError::Validation(
                "ai.move_delay_ms must be <= 10000".into(),
            ));
        }
        Ok(())
    }

    /// Side the computer plays
    #[inline]
    pub fn computer_side(&self) -> Side {
        self.game.human_side.opponent()
    }
}

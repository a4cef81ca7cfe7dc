//! Rules configuration: the tunable numbers behind every command.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a rules configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read rules file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse rules: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid rules: {0}")]
    Invalid(String),
}

/// Numbers that drive stamina and knowledge changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Upper stamina bound.
    pub max_stamina: u32,

    /// Stamina at the start of a session.
    pub starting_stamina: u32,

    /// Stamina spent searching for the coffee mug.
    pub coffee_mug_cost: u32,

    /// Stamina spent on one study session.
    pub study_cost: u32,

    /// Knowledge gained from one study session.
    pub study_knowledge_gain: u32,

    /// Most stamina a single rest can restore.
    pub rest_gain: u32,

    /// Below this, `status` warns the player.
    pub tired_threshold: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_stamina: 100,
            starting_stamina: 100,
            coffee_mug_cost: 10,
            study_cost: 15,
            study_knowledge_gain: 20,
            rest_gain: 30,
            tired_threshold: 20,
        }
    }
}

impl RulesConfig {
    /// Parse and validate rules from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: RulesConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read rules from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Check the bounds the interpreter relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_stamina == 0 {
            return Err(ConfigError::Invalid("max_stamina must be positive".into()));
        }
        if self.starting_stamina > self.max_stamina {
            return Err(ConfigError::Invalid(format!(
                "starting_stamina {} exceeds max_stamina {}",
                self.starting_stamina, self.max_stamina
            )));
        }
        Ok(())
    }
}

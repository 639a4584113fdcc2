//! Rules configuration.
//!
//! Bonus amounts and the opening re-roll allowance are data rather than constants so a
//! solver can evaluate house-rule variants. Every field has a default, so an empty YAML
//! document yields the standard rules.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::state::{DEFAULT_REROLLS, MAX_REROLLS, UPPER_BONUS_THRESHOLD};

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid rules: {0}")]
    Invalid(String),
}

/// Scoring bonuses and turn allowances.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RulesConfig {
    /// Cumulative upper-section total that earns the upper bonus.
    #[serde(default = "default_upper_bonus_threshold")]
    pub upper_bonus_threshold: u32,
    /// Flat upper-section bonus.
    #[serde(default = "default_upper_bonus")]
    pub upper_bonus: u32,
    /// Flat bonus for each Yahtzee scored after a positive one.
    #[serde(default = "default_yahtzee_bonus")]
    pub yahtzee_bonus: u32,
    /// Re-rolls granted to a fresh state.
    #[serde(default = "default_initial_rerolls")]
    pub initial_rerolls: u8,
}

fn default_upper_bonus_threshold() -> u32 {
    UPPER_BONUS_THRESHOLD
}

fn default_upper_bonus() -> u32 {
    35
}

fn default_yahtzee_bonus() -> u32 {
    100
}

fn default_initial_rerolls() -> u8 {
    DEFAULT_REROLLS
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            upper_bonus_threshold: default_upper_bonus_threshold(),
            upper_bonus: default_upper_bonus(),
            yahtzee_bonus: default_yahtzee_bonus(),
            initial_rerolls: default_initial_rerolls(),
        }
    }
}

impl RulesConfig {
    /// Load and validate rules from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse and validate rules from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let rules: RulesConfig = serde_yaml::from_str(yaml)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_rerolls > MAX_REROLLS {
            return Err(ConfigError::Invalid(format!(
                "initial_rerolls must be in 0..={}, got {}",
                MAX_REROLLS, self.initial_rerolls
            )));
        }
        if self.upper_bonus_threshold == 0 {
            return Err(ConfigError::Invalid(
                "upper_bonus_threshold must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

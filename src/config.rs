// Configuration module for reading Snake.toml
// Selects which personality plays and how its strategies are weighted

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::scorecard::Score;

/// Main configuration structure containing all tunable parameters
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub snake: SnakeConfig,
    pub weights: WeightsConfig,
    pub debug: DebugConfig,
}

/// Which personality to run and who owns it
#[derive(Debug, Deserialize, Clone)]
pub struct SnakeConfig {
    pub personality: String,
    pub author: String,
}

/// Strategy weights, grouped by the personality that uses them
#[derive(Debug, Deserialize, Clone)]
pub struct WeightsConfig {
    pub hungry: HungryWeights,
    pub solo: SoloWeights,
    pub battle: BattleWeights,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HungryWeights {
    pub closest_food: Score,
    pub center: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SoloWeights {
    pub walls: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BattleWeights {
    pub food: f64,
    pub avoid_bigger: f64,
    pub space: f64,
    pub attack_smaller: f64,
}

/// Debug configuration
#[derive(Debug, Deserialize, Clone)]
pub struct DebugConfig {
    pub enabled: bool,
    pub log_file_path: String,
}

impl Config {
    /// Loads configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the Snake.toml configuration file
    ///
    /// # Returns
    /// * `Result<Config, String>` - Parsed configuration or error message
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        Self::from_toml(&contents)
    }

    /// Parses configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Loads default configuration from Snake.toml in the project root
    pub fn load_default() -> Result<Self, String> {
        Self::from_file("Snake.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback
    /// This should match the constants defined in Snake.toml
    pub fn default_hardcoded() -> Self {
        Config {
            snake: SnakeConfig {
                personality: "battle".to_string(),
                author: "nickwallen".to_string(),
            },
            weights: WeightsConfig {
                hungry: HungryWeights {
                    closest_food: 20,
                    center: 10.0,
                },
                solo: SoloWeights { walls: 2.0 },
                battle: BattleWeights {
                    food: 0.7,
                    avoid_bigger: 1.8,
                    space: 3.0,
                    attack_smaller: 1.2,
                },
            },
            debug: DebugConfig {
                enabled: false,
                log_file_path: "battlesnake_debug.jsonl".to_string(),
            },
        }
    }

    /// Attempts to load from file, falls back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            log::warn!("Could not load Snake.toml ({}), using hardcoded defaults", e);
            Self::default_hardcoded()
        })
    }
}

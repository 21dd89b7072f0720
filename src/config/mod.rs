use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::models::WeightUnit;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub profile: ProfileConfig,

    #[serde(default)]
    pub units: UnitsConfig,

    #[serde(default)]
    pub workout: WorkoutConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

/// The user behind the log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default)]
    pub email: Option<String>,

    /// Goal body weight, stored in pounds like every other weight
    #[serde(default)]
    pub target_weight_lbs: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitsConfig {
    #[serde(default = "default_weight_unit")]
    pub weight: WeightUnit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutConfig {
    #[serde(default = "default_true")]
    pub rest_timer_enabled: bool,

    #[serde(default = "default_rest_seconds")]
    pub default_rest_seconds: u32,

    /// Weekly session target used for the progress ratio
    #[serde(default = "default_sessions_per_week")]
    pub sessions_per_week: u32,

    /// Minimum reps for a set to qualify as a personal record
    #[serde(default = "default_pr_min_reps")]
    pub pr_min_reps: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

// Default value functions
fn default_name() -> String {
    "Champion".to_string()
}

fn default_weight_unit() -> WeightUnit {
    WeightUnit::Lbs
}

fn default_true() -> bool {
    true
}

fn default_rest_seconds() -> u32 {
    90
}

fn default_sessions_per_week() -> u32 {
    6
}

fn default_pr_min_reps() -> u32 {
    1
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            email: None,
            target_weight_lbs: None,
        }
    }
}

impl Default for UnitsConfig {
    fn default() -> Self {
        Self {
            weight: default_weight_unit(),
        }
    }
}

impl Default for WorkoutConfig {
    fn default() -> Self {
        Self {
            rest_timer_enabled: default_true(),
            default_rest_seconds: default_rest_seconds(),
            sessions_per_week: default_sessions_per_week(),
            pr_min_reps: default_pr_min_reps(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
        }
    }
}

impl Config {
    /// Get config directory path (~/.liftlog/)
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".liftlog"))
    }

    /// Get config file path (~/.liftlog/config.toml, or $LIFTLOG_CONFIG)
    pub fn config_file() -> Result<PathBuf> {
        if let Ok(path) = std::env::var("LIFTLOG_CONFIG") {
            return Ok(PathBuf::from(path));
        }

        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let config_file = Self::config_file()?;

        if !config_file.exists() {
            tracing::info!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_file).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_file = Self::config_file()?;
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_file, contents).context("Failed to write config file")?;

        Ok(())
    }

    pub fn weight_unit(&self) -> WeightUnit {
        self.units.weight
    }
}

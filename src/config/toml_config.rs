use crate::config::default_roster;
use crate::core::race::{RaceSettings, DEFAULT_TICKS, DEFAULT_TICK_DELAY};
use crate::domain::model::{Hippodrome, Horse};
use crate::utils::error::{HippodromeError, Result};
use crate::utils::validation::{validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const MAX_TICKS: u32 = 1_000_000;
pub const MAX_TICK_DELAY_MS: u64 = 60_000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RaceConfig {
    #[serde(default)]
    pub race: RaceSection,
    #[serde(default)]
    pub horses: Vec<HorseConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceSection {
    pub ticks: Option<u32>,
    pub tick_delay_ms: Option<u64>,
    pub seed: Option<u64>,
}

impl Default for RaceSection {
    fn default() -> Self {
        Self {
            ticks: Some(DEFAULT_TICKS),
            tick_delay_ms: Some(DEFAULT_TICK_DELAY.as_millis() as u64),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorseConfig {
    pub name: Option<String>,
    pub speed: f64,
    pub distance: Option<f64>,
}

impl RaceConfig {
    /// Load a race description from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(HippodromeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse a race description, expanding `${VAR}` placeholders first.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    // 替換環境變數 (例如 ${HORSE_NAME})；未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| HippodromeError::ConfigError {
            message: format!("invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn ticks(&self) -> u32 {
        self.race.ticks.unwrap_or(DEFAULT_TICKS)
    }

    pub fn tick_delay(&self) -> Duration {
        self.race
            .tick_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TICK_DELAY)
    }

    pub fn seed(&self) -> Option<u64> {
        self.race.seed
    }

    pub fn settings(&self) -> RaceSettings {
        RaceSettings {
            ticks: self.ticks(),
            tick_delay: self.tick_delay(),
        }
    }

    /// The configured horses, or the built-in roster when none are listed.
    pub fn roster(&self) -> Vec<HorseConfig> {
        if self.horses.is_empty() {
            default_roster()
        } else {
            self.horses.clone()
        }
    }

    pub fn build_horses(&self) -> Result<Vec<Horse>> {
        self.roster()
            .iter()
            .map(|h| Horse::with_distance(h.name.as_deref(), h.speed, h.distance.unwrap_or(0.0)))
            .collect()
    }

    pub fn hippodrome(&self) -> Result<Hippodrome> {
        Hippodrome::from_horses(self.build_horses()?)
    }
}

impl Validate for RaceConfig {
    fn validate(&self) -> Result<()> {
        if let Some(ticks) = self.race.ticks {
            validate_range("race.ticks", ticks, 1, MAX_TICKS)?;
        }
        if let Some(delay) = self.race.tick_delay_ms {
            validate_range("race.tick_delay_ms", delay, 0, MAX_TICK_DELAY_MS)?;
        }
        // horses carry their own invariants, so building them is the check
        self.build_horses().map(|_| ())
    }
}

use crate::config::RaceConfig;
use crate::utils::error::Result;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum OutputFormat {
    /// Draw the track on every tick and announce the winner
    #[default]
    Text,
    /// Run silently and print the race report as JSON
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "hippodrome")]
#[command(about = "Horse race simulation")]
pub struct CliConfig {
    /// Path to a TOML race file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the number of ticks
    #[arg(long)]
    pub ticks: Option<u32>,

    /// Override the pause between ticks, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Seed the random source for a reproducible race
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the race file (if any) and applies command-line overrides on top.
    pub fn resolve(&self) -> Result<RaceConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading race from: {}", path);
                RaceConfig::from_file(path)?
            }
            None => RaceConfig::default(),
        };

        // 應用命令列覆蓋設定
        if let Some(ticks) = self.ticks {
            config.race.ticks = Some(ticks);
            tracing::info!("🔧 Ticks overridden to: {}", ticks);
        }
        if let Some(delay) = self.delay_ms {
            config.race.tick_delay_ms = Some(delay);
            tracing::info!("🔧 Tick delay overridden to: {}ms", delay);
        }
        if self.seed.is_some() {
            config.race.seed = self.seed;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_defaults_without_flags() {
        let cli = CliConfig::parse_from(["hippodrome"]);
        assert_eq!(cli.format, OutputFormat::Text);

        let config = cli.resolve().unwrap();
        assert_eq!(config.ticks(), 100);
        assert_eq!(config.tick_delay(), Duration::from_millis(200));
        assert_eq!(config.roster().len(), 7);
    }

    #[test]
    fn test_flags_override_config() {
        let cli = CliConfig::parse_from([
            "hippodrome",
            "--ticks",
            "5",
            "--delay-ms",
            "0",
            "--seed",
            "9",
            "--format",
            "json",
        ]);
        assert_eq!(cli.format, OutputFormat::Json);

        let config = cli.resolve().unwrap();
        assert_eq!(config.ticks(), 5);
        assert_eq!(config.tick_delay(), Duration::ZERO);
        assert_eq!(config.seed(), Some(9));
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let cli = CliConfig::parse_from(["hippodrome", "-c", "/nonexistent/race.toml"]);
        let err = cli.resolve().unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}

#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub use toml_config::{HorseConfig, RaceConfig};

const DEFAULT_ROSTER: [(&str, f64); 7] = [
    ("Bucephalus", 2.4),
    ("Ace of Spades", 2.5),
    ("Zephyr", 2.6),
    ("Blaze", 2.7),
    ("Lobster", 2.8),
    ("Pegasus", 2.9),
    ("Cherry", 3.0),
];

/// The seven horses raced when no roster is configured.
pub fn default_roster() -> Vec<HorseConfig> {
    DEFAULT_ROSTER
        .iter()
        .map(|&(name, speed)| HorseConfig {
            name: Some(name.to_string()),
            speed,
            distance: None,
        })
        .collect()
}

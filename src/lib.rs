pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, OutputFormat};

pub use crate::core::race::{RaceEngine, RaceSettings};
pub use adapters::console::{ConsoleRenderer, SilentObserver};
pub use adapters::random::{RaceRandom, SeededRandom, ThreadRandom};
pub use config::RaceConfig;
pub use domain::model::{Hippodrome, Horse, HorseStanding, RaceReport, SharedHorse};
pub use domain::ports::{RaceObserver, RandomSource};
pub use utils::error::{HippodromeError, Result};

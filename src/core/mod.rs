pub mod race;

pub use crate::domain::model::{Hippodrome, Horse, RaceReport, SharedHorse};
pub use crate::domain::ports::{RaceObserver, RandomSource};
pub use crate::utils::error::Result;

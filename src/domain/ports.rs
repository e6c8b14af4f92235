use crate::domain::model::{Horse, SharedHorse};
use crate::utils::error::Result;

/// Source of the stride multiplier a horse applies on each advance.
pub trait RandomSource {
    /// Returns a value in the half-open range `[min, max)`.
    fn next_in(&mut self, min: f64, max: f64) -> f64;
}

/// Any `FnMut(min, max) -> f64` closure can stand in for a random source,
/// which keeps deterministic races a one-liner.
impl<F> RandomSource for F
where
    F: FnMut(f64, f64) -> f64,
{
    fn next_in(&mut self, min: f64, max: f64) -> f64 {
        self(min, max)
    }
}

pub trait RaceObserver {
    fn on_tick(&mut self, tick: u32, horses: &[SharedHorse]) -> Result<()>;
    fn on_finish(&mut self, winner: &Horse) -> Result<()>;
}

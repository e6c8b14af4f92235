use crate::core::{Hippodrome, RaceObserver, RaceReport, RandomSource, Result};
use crate::domain::model::HorseStanding;
use chrono::Utc;
use std::time::Duration;

pub const DEFAULT_TICKS: u32 = 100;
pub const DEFAULT_TICK_DELAY: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaceSettings {
    pub ticks: u32,
    pub tick_delay: Duration,
}

impl Default for RaceSettings {
    fn default() -> Self {
        Self {
            ticks: DEFAULT_TICKS,
            tick_delay: DEFAULT_TICK_DELAY,
        }
    }
}

pub struct RaceEngine<R: RandomSource, O: RaceObserver> {
    hippodrome: Hippodrome,
    source: R,
    observer: O,
    settings: RaceSettings,
}

impl<R: RandomSource, O: RaceObserver> RaceEngine<R, O> {
    pub fn new(hippodrome: Hippodrome, source: R, observer: O, settings: RaceSettings) -> Self {
        Self {
            hippodrome,
            source,
            observer,
            settings,
        }
    }

    pub fn hippodrome(&self) -> &Hippodrome {
        &self.hippodrome
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Runs the configured number of ticks, then picks the winner.
    pub async fn run(&mut self) -> Result<RaceReport> {
        let started_at = Utc::now();
        tracing::info!(
            "🏁 Race started: {} horses, {} ticks",
            self.hippodrome.horses().len(),
            self.settings.ticks
        );

        for tick in 1..=self.settings.ticks {
            self.hippodrome.advance_all(&mut self.source);
            self.observer.on_tick(tick, self.hippodrome.horses())?;
            tracing::debug!("Tick {}/{} complete", tick, self.settings.ticks);

            if !self.settings.tick_delay.is_zero() {
                tokio::time::sleep(self.settings.tick_delay).await;
            }
        }

        let winner = self.hippodrome.winner()?;
        let winner = winner.borrow();
        self.observer.on_finish(&winner)?;
        tracing::info!(
            "🏆 Race finished: winner {} at distance {:.2}",
            winner.name(),
            winner.distance()
        );

        Ok(RaceReport {
            ticks: self.settings.ticks,
            winner: HorseStanding::from(&*winner),
            standings: self.hippodrome.standings(),
            started_at,
            finished_at: Utc::now(),
        })
    }
}

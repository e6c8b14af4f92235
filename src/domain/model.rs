use crate::domain::ports::RandomSource;
use crate::utils::error::{HippodromeError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Lower bound (inclusive) of the per-tick stride multiplier.
pub const MIN_STRIDE_FACTOR: f64 = 0.2;
/// Upper bound (exclusive) of the per-tick stride multiplier.
pub const MAX_STRIDE_FACTOR: f64 = 0.9;

/// A horse shared between the caller and the [`Hippodrome`] running it.
pub type SharedHorse = Rc<RefCell<Horse>>;

#[derive(Debug, Clone, PartialEq)]
pub struct Horse {
    name: String,
    speed: f64,
    distance: f64,
}

impl Horse {
    /// Creates a horse standing at the start line.
    ///
    /// `name` accepts either a `&str` or an `Option<&str>`; `None` models a
    /// name that was never supplied.
    pub fn new<'a>(name: impl Into<Option<&'a str>>, speed: f64) -> Result<Self> {
        Self::with_distance(name, speed, 0.0)
    }

    pub fn with_distance<'a>(
        name: impl Into<Option<&'a str>>,
        speed: f64,
        distance: f64,
    ) -> Result<Self> {
        let name = name.into();
        Self::check(name, speed, distance)
            .inspect_err(|e| tracing::error!("❌ Rejected horse {:?}: {}", name, e))?;

        let horse = Self {
            name: name.unwrap_or_default().to_string(),
            speed,
            distance,
        };
        tracing::debug!(
            "Created horse name=[{}] speed=[{}] distance=[{}]",
            horse.name,
            horse.speed,
            horse.distance
        );
        Ok(horse)
    }

    fn check(name: Option<&str>, speed: f64, distance: f64) -> Result<()> {
        let name = name.ok_or(HippodromeError::NullName)?;
        if name.trim().is_empty() {
            return Err(HippodromeError::BlankName);
        }
        // negative first: -inf is a negative speed, only NaN and +inf are non-finite
        if speed < 0.0 {
            return Err(HippodromeError::NegativeSpeed);
        }
        if !speed.is_finite() {
            return Err(HippodromeError::NonFinite { field: "Speed" });
        }
        if distance < 0.0 {
            return Err(HippodromeError::NegativeDistance);
        }
        if !distance.is_finite() {
            return Err(HippodromeError::NonFinite { field: "Distance" });
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Moves the horse forward by `speed * factor`, where `factor` is drawn
    /// from `source` over `[MIN_STRIDE_FACTOR, MAX_STRIDE_FACTOR)`.
    pub fn advance<R: RandomSource + ?Sized>(&mut self, source: &mut R) {
        let factor = source.next_in(MIN_STRIDE_FACTOR, MAX_STRIDE_FACTOR);
        self.distance += self.speed * factor;
    }

    pub fn into_shared(self) -> SharedHorse {
        Rc::new(RefCell::new(self))
    }
}

#[derive(Debug, Clone)]
pub struct Hippodrome {
    horses: Vec<SharedHorse>,
}

impl Hippodrome {
    /// Builds a track over `horses`. `None` models a roster that was never
    /// supplied, as opposed to an empty one.
    pub fn new(horses: impl Into<Option<Vec<SharedHorse>>>) -> Result<Self> {
        let horses = match horses.into() {
            Some(horses) if horses.is_empty() => {
                tracing::error!("❌ Hippodrome roster is empty");
                return Err(HippodromeError::EmptyHorses);
            }
            Some(horses) => horses,
            None => {
                tracing::error!("❌ Hippodrome roster is missing");
                return Err(HippodromeError::NullHorses);
            }
        };

        tracing::debug!("Created hippodrome with {} horses", horses.len());
        Ok(Self { horses })
    }

    /// Wraps owned horses into shared handles and builds a track over them.
    pub fn from_horses(horses: impl IntoIterator<Item = Horse>) -> Result<Self> {
        Self::new(
            horses
                .into_iter()
                .map(Horse::into_shared)
                .collect::<Vec<_>>(),
        )
    }

    pub fn horses(&self) -> &[SharedHorse] {
        &self.horses
    }

    /// Advances every horse exactly once, in roster order.
    pub fn advance_all<R: RandomSource + ?Sized>(&self, source: &mut R) {
        for horse in &self.horses {
            horse.borrow_mut().advance(source);
        }
    }

    /// Returns the horse furthest down the track. Ties go to the horse that
    /// appears first in the roster.
    pub fn winner(&self) -> Result<SharedHorse> {
        let mut leader: Option<&SharedHorse> = None;
        for horse in &self.horses {
            let ahead = match leader {
                Some(current) => horse.borrow().distance() > current.borrow().distance(),
                None => true,
            };
            if ahead {
                leader = Some(horse);
            }
        }
        leader.cloned().ok_or(HippodromeError::EmptyHorses)
    }

    /// Snapshot of every horse ordered by distance, furthest first.
    pub fn standings(&self) -> Vec<HorseStanding> {
        let mut standings: Vec<HorseStanding> = self
            .horses
            .iter()
            .map(|horse| HorseStanding::from(&*horse.borrow()))
            .collect();
        // sort_by is stable, so equal distances keep roster order
        standings.sort_by(|a, b| b.distance.total_cmp(&a.distance));
        standings
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorseStanding {
    pub name: String,
    pub speed: f64,
    pub distance: f64,
}

impl From<&Horse> for HorseStanding {
    fn from(horse: &Horse) -> Self {
        Self {
            name: horse.name().to_string(),
            speed: horse.speed(),
            distance: horse.distance(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceReport {
    pub ticks: u32,
    pub winner: HorseStanding,
    pub standings: Vec<HorseStanding>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

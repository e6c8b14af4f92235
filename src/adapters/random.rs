use crate::domain::ports::RandomSource;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Draws from the thread-local generator; the default for real races.
#[derive(Debug, Clone, Default)]
pub struct ThreadRandom {
    rng: ThreadRng,
}

impl ThreadRandom {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl RandomSource for ThreadRandom {
    fn next_in(&mut self, min: f64, max: f64) -> f64 {
        sample(&mut self.rng, min, max)
    }
}

/// Reproducible source: the same seed replays the same race.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn next_in(&mut self, min: f64, max: f64) -> f64 {
        sample(&mut self.rng, min, max)
    }
}

/// Source picked at startup from the race configuration.
#[derive(Debug, Clone)]
pub enum RaceRandom {
    Thread(ThreadRandom),
    Seeded(SeededRandom),
}

impl RaceRandom {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => {
                tracing::info!("🎲 Using seeded random source (seed={})", seed);
                RaceRandom::Seeded(SeededRandom::new(seed))
            }
            None => RaceRandom::Thread(ThreadRandom::new()),
        }
    }
}

impl RandomSource for RaceRandom {
    fn next_in(&mut self, min: f64, max: f64) -> f64 {
        match self {
            RaceRandom::Thread(source) => source.next_in(min, max),
            RaceRandom::Seeded(source) => source.next_in(min, max),
        }
    }
}

// random_range panics on an empty range
fn sample<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    if min < max {
        rng.random_range(min..max)
    } else {
        min
    }
}

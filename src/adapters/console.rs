use crate::domain::model::{Horse, SharedHorse};
use crate::domain::ports::RaceObserver;
use crate::utils::error::Result;
use std::io::{self, Write};

const BLANK_LINES_AFTER_TICK: usize = 10;

/// One row of the track: a dot per whole unit of distance, then the name.
pub fn render_horse(horse: &Horse) -> String {
    let dots = horse.distance().floor() as usize;
    format!("{}{}", ".".repeat(dots), horse.name())
}

/// Draws the track after every tick and announces the winner.
pub struct ConsoleRenderer<W: Write> {
    out: W,
}

impl ConsoleRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RaceObserver for ConsoleRenderer<W> {
    fn on_tick(&mut self, _tick: u32, horses: &[SharedHorse]) -> Result<()> {
        for horse in horses {
            writeln!(self.out, "{}", render_horse(&horse.borrow()))?;
        }
        for _ in 0..BLANK_LINES_AFTER_TICK {
            writeln!(self.out)?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn on_finish(&mut self, winner: &Horse) -> Result<()> {
        writeln!(self.out, "The winner is {}!", winner.name())?;
        self.out.flush()?;
        Ok(())
    }
}

/// Observer for headless runs such as `--format json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl RaceObserver for SilentObserver {
    fn on_tick(&mut self, tick: u32, _horses: &[SharedHorse]) -> Result<()> {
        tracing::trace!("Tick {} complete", tick);
        Ok(())
    }

    fn on_finish(&mut self, _winner: &Horse) -> Result<()> {
        Ok(())
    }
}

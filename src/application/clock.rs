use crate::error::{Error, Result};
use std::time::Duration;

/// TickClock turns frame durations into whole simulation ticks.
///
/// Time is accumulated as an integer [`Duration`] and ticks are derived by
/// integer division, so no tick is ever lost or counted twice no matter how
/// the elapsed time is sliced into frames.
#[derive(Clone, Debug)]
pub struct TickClock {
    interval: Duration,
    elapsed: Duration,
    observed: u64,
    running: bool,
}

impl TickClock {
    /// A stopped clock with the given tick period.
    pub fn new(interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(Error::invalid_config("tick interval must be non-zero"));
        }
        Ok(Self {
            interval,
            elapsed: Duration::ZERO,
            observed: 0,
            running: false,
        })
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// True between `start()` and `reset()`/`stop()`.
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Wall time accumulated since `start()`.
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Begin counting from zero elapsed time. No effect if already running.
    pub fn start(&mut self) {
        if !self.running {
            self.elapsed = Duration::ZERO;
            self.observed = 0;
            self.running = true;
        }
    }

    /// Halt and zero the clock.
    pub fn reset(&mut self) {
        self.running = false;
        self.elapsed = Duration::ZERO;
        self.observed = 0;
    }

    /// Same as [`reset`](Self::reset).
    pub fn stop(&mut self) {
        self.reset();
    }

    /// Feed one frame's worth of wall time. Ignored while stopped.
    pub fn advance(&mut self, frame: Duration) {
        if self.running {
            self.elapsed += frame;
        }
    }

    /// Whole intervals since `start()`; zero before the clock has started.
    pub fn poll(&self) -> u64 {
        (self.elapsed.as_nanos() / self.interval.as_nanos()) as u64
    }

    /// Ticks that arrived since the previous call.
    pub fn take_new_ticks(&mut self) -> u64 {
        let total = self.poll();
        let fresh = total - self.observed;
        self.observed = total;
        fresh
    }

    /// Fraction of the current interval already elapsed, in [0, 1).
    pub fn phase(&self) -> f32 {
        let into = self.elapsed.as_nanos() % self.interval.as_nanos();
        into as f32 / self.interval.as_nanos() as f32
    }
}

use std::thread;
use std::time::{Duration, Instant};

/// Caps the loop at a fixed tick rate.
///
/// Only an upper bound: a frame that overruns its slot starts the next one
/// immediately and lost time is never made up.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    period: Duration,
    last_tick: Instant,
}

impl FrameClock {
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self::starting_at(period, Instant::now())
    }

    #[must_use]
    pub fn starting_at(period: Duration, last_tick: Instant) -> Self {
        Self { period, last_tick }
    }

    /// Time left in the current frame slot as seen from `now`.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        (self.last_tick + self.period).saturating_duration_since(now)
    }

    /// Sleeps out the rest of the current slot and starts the next one.
    pub fn wait(&mut self) {
        let remaining = self.remaining(Instant::now());
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
        self.last_tick = Instant::now();
    }
}

//! Converts a continuous emission rate into whole particles per tick

/// Slack for fractional sums that land a hair under 1 (10/60 six times, say)
const SPAWN_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq)]
pub struct EmissionScheduler {
    rate: f64,
    ticks_per_second: f64,
    max_live: usize,
    counter: f64,
}

impl EmissionScheduler {
    pub fn new(rate: f64, ticks_per_second: f64, max_live: usize) -> Self {
        Self {
            rate,
            ticks_per_second,
            max_live,
            counter: 0.0,
        }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn set_rate(&mut self, rate: f64) {
        self.rate = rate;
    }

    pub fn max_live(&self) -> usize {
        self.max_live
    }

    /// Emission owed but not yet spawned
    pub fn pending(&self) -> f64 {
        self.counter
    }

    /// Advance one tick and return how many particles to spawn.
    ///
    /// Spawning stops at `max_live`; the counter keeps accumulating so the
    /// backlog is spawned once capacity frees up.
    pub fn tick(&mut self, live_count: usize) -> usize {
        self.counter += self.rate / self.ticks_per_second;

        let mut spawned = 0;
        while self.counter >= 1.0 - SPAWN_EPSILON && live_count + spawned < self.max_live {
            self.counter -= 1.0;
            spawned += 1;
        }
        spawned
    }

    /// Drop any carried-over emission
    pub fn reset(&mut self) {
        self.counter = 0.0;
    }
}

use std::time::{Duration, Instant};

use tracing::debug;

/// Wall clock timer for a named phase, reported through `tracing`.
pub struct Stopwatch {
    phase: &'static str,
    started: Instant,
}

impl Stopwatch {
    pub fn new(phase: &'static str) -> Self {
        Stopwatch {
            phase,
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn report(&self) {
        debug!(phase = self.phase, elapsed = ?self.elapsed(), "[{}] done", self.phase);
    }
}

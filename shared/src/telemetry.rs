use std::time::{Duration, Instant};

/// Wall-clock timer for reporting how long a reply took.
pub struct ResponseTimer {
    start: Instant,
}

impl ResponseTimer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Elapsed time rounded for display, e.g. "1.2s".
    pub fn human(&self) -> String {
        format!("{:.1}s", self.elapsed().as_secs_f64())
    }
}

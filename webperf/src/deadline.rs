use std::fmt;
use std::time::{Duration, SystemTime};
use tokio::time::Instant;
use webperf_core::MAX_RUN_DURATION;

/// Fixed end-of-run time, computed once before any worker starts and copied to each of them.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    at: Instant,
    wall_clock: SystemTime,
}

impl Deadline {
    /// Durations beyond [`MAX_RUN_DURATION`] are clamped to it.
    pub fn after(duration: Duration) -> Self {
        let duration = duration.min(MAX_RUN_DURATION);
        Self {
            at: Instant::now() + duration,
            wall_clock: SystemTime::now() + duration,
        }
    }

    /// Checked at the top of every worker iteration. A zero duration is expired immediately.
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.at
    }

    pub fn remaining(&self) -> Duration {
        self.at.saturating_duration_since(Instant::now())
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", humantime::format_rfc3339_seconds(self.wall_clock))
    }
}

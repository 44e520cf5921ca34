use crate::RequestOutcome;
use arc_swap::ArcSwapOption;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Aggregate counters shared by every worker of a run.
///
/// Counter updates are atomic and never lost. `last_error` is last-write-wins with no ordering
/// guarantee between concurrent failures; it is a diagnostic only.
#[derive(Debug, Default)]
pub struct RunStats {
    completed: AtomicU64,
    errors: AtomicU64,
    total_bytes: AtomicU64,
    last_error: ArcSwapOption<String>,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, outcome: RequestOutcome) {
        match outcome {
            RequestOutcome::Success { bytes } => {
                self.total_bytes.fetch_add(bytes, Ordering::Relaxed);
            }
            RequestOutcome::Failure { message } => {
                self.errors.fetch_add(1, Ordering::Relaxed);
                self.last_error.store(Some(Arc::new(message)));
            }
        }
        self.completed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn completed(&self) -> u64 {
        self.completed.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            completed: self.completed.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
            total_bytes: self.total_bytes.load(Ordering::Relaxed),
            last_error: self.last_error.load_full().map(|msg| msg.as_ref().clone()),
        }
    }
}

/// Point-in-time copy of [`RunStats`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub completed: u64,
    pub errors: u64,
    pub total_bytes: u64,
    pub last_error: Option<String>,
}

/// Final statistics for a run, computed once after every worker has stopped.
///
/// Rates are computed against the configured duration. A zero denominator yields zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub completed: u64,
    pub errors: u64,
    pub total_bytes: u64,
    pub duration: Duration,
    pub ops_per_sec: f64,
    pub avg_response_bytes: u64,
    pub kbps: f64,
    pub error_percent: f64,
    pub last_error: Option<String>,
}

impl Report {
    pub fn new(snapshot: StatsSnapshot, duration: Duration) -> Self {
        let secs = duration.as_secs_f64();
        let per_sec = |value: f64| if secs > 0. { value / secs } else { 0. };

        let avg_response_bytes = snapshot
            .total_bytes
            .checked_div(snapshot.completed)
            .unwrap_or(0);

        let error_percent = if snapshot.completed > 0 {
            snapshot.errors as f64 * 100. / snapshot.completed as f64
        } else {
            0.
        };

        Self {
            completed: snapshot.completed,
            errors: snapshot.errors,
            total_bytes: snapshot.total_bytes,
            duration,
            ops_per_sec: per_sec(snapshot.completed as f64),
            avg_response_bytes,
            kbps: per_sec(snapshot.total_bytes as f64 * 8. / 1024.),
            error_percent,
            last_error: snapshot.last_error,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} operations total, {:.2} operations per second, {:.2} KB each, {:.2} Kbps; ~{:.2}% errors",
            self.completed,
            self.ops_per_sec,
            self.avg_response_bytes as f64 / 1024.,
            self.kbps,
            self.error_percent,
        )?;

        if self.errors > 0 {
            write!(
                f,
                "\n!!! At least {} http errors registered. Last error was:\n{}",
                self.errors,
                self.last_error.as_deref().unwrap_or_default(),
            )?;
        }

        Ok(())
    }
}

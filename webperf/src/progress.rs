use std::sync::Arc;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::oneshot;
use tokio::time::{interval, MissedTickBehavior};
#[allow(unused)]
use tracing::{debug, error, info, trace, warn};
use webperf_core::{RunStats, PROGRESS_GLYPHS, PROGRESS_INTERVAL};

/// Glyph for the number of requests completed during one sampling interval.
pub fn glyph(delta: u64) -> char {
    let last = PROGRESS_GLYPHS.len() - 1;
    let idx = usize::try_from(delta).map_or(last, |delta| delta.min(last));
    PROGRESS_GLYPHS[idx]
}

/// Periodically writes one glyph per sample of the completed-request counter.
///
/// Only reads [`RunStats`]; it has no influence on the workers. Output is asynchronous, so a
/// slow sink delays the next sample instead of a runtime thread.
pub struct ProgressReporter<W> {
    stats: Arc<RunStats>,
    last_completed: u64,
    sink: W,
}

impl<W: AsyncWrite + Unpin> ProgressReporter<W> {
    pub fn new(stats: Arc<RunStats>, sink: W) -> Self {
        Self {
            stats,
            last_completed: 0,
            sink,
        }
    }

    pub fn sample(&mut self) -> char {
        let completed = self.stats.completed();
        let delta = completed.saturating_sub(self.last_completed);
        self.last_completed = completed;
        glyph(delta)
    }

    /// Samples every [`PROGRESS_INTERVAL`] until `stop` fires (or its sender is dropped) or the
    /// sink fails. Every glyph written has been flushed by the time this returns the sink.
    pub async fn run(mut self, mut stop: oneshot::Receiver<()>) -> W {
        let mut timer = interval(PROGRESS_INTERVAL);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // NOTE: First tick completes instantly
        timer.tick().await;

        loop {
            tokio::select! {
                _ = &mut stop => break,
                _ = timer.tick() => {
                    let glyph = self.sample();
                    if let Err(err) = self.write_glyph(glyph).await {
                        warn!("Progress output failed, no further progress will be shown: {err}");
                        break;
                    }
                }
            }
        }

        self.sink
    }

    async fn write_glyph(&mut self, glyph: char) -> std::io::Result<()> {
        let mut buf = [0; 4];
        self.sink
            .write_all(glyph.encode_utf8(&mut buf).as_bytes())
            .await?;
        self.sink.flush().await
    }
}

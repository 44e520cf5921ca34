//! Run orchestration: spawns the workers, waits for them and builds the [`Report`].
use crate::deadline::Deadline;
use crate::error::RunError;
use crate::executor::RequestExecutor;
use crate::progress::ProgressReporter;
use crate::worker::worker_loop;
use std::future::Future;
use std::sync::Arc;
use tokio::io::AsyncWrite;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
#[allow(unused_imports)]
use tracing::{debug, error, info, instrument, trace, warn, Instrument};
use webperf_core::{Report, RequestOutcome, RunConfig, RunStats};

/// A single load test run.
///
/// # Example
/// ```no_run
/// use std::num::NonZeroUsize;
/// use std::time::Duration;
/// use webperf::prelude::*;
///
/// # async fn example() -> Result<(), RunError> {
/// let config = RunConfig::new(
///     "http://localhost:3002/delay/ms/10",
///     Duration::from_secs(10),
///     NonZeroUsize::new(8).unwrap(),
/// );
/// let report = LoadTest::new(config)
///     .progress(tokio::io::stdout())
///     .run()
///     .await?;
/// assert!(report.completed > 0);
/// # Ok(())
/// # }
/// ```
pub struct LoadTest {
    config: RunConfig,
    progress: Option<Box<dyn AsyncWrite + Send + Unpin>>,
}

impl LoadTest {
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            progress: None,
        }
    }

    /// Write progress glyphs to `sink` while the run is in progress.
    pub fn progress<W: AsyncWrite + Send + Unpin + 'static>(mut self, sink: W) -> Self {
        self.progress = Some(Box::new(sink));
        self
    }

    /// Run against the configured URL using an HTTP [`RequestExecutor`].
    pub async fn run(self) -> Result<Report, RunError> {
        let executor = RequestExecutor::new(&self.config.options)?;
        self.run_with(move |url| {
            let executor = executor.clone();
            async move { executor.execute(&url).await }
        })
        .await
    }

    /// Run with a custom request function, which receives the URL of each request.
    #[instrument(name = "webperf", skip_all, fields(url = %self.config.url, workers = self.config.concurrency.get()))]
    pub async fn run_with<T, F>(self, request: T) -> Result<Report, RunError>
    where
        T: Fn(String) -> F + Send + Sync + 'static + Clone,
        F: Future<Output = RequestOutcome> + Send + 'static,
    {
        let config = Arc::new(self.config);
        let stats = Arc::new(RunStats::new());
        let deadline = Deadline::after(config.duration);
        info!(
            "Running until {deadline} ({} from now).",
            humantime::format_duration(deadline.remaining())
        );

        let progress = self.progress.map(|sink| {
            let (stop_tx, stop_rx) = oneshot::channel();
            let reporter = ProgressReporter::new(stats.clone(), sink);
            (stop_tx, tokio::spawn(reporter.run(stop_rx)))
        });

        let workers: Vec<JoinHandle<u64>> = (0..config.concurrency.get())
            .map(|id| {
                tokio::spawn(
                    worker_loop(id, config.clone(), deadline, stats.clone(), request.clone())
                        .in_current_span(),
                )
            })
            .collect();

        // Join every worker before reporting a failure so none outlives the run.
        let mut failure = None;
        for handle in workers {
            if let Err(err) = handle.await {
                error!("Worker task failed: {err}");
                failure.get_or_insert(err);
            }
        }

        // The reporter must be finished before the caller prints the report.
        if let Some((stop_tx, handle)) = progress {
            let _ = stop_tx.send(());
            if let Err(err) = handle.await {
                warn!("Progress reporter failed: {err}");
            }
        }

        if let Some(err) = failure {
            return Err(err.into());
        }

        let report = Report::new(stats.snapshot(), config.duration);
        info!(
            "Finished: {} requests, {} errors.",
            report.completed, report.errors
        );
        Ok(report)
    }
}

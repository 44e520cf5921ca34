use crate::deadline::Deadline;
use rand::Rng;
use std::future::Future;
use std::sync::Arc;
#[allow(unused)]
use tracing::{debug, error, info, trace, warn};
use webperf_core::{RequestOutcome, RunConfig, RunStats, RANDOM_SUFFIX_RANGE};

/// URL for the next request. With `randomize_url` a fresh suffix is drawn on every call.
pub fn request_url(config: &RunConfig) -> String {
    if config.options.randomize_url {
        let suffix = rand::thread_rng().gen_range(RANDOM_SUFFIX_RANGE);
        format!("{}{suffix}", config.url)
    } else {
        config.url.clone()
    }
}

/// Runs requests back to back until `deadline` expires, recording every outcome into `stats`.
///
/// The deadline is only checked between requests, so an in-flight request always completes.
/// Returns the number of requests this worker issued.
pub(crate) async fn worker_loop<T, F>(
    id: usize,
    config: Arc<RunConfig>,
    deadline: Deadline,
    stats: Arc<RunStats>,
    request: T,
) -> u64
where
    T: Fn(String) -> F,
    F: Future<Output = RequestOutcome>,
{
    let mut issued = 0;
    while !deadline.is_expired() {
        let outcome = request(request_url(&config)).await;
        record_metrics(&outcome);
        stats.record(outcome);
        issued += 1;
    }

    trace!("Worker {id} stopped after {issued} requests.");
    issued
}

#[cfg(feature = "metrics")]
fn record_metrics(outcome: &RequestOutcome) {
    let labels = webperf_core::OUTCOME_LABELS;
    metrics::counter!(labels.requests).increment(1);
    match outcome {
        RequestOutcome::Success { bytes } => metrics::counter!(labels.bytes).increment(*bytes),
        RequestOutcome::Failure { .. } => metrics::counter!(labels.errors).increment(1),
    }
}

#[cfg(not(feature = "metrics"))]
fn record_metrics(_outcome: &RequestOutcome) {}

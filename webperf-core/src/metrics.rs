/// Names of the counters emitted for each recorded outcome.
#[derive(Copy, Clone, Debug)]
pub struct OutcomeLabels {
    pub requests: &'static str,
    pub errors: &'static str,
    pub bytes: &'static str,
}

pub const OUTCOME_LABELS: OutcomeLabels = OutcomeLabels {
    requests: "webperf_requests",
    errors: "webperf_errors",
    bytes: "webperf_bytes",
};

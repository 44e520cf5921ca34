mod utils;
use utils::*;

use webperf::prelude::*;
use webperf_core::{ACCEPT_ENCODING_GZIP, ACCEPT_HEADER};

fn executor(request_gzip: bool) -> RequestExecutor {
    RequestExecutor::new(&RunOptions {
        randomize_url: false,
        request_gzip,
    })
    .unwrap()
}

#[tokio::test]
async fn ok_counts_body_bytes() {
    let addr = init().await;

    let outcome = executor(false)
        .execute(&format!("http://{addr}/bytes/1024"))
        .await;

    assert_eq!(outcome, RequestOutcome::Success { bytes: 1024 });
}

#[tokio::test]
async fn server_error_body_is_the_message() {
    let addr = init().await;
    let stats = RunStats::new();
    stats.record(RequestOutcome::Success { bytes: 7 });

    let outcome = executor(false)
        .execute(&format!("http://{addr}/status/500/oops"))
        .await;
    assert_eq!(outcome, RequestOutcome::failure("oops"));

    stats.record(outcome);
    let snapshot = stats.snapshot();
    assert_eq!(snapshot.errors, 1);
    assert_eq!(snapshot.total_bytes, 7);
}

#[tokio::test]
async fn non_200_success_status_is_an_error() {
    let addr = init().await;

    let outcome = executor(false)
        .execute(&format!("http://{addr}/status/201/created"))
        .await;

    assert_eq!(outcome, RequestOutcome::failure("created"));
}

#[tokio::test]
async fn empty_error_body_falls_back_to_status() {
    let addr = init().await;

    let outcome = executor(false)
        .execute(&format!("http://{addr}/header/x-not-sent"))
        .await;

    assert_eq!(outcome, RequestOutcome::failure("404 Not Found"));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_failure() {
    init().await;
    let addr = closed_addr().await;
    let stats = RunStats::new();

    let outcome = executor(false).execute(&format!("http://{addr}/")).await;
    match &outcome {
        RequestOutcome::Failure { message } => assert!(!message.is_empty()),
        RequestOutcome::Success { .. } => panic!("expected a failure, got {outcome:?}"),
    }

    stats.record(outcome);
    let snapshot = stats.snapshot();
    assert_eq!(snapshot.completed, 1);
    assert_eq!(snapshot.errors, 1);
    assert_eq!(snapshot.total_bytes, 0);
}

#[tokio::test]
async fn sends_accept_header() {
    let addr = init().await;

    let outcome = executor(false)
        .execute(&format!("http://{addr}/header/accept"))
        .await;

    // The mock echoes the header, so the body length is the header length.
    assert_eq!(
        outcome,
        RequestOutcome::Success {
            bytes: ACCEPT_HEADER.len() as u64
        }
    );
}

#[tokio::test]
async fn accept_encoding_only_with_gzip() {
    let addr = init().await;
    let url = format!("http://{addr}/header/accept-encoding");

    assert_eq!(
        executor(true).execute(&url).await,
        RequestOutcome::Success {
            bytes: ACCEPT_ENCODING_GZIP.len() as u64
        }
    );
    assert_eq!(
        executor(false).execute(&url).await,
        RequestOutcome::failure("404 Not Found")
    );
}

#[tokio::test]
async fn gzip_reports_decoded_size() {
    let addr = init().await;

    let outcome = executor(true)
        .execute(&format!("http://{addr}/bytes/4096"))
        .await;

    assert_eq!(outcome, RequestOutcome::Success { bytes: 4096 });
}

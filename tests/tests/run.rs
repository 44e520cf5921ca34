mod utils;
use utils::*;

use std::num::NonZeroUsize;
use std::time::Duration;
use webperf::prelude::*;

fn config(url: String, duration: Duration, concurrency: usize) -> RunConfig {
    RunConfig::new(url, duration, NonZeroUsize::new(concurrency).unwrap())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn run_against_mock_service() {
    let addr = init().await;

    let report = LoadTest::new(config(
        format!("http://{addr}/bytes/100"),
        Duration::from_secs(1),
        4,
    ))
    .run()
    .await
    .unwrap();

    assert!(report.completed > 0);
    assert_eq!(report.errors, 0);
    assert_eq!(report.total_bytes, report.completed * 100);
    assert_eq!(report.avg_response_bytes, 100);
    assert_eq!(report.last_error, None);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn randomized_urls_hit_the_server() {
    let addr = init().await;

    let report = LoadTest::new(
        config(format!("http://{addr}/ok/"), Duration::from_millis(500), 2).options(RunOptions {
            randomize_url: true,
            request_gzip: true,
        }),
    )
    .run()
    .await
    .unwrap();

    assert!(report.completed > 0);
    assert_eq!(report.errors, 0);
    // "ok " followed by the five-digit suffix
    assert_eq!(report.avg_response_bytes, 8);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn server_errors_are_counted() {
    let addr = init().await;

    let report = LoadTest::new(config(
        format!("http://{addr}/status/500/oops"),
        Duration::from_millis(500),
        3,
    ))
    .run()
    .await
    .unwrap();

    assert!(report.completed > 0);
    assert_eq!(report.errors, report.completed);
    assert_eq!(report.error_percent, 100.);
    assert_eq!(report.total_bytes, 0);
    assert_eq!(report.last_error.as_deref(), Some("oops"));
    assert!(report.to_string().contains("Last error was:\noops"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn unreachable_target_still_reports() {
    init().await;
    let addr = closed_addr().await;

    let report = LoadTest::new(config(
        format!("http://{addr}/"),
        Duration::from_millis(300),
        2,
    ))
    .run()
    .await
    .unwrap();

    assert!(report.completed > 0);
    assert_eq!(report.errors, report.completed);
    assert!(report.last_error.is_some());
}

#[tokio::test]
async fn zero_duration_issues_no_requests() {
    let addr = init().await;

    let report = LoadTest::new(config(format!("http://{addr}/bytes/1"), Duration::ZERO, 4))
        .run()
        .await
        .unwrap();

    assert_eq!(report.completed, 0);
    assert_eq!(report.ops_per_sec, 0.);
}

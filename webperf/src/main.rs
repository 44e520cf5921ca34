use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use webperf::cli::Cli;
use webperf::worker::request_url;
use webperf::LoadTest;
use webperf_core::DEFAULT_LOG_FILTER;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Cli::parse().into_config();

    println!("{config}");
    if config.options.randomize_url {
        println!("Sample url: {}", request_url(&config));
    }

    let report = LoadTest::new(config)
        .progress(tokio::io::stdout())
        .run()
        .await?;

    println!();
    println!("{report}");

    Ok(ExitCode::SUCCESS)
}

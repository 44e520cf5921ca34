use clap::Parser;
use std::num::NonZeroUsize;
use std::time::Duration;
#[allow(unused)]
use tracing::{debug, error, info, trace, warn};
use webperf_core::{RunConfig, RunOptions};

const OPTIONS_HELP: &str = "\
Options (after the URL, case-insensitive):
  -r     randomize the url by appending a random 5-digit number to every request
  -gzip  send Accept-Encoding: gzip,deflate (takes CPU but improves bandwidth usage)";

/// Command-line arguments: `webperf <CONCURRENCY> <DURATION> <URL> [OPTIONS]...`
#[derive(Parser, Debug)]
#[command(name = "webperf", version, about = "HTTP GET load generator.", after_help = OPTIONS_HELP)]
pub struct Cli {
    /// Number of concurrent workers
    pub concurrency: NonZeroUsize,

    /// Test duration in seconds
    pub duration: u64,

    /// Target URL
    pub url: String,

    /// Trailing options: -r, -gzip
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "OPTIONS")]
    pub options: Vec<String>,
}

impl Cli {
    pub fn into_config(self) -> RunConfig {
        let mut options = RunOptions::default();
        for option in &self.options {
            if !options.apply(option) {
                warn!("Ignoring unknown option {option:?}.");
            }
        }

        RunConfig::new(self.url, Duration::from_secs(self.duration), self.concurrency)
            .options(options)
    }
}

use crate::{GZIP_OPTION, RANDOMIZE_OPTION};
use std::fmt;
use std::num::NonZeroUsize;
use std::time::Duration;

/// Per-request behavior toggled by the trailing command-line options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Append a random five-digit number to the URL of every request.
    pub randomize_url: bool,
    /// Send `Accept-Encoding: gzip,deflate` and decode compressed bodies.
    pub request_gzip: bool,
}

impl RunOptions {
    /// Applies a single trailing option, case-insensitively. Returns `false` if the option is
    /// not recognized.
    pub fn apply(&mut self, option: &str) -> bool {
        let option = option.to_ascii_lowercase();
        if option == RANDOMIZE_OPTION {
            self.randomize_url = true;
        } else if option == GZIP_OPTION {
            self.request_gzip = true;
        } else {
            return false;
        }
        true
    }
}

/// Immutable description of a single load test run.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub url: String,
    pub duration: Duration,
    pub concurrency: NonZeroUsize,
    pub options: RunOptions,
}

impl RunConfig {
    pub fn new(url: impl Into<String>, duration: Duration, concurrency: NonZeroUsize) -> Self {
        Self {
            url: url.into(),
            duration,
            concurrency,
            options: RunOptions::default(),
        }
    }

    pub fn options(mut self, options: RunOptions) -> Self {
        self.options = options;
        self
    }
}

impl fmt::Display for RunConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Url: {}, Workers: {}, Duration: {}",
            self.url,
            self.concurrency,
            humantime::format_duration(self.duration),
        )?;
        if self.options.randomize_url {
            write!(f, ", randomized")?;
        }
        if self.options.request_gzip {
            write!(f, ", gzip")?;
        }
        Ok(())
    }
}

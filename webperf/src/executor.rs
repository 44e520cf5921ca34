use crate::error::RunError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_ENCODING, CONNECTION};
use reqwest::{Client, StatusCode};
#[allow(unused)]
use tracing::{debug, error, info, trace, warn};
use webperf_core::{
    RequestOutcome, RunOptions, ACCEPT_ENCODING_GZIP, ACCEPT_HEADER, REQUEST_TIMEOUT,
};

/// Issues single GET requests and classifies them into a [`RequestOutcome`].
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Clone, Debug)]
pub struct RequestExecutor {
    client: Client,
}

impl RequestExecutor {
    pub fn new(options: &RunOptions) -> Result<Self, RunError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HEADER));
        headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
        if options.request_gzip {
            headers.insert(ACCEPT_ENCODING, HeaderValue::from_static(ACCEPT_ENCODING_GZIP));
        }

        let client = Client::builder()
            .default_headers(headers)
            .gzip(options.request_gzip)
            .deflate(options.request_gzip)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        debug!("HTTP client ready (gzip: {}).", options.request_gzip);
        Ok(Self { client })
    }

    /// Performs one GET. Never fails: transport errors become `Failure` outcomes.
    pub async fn execute(&self, url: &str) -> RequestOutcome {
        match self.fetch(url).await {
            Ok(outcome) => outcome,
            Err(err) => RequestOutcome::failure(err.to_string()),
        }
    }

    async fn fetch(&self, url: &str) -> Result<RequestOutcome, reqwest::Error> {
        let mut response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::OK {
            // NOTE: Content-Length is unreliable once the body is decoded, so count what we read.
            let mut bytes = 0;
            while let Some(chunk) = response.chunk().await? {
                bytes += chunk.len() as u64;
            }
            Ok(RequestOutcome::Success { bytes })
        } else {
            let body = response.text().await?;
            let message = if body.is_empty() {
                status.to_string()
            } else {
                body
            };
            Ok(RequestOutcome::Failure { message })
        }
    }
}

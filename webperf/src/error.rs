use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("Failed to build the HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Worker task failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

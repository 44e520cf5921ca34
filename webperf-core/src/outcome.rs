/// Classified result of a single request attempt.
///
/// Status-code failures and transport failures are both `Failure`; only the message differs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    /// HTTP 200. `bytes` is the (decoded) body length actually read.
    Success { bytes: u64 },
    /// Any other status (message is the response body) or a transport error.
    Failure { message: String },
}

impl RequestOutcome {
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }
}

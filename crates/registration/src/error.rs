use thiserror::Error;

/// Failures reported by a submission sink.
///
/// Everything here is user-correctable: a rejection carries the reason
/// to show in the banner, and storage problems allow a plain retry.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("{0}")]
    Rejected(String),

    #[error("failed to store the registration: {0}")]
    Storage(#[from] std::io::Error),

    #[error("failed to encode the registration: {0}")]
    Encoding(#[from] serde_json::Error),
}

use thiserror::Error;

/// Generic message shown when a submission fails without a structured
/// backend error.
pub const GENERIC_SUBMISSION_FAILURE: &str = "Something went wrong submitting your request";

/// Areas-of-practice or postcode lookup failure.
///
/// Degrades functionality but never crashes the wizard: the topic list
/// stays empty, or the postcode fields stay unresolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("request timed out")]
    Timeout,

    #[error("not found")]
    NotFound,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Submission failure, always recoverable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// Structured error message supplied by the backend.
    #[error("{0}")]
    Backend(String),

    #[error("request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl SubmissionError {
    /// The text surfaced to the visitor: the backend message verbatim
    /// when one exists, a generic fallback otherwise.
    pub fn user_message(&self) -> String {
        match self {
            SubmissionError::Backend(message) => message.clone(),
            _ => GENERIC_SUBMISSION_FAILURE.to_string(),
        }
    }
}

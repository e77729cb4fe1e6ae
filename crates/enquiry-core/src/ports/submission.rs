use crate::enquiry::{SubmissionAck, SubmissionRequest};
use crate::ports::SubmissionError;

/// Posts the completed enquiry to the backend.
#[async_trait::async_trait]
pub trait SubmissionPort: Send + Sync {
    async fn submit(&self, request: &SubmissionRequest) -> Result<SubmissionAck, SubmissionError>;
}

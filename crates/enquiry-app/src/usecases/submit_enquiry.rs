//! Use case for submitting the completed enquiry.

use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};

use enquiry_core::enquiry::{SubmissionAck, SubmissionRequest};
use enquiry_core::ports::{SubmissionError, SubmissionPort};

/// Posts the serialized draft to the backend and normalizes the outcome.
pub struct SubmitEnquiry {
    submission: Arc<dyn SubmissionPort>,
}

impl SubmitEnquiry {
    pub fn new(submission: Arc<dyn SubmissionPort>) -> Self {
        Self { submission }
    }

    pub async fn execute(
        &self,
        request: &SubmissionRequest,
    ) -> Result<SubmissionAck, SubmissionError> {
        let span = info_span!("usecase.submit_enquiry.execute");
        async {
            match self.submission.submit(request).await {
                Ok(ack) => {
                    info!(submission_id = %ack.submission_id, "enquiry submission acknowledged");
                    Ok(ack)
                }
                Err(err) => {
                    warn!(error = %err, "enquiry submission failed");
                    Err(err)
                }
            }
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enquiry_core::enquiry::EnquiryDraft;

    struct AckSubmissionPort;

    #[async_trait::async_trait]
    impl SubmissionPort for AckSubmissionPort {
        async fn submit(
            &self,
            _request: &SubmissionRequest,
        ) -> Result<SubmissionAck, SubmissionError> {
            Ok(SubmissionAck {
                submission_id: "sub-1".into(),
            })
        }
    }

    struct RejectingSubmissionPort;

    #[async_trait::async_trait]
    impl SubmissionPort for RejectingSubmissionPort {
        async fn submit(
            &self,
            _request: &SubmissionRequest,
        ) -> Result<SubmissionAck, SubmissionError> {
            Err(SubmissionError::Backend("Email already used".into()))
        }
    }

    #[tokio::test]
    async fn returns_the_acknowledgement() {
        let use_case = SubmitEnquiry::new(Arc::new(AckSubmissionPort));
        let request = SubmissionRequest::from_draft(&EnquiryDraft::default());

        let ack = use_case.execute(&request).await.unwrap();

        assert_eq!(ack.submission_id, "sub-1");
    }

    #[tokio::test]
    async fn propagates_backend_errors() {
        let use_case = SubmitEnquiry::new(Arc::new(RejectingSubmissionPort));
        let request = SubmissionRequest::from_draft(&EnquiryDraft::default());

        let err = use_case.execute(&request).await.unwrap_err();

        assert_eq!(err.user_message(), "Email already used");
    }
}

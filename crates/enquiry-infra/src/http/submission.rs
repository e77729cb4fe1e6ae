//! Enquiry submission gateway.

use tracing::debug;

use enquiry_core::enquiry::{SubmissionAck, SubmissionRequest};
use enquiry_core::ports::{SubmissionError, SubmissionPort};

use crate::config::BackendConfig;
use crate::http::build_client;

#[derive(serde::Deserialize)]
struct AckBody {
    id: String,
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    message: String,
}

/// Posts the serialized enquiry to the forms backend.
pub struct HttpSubmissionGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSubmissionGateway {
    pub fn new(config: &BackendConfig) -> anyhow::Result<Self> {
        Ok(Self {
            client: build_client(config.request_timeout())?,
            endpoint: config.submission_endpoint.clone(),
        })
    }
}

#[async_trait::async_trait]
impl SubmissionPort for HttpSubmissionGateway {
    async fn submit(&self, request: &SubmissionRequest) -> Result<SubmissionAck, SubmissionError> {
        debug!(endpoint = %self.endpoint, "posting enquiry submission");
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if status.is_success() {
            parse_ack_body(&body)
        } else {
            Err(parse_error_body(status.as_u16(), &body))
        }
    }
}

fn transport_error(err: reqwest::Error) -> SubmissionError {
    if err.is_timeout() {
        SubmissionError::Timeout
    } else {
        SubmissionError::Transport(err.to_string())
    }
}

fn parse_ack_body(body: &str) -> Result<SubmissionAck, SubmissionError> {
    let ack: AckBody =
        serde_json::from_str(body).map_err(|err| SubmissionError::Malformed(err.to_string()))?;
    Ok(SubmissionAck {
        submission_id: ack.id,
    })
}

/// Prefers the backend's structured message; falls back to the status code.
fn parse_error_body(status: u16, body: &str) -> SubmissionError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(error) => SubmissionError::Backend(error.message),
        Err(_) => SubmissionError::Transport(format!("unexpected status {status}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enquiry_core::ports::errors::GENERIC_SUBMISSION_FAILURE;

    #[test]
    fn parses_the_acknowledgement_id() {
        let ack = parse_ack_body(r#"{ "id": "sub-42" }"#).unwrap();
        assert_eq!(ack.submission_id, "sub-42");
    }

    #[test]
    fn structured_errors_carry_the_backend_message() {
        let err = parse_error_body(409, r#"{ "message": "Email already used" }"#);
        assert_eq!(err, SubmissionError::Backend("Email already used".into()));
        assert_eq!(err.user_message(), "Email already used");
    }

    #[test]
    fn unstructured_errors_fall_back_to_the_generic_message() {
        let err = parse_error_body(502, "<html>bad gateway</html>");
        assert!(matches!(err, SubmissionError::Transport(_)));
        assert_eq!(err.user_message(), GENERIC_SUBMISSION_FAILURE);
    }

    #[test]
    fn malformed_acknowledgements_are_rejected() {
        assert!(matches!(
            parse_ack_body("{}"),
            Err(SubmissionError::Malformed(_))
        ));
    }
}

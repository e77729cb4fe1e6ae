//! Areas-of-practice GraphQL client.

use tracing::debug;

use enquiry_core::enquiry::AreaOfPractice;
use enquiry_core::ports::{AreasOfPracticePort, LookupError};

use crate::config::BackendConfig;
use crate::http::{build_client, lookup_transport_error};

const AREAS_QUERY: &str = "{ areasOfPractice { id name } }";

#[derive(serde::Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
}

#[derive(serde::Deserialize)]
struct GraphqlResponse {
    data: Option<AreasData>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(serde::Deserialize)]
struct AreasData {
    #[serde(rename = "areasOfPractice")]
    areas_of_practice: Vec<AreaOfPractice>,
}

#[derive(serde::Deserialize)]
struct GraphqlError {
    message: String,
}

/// Loads the enquiry topic list from the GraphQL backend.
pub struct HttpAreasOfPractice {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAreasOfPractice {
    pub fn new(config: &BackendConfig) -> anyhow::Result<Self> {
        Ok(Self {
            client: build_client(config.request_timeout())?,
            endpoint: config.areas_endpoint.clone(),
        })
    }
}

#[async_trait::async_trait]
impl AreasOfPracticePort for HttpAreasOfPractice {
    async fn load(&self) -> Result<Vec<AreaOfPractice>, LookupError> {
        debug!(endpoint = %self.endpoint, "loading areas of practice");
        let response = self
            .client
            .post(&self.endpoint)
            .json(&GraphqlRequest { query: AREAS_QUERY })
            .send()
            .await
            .map_err(lookup_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Transport(format!(
                "unexpected status {status}"
            )));
        }

        let body = response.text().await.map_err(lookup_transport_error)?;
        parse_areas_body(&body)
    }
}

fn parse_areas_body(body: &str) -> Result<Vec<AreaOfPractice>, LookupError> {
    let response: GraphqlResponse =
        serde_json::from_str(body).map_err(|err| LookupError::Malformed(err.to_string()))?;
    if let Some(err) = response.errors.first() {
        return Err(LookupError::Transport(err.message.clone()));
    }
    response
        .data
        .map(|data| data.areas_of_practice)
        .ok_or_else(|| LookupError::Malformed("response carries no data".into()))
}

//! Postcode autocomplete and resolve client.

use tracing::debug;

use enquiry_core::ports::{LookupError, PostcodeLookupPort, ResolvedPostcode};

use crate::config::BackendConfig;
use crate::http::{build_client, lookup_transport_error};

#[derive(serde::Deserialize)]
struct AutocompleteResponse {
    suggestions: Vec<String>,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResolveResponse {
    region: String,
    area_in_region: String,
}

/// Client for the external postcode API.
pub struct HttpPostcodeLookup {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPostcodeLookup {
    pub fn new(config: &BackendConfig) -> anyhow::Result<Self> {
        Ok(Self {
            client: build_client(config.request_timeout())?,
            base_url: config.postcode_base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait::async_trait]
impl PostcodeLookupPort for HttpPostcodeLookup {
    async fn autocomplete(&self, prefix: &str) -> Result<Vec<String>, LookupError> {
        let url = format!("{}/autocomplete/{}", self.base_url, prefix.trim());
        debug!(%url, "postcode autocomplete");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(lookup_transport_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            // No candidates for this prefix.
            return Ok(Vec::new());
        }
        if !status.is_success() {
            return Err(LookupError::Transport(format!(
                "unexpected status {status}"
            )));
        }

        let body = response.text().await.map_err(lookup_transport_error)?;
        parse_autocomplete_body(&body)
    }

    async fn resolve(&self, postcode: &str) -> Result<ResolvedPostcode, LookupError> {
        let url = format!("{}/lookup/{}", self.base_url, postcode.trim());
        debug!(%url, "postcode resolve");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(lookup_transport_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound);
        }
        if !status.is_success() {
            return Err(LookupError::Transport(format!(
                "unexpected status {status}"
            )));
        }

        let body = response.text().await.map_err(lookup_transport_error)?;
        parse_resolve_body(&body)
    }
}

fn parse_autocomplete_body(body: &str) -> Result<Vec<String>, LookupError> {
    let response: AutocompleteResponse =
        serde_json::from_str(body).map_err(|err| LookupError::Malformed(err.to_string()))?;
    Ok(response.suggestions)
}

fn parse_resolve_body(body: &str) -> Result<ResolvedPostcode, LookupError> {
    let response: ResolveResponse =
        serde_json::from_str(body).map_err(|err| LookupError::Malformed(err.to_string()))?;
    Ok(ResolvedPostcode {
        region: response.region,
        area_in_region: response.area_in_region,
    })
}

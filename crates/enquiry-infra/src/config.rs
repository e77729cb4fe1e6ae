//! Backend endpoint configuration.

use std::time::Duration;

use serde::Deserialize;

/// Endpoints and timeout for the three backend integrations.
///
/// Loaded from an optional `enquiry.toml` file with `ENQUIRY_`-prefixed
/// environment variables layered on top.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// GraphQL endpoint serving the areas-of-practice query.
    #[serde(default = "default_areas_endpoint")]
    pub areas_endpoint: String,

    /// Base URL of the postcode autocomplete/lookup API.
    #[serde(default = "default_postcode_base_url")]
    pub postcode_base_url: String,

    /// Enquiry submission endpoint.
    #[serde(default = "default_submission_endpoint")]
    pub submission_endpoint: String,

    /// Bounded timeout applied to every outgoing request.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl BackendConfig {
    pub fn defaults() -> Self {
        Self {
            areas_endpoint: default_areas_endpoint(),
            postcode_base_url: default_postcode_base_url(),
            submission_endpoint: default_submission_endpoint(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }

    pub fn load() -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("enquiry").required(false))
            .add_source(config::Environment::with_prefix("ENQUIRY"))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

fn default_areas_endpoint() -> String {
    "http://localhost:8081/graphql".to_string()
}

fn default_postcode_base_url() -> String {
    "https://postcodes.api.helpmycase.co.uk".to_string()
}

fn default_submission_endpoint() -> String {
    "https://forms.api.helpmycase.co.uk/submit".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_endpoint() {
        let config = BackendConfig::defaults();
        assert!(config.areas_endpoint.ends_with("/graphql"));
        assert!(config.submission_endpoint.ends_with("/submit"));
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: BackendConfig =
            serde_json::from_str(r#"{ "request_timeout_secs": 3 }"#).unwrap();
        assert_eq!(config.request_timeout_secs, 3);
        assert_eq!(config.areas_endpoint, default_areas_endpoint());
    }
}

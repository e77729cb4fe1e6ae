use crate::ports::LookupError;

/// Geographic metadata for an exactly resolved postcode.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ResolvedPostcode {
    pub region: String,
    pub area_in_region: String,
}

/// External postcode API.
#[async_trait::async_trait]
pub trait PostcodeLookupPort: Send + Sync {
    /// Candidate postcodes for a free-text prefix, possibly empty.
    async fn autocomplete(&self, prefix: &str) -> Result<Vec<String>, LookupError>;

    /// Region metadata for an exact postcode.
    async fn resolve(&self, postcode: &str) -> Result<ResolvedPostcode, LookupError>;
}

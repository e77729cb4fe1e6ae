//! HTTP adapters for the wizard's three backend integrations.
//!
//! Every adapter catches its own transport and parse failures and
//! converts them to the `Result`-shaped errors the ports define; no
//! raw transport error ever reaches the application layer.

pub mod areas;
pub mod postcode;
pub mod submission;

use std::time::Duration;

use enquiry_core::ports::LookupError;

pub(crate) fn build_client(timeout: Duration) -> anyhow::Result<reqwest::Client> {
    Ok(reqwest::Client::builder().timeout(timeout).build()?)
}

pub(crate) fn lookup_transport_error(err: reqwest::Error) -> LookupError {
    if err.is_timeout() {
        LookupError::Timeout
    } else {
        LookupError::Transport(err.to_string())
    }
}

//! # enquiry-infra
//!
//! Infrastructure adapters for the enquiry intake wizard: reqwest-backed
//! implementations of the lookup and submission ports, plus backend
//! endpoint configuration.

pub mod config;
pub mod http;
pub mod scheduler;

pub use config::BackendConfig;
pub use http::areas::HttpAreasOfPractice;
pub use http::postcode::HttpPostcodeLookup;
pub use http::submission::HttpSubmissionGateway;
pub use scheduler::FixedDelayScheduler;

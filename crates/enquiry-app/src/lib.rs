//! # enquiry-app
//!
//! Use cases and wizard orchestration for the enquiry intake wizard.
//!
//! This crate drives the pure state machine from `enquiry-core` and
//! executes its side-effect actions against the port traits. UI events
//! enter here; all async results flow back as state transitions.

pub mod usecases;

pub use usecases::wizard::{WizardOrchestrator, WizardOrchestratorDeps};
pub use usecases::{LoadAreasOfPractice, SubmitEnquiry};

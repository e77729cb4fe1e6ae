//! Wizard use cases.
//!
//! This module exposes the wizard orchestrator.

mod context;
pub mod orchestrator;

pub use orchestrator::{WizardOrchestrator, WizardOrchestratorDeps};

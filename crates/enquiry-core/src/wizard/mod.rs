//! Wizard domain module.
//!
//! This module defines the multi-stage wizard state machine types.

pub mod state_machine;

pub use state_machine::{WizardAction, WizardEvent, WizardStage, WizardState, WizardStateMachine};

//! # enquiry-core
//!
//! Core domain models and business logic for the enquiry intake wizard.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod enquiry;
pub mod ports;
pub mod session;
pub mod validation;
pub mod wizard;

// Re-export commonly used types at the crate root
pub use enquiry::{AreaOfPractice, EnquiryDraft, SubmissionAck, SubmissionRequest, SubmissionStatus};
pub use session::{SessionContext, SessionUser};
pub use validation::{Field, FieldError};
pub use wizard::{WizardAction, WizardEvent, WizardStage, WizardState, WizardStateMachine};

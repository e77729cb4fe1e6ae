//! Port interfaces for the application layer.
//!
//! Ports define the contract between the wizard logic (use cases)
//! and infrastructure implementations. The core stays independent of
//! transports and UI frameworks; adapters and the UI shell implement
//! these traits.

pub mod areas_of_practice;
pub mod blocking_loader;
pub mod errors;
pub mod notification;
pub mod postcode_lookup;
pub mod scheduler;
pub mod submission;

pub use areas_of_practice::AreasOfPracticePort;
pub use blocking_loader::BlockingLoaderPort;
pub use errors::{LookupError, SubmissionError};
pub use notification::NotificationPort;
pub use postcode_lookup::{PostcodeLookupPort, ResolvedPostcode};
pub use scheduler::StageSchedulerPort;
pub use submission::SubmissionPort;

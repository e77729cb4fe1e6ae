//! Enquiry domain module.
//!
//! Defines the in-progress enquiry draft, the areas-of-practice
//! reference list and the submission wire types.

mod areas;
mod draft;
mod submission;

pub use areas::AreaOfPractice;
pub use draft::EnquiryDraft;
pub use submission::{SubmissionAck, SubmissionRequest, SubmissionStatus};

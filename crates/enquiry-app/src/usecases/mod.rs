//! Business logic use cases.

pub mod load_areas_of_practice;
pub mod submit_enquiry;
pub mod wizard;

pub use load_areas_of_practice::LoadAreasOfPractice;
pub use submit_enquiry::SubmitEnquiry;

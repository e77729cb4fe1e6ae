//! Submission wire types and lifecycle status.

use super::EnquiryDraft;

/// The backend's expected submission shape.
///
/// Field names are serialized in camelCase, matching the forms API
/// contract (`postCode`, `areaInRegion`, `showPhoneNumber`).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub topic: String,
    pub description: String,
    pub post_code: String,
    pub region: String,
    pub area_in_region: String,
    pub show_phone_number: bool,
}

impl SubmissionRequest {
    /// Serializes the full draft, including the derived region fields.
    pub fn from_draft(draft: &EnquiryDraft) -> Self {
        Self {
            name: draft.full_name(),
            phone_number: draft.phone_number.clone(),
            email: draft.email.clone(),
            topic: draft.topic.clone(),
            description: draft.enquiry_text.clone(),
            post_code: draft.postcode.clone(),
            region: draft.region.clone(),
            area_in_region: draft.area_in_region.clone(),
            show_phone_number: draft.show_phone_number,
        }
    }
}

/// Acknowledgement returned by the backend on a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SubmissionAck {
    pub submission_id: String,
}

/// Lifecycle of the single in-flight submission.
///
/// Only one `Pending` submission may exist at a time; re-entrant submit
/// attempts while `Pending` are ignored by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStatus {
    NotSubmitted,
    Pending,
    Succeeded,
    Failed { reason: String },
}

impl Default for SubmissionStatus {
    fn default() -> Self {
        Self::NotSubmitted
    }
}

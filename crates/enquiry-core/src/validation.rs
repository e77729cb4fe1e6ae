//! Per-field validation rules.
//!
//! Each rule is a pure function of the field and the current draft:
//! the same input always yields the same verdict. Rules are applied
//! independently per field, never short-circuited across fields.

use crate::enquiry::{AreaOfPractice, EnquiryDraft, SubmissionStatus};

/// Maximum length for first and last name.
pub const MAX_NAME_LEN: usize = 30;

/// Required length for a phone number.
pub const PHONE_NUMBER_LEN: usize = 10;

/// All fields of the enquiry draft, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    Topic,
    EnquiryText,
    Postcode,
    Region,
    AreaInRegion,
}

impl Field {
    /// Every validated field, used by the aggregate form predicate.
    pub const ALL: [Field; 9] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::PhoneNumber,
        Field::Topic,
        Field::EnquiryText,
        Field::Postcode,
        Field::Region,
        Field::AreaInRegion,
    ];
}

/// Field-local validation failure. Non-fatal, blocks submit only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,

    #[error("Field should be at most {max} characters")]
    TooLong { max: usize },

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Phone number should be 10 digits")]
    PhoneWrongLength,

    #[error("Phone number should be only numbers")]
    PhoneNotNumeric,

    #[error("Invalid topic selected from dropdown")]
    UnknownTopic,
}

/// Validates a single field against the current draft.
///
/// `areas` is the loaded areas-of-practice list; while it is still
/// empty the topic rule degrades to a plain non-empty check.
pub fn validate_field(
    field: Field,
    draft: &EnquiryDraft,
    areas: &[AreaOfPractice],
) -> Result<(), FieldError> {
    match field {
        Field::FirstName => bounded_name(&draft.first_name),
        Field::LastName => bounded_name(&draft.last_name),
        Field::Email => email_shape(&draft.email),
        Field::PhoneNumber => phone_number(&draft.phone_number),
        Field::Topic => topic(&draft.topic, areas),
        Field::EnquiryText => required(&draft.enquiry_text),
        Field::Postcode => required(&draft.postcode),
        Field::Region => required(&draft.region),
        Field::AreaInRegion => required(&draft.area_in_region),
    }
}

/// Every field paired with its failure, empty when the form is valid.
pub fn validate_all(draft: &EnquiryDraft, areas: &[AreaOfPractice]) -> Vec<(Field, FieldError)> {
    Field::ALL
        .into_iter()
        .filter_map(|field| validate_field(field, draft, areas).err().map(|e| (field, e)))
        .collect()
}

/// True when every field in the draft passes its rule.
pub fn form_is_valid(draft: &EnquiryDraft, areas: &[AreaOfPractice]) -> bool {
    Field::ALL
        .into_iter()
        .all(|field| validate_field(field, draft, areas).is_ok())
}

/// The submit gate: every field valid, terms agreed, no submission in flight.
pub fn submit_gate(
    draft: &EnquiryDraft,
    areas: &[AreaOfPractice],
    agree_to_terms: bool,
    status: &SubmissionStatus,
) -> bool {
    agree_to_terms && *status != SubmissionStatus::Pending && form_is_valid(draft, areas)
}

fn required(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    Ok(())
}

fn bounded_name(value: &str) -> Result<(), FieldError> {
    required(value)?;
    if value.chars().count() > MAX_NAME_LEN {
        return Err(FieldError::TooLong { max: MAX_NAME_LEN });
    }
    Ok(())
}

fn email_shape(value: &str) -> Result<(), FieldError> {
    required(value)?;
    let Some((local, domain)) = value.split_once('@') else {
        return Err(FieldError::InvalidEmail);
    };
    let domain_ok = domain
        .split_once('.')
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty());
    if local.is_empty() || !domain_ok || value.contains(char::is_whitespace) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

fn phone_number(value: &str) -> Result<(), FieldError> {
    required(value)?;
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(FieldError::PhoneNotNumeric);
    }
    if value.len() != PHONE_NUMBER_LEN {
        return Err(FieldError::PhoneWrongLength);
    }
    Ok(())
}

fn topic(value: &str, areas: &[AreaOfPractice]) -> Result<(), FieldError> {
    required(value)?;
    // Before the list loads the rule degrades to non-empty.
    if areas.is_empty() {
        return Ok(());
    }
    if areas.iter().any(|area| area.id == value) {
        return Ok(());
    }
    Err(FieldError::UnknownTopic)
}

//! In-progress enquiry draft.

use crate::validation::Field;

/// Mutable record of the visitor's in-progress input.
///
/// `region` and `area_in_region` are derived fields: they are only
/// populated through [`EnquiryDraft::apply_resolved_postcode`] and are
/// cleared whenever the postcode text changes, so a stale resolution
/// can never survive an edit.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EnquiryDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub topic: String,
    pub enquiry_text: String,
    pub postcode: String,
    pub region: String,
    pub area_in_region: String,
    pub show_phone_number: bool,
}

impl EnquiryDraft {
    /// Writes a directly editable field.
    ///
    /// Editing the postcode invalidates the derived region fields.
    /// `Region` and `AreaInRegion` are not editable and are ignored here.
    pub fn set_field(&mut self, field: Field, value: &str) {
        match field {
            Field::FirstName => self.first_name = value.to_string(),
            Field::LastName => self.last_name = value.to_string(),
            Field::Email => self.email = value.to_string(),
            Field::PhoneNumber => self.phone_number = value.to_string(),
            Field::Topic => self.topic = value.to_string(),
            Field::EnquiryText => self.enquiry_text = value.to_string(),
            Field::Postcode => {
                self.postcode = value.to_string();
                self.region.clear();
                self.area_in_region.clear();
            }
            Field::Region | Field::AreaInRegion => {}
        }
    }

    /// Writes a successful postcode resolution.
    ///
    /// All three fields are written together so the draft never holds a
    /// region that belongs to a different postcode.
    pub fn apply_resolved_postcode(&mut self, postcode: &str, region: &str, area_in_region: &str) {
        self.postcode = postcode.to_string();
        self.region = region.to_string();
        self.area_in_region = area_in_region.to_string();
    }

    /// The submission `name` field: first and last name joined by one space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_postcode_clears_derived_fields() {
        let mut draft = EnquiryDraft::default();
        draft.apply_resolved_postcode("SW1A 1AA", "London", "Westminster");
        assert_eq!(draft.region, "London");

        draft.set_field(Field::Postcode, "SW1A 1A");

        assert_eq!(draft.postcode, "SW1A 1A");
        assert!(draft.region.is_empty());
        assert!(draft.area_in_region.is_empty());
    }

    #[test]
    fn derived_fields_are_not_directly_editable() {
        let mut draft = EnquiryDraft::default();
        draft.set_field(Field::Region, "London");
        draft.set_field(Field::AreaInRegion, "Westminster");

        assert!(draft.region.is_empty());
        assert!(draft.area_in_region.is_empty());
    }

    #[test]
    fn full_name_joins_with_single_space() {
        let mut draft = EnquiryDraft::default();
        draft.set_field(Field::FirstName, "Jane");
        draft.set_field(Field::LastName, "Doe");
        assert_eq!(draft.full_name(), "Jane Doe");
    }
}

//! Results for a whole form, one entry per field in input order.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::ValidationResult;
use crate::utils::error_messages::FORM_HAS_ERRORS;

/// The result for one named field of a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    pub name: String,
    #[serde(flatten)]
    pub result: ValidationResult,
}

/// Every field's result, so each message can be shown even after the first failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormReport {
    fields: Vec<FieldReport>,
}

impl FormReport {
    pub(crate) fn new(fields: Vec<FieldReport>) -> Self {
        Self { fields }
    }

    /// True iff every field passed. An empty form is valid.
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|field| field.result.is_valid())
    }

    pub fn fields(&self) -> &[FieldReport] {
        &self.fields
    }

    /// Iterates the fields that failed
    pub fn failures(&self) -> impl Iterator<Item = &FieldReport> {
        self.fields.iter().filter(|field| !field.result.is_valid())
    }

    /// Looks up a field's result by name
    pub fn get(&self, name: &str) -> Option<&ValidationResult> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| &field.result)
    }

    /// The form-level message shown when submission is blocked
    pub fn summary(&self) -> Option<&'static str> {
        if self.is_valid() {
            None
        } else {
            Some(FORM_HAS_ERRORS)
        }
    }

    /// Number of fields in the form
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the form has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Serialized as `{"valid": bool, "message": string | null, "fields": [...]}`
impl Serialize for FormReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FormReport", 3)?;
        state.serialize_field("valid", &self.is_valid())?;
        state.serialize_field("message", &self.summary())?;
        state.serialize_field("fields", &self.fields)?;
        state.end()
    }
}

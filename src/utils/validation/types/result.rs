//! Outcome of validating one field.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::ValidationFailure;

/// Pass or fail for a single field. A message exists exactly when the
/// field failed, since only `Invalid` carries a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationResult {
    Valid,
    Invalid(ValidationFailure),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Returns the failure, if any
    pub fn failure(&self) -> Option<ValidationFailure> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(failure) => Some(*failure),
        }
    }

    /// Returns the human-readable message for a failed field
    pub fn message(&self) -> Option<String> {
        self.failure().map(|failure| failure.to_string())
    }
}

impl From<Result<(), ValidationFailure>> for ValidationResult {
    fn from(outcome: Result<(), ValidationFailure>) -> Self {
        match outcome {
            Ok(()) => ValidationResult::Valid,
            Err(failure) => ValidationResult::Invalid(failure),
        }
    }
}

/// Serialized as `{"valid": bool, "message": string | null}`
impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationResult", 2)?;
        state.serialize_field("valid", &self.is_valid())?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}

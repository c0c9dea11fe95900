//! The reasons a single field can fail validation.

use thiserror::Error;

use crate::utils::error_messages::{
    INVALID_EMAIL, PASSWORD_TOO_SHORT_PREFIX, PASSWORD_TOO_SHORT_SUFFIX, REQUIRED_FIELD,
};

/// A user-input problem found in one field. These are expected outcomes,
/// reported back as data rather than raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationFailure {
    #[error("{}", REQUIRED_FIELD)]
    Required,
    #[error("{}", INVALID_EMAIL)]
    InvalidEmail,
    #[error("{} {} {}", PASSWORD_TOO_SHORT_PREFIX, .min, PASSWORD_TOO_SHORT_SUFFIX)]
    PasswordTooShort { min: usize },
}

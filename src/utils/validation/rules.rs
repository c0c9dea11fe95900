//! Field-specific validation rules. Each rule reads an already trimmed value.

use once_cell::sync::Lazy;
use regex::Regex;

use super::constants::{BYTE_ORDER_MARK, EMAIL_PATTERN};
use super::types::ValidationFailure;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(EMAIL_PATTERN).expect("Failed to compile email regex")
});

/// Strips leading and trailing whitespace and byte order marks
pub(super) fn trim_value(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}

/// Fails when a required field holds nothing
pub(super) fn check_required(value: &str, required: bool) -> Result<(), ValidationFailure> {
    if required && value.is_empty() {
        return Err(ValidationFailure::Required);
    }
    Ok(())
}

/// Fails when a non-empty value is not shaped like `local@domain.tld`
pub(super) fn check_email(value: &str) -> Result<(), ValidationFailure> {
    if !value.is_empty() && !EMAIL_REGEX.is_match(value) {
        return Err(ValidationFailure::InvalidEmail);
    }
    Ok(())
}

/// Fails when a non-empty value has fewer than `min` characters
pub(super) fn check_password_length(value: &str, min: usize) -> Result<(), ValidationFailure> {
    if !value.is_empty() && value.chars().count() < min {
        return Err(ValidationFailure::PasswordTooShort { min });
    }
    Ok(())
}

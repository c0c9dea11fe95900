//! Root module for the validation system.
//! Exposes the public API for field and form validation.

mod constants;
mod rules;
mod types;
mod validator;

// Re-export commonly used types and functions
pub use constants::*;
pub use types::{FieldReport, FormReport, ValidationFailure, ValidationResult};
pub use validator::{validate, validate_form, FieldValidator};

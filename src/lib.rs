//! Form field validation.
//!
//! A [`FieldValidator`] checks one [`Field`] at a time against the required,
//! email and password rules, or a whole form at once. Failures are returned
//! as data in a [`ValidationResult`], never as errors.

pub mod config;
pub mod consts;
pub mod form;
pub mod models;
pub mod utils;

pub use config::{ConfigError, ValidatorConfig};
pub use form::FormError;
pub use models::{Field, FieldKind, FormDocument, NamedField};
pub use utils::validation::{
    validate, validate_form, FieldReport, FieldValidator, FormReport, ValidationFailure,
    ValidationResult,
};

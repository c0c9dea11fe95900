//! The field validator: applies the rules to one field or to a whole form.

use log::debug;

use super::rules;
use super::types::{FieldReport, FormReport, ValidationResult};
use crate::config::ValidatorConfig;
use crate::models::{Field, FieldKind, NamedField};

/// Validates fields against the required, email and password rules.
///
/// The validator holds only its configuration. Every call reads the field it
/// is given and nothing else, so one instance can be shared freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldValidator {
    min_password_length: usize,
}

impl Default for FieldValidator {
    fn default() -> Self {
        Self::new(&ValidatorConfig::default())
    }
}

impl FieldValidator {
    pub fn new(config: &ValidatorConfig) -> Self {
        Self {
            min_password_length: config.min_password_length(),
        }
    }

    pub fn min_password_length(&self) -> usize {
        self.min_password_length
    }

    /// Validates one field.
    ///
    /// The value is trimmed of whitespace and byte order marks, then the rules run in order and the first one
    /// that fails decides the result:
    /// 1. a required field must not be empty
    /// 2. a non-empty email must match `local@domain.tld`
    /// 3. a non-empty password must reach the minimum length
    pub fn validate(&self, field: &Field) -> ValidationResult {
        let value = rules::trim_value(&field.value);

        let outcome = rules::check_required(value, field.required).and_then(|()| match field.kind {
            FieldKind::Email => rules::check_email(value),
            FieldKind::Password => rules::check_password_length(value, self.min_password_length),
            FieldKind::Text | FieldKind::Other => Ok(()),
        });

        ValidationResult::from(outcome)
    }

    /// Returns true iff every field is valid.
    ///
    /// Every field is validated even after a failure, so the caller can
    /// surface all messages at once.
    pub fn validate_form<'a, I>(&self, fields: I) -> bool
    where
        I: IntoIterator<Item = &'a Field>,
    {
        fields
            .into_iter()
            .map(|field| self.validate(field))
            .fold(true, |all_valid, result| result.is_valid() && all_valid)
    }

    /// Validates every named field and keeps each result, in input order.
    pub fn report<'a, I>(&self, fields: I) -> FormReport
    where
        I: IntoIterator<Item = &'a NamedField>,
    {
        let entries: Vec<FieldReport> = fields
            .into_iter()
            .map(|named| FieldReport {
                name: named.name.clone(),
                result: self.validate(&named.field),
            })
            .collect();

        let report = FormReport::new(entries);
        debug!(
            "Validated form: {} field(s), {} failure(s)",
            report.len(),
            report.failures().count()
        );
        report
    }
}

/// Validates one field with the default configuration
pub fn validate(field: &Field) -> ValidationResult {
    FieldValidator::default().validate(field)
}

/// Validates a whole form with the default configuration
pub fn validate_form<'a, I>(fields: I) -> bool
where
    I: IntoIterator<Item = &'a Field>,
{
    FieldValidator::default().validate_form(fields)
}

//! Type definitions for the validation system

mod failure;
mod report;
mod result;

// Re-export commonly used types and functions
pub use failure::ValidationFailure;
pub use report::{FieldReport, FormReport};
pub use result::ValidationResult;

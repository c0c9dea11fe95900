//! User-facing texts for validation failures

pub const REQUIRED_FIELD: &str = "required field";

pub const INVALID_EMAIL: &str = "invalid email address";

/// Prefix and suffix around the configured minimum length.
pub const PASSWORD_TOO_SHORT_PREFIX: &str = "password must be at least";
pub const PASSWORD_TOO_SHORT_SUFFIX: &str = "characters";

/// Shown once for the whole form when any field failed.
pub const FORM_HAS_ERRORS: &str = "please check the errors in the form";

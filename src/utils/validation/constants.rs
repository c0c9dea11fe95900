//! Constants used throughout the validation system

/// Pattern a non-empty email value must match.
/// Local part, `@`, domain label, `.`, then the rest, none of them holding
/// whitespace or another `@`.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Smallest minimum password length a configuration may ask for
pub const MIN_ALLOWED_PASSWORD_LENGTH: usize = 1;

/// Zero-width no-break space, stripped along with whitespace when trimming
pub const BYTE_ORDER_MARK: char = '\u{FEFF}';

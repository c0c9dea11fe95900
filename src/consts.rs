//! Global defaults for the validator and its command-line front end.

use log::LevelFilter;

pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6; // Shortest accepted password, in characters.
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn; // Level used when none is configured.

pub const ENV_MIN_PASSWORD_LENGTH: &str = "FIELDCHECK_MIN_PASSWORD_LENGTH"; // Overrides the password minimum.
pub const ENV_LOG_LEVEL: &str = "FIELDCHECK_LOG_LEVEL"; // One of off, error, warn, info, debug, trace.

pub const STDIN_PATH: &str = "-"; // Path argument meaning "read from standard input".

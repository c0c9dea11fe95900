//! Runtime configuration for the validator.
//!
//! Values come from the process environment, optionally seeded by a `.env`
//! file, and fall back to the defaults in [`crate::consts`].

use std::env;
use std::str::FromStr;

use dotenv::dotenv;
use log::{debug, LevelFilter};
use thiserror::Error;

use crate::consts::{
    DEFAULT_LOG_LEVEL, DEFAULT_MIN_PASSWORD_LENGTH, ENV_LOG_LEVEL, ENV_MIN_PASSWORD_LENGTH,
};
use crate::utils::validation::MIN_ALLOWED_PASSWORD_LENGTH;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
    #[error("minimum password length must be positive, got {0}")]
    PasswordLengthTooSmall(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorConfig {
    min_password_length: usize,
    log_level: LevelFilter,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl ValidatorConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is not an error
        dotenv().ok();
        let config = Self::from_lookup(|key| env::var(key).ok())?;
        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Builds a configuration from any key lookup. Unset keys keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_MIN_PASSWORD_LENGTH) {
            let length = parse_value(ENV_MIN_PASSWORD_LENGTH, &raw)?;
            config = config.with_min_password_length(length)?;
        }

        if let Some(raw) = lookup(ENV_LOG_LEVEL) {
            config.log_level = parse_value(ENV_LOG_LEVEL, &raw)?;
        }

        Ok(config)
    }

    pub fn with_min_password_length(mut self, length: usize) -> Result<Self, ConfigError> {
        if length < MIN_ALLOWED_PASSWORD_LENGTH {
            return Err(ConfigError::PasswordLengthTooSmall(length));
        }
        self.min_password_length = length;
        Ok(self)
    }

    pub fn with_log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }

    pub fn min_password_length(&self) -> usize {
        self.min_password_length
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }
}

fn parse_value<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

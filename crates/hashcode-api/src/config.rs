//! # Process Configuration
//!
//! [`AppConfig`] is read once at start-up and never mutated. The secret is
//! validated here so that the server refuses to start rather than sign with
//! an empty key.
//!
//! | Variable           | Default   |
//! |--------------------|-----------|
//! | `SECRET`           | required  |
//! | `PORT`             | `8080`    |
//! | `HMAC_ALGORITHM`   | `sha1`    |
//! | `MAX_BODY_BYTES`   | `2097152` |
//! | `INITIAL_REQUESTS` | `1`       |

use std::ffi::OsString;
use std::str::FromStr;
use std::sync::Arc;

use hashcode_core::{CoreError, HashAlgorithm, SecretKey};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;
pub const DEFAULT_INITIAL_REQUESTS: u64 = 1;

/// Start-up configuration errors. Any of these stops the process before it
/// binds a listener.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("SECRET is not set")]
    MissingSecret,

    #[error("invalid SECRET: {0}")]
    InvalidSecret(CoreError),

    #[error("invalid HMAC_ALGORITHM: {0}")]
    InvalidAlgorithm(CoreError),

    #[error("invalid {var}: {value:?} is not a valid {expected}")]
    InvalidValue {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Application configuration.
///
/// `Debug` is safe to log: [`SecretKey`] redacts itself.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// The process-wide signing secret.
    pub secret: Arc<SecretKey>,
    /// Largest accepted token request body, in bytes.
    pub max_body_bytes: usize,
    /// Starting value of the `requests` counter.
    pub initial_requests: u64,
}

impl AppConfig {
    /// Build a configuration with defaults for everything except the secret.
    pub fn new(secret: SecretKey) -> Self {
        Self {
            port: DEFAULT_PORT,
            secret: Arc::new(secret),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            initial_requests: DEFAULT_INITIAL_REQUESTS,
        }
    }

    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var_os(name))
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingSecret`] if `SECRET` is absent,
    /// [`ConfigError::InvalidSecret`] if it is empty, and
    /// [`ConfigError::InvalidAlgorithm`] / [`ConfigError::InvalidValue`] for
    /// unparseable optional settings.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let algorithm = match lookup("HMAC_ALGORITHM") {
            Some(raw) => to_text("HMAC_ALGORITHM", raw)?
                .parse::<HashAlgorithm>()
                .map_err(ConfigError::InvalidAlgorithm)?,
            None => HashAlgorithm::default(),
        };

        // The secret is taken as the raw bytes of the variable.
        let secret_bytes = lookup("SECRET")
            .ok_or(ConfigError::MissingSecret)?
            .into_encoded_bytes();
        let secret = SecretKey::new(secret_bytes, algorithm).map_err(ConfigError::InvalidSecret)?;

        Ok(Self {
            port: parse_or("PORT", &lookup, DEFAULT_PORT, "port number")?,
            secret: Arc::new(secret),
            max_body_bytes: parse_or(
                "MAX_BODY_BYTES",
                &lookup,
                DEFAULT_MAX_BODY_BYTES,
                "byte count",
            )?,
            initial_requests: parse_or(
                "INITIAL_REQUESTS",
                &lookup,
                DEFAULT_INITIAL_REQUESTS,
                "counter value",
            )?,
        })
    }
}

fn to_text(var: &'static str, raw: OsString) -> Result<String, ConfigError> {
    raw.into_string().map_err(|raw| ConfigError::InvalidValue {
        var,
        value: raw.to_string_lossy().into_owned(),
        expected: "UTF-8 string",
    })
}

fn parse_or<T, F>(
    var: &'static str,
    lookup: &F,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<OsString>,
{
    let Some(raw) = lookup(var) else {
        return Ok(default);
    };
    let text = to_text(var, raw)?;
    text.trim().parse().map_err(|_| ConfigError::InvalidValue {
        var,
        value: text.clone(),
        expected,
    })
}

/*
[INPUT]:  API key and API secret (explicit or from environment)
[OUTPUT]: Immutable credential pair with a redacted secret
[POS]:    Auth layer - credential storage for signed requests
[UPDATE]: When adding credential sources
*/

use crate::http::{Result, ValrError};
use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "VALR_API_KEY";
/// Environment variable holding the API secret
pub const API_SECRET_ENV: &str = "VALR_API_SECRET";

/// API credentials for authenticated requests
///
/// The key travels with every private request; the secret only keys the
/// HMAC and is never transmitted or printed.
pub struct Credentials {
    api_key: String,
    api_secret: SecretString,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
        }
    }

    /// Read `VALR_API_KEY` and `VALR_API_SECRET` from the environment
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| ValrError::Config(format!("{API_KEY_ENV} is not set")))?;
        let api_secret = std::env::var(API_SECRET_ENV)
            .map_err(|_| ValrError::Config(format!("{API_SECRET_ENV} is not set")))?;

        Ok(Self::new(api_key, api_secret))
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn api_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

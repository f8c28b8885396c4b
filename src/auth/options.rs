use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{AuthResult, Authenticator, CachedAuthenticator, HttpAuthenticator};
use crate::error::ConfigError;

pub const AUTH_MODE_API: &str = "api";

/// `auth` block of an inbound's options.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthOptions {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mode: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub cache_expiry_seconds: u64,
}

fn is_zero(v: &u64) -> bool {
    *v == 0
}

/// Authenticator selected by [`AuthOptions::build`].
#[derive(Debug)]
pub enum ConfiguredAuthenticator {
    Http(HttpAuthenticator),
    Cached(CachedAuthenticator<HttpAuthenticator>),
}

impl Authenticator for ConfiguredAuthenticator {
    async fn authenticate(&self, auth: &str, addr: &str) -> AuthResult {
        match self {
            Self::Http(a) => a.authenticate(auth, addr).await,
            Self::Cached(a) => a.authenticate(auth, addr).await,
        }
    }
}

impl AuthOptions {
    /// Returns `None` when no mode is set, meaning the inbound's local user list applies.
    pub fn build(&self) -> Result<Option<ConfiguredAuthenticator>, ConfigError> {
        match self.mode.as_str() {
            "" => Ok(None),
            AUTH_MODE_API => {
                let api = self.api.trim();
                if api.is_empty() {
                    return Err(ConfigError::MissingApiEndpoint);
                }
                let http = HttpAuthenticator::new(api)?;
                let authenticator = if self.cache_expiry_seconds > 0 {
                    ConfiguredAuthenticator::Cached(CachedAuthenticator::new(
                        http,
                        Duration::from_secs(self.cache_expiry_seconds),
                    ))
                } else {
                    ConfiguredAuthenticator::Http(http)
                };
                tracing::info!(
                    api,
                    cache_expiry_seconds = self.cache_expiry_seconds,
                    "using HTTP auth API"
                );
                Ok(Some(authenticator))
            }
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }
}

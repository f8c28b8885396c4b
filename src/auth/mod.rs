//! Client side of the HTTP auth contract.
//!
//! A proxy asks an [`Authenticator`] whether a credential presented by a client
//! address is valid. [`HttpAuthenticator`] forwards the question to an auth API
//! (such as the `/auth` route served by this crate) and [`CachedAuthenticator`]
//! remembers successful answers for a while.

mod cache;
mod http;
mod options;

use std::future::Future;

pub use cache::CachedAuthenticator;
pub use http::{AuthRequest, AuthResponse, HttpAuthenticator};
pub use options::{AuthOptions, ConfiguredAuthenticator, AUTH_MODE_API};

/// Outcome of a single authentication attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthResult {
    pub ok: bool,
    pub user_id: String,
}

impl AuthResult {
    pub fn denied() -> Self {
        Self::default()
    }

    pub fn accepted(user_id: impl Into<String>) -> Self {
        Self {
            ok: true,
            user_id: user_id.into(),
        }
    }
}

pub trait Authenticator {
    /// Validates `auth` (a password or uuid) presented by the client at `addr`.
    ///
    /// Failures of any kind are reported as a denied result.
    fn authenticate(&self, auth: &str, addr: &str) -> impl Future<Output = AuthResult> + Send;
}

/// First eight characters of a credential, for log lines.
pub(crate) fn redact(auth: &str) -> String {
    let prefix: String = auth.chars().take(8).collect();
    format!("{}...", prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redact_keeps_at_most_eight_chars() {
        assert_eq!(redact("0123456789abcdef"), "01234567...");
        assert_eq!(redact("abc"), "abc...");
        assert_eq!(redact(""), "...");
    }

    #[test]
    fn redact_respects_char_boundaries() {
        assert_eq!(redact("ééééééééé"), "éééééééé...");
    }
}

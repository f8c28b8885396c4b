use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use super::{redact, AuthResult, Authenticator};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Body POSTed to the auth API.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthRequest {
    pub auth: String,
    pub addr: String,
    pub ts: i64,
}

/// Body returned by the auth API.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub ok: bool,
    #[serde(default)]
    pub id: String,
}

/// [`Authenticator`] backed by a remote HTTP endpoint.
#[derive(Clone, Debug)]
pub struct HttpAuthenticator {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpAuthenticator {
    pub fn new(endpoint: impl Into<String>) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Authenticator for HttpAuthenticator {
    async fn authenticate(&self, auth: &str, addr: &str) -> AuthResult {
        let body = AuthRequest {
            auth: auth.to_string(),
            addr: addr.to_string(),
            ts: chrono::Utc::now().timestamp(),
        };

        tracing::debug!(addr, auth = %redact(auth), "auth request");

        let resp = match self.client.post(&self.endpoint).json(&body).send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::error!(error = %e, endpoint = %self.endpoint, "auth API request failed");
                return AuthResult::denied();
            }
        };

        if resp.status() != StatusCode::OK {
            tracing::error!(status = %resp.status(), "auth API returned non-200 status");
            return AuthResult::denied();
        }

        let auth_resp: AuthResponse = match resp.json().await {
            Ok(v) => v,
            Err(e) => {
                tracing::error!(error = %e, "decode auth API response");
                return AuthResult::denied();
            }
        };

        if auth_resp.ok {
            tracing::info!(addr, user = %auth_resp.id, "auth success");
            AuthResult::accepted(auth_resp.id)
        } else {
            tracing::warn!(addr, auth = %redact(auth), "auth failed");
            AuthResult::denied()
        }
    }
}
